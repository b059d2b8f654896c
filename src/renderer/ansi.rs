//! ANSI escape sequences for terminal control.
//!
//! Everything the renderer emits goes through here:
//! - Cursor movement and visibility
//! - Screen clearing and the alternate screen buffer
//! - TrueColor foreground/background
//! - Text attributes (bold, underline, inverse, etc.)
//! - Mouse protocol control
//! - Synchronized output for flicker-free rendering

use crate::types::{Attr, Rgba};
use std::io::Write;

/// Escape character.
pub const ESC: &str = "\x1b";

/// Control Sequence Introducer.
pub const CSI: &str = "\x1b[";

// =============================================================================
// Cursor
// =============================================================================

/// Move cursor to absolute position (input 0-indexed, wire 1-indexed).
#[inline]
pub fn cursor_to<W: Write>(w: &mut W, x: u16, y: u16) -> std::io::Result<()> {
    write!(w, "\x1b[{};{}H", y + 1, x + 1)
}

/// Hide cursor.
#[inline]
pub fn cursor_hide<W: Write>(w: &mut W) -> std::io::Result<()> {
    write!(w, "\x1b[?25l")
}

/// Show cursor.
#[inline]
pub fn cursor_show<W: Write>(w: &mut W) -> std::io::Result<()> {
    write!(w, "\x1b[?25h")
}

// =============================================================================
// Screen Control
// =============================================================================

/// Clear screen and scrollback buffer.
#[inline]
pub fn clear_screen<W: Write>(w: &mut W) -> std::io::Result<()> {
    write!(w, "\x1b[2J\x1b[3J\x1b[H")
}

/// Enter alternate screen buffer (fullscreen mode).
#[inline]
pub fn enter_alt_screen<W: Write>(w: &mut W) -> std::io::Result<()> {
    write!(w, "\x1b[?1049h")
}

/// Exit alternate screen buffer.
#[inline]
pub fn exit_alt_screen<W: Write>(w: &mut W) -> std::io::Result<()> {
    write!(w, "\x1b[?1049l")
}

// =============================================================================
// Synchronized Output (Flicker Prevention)
// =============================================================================

/// Begin synchronized output (terminal buffers until end_sync).
#[inline]
pub fn begin_sync<W: Write>(w: &mut W) -> std::io::Result<()> {
    write!(w, "\x1b[?2026h")
}

/// End synchronized output (terminal flushes buffer).
#[inline]
pub fn end_sync<W: Write>(w: &mut W) -> std::io::Result<()> {
    write!(w, "\x1b[?2026l")
}

// =============================================================================
// Colors
// =============================================================================

/// Reset all attributes and colors.
#[inline]
pub fn reset<W: Write>(w: &mut W) -> std::io::Result<()> {
    write!(w, "\x1b[0m")
}

/// Set foreground color.
#[inline]
pub fn fg<W: Write>(w: &mut W, color: Rgba) -> std::io::Result<()> {
    if color.is_terminal_default() {
        write!(w, "\x1b[39m")
    } else {
        write!(w, "\x1b[38;2;{};{};{}m", color.r, color.g, color.b)
    }
}

/// Set background color.
#[inline]
pub fn bg<W: Write>(w: &mut W, color: Rgba) -> std::io::Result<()> {
    if color.is_terminal_default() {
        write!(w, "\x1b[49m")
    } else {
        write!(w, "\x1b[48;2;{};{};{}m", color.r, color.g, color.b)
    }
}

// =============================================================================
// Text Attributes
// =============================================================================

/// Set text attributes from bitflags.
pub fn attrs<W: Write>(w: &mut W, attr: Attr) -> std::io::Result<()> {
    if attr.is_empty() {
        return Ok(());
    }

    let mut first = true;
    write!(w, "\x1b[")?;

    macro_rules! emit {
        ($flag:expr, $code:expr) => {
            if attr.contains($flag) {
                if !first {
                    write!(w, ";")?;
                }
                write!(w, "{}", $code)?;
                first = false;
            }
        };
    }

    emit!(Attr::BOLD, 1);
    emit!(Attr::DIM, 2);
    emit!(Attr::ITALIC, 3);
    emit!(Attr::UNDERLINE, 4);
    emit!(Attr::INVERSE, 7);

    let _ = first;
    write!(w, "m")
}

// =============================================================================
// Mouse Support
// =============================================================================

/// Enable mouse tracking (SGR extended mode - best compatibility).
#[inline]
pub fn enable_mouse<W: Write>(w: &mut W) -> std::io::Result<()> {
    // Button events + any events + SGR extended mode
    write!(w, "\x1b[?1000h\x1b[?1002h\x1b[?1006h")
}

/// Disable mouse tracking.
#[inline]
pub fn disable_mouse<W: Write>(w: &mut W) -> std::io::Result<()> {
    write!(w, "\x1b[?1006l\x1b[?1002l\x1b[?1000l")
}

// =============================================================================
// Tests
// =============================================================================
