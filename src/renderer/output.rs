//! Output buffering and stateful cell rendering.
//!
//! Terminal output is batched into a single write per frame, and the cell
//! renderer tracks the terminal's last-known state so only changed colors,
//! attributes, and cursor positions produce escape codes.

use crate::types::{Attr, Cell, Rgba};
use std::io::{self, Write};

use super::ansi;

// =============================================================================
// OutputBuffer
// =============================================================================

/// A buffer that accumulates output for batch writing.
///
/// Instead of many small writes to stdout, everything accumulates here and
/// flushes once per frame.
#[derive(Debug, Default)]
pub struct OutputBuffer {
    data: Vec<u8>,
}

impl OutputBuffer {
    /// Create a new output buffer with default capacity.
    pub fn new() -> Self {
        Self::with_capacity(16384)
    }

    /// Create a buffer with specific capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Clear the buffer without deallocating.
    #[inline]
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Write a string.
    #[inline]
    pub fn write_str(&mut self, s: &str) {
        self.data.extend_from_slice(s.as_bytes());
    }

    /// Write a single character.
    #[inline]
    pub fn write_char(&mut self, c: char) {
        let mut buf = [0u8; 4];
        let s = c.encode_utf8(&mut buf);
        self.data.extend_from_slice(s.as_bytes());
    }

    /// Write a unicode codepoint.
    #[inline]
    pub fn write_codepoint(&mut self, cp: u32) {
        if let Some(c) = char::from_u32(cp) {
            self.write_char(c);
        }
    }

    /// Flush buffer to stdout (blocking).
    pub fn flush_stdout(&mut self) -> io::Result<()> {
        if self.data.is_empty() {
            return Ok(());
        }
        let mut stdout = io::stdout().lock();
        stdout.write_all(&self.data)?;
        stdout.flush()?;
        self.data.clear();
        Ok(())
    }

    /// Get the accumulated data as a string (lossy).
    pub fn as_str(&self) -> std::borrow::Cow<'_, str> {
        String::from_utf8_lossy(&self.data)
    }
}

impl Write for OutputBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.data.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(()) // Buffering only - real flush via flush_stdout
    }
}

// =============================================================================
// StatefulCellRenderer
// =============================================================================

/// Renders cells while tracking terminal state to minimize output.
///
/// Tracks last cursor position, colors, and attributes; a cell only emits
/// escape codes for state that differs from what the terminal already has.
#[derive(Debug)]
pub struct StatefulCellRenderer {
    last_x: i32,
    last_y: i32,
    last_fg: Option<Rgba>,
    last_bg: Option<Rgba>,
    last_attrs: Attr,
}

impl StatefulCellRenderer {
    /// Create a new renderer with no state.
    pub fn new() -> Self {
        Self {
            last_x: -1,
            last_y: -1,
            last_fg: None,
            last_bg: None,
            last_attrs: Attr::NONE,
        }
    }

    /// Reset all tracked state. Call at the start of each frame.
    pub fn reset(&mut self) {
        self.last_x = -1;
        self.last_y = -1;
        self.last_fg = None;
        self.last_bg = None;
        self.last_attrs = Attr::NONE;
    }

    /// Render a single cell to the output buffer.
    pub fn render_cell(&mut self, output: &mut OutputBuffer, x: u16, y: u16, cell: &Cell) {
        // Skip continuation cells (wide character placeholders)
        if cell.char == 0 {
            self.last_x = x as i32;
            self.last_y = y as i32;
            return;
        }

        // Cursor movement (only if not sequential)
        if y as i32 != self.last_y || x as i32 != self.last_x + 1 {
            ansi::cursor_to(output, x, y).ok();
        }

        // Attributes: reset then re-apply when the set changes
        if cell.attrs != self.last_attrs {
            ansi::reset(output).ok();
            if !cell.attrs.is_empty() {
                ansi::attrs(output, cell.attrs).ok();
            }
            // Reset wiped the colors; force re-emit
            self.last_fg = None;
            self.last_bg = None;
            self.last_attrs = cell.attrs;
        }

        if self.last_fg.map_or(true, |c| c != cell.fg) {
            ansi::fg(output, cell.fg).ok();
            self.last_fg = Some(cell.fg);
        }

        if self.last_bg.map_or(true, |c| c != cell.bg) {
            ansi::bg(output, cell.bg).ok();
            self.last_bg = Some(cell.bg);
        }

        output.write_codepoint(cell.char);

        self.last_x = x as i32;
        self.last_y = y as i32;
    }
}

impl Default for StatefulCellRenderer {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Tests
// =============================================================================
