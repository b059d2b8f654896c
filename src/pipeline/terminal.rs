//! Terminal size signals.
//!
//! Root signals for the rendering pipeline: a resize re-runs every derived
//! that reads them.

use spark_signals::{signal, Signal};

thread_local! {
    static TERMINAL_WIDTH: Signal<u16> = signal(80);
    static TERMINAL_HEIGHT: Signal<u16> = signal(24);
}

/// Get the current terminal width.
pub fn terminal_width() -> u16 {
    TERMINAL_WIDTH.with(|w| w.get())
}

/// Get the current terminal height.
pub fn terminal_height() -> u16 {
    TERMINAL_HEIGHT.with(|h| h.get())
}

/// Set the terminal size (called on resize events).
pub fn set_terminal_size(width: u16, height: u16) {
    TERMINAL_WIDTH.with(|w| w.set(width));
    TERMINAL_HEIGHT.with(|h| h.set(height));
}

/// Get the terminal width signal for reactive tracking.
pub fn terminal_width_signal() -> Signal<u16> {
    TERMINAL_WIDTH.with(|w| w.clone())
}

/// Get the terminal height signal for reactive tracking.
pub fn terminal_height_signal() -> Signal<u16> {
    TERMINAL_HEIGHT.with(|h| h.clone())
}

/// Detect and set the actual terminal size from the environment.
pub fn detect_terminal_size() {
    if let Ok((width, height)) = crossterm::terminal::size() {
        set_terminal_size(width, height);
    }
}
