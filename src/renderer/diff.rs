//! Differential renderer for fullscreen mode.
//!
//! Compares the current frame to the previous one and only outputs cells
//! that changed, inside a synchronized-output block, flushed as a single
//! write. A size change or explicit invalidation forces a full redraw.

use std::io;

use super::ansi;
use super::buffer::FrameBuffer;
use super::output::{OutputBuffer, StatefulCellRenderer};
use crate::types::Cell;

/// Diff-based fullscreen renderer.
///
/// Keeps the previous frame so only changed cells hit the terminal.
pub struct DiffRenderer {
    output: OutputBuffer,
    cell_renderer: StatefulCellRenderer,
    previous: Option<FrameBuffer>,
}

impl DiffRenderer {
    pub fn new() -> Self {
        Self {
            output: OutputBuffer::new(),
            cell_renderer: StatefulCellRenderer::new(),
            previous: None,
        }
    }

    /// Render a frame, outputting only changed cells.
    ///
    /// Returns true if any cells were written.
    pub fn render(&mut self, buffer: &FrameBuffer) -> io::Result<bool> {
        let mut has_changes = false;

        ansi::begin_sync(&mut self.output)?;
        self.cell_renderer.reset();

        let width = buffer.width();
        let height = buffer.height();

        for y in 0..height {
            for x in 0..width {
                let Some(cell) = buffer.get(x, y) else { continue };

                let changed = match &self.previous {
                    Some(prev) if prev.width() == width && prev.height() == height => {
                        match prev.get(x, y) {
                            Some(prev_cell) => !cells_equal(cell, prev_cell),
                            None => true,
                        }
                    }
                    // No previous frame, or the size changed
                    _ => true,
                };

                if changed {
                    has_changes = true;
                    self.cell_renderer.render_cell(&mut self.output, x, y, cell);
                }
            }
        }

        ansi::end_sync(&mut self.output)?;
        self.output.flush_stdout()?;

        self.previous = Some(buffer.clone());
        Ok(has_changes)
    }

    /// Invalidate the previous frame; the next render is a full redraw.
    pub fn invalidate(&mut self) {
        self.previous = None;
    }

    /// Check if there is a previous frame to diff against.
    pub fn has_previous(&self) -> bool {
        self.previous.is_some()
    }

    /// Enter fullscreen mode (alternate screen buffer, hidden cursor).
    pub fn enter_fullscreen(&mut self) -> io::Result<()> {
        ansi::enter_alt_screen(&mut self.output)?;
        ansi::cursor_hide(&mut self.output)?;
        ansi::clear_screen(&mut self.output)?;
        self.output.flush_stdout()?;
        self.invalidate();
        Ok(())
    }

    /// Exit fullscreen mode and restore the cursor.
    pub fn exit_fullscreen(&mut self) -> io::Result<()> {
        ansi::reset(&mut self.output)?;
        ansi::cursor_show(&mut self.output)?;
        ansi::exit_alt_screen(&mut self.output)?;
        self.output.flush_stdout()?;
        Ok(())
    }

    /// Enable mouse tracking.
    pub fn enable_mouse(&mut self) -> io::Result<()> {
        ansi::enable_mouse(&mut self.output)?;
        self.output.flush_stdout()
    }

    /// Disable mouse tracking.
    pub fn disable_mouse(&mut self) -> io::Result<()> {
        ansi::disable_mouse(&mut self.output)?;
        self.output.flush_stdout()
    }
}

impl Default for DiffRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Fast cell equality check.
#[inline]
fn cells_equal(a: &Cell, b: &Cell) -> bool {
    a.char == b.char && a.attrs == b.attrs && a.fg == b.fg && a.bg == b.bg
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Attr, Rgba};

    #[test]
    fn test_diff_renderer_creation() {
        let renderer = DiffRenderer::new();
        assert!(!renderer.has_previous());
    }

    #[test]
    fn test_cells_equal() {
        let a = Cell {
            char: 'X' as u32,
            fg: Rgba::WHITE,
            bg: Rgba::BLACK,
            attrs: Attr::BOLD,
        };
        let b = a;
        assert!(cells_equal(&a, &b));

        let c = Cell { char: 'Y' as u32, ..a };
        assert!(!cells_equal(&a, &c));
    }

    #[test]
    fn test_invalidate() {
        let mut renderer = DiffRenderer::new();
        let buffer = FrameBuffer::new(10, 10);

        // Can't exercise stdout here, but state transitions are testable
        renderer.previous = Some(buffer);
        assert!(renderer.has_previous());

        renderer.invalidate();
        assert!(!renderer.has_previous());
    }
}
