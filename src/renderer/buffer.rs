//! FrameBuffer and drawing primitives.
//!
//! The FrameBuffer is a 2D grid of Cells representing what the terminal
//! should display. Flat row-major storage (`index = y * width + x`) for
//! cache efficiency. Wide characters (CJK, emoji) occupy two cells; the
//! second carries a continuation marker (char = 0).

use unicode_width::UnicodeWidthChar;

use crate::types::{Attr, Cell, Rgba};

/// A 2D buffer of terminal cells.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    /// Create a new buffer filled with default cells.
    pub fn new(width: u16, height: u16) -> Self {
        let size = width as usize * height as usize;
        Self {
            width,
            height,
            cells: vec![Cell::default(); size],
        }
    }

    #[inline]
    pub fn width(&self) -> u16 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u16 {
        self.height
    }

    #[inline]
    fn index(&self, x: u16, y: u16) -> usize {
        y as usize * self.width as usize + x as usize
    }

    #[inline]
    pub fn in_bounds(&self, x: u16, y: u16) -> bool {
        x < self.width && y < self.height
    }

    /// Get a cell reference (None if out of bounds).
    #[inline]
    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        if self.in_bounds(x, y) {
            Some(&self.cells[self.index(x, y)])
        } else {
            None
        }
    }

    /// Get a mutable cell reference (None if out of bounds).
    #[inline]
    pub fn get_mut(&mut self, x: u16, y: u16) -> Option<&mut Cell> {
        if self.in_bounds(x, y) {
            let idx = self.index(x, y);
            Some(&mut self.cells[idx])
        } else {
            None
        }
    }

    /// Clear the entire buffer to default cells.
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = Cell::default();
        }
    }

    // =========================================================================
    // Drawing Primitives
    // =========================================================================

    /// Set a single cell. Out-of-bounds writes are dropped.
    pub fn set_cell(&mut self, x: u16, y: u16, char: u32, fg: Rgba, bg: Rgba, attrs: Attr) -> bool {
        if !self.in_bounds(x, y) {
            return false;
        }
        let idx = self.index(x, y);
        self.cells[idx] = Cell { char, fg, bg, attrs };
        true
    }

    /// Draw text at a position, left to right.
    ///
    /// Returns the number of columns used. Wide characters take two columns,
    /// with the second cell marked as a continuation; zero-width characters
    /// are skipped.
    pub fn draw_str(&mut self, x: u16, y: u16, text: &str, fg: Rgba, bg: Rgba, attrs: Attr) -> u16 {
        let mut col = x;

        for ch in text.chars() {
            if col >= self.width {
                break;
            }

            let char_width = ch.width().unwrap_or(0);
            if char_width == 0 {
                continue;
            }

            if self.set_cell(col, y, ch as u32, fg, bg, attrs) && char_width == 2 {
                if let Some(next) = self.get_mut(col + 1, y) {
                    next.char = 0; // Continuation marker
                    next.fg = fg;
                    next.bg = bg;
                    next.attrs = attrs;
                }
            }

            col += char_width as u16;
        }

        col.saturating_sub(x)
    }

    /// Fill a horizontal run of cells with spaces on a background.
    pub fn fill_row(&mut self, x: u16, y: u16, length: u16, bg: Rgba) {
        for col in x..x.saturating_add(length).min(self.width) {
            self.set_cell(col, y, b' ' as u32, Rgba::TERMINAL_DEFAULT, bg, Attr::NONE);
        }
    }
}

/// Calculate the display width of a string in terminal columns.
pub fn string_width(s: &str) -> usize {
    s.chars().map(|c| c.width().unwrap_or(0)).sum()
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_framebuffer_creation() {
        let buffer = FrameBuffer::new(80, 24);
        assert_eq!(buffer.width(), 80);
        assert_eq!(buffer.height(), 24);
        assert_eq!(buffer.get(0, 0), Some(&Cell::default()));
        assert!(buffer.get(80, 0).is_none());
    }

    #[test]
    fn test_framebuffer_set_cell() {
        let mut buffer = FrameBuffer::new(10, 10);
        assert!(buffer.set_cell(5, 5, 'X' as u32, Rgba::WHITE, Rgba::BLACK, Attr::BOLD));

        let cell = buffer.get(5, 5).unwrap();
        assert_eq!(cell.char, 'X' as u32);
        assert_eq!(cell.fg, Rgba::WHITE);
        assert_eq!(cell.bg, Rgba::BLACK);
        assert_eq!(cell.attrs, Attr::BOLD);

        assert!(!buffer.set_cell(10, 5, 'X' as u32, Rgba::WHITE, Rgba::BLACK, Attr::NONE));
    }

    #[test]
    fn test_draw_str() {
        let mut buffer = FrameBuffer::new(20, 5);
        let used = buffer.draw_str(
            0,
            0,
            "Hello",
            Rgba::WHITE,
            Rgba::TERMINAL_DEFAULT,
            Attr::NONE,
        );

        assert_eq!(used, 5);
        assert_eq!(buffer.get(0, 0).unwrap().char, 'H' as u32);
        assert_eq!(buffer.get(4, 0).unwrap().char, 'o' as u32);
    }

    #[test]
    fn test_draw_str_clips_at_right_edge() {
        let mut buffer = FrameBuffer::new(3, 1);
        let used = buffer.draw_str(
            1,
            0,
            "abc",
            Rgba::WHITE,
            Rgba::TERMINAL_DEFAULT,
            Attr::NONE,
        );

        assert_eq!(used, 2);
        assert_eq!(buffer.get(1, 0).unwrap().char, 'a' as u32);
        assert_eq!(buffer.get(2, 0).unwrap().char, 'b' as u32);
    }

    #[test]
    fn test_draw_str_wide_char_continuation() {
        let mut buffer = FrameBuffer::new(10, 1);
        let used = buffer.draw_str(
            0,
            0,
            "中a",
            Rgba::WHITE,
            Rgba::TERMINAL_DEFAULT,
            Attr::NONE,
        );

        assert_eq!(used, 3);
        assert_eq!(buffer.get(0, 0).unwrap().char, '中' as u32);
        assert_eq!(buffer.get(1, 0).unwrap().char, 0);
        assert_eq!(buffer.get(2, 0).unwrap().char, 'a' as u32);
    }

    #[test]
    fn test_string_width() {
        assert_eq!(string_width("hello"), 5);
        assert_eq!(string_width("中文"), 4);
        assert_eq!(string_width("a中b"), 4);
    }
}
