//! Core types for typofix.
//!
//! The domain model (misspellings, derived pairs, sentence segments) and the
//! renderer foundation (colors, attributes, cells) both live here. These types
//! flow through the reactive pipeline and define what the renderer understands.

// =============================================================================
// Color
// =============================================================================

/// RGB color with 8-bit channels (0-255).
///
/// Using integers for exact comparison - no floating point epsilon needed.
/// Special value: r=-1 means "terminal default" (let terminal pick).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgba {
    pub r: i16,
    pub g: i16,
    pub b: i16,
}

impl Rgba {
    /// Create an opaque RGB color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as i16,
            g: g as i16,
            b: b as i16,
        }
    }

    /// Terminal default color (let terminal decide).
    pub const TERMINAL_DEFAULT: Self = Self {
        r: -1,
        g: -1,
        b: -1,
    };

    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const YELLOW: Self = Self::rgb(255, 255, 0);
    pub const GRAY: Self = Self::rgb(128, 128, 128);

    /// Check if this is the terminal default color.
    #[inline]
    pub const fn is_terminal_default(&self) -> bool {
        self.r == -1
    }
}

// =============================================================================
// Cell Attributes (bitflags)
// =============================================================================

bitflags::bitflags! {
    /// Text attributes as a bitfield for efficient storage and comparison.
    ///
    /// Combine with bitwise OR: `Attr::BOLD | Attr::UNDERLINE`
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Attr: u8 {
        const NONE = 0;
        const BOLD = 1 << 0;
        const DIM = 1 << 1;
        const ITALIC = 1 << 2;
        const UNDERLINE = 1 << 3;
        const INVERSE = 1 << 4;
    }
}

// =============================================================================
// Cell - The atomic unit of terminal rendering
// =============================================================================

/// A single terminal cell.
///
/// This is what the renderer deals with. Nothing more complex.
/// The entire pipeline computes these, the renderer outputs them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    /// Unicode codepoint (32 for space, 0 for wide-char continuation).
    pub char: u32,
    /// Foreground color.
    pub fg: Rgba,
    /// Background color.
    pub bg: Rgba,
    /// Attribute flags (bold, underline, etc.).
    pub attrs: Attr,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            char: b' ' as u32,
            fg: Rgba::TERMINAL_DEFAULT,
            bg: Rgba::TERMINAL_DEFAULT,
            attrs: Attr::NONE,
        }
    }
}

// =============================================================================
// Misspelling - the static domain record
// =============================================================================

/// A misspelled word with its suggested replacements.
///
/// Created once at startup from the canned checker response; never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Misspelling {
    pub word: String,
    pub suggestions: Vec<String>,
}

impl Misspelling {
    pub fn new(word: impl Into<String>, suggestions: &[&str]) -> Self {
        Self {
            word: word.into(),
            suggestions: suggestions.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// The current/previous misspelling pair for a given active index.
///
/// `previous` is the word an accepted replacement applies to: after an
/// advance the index already points at the next misspelling, so the word
/// that was just handled is found one slot back.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MisspellingPair {
    pub current: Option<Misspelling>,
    pub previous: Option<Misspelling>,
}

impl MisspellingPair {
    /// Derive the pair for `index` into `list`.
    ///
    /// Pure function, total over its domain:
    /// - `index == 0` -> `(list[0], list[0])`
    /// - `0 < index < len` -> `(list[index], list[index-1])`
    /// - `index == len` -> `(None, list[index-1])`
    /// - `index > len` -> `(None, None)`
    ///
    /// An empty list yields `(None, None)` for every index.
    pub fn at(list: &[Misspelling], index: usize) -> Self {
        let len = list.len();
        if len == 0 {
            return Self::default();
        }

        if index == 0 {
            Self {
                current: Some(list[0].clone()),
                previous: Some(list[0].clone()),
            }
        } else if index < len {
            Self {
                current: Some(list[index].clone()),
                previous: Some(list[index - 1].clone()),
            }
        } else if index == len {
            Self {
                current: None,
                previous: Some(list[index - 1].clone()),
            }
        } else {
            Self::default()
        }
    }
}

// =============================================================================
// Derived render input
// =============================================================================

/// One piece of the sentence, marked highlighted when it is the current
/// misspelling occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Plain(String),
    Highlight(String),
}

impl Segment {
    pub fn text(&self) -> &str {
        match self {
            Segment::Plain(s) | Segment::Highlight(s) => s,
        }
    }

    pub fn is_highlight(&self) -> bool {
        matches!(self, Segment::Highlight(_))
    }
}

/// A selectable suggestion. The text doubles as label and value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionOption {
    pub value: String,
}

/// Fully derived render input - recomputed whenever an upstream signal
/// changes, never independently mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiState {
    /// The sentence split around the current misspelling.
    pub segments: Vec<Segment>,
    /// Options for the suggestion list, in source order.
    pub options: Vec<SuggestionOption>,
    /// The model value of the editable word (latest of selection or
    /// debounced edit; empty after every advance).
    pub draft: String,
}

// =============================================================================
// Effect commands
// =============================================================================

/// Explicit side-effect commands emitted by event application and consumed at
/// the driver boundary. These reset UI-substrate control state that is not
/// part of the derived `UiState`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiCommand {
    /// Reset the suggestion control to "no selection".
    ClearSelection,
    /// Reset the input control's live edit buffer.
    ClearInput,
}

// =============================================================================
// Hit regions
// =============================================================================

/// What a mouse click inside a hit region means.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    ChangeButton,
    IgnoreButton,
    SuggestionRow(usize),
}

/// A rectangle of the frame that reacts to mouse clicks.
///
/// Collected as data during frame building, applied as a side effect by the
/// render effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HitRegion {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
    pub target: HitTarget,
}

impl HitRegion {
    /// Check if a point is inside this region.
    #[inline]
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn canned() -> Vec<Misspelling> {
        vec![
            Misspelling::new("reallly", &["really", "real"]),
            Misspelling::new("dooo", &["do", "poo"]),
        ]
    }

    #[test]
    fn test_pair_at_zero() {
        let list = canned();
        let pair = MisspellingPair::at(&list, 0);
        assert_eq!(pair.current.as_ref().map(|m| m.word.as_str()), Some("reallly"));
        assert_eq!(pair.previous.as_ref().map(|m| m.word.as_str()), Some("reallly"));
    }

    #[test]
    fn test_pair_mid_list() {
        let list = canned();
        let pair = MisspellingPair::at(&list, 1);
        assert_eq!(pair.current.as_ref().map(|m| m.word.as_str()), Some("dooo"));
        assert_eq!(pair.previous.as_ref().map(|m| m.word.as_str()), Some("reallly"));
    }

    #[test]
    fn test_pair_at_end() {
        let list = canned();
        let pair = MisspellingPair::at(&list, 2);
        assert!(pair.current.is_none());
        assert_eq!(pair.previous.as_ref().map(|m| m.word.as_str()), Some("dooo"));
    }

    #[test]
    fn test_pair_past_end() {
        let list = canned();
        let pair = MisspellingPair::at(&list, 3);
        assert!(pair.current.is_none());
        assert!(pair.previous.is_none());
    }

    #[test]
    fn test_pair_current_empty_iff_out_of_range() {
        let list = canned();
        for index in 0..6 {
            let pair = MisspellingPair::at(&list, index);
            assert_eq!(pair.current.is_none(), index >= list.len());
        }
    }

    #[test]
    fn test_pair_empty_list() {
        let pair = MisspellingPair::at(&[], 0);
        assert!(pair.current.is_none());
        assert!(pair.previous.is_none());
    }

    #[test]
    fn test_hit_region_contains() {
        let region = HitRegion {
            x: 2,
            y: 2,
            width: 4,
            height: 1,
            target: HitTarget::ChangeButton,
        };
        assert!(region.contains(2, 2));
        assert!(region.contains(5, 2));
        assert!(!region.contains(6, 2));
        assert!(!region.contains(3, 3));
    }
}
