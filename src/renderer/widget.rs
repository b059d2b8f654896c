//! Widget view - pure frame building.
//!
//! Turns the derived `UiState` plus the live control state (suggestion
//! selection, input buffer, cursor) into a FrameBuffer and the hit regions
//! for mouse dispatch. No signals, no I/O: a pure function the frame derived
//! calls on every recomputation.

use crate::renderer::buffer::{string_width, FrameBuffer};
use crate::types::{Attr, HitRegion, HitTarget, Rgba, UiState};

/// Fixed number of visible suggestion rows, matching a size-5 select control.
pub const VISIBLE_SUGGESTIONS: usize = 5;

const MARGIN: u16 = 2;
const FIELD_WIDTH: u16 = 24;

const HEADING_ROW: u16 = 1;
const SENTENCE_ROW: u16 = 3;
const INPUT_LABEL_ROW: u16 = 5;
const INPUT_ROW: u16 = 6;
const SUGGESTIONS_LABEL_ROW: u16 = 8;
const SUGGESTIONS_ROW: u16 = 9;
const BUTTONS_ROW: u16 = SUGGESTIONS_ROW + VISIBLE_SUGGESTIONS as u16 + 1;

const CHANGE_LABEL: &str = "[ Change ]";
const IGNORE_LABEL: &str = "[ Ignore ]";
const FOOTER_HINT: &str = "Enter change  Esc ignore  ↑/↓ select  Ctrl+C quit";

/// Build one frame.
///
/// `selection` is the highlighted suggestion row (if any), `input_value` and
/// `cursor` are the live edit buffer. Hit regions come back as data; the
/// render effect installs them as a side effect.
pub fn build_frame(
    ui: &UiState,
    selection: Option<usize>,
    input_value: &str,
    cursor: usize,
    width: u16,
    height: u16,
) -> (FrameBuffer, Vec<HitRegion>) {
    let mut buffer = FrameBuffer::new(width, height);
    let mut regions = Vec::new();

    let fg = Rgba::TERMINAL_DEFAULT;
    let bg = Rgba::TERMINAL_DEFAULT;

    buffer.draw_str(MARGIN, HEADING_ROW, "Misspellings", fg, bg, Attr::BOLD);

    // Sentence with the current misspelling highlighted
    let mut x = MARGIN;
    for segment in &ui.segments {
        let (color, attrs) = if segment.is_highlight() {
            (Rgba::YELLOW, Attr::BOLD | Attr::UNDERLINE)
        } else {
            (fg, Attr::NONE)
        };
        x += buffer.draw_str(x, SENTENCE_ROW, segment.text(), color, bg, attrs);
    }

    // Nothing left to correct: sentence and footer only
    let has_current = ui.segments.iter().any(|s| s.is_highlight()) || !ui.options.is_empty();
    if !has_current {
        draw_footer(&mut buffer, width, height);
        return (buffer, regions);
    }

    buffer.draw_str(MARGIN, INPUT_LABEL_ROW, "Change word", fg, bg, Attr::DIM);
    draw_input_field(&mut buffer, MARGIN, INPUT_ROW, input_value, cursor);

    buffer.draw_str(MARGIN, SUGGESTIONS_LABEL_ROW, "Suggestions", fg, bg, Attr::DIM);
    for row in 0..VISIBLE_SUGGESTIONS {
        let y = SUGGESTIONS_ROW + row as u16;
        let Some(option) = ui.options.get(row) else {
            continue;
        };

        let selected = selection == Some(row);
        let attrs = if selected { Attr::INVERSE } else { Attr::NONE };
        if selected {
            for col in MARGIN..MARGIN + FIELD_WIDTH {
                buffer.set_cell(col, y, b' ' as u32, fg, bg, attrs);
            }
        }
        buffer.draw_str(MARGIN + 1, y, &option.value, fg, bg, attrs);

        regions.push(HitRegion {
            x: MARGIN,
            y,
            width: FIELD_WIDTH,
            height: 1,
            target: HitTarget::SuggestionRow(row),
        });
    }

    // Buttons
    let change_x = MARGIN;
    let ignore_x = change_x + CHANGE_LABEL.len() as u16 + 2;
    buffer.draw_str(change_x, BUTTONS_ROW, CHANGE_LABEL, fg, bg, Attr::BOLD);
    buffer.draw_str(ignore_x, BUTTONS_ROW, IGNORE_LABEL, fg, bg, Attr::NONE);

    regions.push(HitRegion {
        x: change_x,
        y: BUTTONS_ROW,
        width: CHANGE_LABEL.len() as u16,
        height: 1,
        target: HitTarget::ChangeButton,
    });
    regions.push(HitRegion {
        x: ignore_x,
        y: BUTTONS_ROW,
        width: IGNORE_LABEL.len() as u16,
        height: 1,
        target: HitTarget::IgnoreButton,
    });

    draw_footer(&mut buffer, width, height);
    (buffer, regions)
}

/// The editable word: a fixed-width field with an inverse cursor cell.
fn draw_input_field(buffer: &mut FrameBuffer, x: u16, y: u16, value: &str, cursor: usize) {
    let fg = Rgba::TERMINAL_DEFAULT;
    let bg = Rgba::TERMINAL_DEFAULT;

    buffer.fill_row(x, y, FIELD_WIDTH, bg);
    buffer.draw_str(x, y, "> ", fg, bg, Attr::DIM);

    let text_x = x + 2;
    let chars: Vec<char> = value.chars().collect();
    let cursor = cursor.min(chars.len());

    let mut col = text_x;
    for (i, ch) in chars.iter().enumerate() {
        let attrs = if i == cursor { Attr::INVERSE } else { Attr::NONE };
        col += buffer.draw_str(col, y, &ch.to_string(), fg, bg, attrs);
    }
    // Cursor past the last char: an inverse space
    if cursor == chars.len() {
        buffer.set_cell(col, y, b' ' as u32, fg, bg, Attr::INVERSE);
    }
}

fn draw_footer(buffer: &mut FrameBuffer, width: u16, height: u16) {
    if height == 0 {
        return;
    }
    let y = height - 1;
    let hint_width = string_width(FOOTER_HINT) as u16;
    if width > hint_width {
        buffer.draw_str(
            MARGIN.min(width - hint_width),
            y,
            FOOTER_HINT,
            Rgba::GRAY,
            Rgba::TERMINAL_DEFAULT,
            Attr::DIM,
        );
    }
}

// =============================================================================
// Tests
// =============================================================================
