//! Frame Derived - Reactive frame computation.
//!
//! Combines the derived `UiState` with the terminal size and the live control
//! signals (suggestion selection, edit buffer, cursor) and builds the frame.
//! Recomputes whenever any input changes; hit regions come out as data and
//! are installed by the render effect.

use spark_signals::{derived, Derived};

use crate::renderer::widget::build_frame;
use crate::renderer::FrameBuffer;
use crate::state::input;
use crate::types::{HitRegion, UiState};

use super::terminal::{terminal_height_signal, terminal_width_signal};

/// The result of one frame computation.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameResult {
    pub buffer: FrameBuffer,
    pub hit_regions: Vec<HitRegion>,
    pub terminal_size: (u16, u16),
}

/// Create the frame derived.
///
/// Reads the UiState derived plus the terminal and control signals, so a
/// resize, a keystroke in the input, or a selection move all repaint without
/// touching the store.
pub fn create_frame_derived(ui_state: Derived<UiState>) -> Derived<FrameResult> {
    let width_signal = terminal_width_signal();
    let height_signal = terminal_height_signal();
    let selection_signal = input::selection_signal();
    let edit_value_signal = input::edit_value_signal();
    let edit_cursor_signal = input::edit_cursor_signal();

    derived(move || {
        // Read everything up front (creates reactive dependencies).
        let ui = ui_state.get();
        let width = width_signal.get();
        let height = height_signal.get();
        let selection = selection_signal.get();
        let edit_value = edit_value_signal.get();
        let edit_cursor = edit_cursor_signal.get();

        let (buffer, hit_regions) =
            build_frame(&ui, selection, &edit_value, edit_cursor, width, height);

        FrameResult {
            buffer,
            hit_regions,
            terminal_size: (width, height),
        }
    })
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checker;
    use crate::pipeline::terminal::set_terminal_size;
    use crate::pipeline::ui_state::create_ui_state_derived;
    use crate::state::input::{reset_input_state, WidgetEvent};
    use crate::state::store::{apply_event, load, reset_store};
    use crate::types::HitTarget;

    fn setup() {
        reset_store();
        reset_input_state();
        load(checker::fetch_misspellings(), checker::SEED_SENTENCE);
        set_terminal_size(80, 24);
    }

    #[test]
    fn test_frame_tracks_terminal_size() {
        setup();

        let frame = create_frame_derived(create_ui_state_derived());
        assert_eq!(frame.get().terminal_size, (80, 24));

        set_terminal_size(100, 30);
        let result = frame.get();
        assert_eq!(result.terminal_size, (100, 30));
        assert_eq!(result.buffer.width(), 100);
    }

    #[test]
    fn test_frame_exposes_hit_regions() {
        setup();

        let frame = create_frame_derived(create_ui_state_derived());
        let targets: Vec<_> = frame.get().hit_regions.iter().map(|r| r.target).collect();

        assert!(targets.contains(&HitTarget::ChangeButton));
        assert!(targets.contains(&HitTarget::IgnoreButton));
        assert!(targets.contains(&HitTarget::SuggestionRow(0)));
    }

    #[test]
    fn test_frame_reacts_to_store_events() {
        setup();

        let frame = create_frame_derived(create_ui_state_derived());
        let _ = frame.get();

        // Past the end of the list: controls disappear from the frame.
        apply_event(WidgetEvent::IgnoreClicked);
        apply_event(WidgetEvent::IgnoreClicked);
        assert!(frame.get().hit_regions.is_empty());
    }

    #[test]
    fn test_frame_reacts_to_edit_buffer() {
        setup();

        let frame = create_frame_derived(create_ui_state_derived());
        let _ = frame.get();

        input::edit_value_signal().set("really".to_string());
        input::edit_cursor_signal().set(6);

        // The input field echoes the live buffer: "> really"
        let result = frame.get();
        let row: String = (0..result.buffer.width())
            .filter_map(|x| result.buffer.get(x, 6))
            .filter_map(|c| char::from_u32(c.char))
            .collect();
        assert!(row.contains("really"));
    }
}
