//! UiState Derived - Reactive render-input computation.
//!
//! Creates a Derived that recomputes the widget's render input whenever:
//! - The active index advances
//! - The sentence changes
//! - The draft word changes
//!
//! The derivations themselves are pure functions of their arguments and are
//! exposed for direct testing.

use spark_signals::{derived, Derived};

use crate::state::store;
use crate::types::{Misspelling, MisspellingPair, Segment, SuggestionOption, UiState};

/// Split the sentence around the current misspelling.
///
/// Empty before/after segments are collapsed, so the first segment is never
/// an empty string. If there is no current misspelling, or its word does not
/// occur in the sentence, the whole sentence comes back as one plain segment.
pub fn sentence_segments(current: Option<&Misspelling>, sentence: &str) -> Vec<Segment> {
    let word = match current {
        Some(m) if !m.word.is_empty() => m.word.as_str(),
        _ => return vec![Segment::Plain(sentence.to_string())],
    };

    let Some(pos) = sentence.find(word) else {
        return vec![Segment::Plain(sentence.to_string())];
    };

    let before = &sentence[..pos];
    let after = &sentence[pos + word.len()..];

    let mut segments = Vec::with_capacity(3);
    if !before.is_empty() {
        segments.push(Segment::Plain(before.to_string()));
    }
    segments.push(Segment::Highlight(word.to_string()));
    if !after.is_empty() {
        segments.push(Segment::Plain(after.to_string()));
    }
    segments
}

/// One option per suggestion, preserving source order.
pub fn suggestion_options(current: Option<&Misspelling>) -> Vec<SuggestionOption> {
    match current {
        Some(m) => m
            .suggestions
            .iter()
            .map(|s| SuggestionOption { value: s.clone() })
            .collect(),
        None => Vec::new(),
    }
}

/// Create the UiState derived.
///
/// Returns a Derived that recombines the store signals into the render input
/// and automatically re-runs when any of them changes.
pub fn create_ui_state_derived() -> Derived<UiState> {
    let misspellings = store::misspellings_signal();
    let index = store::active_index_signal();
    let sentence = store::sentence_signal();
    let draft = store::draft_signal();

    derived(move || {
        // Read the store (creates reactive dependencies).
        let list = misspellings.get();
        let index = index.get();
        let sentence = sentence.get();
        let draft = draft.get();

        let pair = MisspellingPair::at(&list, index);

        UiState {
            segments: sentence_segments(pair.current.as_ref(), &sentence),
            options: suggestion_options(pair.current.as_ref()),
            draft,
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
    use crate::state::input::WidgetEvent;
    use crate::state::store::{apply_event, load, reset_store};

    fn setup() {
        reset_store();
        load(checker::fetch_misspellings(), checker::SEED_SENTENCE);
    }

    #[test]
    fn test_segments_split_without_empty_leading_segment() {
        let m = Misspelling::new("reallly", &["really", "real"]);
        let segments = sentence_segments(Some(&m), "This reallly sucks but so dooo you");

        assert_eq!(
            segments,
            vec![
                Segment::Plain("This ".to_string()),
                Segment::Highlight("reallly".to_string()),
                Segment::Plain(" sucks but so dooo you".to_string()),
            ]
        );
    }

    #[test]
    fn test_segments_collapse_at_sentence_edges() {
        let m = Misspelling::new("This", &[]);
        let segments = sentence_segments(Some(&m), "This reallly sucks");
        assert_eq!(segments[0], Segment::Highlight("This".to_string()));
        assert_eq!(segments.len(), 2);

        let m = Misspelling::new("sucks", &[]);
        let segments = sentence_segments(Some(&m), "This reallly sucks");
        assert_eq!(segments.last(), Some(&Segment::Highlight("sucks".to_string())));
        assert_eq!(segments.len(), 2);
    }

    #[test]
    fn test_segments_whole_sentence_highlighted() {
        let m = Misspelling::new("word", &[]);
        assert_eq!(
            sentence_segments(Some(&m), "word"),
            vec![Segment::Highlight("word".to_string())]
        );
    }

    #[test]
    fn test_segments_without_current_misspelling() {
        assert_eq!(
            sentence_segments(None, "all done here"),
            vec![Segment::Plain("all done here".to_string())]
        );
    }

    #[test]
    fn test_segments_word_not_found_renders_plain() {
        let m = Misspelling::new("absent", &[]);
        assert_eq!(
            sentence_segments(Some(&m), "nothing to see"),
            vec![Segment::Plain("nothing to see".to_string())]
        );
    }

    #[test]
    fn test_segments_highlight_first_occurrence_only() {
        let m = Misspelling::new("aa", &[]);
        let segments = sentence_segments(Some(&m), "aa and aa");
        assert_eq!(
            segments,
            vec![
                Segment::Highlight("aa".to_string()),
                Segment::Plain(" and aa".to_string()),
            ]
        );
    }

    #[test]
    fn test_options_preserve_order_and_text() {
        let m = Misspelling::new("reallly", &["really", "real"]);
        let options = suggestion_options(Some(&m));
        assert_eq!(options.len(), 2);
        assert_eq!(options[0].value, "really");
        assert_eq!(options[1].value, "real");

        assert!(suggestion_options(None).is_empty());
    }

    #[test]
    fn test_ui_state_derived_initial_value() {
        setup();

        let ui = create_ui_state_derived();
        let state = ui.get();

        assert_eq!(state.segments[1], Segment::Highlight("reallly".to_string()));
        assert_eq!(state.options[0].value, "really");
        assert_eq!(state.draft, "");
    }

    #[test]
    fn test_ui_state_derived_reacts_to_events() {
        setup();

        let ui = create_ui_state_derived();
        let _ = ui.get();

        apply_event(WidgetEvent::WordEdited("really".to_string()));
        assert_eq!(ui.get().draft, "really");

        apply_event(WidgetEvent::ChangeClicked);
        let state = ui.get();

        assert_eq!(state.draft, "");
        assert!(state
            .segments
            .iter()
            .any(|s| *s == Segment::Highlight("dooo".to_string())));
        assert_eq!(state.options[0].value, "do");
    }

    #[test]
    fn test_ui_state_past_end_of_list() {
        setup();

        let ui = create_ui_state_derived();
        apply_event(WidgetEvent::IgnoreClicked);
        apply_event(WidgetEvent::IgnoreClicked);

        let state = ui.get();
        assert_eq!(
            state.segments,
            vec![Segment::Plain(checker::SEED_SENTENCE.to_string())]
        );
        assert!(state.options.is_empty());
        assert_eq!(state.draft, "");
    }
}
