//! Store Module - The widget's reactive state.
//!
//! Thread-local signals hold the three folds the widget is built on:
//!
//! - **ActiveIndex** - starts at 0, +1 per advance (change or ignore alike)
//! - **Sentence** - seeded from a constant, folded over replacement requests
//! - **Draft** - the model value of the editable word; reset on every advance,
//!   otherwise tracking the latest of suggestion selection or debounced edit
//!
//! `apply_event` is the single entry point: it applies one widget event
//! synchronously and completely, and returns the effect commands the driver
//! must run against the UI substrate (clearing the suggestion selection and
//! the live input buffer). Nothing in here performs I/O or can fail;
//! out-of-range indices degrade to the empty-pair branches.

use spark_signals::{signal, Signal};
use tracing::debug;

use crate::state::input::WidgetEvent;
use crate::types::{Misspelling, MisspellingPair, UiCommand};

// =============================================================================
// STATE
// =============================================================================

thread_local! {
    static MISSPELLINGS: Signal<Vec<Misspelling>> = signal(Vec::new());
    static ACTIVE_INDEX: Signal<usize> = signal(0);
    static SENTENCE: Signal<String> = signal(String::new());
    static DRAFT: Signal<String> = signal(String::new());
}

/// Seed the store with the checker response and the initial sentence.
pub fn load(misspellings: Vec<Misspelling>, sentence: &str) {
    MISSPELLINGS.with(|s| s.set(misspellings));
    SENTENCE.with(|s| s.set(sentence.to_string()));
    ACTIVE_INDEX.with(|s| s.set(0));
    DRAFT.with(|s| s.set(String::new()));
}

/// Signal accessors - cloned handles into the thread-local graph.
pub fn misspellings_signal() -> Signal<Vec<Misspelling>> {
    MISSPELLINGS.with(|s| s.clone())
}

pub fn active_index_signal() -> Signal<usize> {
    ACTIVE_INDEX.with(|s| s.clone())
}

pub fn sentence_signal() -> Signal<String> {
    SENTENCE.with(|s| s.clone())
}

pub fn draft_signal() -> Signal<String> {
    DRAFT.with(|s| s.clone())
}

/// Current values, for code that does not need a reactive dependency.
pub fn active_index() -> usize {
    ACTIVE_INDEX.with(|s| s.get())
}

pub fn sentence() -> String {
    SENTENCE.with(|s| s.get())
}

pub fn draft() -> String {
    DRAFT.with(|s| s.get())
}

/// The pair for the current active index.
pub fn current_pair() -> MisspellingPair {
    let list = MISSPELLINGS.with(|s| s.get());
    MisspellingPair::at(&list, active_index())
}

/// Reset everything (for testing).
pub fn reset_store() {
    MISSPELLINGS.with(|s| s.set(Vec::new()));
    ACTIVE_INDEX.with(|s| s.set(0));
    SENTENCE.with(|s| s.set(String::new()));
    DRAFT.with(|s| s.set(String::new()));
}

// =============================================================================
// EVENT APPLICATION
// =============================================================================

/// Apply one widget event to the store.
///
/// Returns the effect commands to run against the UI substrate. Commands are
/// deliberately not applied here: the driver boundary consumes them, so the
/// store stays a pure function of its event stream.
pub fn apply_event(event: WidgetEvent) -> Vec<UiCommand> {
    match event {
        WidgetEvent::WordEdited(text) => {
            debug!(value = %text, "word edited");
            DRAFT.with(|s| s.set(text));
            Vec::new()
        }
        WidgetEvent::SuggestionSelected(text) => {
            debug!(value = %text, "suggestion selected");
            DRAFT.with(|s| s.set(text));
            Vec::new()
        }
        WidgetEvent::ChangeClicked => {
            let replacement = DRAFT.with(|s| s.get());
            advance();

            // The pair is recomputed after the advance; its `previous` slot
            // names the word the click applies to.
            if !replacement.is_empty() {
                if let Some(prev) = current_pair().previous {
                    let updated = replace_first(&sentence(), &prev.word, &replacement);
                    debug!(old = %prev.word, new = %replacement, "applying replacement");
                    SENTENCE.with(|s| s.set(updated));
                }
            }

            vec![UiCommand::ClearSelection, UiCommand::ClearInput]
        }
        WidgetEvent::IgnoreClicked => {
            advance();
            vec![UiCommand::ClearSelection, UiCommand::ClearInput]
        }
    }
}

/// Advance to the next misspelling: +1 on the index, empty draft.
fn advance() {
    let next = ACTIVE_INDEX.with(|s| s.get()) + 1;
    debug!(index = next, "advance");
    ACTIVE_INDEX.with(|s| s.set(next));
    DRAFT.with(|s| s.set(String::new()));
}

/// Replace the first occurrence of `old` in `text` with `new`.
///
/// Missing `old` silently no-ops - the sentence is returned unchanged.
fn replace_first(text: &str, old: &str, new: &str) -> String {
    match text.find(old) {
        Some(pos) => {
            let mut out = String::with_capacity(text.len() - old.len() + new.len());
            out.push_str(&text[..pos]);
            out.push_str(new);
            out.push_str(&text[pos + old.len()..]);
            out
        }
        None => text.to_string(),
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checker;

    fn setup() {
        reset_store();
        load(checker::fetch_misspellings(), checker::SEED_SENTENCE);
    }

    #[test]
    fn test_load_seeds_state() {
        setup();
        assert_eq!(active_index(), 0);
        assert_eq!(sentence(), checker::SEED_SENTENCE);
        assert_eq!(draft(), "");
    }

    #[test]
    fn test_advance_increments_and_resets_draft() {
        setup();

        apply_event(WidgetEvent::WordEdited("really".to_string()));
        assert_eq!(draft(), "really");

        let commands = apply_event(WidgetEvent::ChangeClicked);
        assert_eq!(active_index(), 1);
        assert_eq!(draft(), "");
        assert_eq!(commands, vec![UiCommand::ClearSelection, UiCommand::ClearInput]);

        let commands = apply_event(WidgetEvent::IgnoreClicked);
        assert_eq!(active_index(), 2);
        assert_eq!(draft(), "");
        assert_eq!(commands, vec![UiCommand::ClearSelection, UiCommand::ClearInput]);
    }

    #[test]
    fn test_ignore_never_alters_sentence() {
        setup();

        apply_event(WidgetEvent::WordEdited("really".to_string()));
        apply_event(WidgetEvent::IgnoreClicked);
        assert_eq!(sentence(), checker::SEED_SENTENCE);

        apply_event(WidgetEvent::IgnoreClicked);
        assert_eq!(sentence(), checker::SEED_SENTENCE);
    }

    #[test]
    fn test_change_with_empty_draft_is_a_no_op_on_sentence() {
        setup();

        apply_event(WidgetEvent::ChangeClicked);
        assert_eq!(sentence(), checker::SEED_SENTENCE);
        assert_eq!(active_index(), 1);
    }

    #[test]
    fn test_change_applies_typed_replacement() {
        setup();

        apply_event(WidgetEvent::WordEdited("really".to_string()));
        apply_event(WidgetEvent::ChangeClicked);

        assert_eq!(sentence(), "This really sucks but so dooo you");
        assert_eq!(active_index(), 1);
        assert_eq!(
            current_pair().current.map(|m| m.word),
            Some("dooo".to_string())
        );
    }

    #[test]
    fn test_change_applies_selected_suggestion() {
        setup();

        apply_event(WidgetEvent::SuggestionSelected("real".to_string()));
        apply_event(WidgetEvent::ChangeClicked);

        assert_eq!(sentence(), "This real sucks but so dooo you");
    }

    #[test]
    fn test_replay_is_ordered_and_deterministic() {
        setup();

        apply_event(WidgetEvent::WordEdited("really".to_string()));
        apply_event(WidgetEvent::ChangeClicked);
        apply_event(WidgetEvent::SuggestionSelected("do".to_string()));
        apply_event(WidgetEvent::ChangeClicked);

        assert_eq!(sentence(), "This really sucks but so do you");
        assert_eq!(active_index(), 2);
        assert!(current_pair().current.is_none());
    }

    #[test]
    fn test_change_on_last_misspelling_still_replaces() {
        setup();

        apply_event(WidgetEvent::IgnoreClicked);
        apply_event(WidgetEvent::WordEdited("do".to_string()));
        apply_event(WidgetEvent::ChangeClicked);

        // Index is now past the end; the pair's `previous` still named "dooo".
        assert_eq!(sentence(), "This reallly sucks but so do you");
        assert_eq!(active_index(), 2);
    }

    #[test]
    fn test_advance_past_end_degrades_gracefully() {
        setup();

        for _ in 0..5 {
            apply_event(WidgetEvent::IgnoreClicked);
        }
        assert_eq!(active_index(), 5);
        assert!(current_pair().current.is_none());
        assert!(current_pair().previous.is_none());
        assert_eq!(sentence(), checker::SEED_SENTENCE);

        // A change past the end has no previous word to replace.
        apply_event(WidgetEvent::WordEdited("noise".to_string()));
        apply_event(WidgetEvent::ChangeClicked);
        assert_eq!(sentence(), checker::SEED_SENTENCE);
    }

    #[test]
    fn test_draft_tracks_latest_of_edit_and_selection() {
        setup();

        apply_event(WidgetEvent::WordEdited("rea".to_string()));
        assert_eq!(draft(), "rea");

        apply_event(WidgetEvent::SuggestionSelected("really".to_string()));
        assert_eq!(draft(), "really");

        apply_event(WidgetEvent::WordEdited("reallyy".to_string()));
        assert_eq!(draft(), "reallyy");
    }

    #[test]
    fn test_replace_first_only_touches_first_occurrence() {
        assert_eq!(replace_first("a b a", "a", "x"), "x b a");
        assert_eq!(replace_first("a b a", "missing", "x"), "a b a");
        assert_eq!(replace_first("", "a", "x"), "");
    }
}
