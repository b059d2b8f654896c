//! Canned checker data.
//!
//! Stand-in for a real spellchecking service. A production integration would
//! replace `fetch_misspellings` with a call returning the same shape; nothing
//! downstream cares where the list came from.

use crate::types::Misspelling;

/// The sentence the widget starts from.
pub const SEED_SENTENCE: &str = "This reallly sucks but so dooo you";

/// Fake the response from the spellchecking service.
pub fn fetch_misspellings() -> Vec<Misspelling> {
    vec![
        Misspelling::new("reallly", &["really", "real"]),
        Misspelling::new("dooo", &["do", "poo"]),
    ]
}
