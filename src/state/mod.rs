//! State Module - Event source and reactive store.
//!
//! - **input** - crossterm bridge, debounce, and live control state
//! - **store** - the signal folds (active index, sentence, draft)

pub mod input;
pub mod store;

pub use input::{Debouncer, InputAction, WidgetEvent, DEBOUNCE_DELAY};
