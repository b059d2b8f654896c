//! # typofix
//!
//! Reactive terminal spellcheck-correction widget.
//!
//! Built on [spark-signals](https://github.com/RLabs-Inc/spark-signals) for
//! fine-grained reactivity. A canned checker flags misspellings in a fixed
//! sentence; the user accepts a suggestion or types a replacement, and the
//! sentence folds over the corrections.
//!
//! ## Architecture
//!
//! Three stages, connected only by signals and events:
//!
//! ```text
//! terminal events -> WidgetEvent -> store signals -> uiStateDerived -> frameDerived -> render effect
//! ```
//!
//! The store is a pure fold over the event stream; replaying the same events
//! always produces the same sentence. Side effects against the UI controls
//! (clearing the selection and the input buffer after an advance) travel as
//! explicit [`types::UiCommand`] values consumed by the event loop.
//!
//! ## Modules
//!
//! - [`types`] - Core types (Misspelling, MisspellingPair, UiState, Cell, ...)
//! - [`checker`] - The canned spellchecker response and seed sentence
//! - [`state`] - Event routing, debounce, control state, and the store
//! - [`pipeline`] - The derived chain and the mount/event loop
//! - [`renderer`] - Terminal renderer (ANSI output, diff rendering)
//! - [`logging`] - File-based tracing setup

pub mod checker;
pub mod logging;
pub mod pipeline;
pub mod renderer;
pub mod state;
pub mod types;

// Re-export commonly used items
pub use types::*;

pub use pipeline::{
    create_frame_derived, create_ui_state_derived, mount, run, tick, unmount, FrameResult,
    MountHandle,
};

pub use renderer::{build_frame, DiffRenderer, FrameBuffer, OutputBuffer};

pub use state::{Debouncer, InputAction, WidgetEvent, DEBOUNCE_DELAY};
