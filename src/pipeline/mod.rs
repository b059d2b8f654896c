//! Pipeline - The reactive render pipeline.
//!
//! Store signals flow through two deriveds into one render effect:
//!
//! ```text
//! store signals -> ui_state -> frame -> render effect -> terminal
//!                     ^          ^
//!                     |          +-- terminal size + control signals
//!                     +-- misspellings, index, sentence, draft
//! ```
//!
//! - **terminal** - terminal size signals
//! - **ui_state** - pure derivation of the widget's render input
//! - **frame** - frame building (cells + hit regions)
//! - **mount** - lifecycle, render effect, and event loop

pub mod frame;
pub mod mount;
pub mod terminal;
pub mod ui_state;

pub use frame::{create_frame_derived, FrameResult};
pub use mount::{mount, run, tick, unmount, MountHandle};
pub use ui_state::create_ui_state_derived;
