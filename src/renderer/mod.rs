//! Renderer - cells to terminal bytes.
//!
//! - **ansi** - escape sequence emitters
//! - **buffer** - FrameBuffer and drawing primitives
//! - **output** - batched output and stateful cell rendering
//! - **diff** - differential fullscreen renderer
//! - **widget** - the spellcheck widget view (pure frame building)

pub mod ansi;
pub mod buffer;
pub mod diff;
pub mod output;
pub mod widget;

pub use buffer::FrameBuffer;
pub use diff::DiffRenderer;
pub use output::{OutputBuffer, StatefulCellRenderer};
pub use widget::build_frame;
