//! Text-buffer side of code-block insertion.
//!
//! - **`range`**: the insertion-range calculator — selection arithmetic that
//!   decides which span of the buffer a pasted code block replaces.
//! - **`document`**: a rope-backed plain-markup document implementing the
//!   markup-editor host contract, so the paste path can be exercised against
//!   a real buffer.

pub mod document;
pub mod range;

pub use document::MarkupDocument;
pub use range::{InsertionRange, SelectionContext, insertion_range};
