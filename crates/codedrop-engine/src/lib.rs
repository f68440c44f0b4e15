pub mod clipboard;
pub mod detect;
pub mod editing;
pub mod paste;
pub mod schema;

// Re-export key types for easier usage
pub use clipboard::PastePayload;
pub use detect::detect;
pub use editing::{InsertionRange, MarkupDocument, SelectionContext, insertion_range};
pub use paste::{MarkupEditor, RichEditor, handle_markup_paste, handle_rich_paste};
pub use schema::{Fragment, Node};
