//! Paste interception for the two editing surfaces.
//!
//! Each handler is the thin composition of the detector and (for the markup
//! surface) the range calculator against a host editor reached through a
//! narrow trait. Handlers return `true` when the paste was fully handled and
//! the host must suppress its default behavior, `false` to let the default
//! paste proceed — which is the universal fallback for every unrecognized or
//! malformed input.

pub mod markup;
pub mod rich;

pub use markup::{MarkupEditor, handle_markup_paste};
pub use rich::{RichEditor, handle_rich_paste};
