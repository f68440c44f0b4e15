use std::borrow::Cow;
use std::ops::Range;

use xi_rope::Rope;

use crate::paste::MarkupEditor;

/// A plain-markup document: an xi-rope buffer with a 1-indexed position
/// convention.
///
/// Position 1 sits before the first byte and position `len() + 1` after the
/// last, matching the document-start convention the markup paste handler
/// relies on (`from == 1` means the very start of the buffer).
///
/// The enclosing block of any position is its line: block-local text runs
/// stop at newlines. All position and byte-range queries clamp to buffer
/// bounds and return empty text rather than fail.
#[derive(Clone)]
pub struct MarkupDocument {
    /// xi-rope buffer containing the document as UTF-8 bytes.
    buffer: Rope,
    /// Current selection as 1-indexed positions, `start <= end`.
    selection: Range<usize>,
}

impl MarkupDocument {
    /// Create a document from raw bytes, with the cursor at the end.
    pub fn from_bytes(bytes: &[u8]) -> anyhow::Result<Self> {
        let text = std::str::from_utf8(bytes)?;
        let buffer = Rope::from(text);
        let end = buffer.len() + 1;
        Ok(Self {
            buffer,
            selection: end..end,
        })
    }

    /// Get the current text content.
    pub fn text(&self) -> String {
        self.buffer.to_string()
    }

    /// Buffer length in bytes.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.len() == 0
    }

    /// Set the selection, clamped to valid positions and ordered.
    pub fn set_selection(&mut self, from: usize, to: usize) {
        let end = self.buffer.len() + 1;
        let from = from.clamp(1, end);
        let to = to.clamp(from, end);
        self.selection = from..to;
    }

    /// Current selection as 1-indexed `(from, to)` positions.
    pub fn selection(&self) -> (usize, usize) {
        (self.selection.start, self.selection.end)
    }

    /// Byte offset of a 1-indexed position, clamped to buffer bounds.
    fn offset(&self, position: usize) -> usize {
        position.saturating_sub(1).min(self.buffer.len())
    }

    /// Slice the buffer by byte range, clamped to bounds.
    fn slice_to_cow(&self, range: Range<usize>) -> Cow<'_, str> {
        let len = self.buffer.len();
        let start = range.start.min(len);
        let end = range.end.min(len).max(start);
        self.buffer.slice_to_cow(start..end)
    }

    /// Byte offset of the start of the line containing `offset`.
    fn line_start(&self, offset: usize) -> usize {
        let prefix = self.slice_to_cow(0..offset);
        prefix.rfind('\n').map(|i| i + 1).unwrap_or(0)
    }

    /// Byte offset of the end of the line containing `offset`, excluding the
    /// newline itself.
    fn line_end(&self, offset: usize) -> usize {
        let suffix = self.slice_to_cow(offset..self.buffer.len());
        suffix.find('\n').map(|i| offset + i).unwrap_or(self.buffer.len())
    }
}

impl MarkupEditor for MarkupDocument {
    fn selection(&self) -> (usize, usize) {
        MarkupDocument::selection(self)
    }

    fn block_before_selection(&self) -> String {
        let offset = self.offset(self.selection.start);
        self.slice_to_cow(self.line_start(offset)..offset).into_owned()
    }

    fn block_after_selection(&self) -> String {
        let offset = self.offset(self.selection.end);
        self.slice_to_cow(offset..self.line_end(offset)).into_owned()
    }

    fn replace_range(&mut self, from: usize, to: usize, text: &str) {
        let start = self.offset(from);
        let end = self.offset(to).max(start);
        self.buffer.edit(start..end, text);

        // Leave the cursor collapsed after the inserted text.
        let caret = start + text.len() + 1;
        self.selection = caret..caret;
    }
}
