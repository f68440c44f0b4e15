use crate::clipboard::PastePayload;
use crate::detect::detect;
use crate::schema::Fragment;

/// Host capabilities the rich-text paste handler needs.
pub trait RichEditor {
    /// Whether the selection's enclosing node is already a code block.
    fn in_code_block(&self) -> bool;

    /// Replace the current selection with a code block whose sole content is
    /// `code`.
    fn insert_code_block(&mut self, code: &str);
}

/// Paste interception for the rich-text surface.
///
/// Pasting inside an existing code block is never intercepted. Otherwise the
/// detector runs with the event payload and any content slice the host
/// already parsed; detected code replaces the selection as a code block.
pub fn handle_rich_paste(
    editor: &mut impl RichEditor,
    payload: &PastePayload,
    slice: Option<&Fragment>,
) -> bool {
    if editor.in_code_block() {
        return false;
    }
    match detect(payload, slice) {
        Some(code) => {
            editor.insert_code_block(&code);
            true
        }
        None => false,
    }
}
