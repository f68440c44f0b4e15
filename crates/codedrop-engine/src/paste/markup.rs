use crate::clipboard::PastePayload;
use crate::detect::detect;
use crate::editing::{SelectionContext, insertion_range};

/// Opening and closing delimiter of a fenced code region.
pub const FENCE: &str = "```";

/// Host capabilities the markup paste handler needs.
///
/// Positions are 1-indexed: position 1 is the document start. Block-local
/// text queries follow the host buffer's clamping semantics — out-of-range
/// queries return empty text, never fail.
pub trait MarkupEditor {
    /// Current selection as `(from, to)` positions, `from <= to`.
    fn selection(&self) -> (usize, usize);

    /// Text from the start of the enclosing block to the selection start.
    fn block_before_selection(&self) -> String;

    /// Text from the selection end to the end of the enclosing block.
    fn block_after_selection(&self) -> String;

    /// Replace the span `from..to` with `text`.
    fn replace_range(&mut self, from: usize, to: usize, text: &str);
}

/// Paste interception for the plain-markup surface.
///
/// Always runs the full heuristic detection path: this surface's content
/// model has no code-block concept for the host to pre-parse. Detected code
/// is wrapped in a triple-backtick fence on its own lines and spliced over
/// the computed insertion range, absorbing backtick delimiters adjacent to
/// the selection.
pub fn handle_markup_paste(editor: &mut impl MarkupEditor, payload: &PastePayload) -> bool {
    let Some(code) = detect(payload, None) else {
        return false;
    };

    let (from, to) = editor.selection();
    let before = editor.block_before_selection();
    let after = editor.block_after_selection();
    let range = insertion_range(&SelectionContext {
        from,
        to,
        before: &before,
        after: &after,
    });

    // The fence opens on a fresh line everywhere except the document start.
    let newline = if range.from == 1 { "" } else { "\n" };
    let fenced = format!("{newline}{FENCE}\n{code}\n{FENCE}");
    editor.replace_range(range.from, range.to, &fenced);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::keys;
    use crate::editing::MarkupDocument;
    use pretty_assertions::assert_eq;

    fn code_payload(text: &str) -> PastePayload {
        PastePayload::new()
            .with(keys::TEXT_PLAIN, text)
            .with(keys::VSCODE_EDITOR_DATA, "{}")
    }

    #[test]
    fn prose_is_left_to_the_default_paste() {
        let mut doc = MarkupDocument::from_bytes(b"notes").unwrap();
        let payload = PastePayload::new().with(keys::TEXT_PLAIN, "plain prose");

        assert!(!handle_markup_paste(&mut doc, &payload));
        assert_eq!(doc.text(), "notes");
    }

    #[test]
    fn paste_at_document_start_omits_the_leading_newline() {
        let mut doc = MarkupDocument::from_bytes(b"existing").unwrap();
        doc.set_selection(1, 1);

        assert!(handle_markup_paste(&mut doc, &code_payload("a=1")));
        assert_eq!(doc.text(), "```\na=1\n```existing");
    }

    #[test]
    fn paste_elsewhere_prefixes_exactly_one_newline() {
        let mut doc = MarkupDocument::from_bytes(b"intro").unwrap();
        doc.set_selection(6, 6);

        assert!(handle_markup_paste(&mut doc, &code_payload("a=1")));
        assert_eq!(doc.text(), "intro\n```\na=1\n```");
    }

    #[test]
    fn selection_is_replaced_by_the_fence() {
        let mut doc = MarkupDocument::from_bytes(b"keep OLD keep").unwrap();
        doc.set_selection(6, 9);

        assert!(handle_markup_paste(&mut doc, &code_payload("new()")));
        assert_eq!(doc.text(), "keep \n```\nnew()\n``` keep");
    }

    #[test]
    fn adjacent_backticks_are_replaced_with_the_fence() {
        // The caret sits between the backticks of an empty inline-code span;
        // both delimiters are absorbed into the replacement.
        let mut doc = MarkupDocument::from_bytes(b"see `` here").unwrap();
        doc.set_selection(6, 6);

        assert!(handle_markup_paste(&mut doc, &code_payload("a=1")));
        assert_eq!(doc.text(), "see \n```\na=1\n``` here");
    }

    #[test]
    fn backticks_across_whitespace_are_replaced() {
        let mut doc = MarkupDocument::from_bytes(b"` x `").unwrap();
        doc.set_selection(3, 4);

        assert!(handle_markup_paste(&mut doc, &code_payload("y")));
        // The absorbed range starts at position 1, so no leading newline.
        assert_eq!(doc.text(), "```\ny\n```");
    }
}
