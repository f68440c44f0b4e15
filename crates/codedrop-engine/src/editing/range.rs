use serde::{Deserialize, Serialize};

/// Span of host-buffer positions to replace when splicing in detected code.
/// Always satisfies `from <= to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsertionRange {
    pub from: usize,
    pub to: usize,
}

/// The range calculator's view of the current selection: its bounds plus the
/// block-local text on either side.
///
/// `before` runs from the start of the enclosing block to the selection
/// start; `after` runs from the selection end to the end of the block. The
/// host buffer's clamping semantics apply: out-of-range queries yield empty
/// runs, never failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionContext<'a> {
    /// Selection start position.
    pub from: usize,
    /// Selection end position (`from <= to`).
    pub to: usize,
    /// Text from the start of the enclosing block up to `from`.
    pub before: &'a str,
    /// Text from `to` to the end of the enclosing block.
    pub after: &'a str,
}

/// Compute the span to replace when inserting a code block at the selection.
///
/// The selection boundary is pushed outward across contiguous whitespace on
/// each side, but only to probe for backtick delimiters: when a single
/// backtick sits immediately beyond both expanded boundaries, the returned
/// range absorbs both backticks so they are replaced instead of left
/// dangling. In every other case the original selection is returned
/// unchanged — the whitespace expansion itself is never applied.
pub fn insertion_range(selection: &SelectionContext) -> InsertionRange {
    let trailing = trailing_whitespace(selection.before);
    let leading = leading_whitespace(selection.after);

    let expanded_from = selection.from - trailing;
    let expanded_to = selection.to + leading;

    let opens = selection.before[..selection.before.len() - trailing].ends_with('`');
    let closes = selection.after[leading..].starts_with('`');

    if opens && closes {
        InsertionRange {
            from: expanded_from - 1,
            to: expanded_to + 1,
        }
    } else {
        InsertionRange {
            from: selection.from,
            to: selection.to,
        }
    }
}

/// Byte length of the whitespace run ending `text`.
fn trailing_whitespace(text: &str) -> usize {
    text.len() - text.trim_end().len()
}

/// Byte length of the whitespace run starting `text`.
fn leading_whitespace(text: &str) -> usize {
    text.len() - text.trim_start().len()
}
