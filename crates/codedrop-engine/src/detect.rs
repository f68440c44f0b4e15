//! Code-or-not classification of clipboard payloads.
//!
//! Detection is an ordered chain of classifier attempts. Each stage either
//! matches conclusively or passes to the next; the first match wins and no
//! stage re-checks an earlier signal. The chain, strongest signal first:
//!
//! 1. A restricted-schema fragment that is exactly one code block.
//! 2. Pasted HTML that is nothing but a `<code>` element.
//! 3. The IDE copy marker on the payload.
//! 4. Indented lines in the plain text.

use regex::Regex;
use std::sync::OnceLock;

use crate::clipboard::PastePayload;
use crate::schema::{Fragment, HtmlDom};

/// A line opening with two or more spaces or a tab marks the text as code.
fn indented_line_regex() -> &'static Regex {
    static INDENTED_LINE: OnceLock<Regex> = OnceLock::new();
    INDENTED_LINE
        .get_or_init(|| Regex::new(r"(?m)^( {2,}|\t)").expect("Invalid indented-line regex"))
}

/// Classify a paste payload as code or not.
///
/// `fragment` is a content slice the host already parsed against the
/// restricted schema; when absent, one is derived from the payload's HTML
/// representation. Returns the detected code text, or `None` for anything
/// that is not a pure code paste. Detection failures of every kind (missing
/// representations, malformed HTML, ambiguous content) degrade to `None`,
/// never an error.
pub fn detect(payload: &PastePayload, fragment: Option<&Fragment>) -> Option<String> {
    let mut dom: Option<HtmlDom> = None;
    let derived;
    let fragment = match fragment {
        Some(fragment) => Some(fragment),
        None => {
            dom = payload.html().map(HtmlDom::parse);
            derived = dom.as_ref().map(HtmlDom::to_fragment);
            derived.as_ref()
        }
    };

    // Schema-detected path: a paste that is exactly one code block is
    // conclusive and skips every heuristic.
    if let Some(code) = fragment.and_then(Fragment::as_sole_code_block) {
        return non_empty(code.to_owned());
    }

    // Heuristic path. Re-derive the markup tree if the host handed us a
    // fragment and we never parsed the HTML ourselves.
    if dom.is_none() {
        dom = payload.html().map(HtmlDom::parse);
    }
    if let Some(dom) = &dom
        && let Some(code) = dom.first_code_text()
    {
        // The paste must contain nothing but the code element; a code span
        // inside a larger document is not a code paste. A mismatch is final
        // and does not fall through to the plain-text heuristics.
        if dom.text_content().trim() == code.trim() {
            return non_empty(code);
        }
        return None;
    }

    let text = payload.plain_text()?;
    if text.is_empty() {
        return None;
    }
    if payload.has_ide_marker() {
        return Some(text.to_owned());
    }
    if indented_line_regex().is_match(text) {
        return Some(text.to_owned());
    }
    None
}

fn non_empty(code: String) -> Option<String> {
    (!code.is_empty()).then_some(code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::keys;
    use crate::schema::Node;
    use rstest::rstest;

    fn plain(text: &str) -> PastePayload {
        PastePayload::new().with(keys::TEXT_PLAIN, text)
    }

    #[rstest]
    #[case::two_space_indent("fn main() {\n  body();\n}", true)]
    #[case::tab_indent("fn main() {\n\tbody();\n}", true)]
    #[case::indented_first_line("  leading indent", true)]
    #[case::single_space_indent("a\n b", false)]
    #[case::flat_prose("just a sentence about code", false)]
    #[case::flat_multiline("one\ntwo\nthree", false)]
    fn plain_text_follows_indentation_heuristic(#[case] text: &str, #[case] is_code: bool) {
        let detected = detect(&plain(text), None);

        assert_eq!(detected, is_code.then(|| text.to_owned()));
    }

    #[test]
    fn empty_payload_is_not_code() {
        assert_eq!(detect(&PastePayload::new(), None), None);
    }

    #[test]
    fn empty_plain_text_is_not_code() {
        assert_eq!(detect(&plain(""), None), None);
    }

    #[test]
    fn ide_marker_classifies_flat_text_as_code() {
        let marked = plain("foo").with(keys::VSCODE_EDITOR_DATA, r#"{"mode":"go"}"#);

        assert_eq!(detect(&marked, None), Some("foo".to_owned()));
        // The same text without the marker fails the indentation test.
        assert_eq!(detect(&plain("foo"), None), None);
    }

    #[test]
    fn lone_code_element_is_code() {
        let payload = PastePayload::new().with(keys::TEXT_HTML, "<code>safe()</code>");

        assert_eq!(detect(&payload, None), Some("safe()".to_owned()));
    }

    #[test]
    fn code_element_beside_other_text_is_not_code() {
        let payload = PastePayload::new().with(keys::TEXT_HTML, "<p>see <code>x</code> here</p>");

        assert_eq!(detect(&payload, None), None);
    }

    #[test]
    fn code_element_mismatch_does_not_fall_through() {
        // The plain text would pass the indentation heuristic, but the HTML
        // stage already concluded "not code" and that verdict is final.
        let payload = PastePayload::new()
            .with(keys::TEXT_HTML, "<p>see <code>x</code> here</p>")
            .with(keys::TEXT_PLAIN, "see x here\n  indented");

        assert_eq!(detect(&payload, None), None);
    }

    #[test]
    fn code_element_comparison_ignores_surrounding_whitespace() {
        let payload = PastePayload::new().with(keys::TEXT_HTML, "<div> <code>safe()</code> </div>");

        assert_eq!(detect(&payload, None), Some("safe()".to_owned()));
    }

    #[test]
    fn pasted_html_code_block_is_conclusive() {
        let payload = PastePayload::new()
            .with(keys::TEXT_HTML, "<pre><code>a=1</code></pre>")
            .with(keys::TEXT_PLAIN, "a=1");

        // The plain text fails the indentation test; the schema path never
        // consults it.
        assert_eq!(detect(&payload, None), Some("a=1".to_owned()));
    }

    #[test]
    fn preparsed_code_block_fragment_is_conclusive() {
        let fragment = Fragment::new(vec![Node::CodeBlock("a=1".into())]);

        assert_eq!(
            detect(&plain("a=1"), Some(&fragment)),
            Some("a=1".to_owned())
        );
    }

    #[test]
    fn preparsed_prose_fragment_falls_back_to_heuristics() {
        let fragment = Fragment::new(vec![Node::Paragraph(vec![Node::Text("prose".into())])]);
        let payload = plain("fn main() {\n  body();\n}");

        assert_eq!(detect(&payload, Some(&fragment)), Some(payload.plain_text().unwrap().to_owned()));
    }

    #[test]
    fn preparsed_fragment_still_honors_html_code_element() {
        // A non-code-block fragment sends detection down the heuristic path,
        // which re-derives the markup tree from the payload.
        let fragment = Fragment::new(vec![Node::Paragraph(vec![Node::Text("safe()".into())])]);
        let payload = PastePayload::new().with(keys::TEXT_HTML, "<code>safe()</code>");

        assert_eq!(detect(&payload, Some(&fragment)), Some("safe()".to_owned()));
    }

    #[test]
    fn empty_code_block_is_treated_as_no_detection() {
        let fragment = Fragment::new(vec![Node::CodeBlock(String::new())]);

        assert_eq!(detect(&PastePayload::new(), Some(&fragment)), None);
    }

    #[test]
    fn html_without_code_defers_to_plain_text() {
        let payload = PastePayload::new()
            .with(keys::TEXT_HTML, "<p>wrapper</p>")
            .with(keys::TEXT_PLAIN, "if x:\n    y()");

        assert_eq!(detect(&payload, None), Some("if x:\n    y()".to_owned()));
    }
}
