//! Clipboard HTML parsing against the restricted schema.
//!
//! Uses html5ever, a browser-grade parser: malformed input degrades to a
//! best-effort tree rather than an error, which is exactly the contract the
//! detector relies on.

use html5ever::tendril::TendrilSink;
use html5ever::{ParseOpts, parse_document};
use markup5ever_rcdom::{Handle, NodeData, RcDom};

use super::{Fragment, Node};

/// A parsed clipboard HTML document.
///
/// Wraps the rcdom tree so the detector can derive a restricted-schema
/// [`Fragment`] and run document-level text queries from one parse.
pub struct HtmlDom {
    document: Handle,
}

impl HtmlDom {
    /// Parse clipboard HTML. Never fails; unparseable input yields an empty
    /// or partial document.
    pub fn parse(html: &str) -> Self {
        let dom = parse_document(RcDom::default(), ParseOpts::default()).one(html);
        Self {
            document: dom.document,
        }
    }

    /// Fold the parsed document into the restricted schema.
    pub fn to_fragment(&self) -> Fragment {
        let mut folder = Folder::default();
        folder.walk_children(&self.root());
        folder.finish()
    }

    /// The document's entire visible text.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        collect_text(&self.root(), &mut out);
        out
    }

    /// Text of the first `<code>` element in document order, if any.
    pub fn first_code_text(&self) -> Option<String> {
        let code = find_element(&self.root(), "code")?;
        let mut out = String::new();
        collect_text(&code, &mut out);
        Some(out)
    }

    /// The `<body>` element html5ever synthesizes around fragment-shaped
    /// clipboard HTML, or the document root if parsing produced none.
    fn root(&self) -> Handle {
        find_element(&self.document, "body").unwrap_or_else(|| self.document.clone())
    }
}

/// Depth-first search for the first element with the given local name.
fn find_element(handle: &Handle, local: &str) -> Option<Handle> {
    for child in handle.children.borrow().iter() {
        if let NodeData::Element { name, .. } = &child.data
            && name.local.as_ref() == local
        {
            return Some(child.clone());
        }
        if let Some(found) = find_element(child, local) {
            return Some(found);
        }
    }
    None
}

/// Concatenate all text descendants of a node.
fn collect_text(handle: &Handle, out: &mut String) {
    for child in handle.children.borrow().iter() {
        match &child.data {
            NodeData::Text { contents } => out.push_str(&contents.borrow()),
            NodeData::Element { .. } => collect_text(child, out),
            _ => {}
        }
    }
}

/// Folds a DOM subtree into restricted-schema nodes.
///
/// `<pre>` becomes a code block; other block elements close the open
/// paragraph; inline markup is flattened into the open paragraph; whitespace
/// between blocks is dropped.
#[derive(Default)]
struct Folder {
    children: Vec<Node>,
    inline: Vec<Node>,
}

impl Folder {
    fn walk_children(&mut self, handle: &Handle) {
        for child in handle.children.borrow().iter() {
            self.walk(child);
        }
    }

    fn walk(&mut self, handle: &Handle) {
        match &handle.data {
            NodeData::Text { contents } => {
                let text = contents.borrow().to_string();
                // Whitespace between block elements is formatting, not content.
                if self.inline.is_empty() && text.trim().is_empty() {
                    return;
                }
                self.inline.push(Node::Text(text));
            }
            NodeData::Element { name, .. } => match name.local.as_ref() {
                "pre" => {
                    self.flush_paragraph();
                    let mut text = String::new();
                    collect_text(handle, &mut text);
                    self.children.push(Node::CodeBlock(text));
                }
                "br" => self.inline.push(Node::Text("\n".into())),
                "script" | "style" | "template" | "meta" | "link" | "title" => {}
                tag if is_block(tag) => {
                    self.flush_paragraph();
                    self.walk_children(handle);
                    self.flush_paragraph();
                }
                _ => self.walk_children(handle),
            },
            _ => {}
        }
    }

    fn flush_paragraph(&mut self) {
        if !self.inline.is_empty() {
            let inline = std::mem::take(&mut self.inline);
            self.children.push(Node::Paragraph(inline));
        }
    }

    fn finish(mut self) -> Fragment {
        self.flush_paragraph();
        Fragment::new(self.children)
    }
}

fn is_block(tag: &str) -> bool {
    matches!(
        tag,
        "p" | "div"
            | "section"
            | "article"
            | "header"
            | "footer"
            | "main"
            | "blockquote"
            | "ul"
            | "ol"
            | "li"
            | "table"
            | "thead"
            | "tbody"
            | "tr"
            | "td"
            | "th"
            | "h1"
            | "h2"
            | "h3"
            | "h4"
            | "h5"
            | "h6"
            | "hr"
    )
}
