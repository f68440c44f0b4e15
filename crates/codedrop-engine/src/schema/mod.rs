//! Restricted clipboard-classification schema.
//!
//! Pasted HTML is folded into a tree that knows only four node kinds:
//! document root ([`Fragment`]), paragraph, text, and code block. Every other
//! markup construct is dropped or folded into paragraphs. The schema is
//! deliberately decoupled from any host document model so that clipboard
//! classification stays testable in isolation.

pub mod html;

pub use html::HtmlDom;

use serde::{Deserialize, Serialize};

/// A node of the restricted schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Node {
    /// A paragraph holding folded inline content.
    Paragraph(Vec<Node>),
    /// A verbatim code block with its full text content.
    CodeBlock(String),
    /// A run of plain text.
    Text(String),
}

impl Node {
    /// Full visible text of this node and its descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Node::Paragraph(children) => {
                for child in children {
                    child.collect_text(out);
                }
            }
            Node::CodeBlock(text) | Node::Text(text) => out.push_str(text),
        }
    }
}

/// Document root of the restricted schema: the top-level children of one
/// parsed clipboard paste.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fragment {
    children: Vec<Node>,
}

impl Fragment {
    pub fn new(children: Vec<Node>) -> Self {
        Self { children }
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// The code's text when this fragment is exactly one code block and
    /// nothing else — the conclusive schema-detected paste shape.
    pub fn as_sole_code_block(&self) -> Option<&str> {
        match self.children.as_slice() {
            [Node::CodeBlock(text)] => Some(text),
            _ => None,
        }
    }

    /// Full visible text of the fragment.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            child.collect_text(&mut out);
        }
        out
    }
}
