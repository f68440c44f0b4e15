use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Representation names this engine consumes from a paste event.
pub mod keys {
    /// Plain text representation.
    pub const TEXT_PLAIN: &str = "text/plain";
    /// HTML representation.
    pub const TEXT_HTML: &str = "text/html";
    /// Marker set on copy by VS Code and compatible code editors. Its value
    /// carries language metadata which this engine ignores.
    pub const VSCODE_EDITOR_DATA: &str = "vscode-editor-data";
}

/// A single clipboard snapshot: zero or more named data representations
/// captured from one paste event.
///
/// The host paste event owns the underlying data; this type is the read-only
/// view the host fills before invoking a paste handler. Nothing here persists
/// past the handling of that one event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PastePayload {
    representations: BTreeMap<String, String>,
}

impl PastePayload {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insertion for hosts and tests assembling a payload.
    pub fn with(mut self, key: impl Into<String>, data: impl Into<String>) -> Self {
        self.representations.insert(key.into(), data.into());
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, data: impl Into<String>) {
        self.representations.insert(key.into(), data.into());
    }

    /// Look up a representation by name.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.representations.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.representations.contains_key(key)
    }

    /// The HTML representation, if the payload advertises one.
    pub fn html(&self) -> Option<&str> {
        self.get(keys::TEXT_HTML)
    }

    /// The plain text representation, if the payload advertises one.
    pub fn plain_text(&self) -> Option<&str> {
        self.get(keys::TEXT_PLAIN)
    }

    /// Whether the copy originated from a code editor. Only the presence of
    /// the marker matters; any language payload it carries is ignored.
    pub fn has_ide_marker(&self) -> bool {
        self.contains(keys::VSCODE_EDITOR_DATA)
    }
}
