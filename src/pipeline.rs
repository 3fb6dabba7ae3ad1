use crate::apply::style_document;
use crate::document::ParsedDocument;
use crate::style::StyleConfigSet;
use serde::{Deserialize, Serialize};

/// The two clipboard formats produced by one conversion.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClipboardPayload {
    /// `text/html`
    pub html: String,
    /// `text/plain`
    pub text: String,
}

impl ClipboardPayload {
    pub fn is_empty(&self) -> bool {
        self.html.is_empty() && self.text.is_empty()
    }
}

/// Markdown -> HTML -> tree -> styled tree -> (HTML, text).
pub fn markdown_to_payload(md: &str, styles: &StyleConfigSet) -> ClipboardPayload {
    let doc = ParsedDocument::from_markdown(md);
    let (html, text) = style_document(&doc, styles);
    log::debug!(
        "converted {} bytes of markdown into {} top-level nodes, {} bytes of html",
        md.len(),
        doc.nodes.len(),
        html.len()
    );
    ClipboardPayload { html, text }
}
