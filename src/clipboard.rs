//! Clipboard hand-off.
//!
//! A payload is written as a single operation carrying both the HTML and the
//! plain-text formats, so a paste target can pick whichever it understands.
//! Reading goes the other way and only ever yields plain text: rich formatting
//! on the incoming clipboard entry is dropped.

use crate::document::ParsedDocument;
use crate::error::ClipboardError;
use crate::pipeline::ClipboardPayload;

/// What a clipboard entry holds, per format.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClipboardContent {
    pub html: Option<String>,
    pub text: Option<String>,
}

impl ClipboardContent {
    pub fn from_text(text: impl Into<String>) -> Self {
        ClipboardContent {
            html: None,
            text: Some(text.into()),
        }
    }

    /// The plain-text portion. An entry that only has HTML falls back to the
    /// text content of that HTML.
    pub fn plain_text(&self) -> String {
        if let Some(t) = &self.text {
            return t.clone();
        }
        match &self.html {
            Some(h) => ParsedDocument::parse_html(h).text_content(),
            None => String::new(),
        }
    }
}

impl From<&ClipboardPayload> for ClipboardContent {
    fn from(p: &ClipboardPayload) -> Self {
        ClipboardContent {
            html: Some(p.html.clone()),
            text: Some(p.text.clone()),
        }
    }
}

pub trait ClipboardBackend {
    /// Writes both formats or nothing.
    fn write_payload(&mut self, payload: &ClipboardPayload) -> Result<(), ClipboardError>;

    fn read(&mut self) -> Result<ClipboardContent, ClipboardError>;
}

/// In-process clipboard, for hosts that own the real one and for tests.
#[derive(Clone, Debug, Default)]
pub struct MemoryClipboard {
    content: ClipboardContent,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_content(content: ClipboardContent) -> Self {
        MemoryClipboard { content }
    }

    pub fn content(&self) -> &ClipboardContent {
        &self.content
    }
}

impl ClipboardBackend for MemoryClipboard {
    fn write_payload(&mut self, payload: &ClipboardPayload) -> Result<(), ClipboardError> {
        self.content = ClipboardContent::from(payload);
        Ok(())
    }

    fn read(&mut self) -> Result<ClipboardContent, ClipboardError> {
        Ok(self.content.clone())
    }
}

/// The platform clipboard via `arboard`.
///
/// `arboard::Clipboard` is not `Send` on every platform, so a handle is opened
/// per operation instead of being stored.
#[cfg(feature = "system-clipboard")]
#[derive(Debug, Default)]
pub struct SystemClipboard;

#[cfg(feature = "system-clipboard")]
impl SystemClipboard {
    pub fn new() -> Self {
        SystemClipboard
    }

    fn open() -> Result<arboard::Clipboard, ClipboardError> {
        arboard::Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))
    }
}

#[cfg(feature = "system-clipboard")]
impl ClipboardBackend for SystemClipboard {
    fn write_payload(&mut self, payload: &ClipboardPayload) -> Result<(), ClipboardError> {
        let mut clipboard = Self::open()?;
        clipboard
            .set_html(payload.html.as_str(), Some(payload.text.as_str()))
            .map_err(|e| ClipboardError::Write(e.to_string()))
    }

    fn read(&mut self) -> Result<ClipboardContent, ClipboardError> {
        let mut clipboard = Self::open()?;
        match clipboard.get_text() {
            Ok(text) => Ok(ClipboardContent::from_text(text)),
            Err(arboard::Error::ContentNotAvailable) => Ok(ClipboardContent::default()),
            Err(e) => Err(ClipboardError::Read(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_prefers_the_text_format() {
        let c = ClipboardContent {
            html: Some("<p><b>Bold</b> words</p>".into()),
            text: Some("Bold words".into()),
        };
        assert_eq!(c.plain_text(), "Bold words");
    }

    #[test]
    fn html_only_entry_falls_back_to_text_content() {
        let c = ClipboardContent {
            html: Some("<h1 style=\"color:red\">Big</h1>\n<p>and <i>small</i></p>".into()),
            text: None,
        };
        assert_eq!(c.plain_text(), "Big\nand small");
    }

    #[test]
    fn empty_entry_gives_empty_text() {
        assert_eq!(ClipboardContent::default().plain_text(), "");
    }

    #[test]
    fn memory_clipboard_stores_both_formats() {
        let mut cb = MemoryClipboard::new();
        let payload = ClipboardPayload {
            html: "<p>x</p>".into(),
            text: "x".into(),
        };
        cb.write_payload(&payload).unwrap();
        let c = cb.read().unwrap();
        assert_eq!(c.html.as_deref(), Some("<p>x</p>"));
        assert_eq!(c.text.as_deref(), Some("x"));
    }
}
