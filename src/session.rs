//! Converter state driven by a front end: the Markdown being edited and the
//! style set it will be rendered with.

use crate::clipboard::{ClipboardBackend, ClipboardContent};
use crate::error::{ConfigResult, Result};
use crate::pipeline::{markdown_to_payload, ClipboardPayload};
use crate::style::{StyleCategory, StyleConfigSet, StyleEdit};

/// Shown to the user after a successful copy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CopyNotice {
    Copied,
}

impl CopyNotice {
    pub fn message(self) -> &'static str {
        match self {
            CopyNotice::Copied => "Copied in Word format. Paste it straight into Word.",
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct Session {
    input: String,
    styles: StyleConfigSet,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_styles(styles: StyleConfigSet) -> Self {
        Session {
            input: String::new(),
            styles,
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Replaces the input with the plain-text portion of a paste.
    pub fn paste(&mut self, content: &ClipboardContent) {
        self.input = content.plain_text();
    }

    pub fn paste_from<C: ClipboardBackend>(&mut self, clipboard: &mut C) -> Result<()> {
        let content = clipboard.read()?;
        self.paste(&content);
        Ok(())
    }

    pub fn styles(&self) -> &StyleConfigSet {
        &self.styles
    }

    pub fn edit(&mut self, category: StyleCategory, edit: StyleEdit) -> ConfigResult<()> {
        self.styles.apply_edit(category, edit.clone()).inspect_err(|e| {
            log::warn!("refused {:?} for {}: {e}", edit, category.label());
        })
    }

    pub fn reset_styles(&mut self) {
        self.styles.reset();
    }

    pub fn render(&self) -> ClipboardPayload {
        markdown_to_payload(&self.input, &self.styles)
    }

    /// Renders the current input and writes it to `clipboard`. A failed write
    /// is returned as-is and not retried.
    pub fn copy_to_word<C: ClipboardBackend>(&self, clipboard: &mut C) -> Result<CopyNotice> {
        let payload = self.render();
        match clipboard.write_payload(&payload) {
            Ok(()) => {
                log::info!(
                    "copied {} bytes of html and {} bytes of text",
                    payload.html.len(),
                    payload.text.len()
                );
                Ok(CopyNotice::Copied)
            }
            Err(e) => {
                log::warn!("clipboard write failed: {e}");
                Err(e.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::MemoryClipboard;
    use crate::error::{ClipboardError, ConfigError, Error};
    use crate::style::FontFamily;

    /// Holds content but refuses every write.
    struct ReadOnlyClipboard(ClipboardContent);

    impl ClipboardBackend for ReadOnlyClipboard {
        fn write_payload(&mut self, _: &ClipboardPayload) -> std::result::Result<(), ClipboardError> {
            Err(ClipboardError::Write("permission denied".into()))
        }

        fn read(&mut self) -> std::result::Result<ClipboardContent, ClipboardError> {
            Ok(self.0.clone())
        }
    }

    #[test]
    fn starts_empty_with_default_styles() {
        let s = Session::new();
        assert_eq!(s.input(), "");
        assert_eq!(s.styles(), &StyleConfigSet::default());
        assert!(s.render().is_empty());
    }

    #[test]
    fn paste_keeps_only_plain_text() {
        let mut s = Session::new();
        s.set_input("old");
        s.paste(&ClipboardContent {
            html: Some("<p style=\"color:red\"><b># Not</b> markdown</p>".into()),
            text: Some("# Heading\n\nbody".into()),
        });
        assert_eq!(s.input(), "# Heading\n\nbody");
    }

    #[test]
    fn paste_from_clipboard_reads_text() {
        let mut cb = MemoryClipboard::with_content(ClipboardContent::from_text("- item"));
        let mut s = Session::new();
        s.paste_from(&mut cb).unwrap();
        assert_eq!(s.input(), "- item");
    }

    #[test]
    fn copy_writes_both_formats() {
        let mut s = Session::new();
        s.set_input("# Title\n\nHello **world**");
        let mut cb = MemoryClipboard::new();
        let notice = s.copy_to_word(&mut cb).unwrap();
        assert_eq!(notice, CopyNotice::Copied);
        let c = cb.content();
        assert!(c.html.as_deref().unwrap().contains("font-size: 28pt"));
        assert_eq!(c.text.as_deref(), Some("Title\nHello world"));
    }

    #[test]
    fn failed_copy_is_reported_and_leaves_clipboard_alone() {
        let mut s = Session::new();
        s.set_input("text");
        let before = ClipboardContent::from_text("previous");
        let mut cb = ReadOnlyClipboard(before.clone());
        let err = s.copy_to_word(&mut cb).unwrap_err();
        match err {
            Error::Clipboard(e) => assert!(e.user_message().contains("unchanged")),
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(cb.read().unwrap(), before);
    }

    #[test]
    fn refused_edit_keeps_previous_value() {
        let mut s = Session::new();
        s.edit(StyleCategory::Body, StyleEdit::MarginAfter(6.0)).unwrap();
        let err = s
            .edit(StyleCategory::Body, StyleEdit::MarginAfter(-6.0))
            .unwrap_err();
        assert_eq!(err, ConfigError::InvalidMargin { value: -6.0 });
        assert_eq!(s.styles().body.margin_after, 6.0);
    }

    #[test]
    fn reset_after_edits() {
        let mut s = Session::new();
        s.edit(StyleCategory::Heading1, StyleEdit::FontFamily(FontFamily::TimesNewRoman))
            .unwrap();
        s.edit(StyleCategory::Heading1, StyleEdit::FontSize(36.0)).unwrap();
        s.set_input("# H");
        s.reset_styles();
        assert_eq!(s.styles(), &StyleConfigSet::default());
        assert_eq!(s.input(), "# H");
        assert!(s.render().html.contains("font-size: 28pt"));
    }
}
