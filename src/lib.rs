//! Markdown to Word-ready HTML.
//!
//! Markdown is parsed, every heading (levels 1-3), paragraph and list item gets
//! an inline `style` from a [`StyleConfigSet`], and the result is handed to the
//! clipboard as HTML plus a plain-text fallback.

pub mod abi;
pub mod apply;
pub mod clipboard;
pub mod document;
pub mod error;
#[cfg(target_arch = "wasm32")]
mod ffi;
pub mod json;
pub mod markdown;
pub mod pipeline;
pub mod session;
pub mod style;

pub use apply::{apply_styles, style_document};
pub use clipboard::{ClipboardBackend, ClipboardContent, MemoryClipboard};
#[cfg(feature = "system-clipboard")]
pub use clipboard::SystemClipboard;
pub use document::{ElementKind, Node, ParsedDocument};
pub use error::{ClipboardError, ConfigError, Error, Result};
pub use pipeline::{markdown_to_payload, ClipboardPayload};
pub use session::{CopyNotice, Session};
pub use style::{FontFamily, StyleCategory, StyleConfig, StyleConfigSet, StyleEdit};

#[cfg(target_arch = "wasm32")]
mod exports {
    use crate::abi::{error_code, ERR_OTHER};
    use crate::ffi::{read_utf8, report_read_error, set_error, write_out};
    use crate::{json, ClipboardContent, StyleConfigSet};

    #[no_mangle]
    pub extern "C" fn api_version() -> u32 {
        1
    }

    #[no_mangle]
    pub extern "C" fn default_styles() -> u32 {
        match json::styles_to_json(&StyleConfigSet::default()) {
            Ok(out) => write_out(&out),
            Err(e) => {
                set_error(ERR_OTHER, &e.to_string());
                0
            }
        }
    }

    /// Returns `{"html": ..., "text": ...}`. An empty style buffer means defaults.
    #[no_mangle]
    pub extern "C" fn markdown_to_word(
        md_ptr: u32,
        md_len: u32,
        styles_ptr: u32,
        styles_len: u32,
    ) -> u32 {
        let md = match read_utf8(md_ptr, md_len) {
            Ok(s) => s,
            Err(code) => return report_read_error(code, "markdown"),
        };
        let styles = match read_utf8(styles_ptr, styles_len) {
            Ok(s) => s,
            Err(code) => return report_read_error(code, "styles"),
        };

        match json::markdown_to_payload_json(md, styles) {
            Ok(out) => write_out(&out),
            Err(e) => {
                set_error(error_code(&e), &e.to_string());
                0
            }
        }
    }

    /// Plain text for a paste event that only carried HTML.
    #[no_mangle]
    pub extern "C" fn clipboard_plain_text(html_ptr: u32, html_len: u32) -> u32 {
        let html = match read_utf8(html_ptr, html_len) {
            Ok(s) => s,
            Err(code) => return report_read_error(code, "html"),
        };
        let content = ClipboardContent {
            html: Some(html.to_string()),
            text: None,
        };
        write_out(&content.plain_text())
    }
}
