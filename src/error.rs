//! Error types for the converter.
//!
//! Markdown that the parser does not understand is never an error; it comes
//! out as literal text. What can fail is a style edit that is out of range,
//! a style set decoded from JSON, and the clipboard write.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Clipboard(#[from] ClipboardError),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Style edits refused at the input boundary.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Font size must be between 0 and 1638 pt, got {value}")]
    InvalidFontSize { value: f64 },

    #[error("Margin must be between 0 and 1584 pt, got {value}")]
    InvalidMargin { value: f64 },

    #[error("Not a number: {input:?}")]
    NotANumber { input: String },

    #[error("{category}: {source}")]
    InCategory {
        category: &'static str,
        #[source]
        source: Box<ConfigError>,
    },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    /// The platform clipboard could not be opened at all.
    #[error("Could not access clipboard: {0}")]
    Unavailable(String),

    #[error("Could not write to clipboard: {0}")]
    Write(String),

    #[error("Could not read from clipboard: {0}")]
    Read(String),
}

impl ClipboardError {
    /// Text for the failure notice shown to the user.
    pub fn user_message(&self) -> String {
        match self {
            ClipboardError::Unavailable(_) => {
                "Could not access the clipboard. It may be blocked or unsupported here.".to_string()
            }
            ClipboardError::Write(_) => {
                "Copy failed. The clipboard was left unchanged.".to_string()
            }
            ClipboardError::Read(_) => "Could not read text from the clipboard.".to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_converts_into_error() {
        let err: Error = ConfigError::InvalidMargin { value: -1.0 }.into();
        assert!(matches!(err, Error::Config(_)));
        assert!(err.to_string().contains("-1"));
    }

    #[test]
    fn clipboard_user_message_is_not_raw() {
        let err = ClipboardError::Write("X11 server connection timed out".into());
        assert!(err.to_string().contains("X11"));
        assert!(!err.user_message().contains("X11"));
    }
}
