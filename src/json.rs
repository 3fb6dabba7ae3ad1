use crate::error::Result;
use crate::pipeline::{markdown_to_payload, ClipboardPayload};
use crate::style::StyleConfigSet;

/// Decodes a style set and checks every value before it reaches the style pass.
/// An empty string means the defaults.
pub fn styles_from_json(s: &str) -> Result<StyleConfigSet> {
    if s.trim().is_empty() {
        return Ok(StyleConfigSet::default());
    }
    let styles: StyleConfigSet = serde_json::from_str(s)?;
    styles.validate()?;
    Ok(styles)
}

pub fn styles_to_json(styles: &StyleConfigSet) -> Result<String> {
    Ok(serde_json::to_string(styles)?)
}

pub fn payload_to_json(p: &ClipboardPayload) -> Result<String> {
    Ok(serde_json::to_string(p)?)
}

/// `{"html": ..., "text": ...}` for `md` rendered with the given style JSON.
pub fn markdown_to_payload_json(md: &str, styles_json: &str) -> Result<String> {
    let styles = styles_from_json(styles_json)?;
    payload_to_json(&markdown_to_payload(md, &styles))
}
