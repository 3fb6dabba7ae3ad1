//! Per-category typography settings.
//!
//! A [`StyleConfigSet`] always carries all four categories. It is changed one
//! field at a time through [`StyleConfigSet::apply_edit`], which is also where
//! out-of-range numbers are refused; the style pass itself trusts whatever it
//! is handed.

use crate::error::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};

/// Largest font size Word accepts, in points.
pub const MAX_FONT_SIZE_PT: f64 = 1638.0;

/// Largest paragraph spacing Word accepts, in points.
pub const MAX_MARGIN_PT: f64 = 1584.0;

/// Sizes offered in the picker. Any other positive value may still be typed in.
pub const FONT_SIZE_OPTIONS: [f64; 9] = [10.0, 12.0, 14.0, 16.0, 18.0, 20.0, 24.0, 28.0, 32.0];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StyleCategory {
    Heading1,
    Heading2,
    Heading3,
    Body,
}

impl StyleCategory {
    pub const ALL: [StyleCategory; 4] = [
        StyleCategory::Heading1,
        StyleCategory::Heading2,
        StyleCategory::Heading3,
        StyleCategory::Body,
    ];

    pub fn label(self) -> &'static str {
        match self {
            StyleCategory::Heading1 => "Heading 1",
            StyleCategory::Heading2 => "Heading 2",
            StyleCategory::Heading3 => "Heading 3",
            StyleCategory::Body => "Body text",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FontFamily {
    #[default]
    Arial,
    TimesNewRoman,
    /// CJK sans-serif.
    MicrosoftYaHei,
    /// CJK serif.
    SimSun,
    /// CJK heavy sans-serif.
    SimHei,
}

impl FontFamily {
    /// Picker order; the first entry is the default.
    pub const ALL: [FontFamily; 5] = [
        FontFamily::Arial,
        FontFamily::TimesNewRoman,
        FontFamily::MicrosoftYaHei,
        FontFamily::SimSun,
        FontFamily::SimHei,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FontFamily::Arial => "Arial",
            FontFamily::TimesNewRoman => "Times New Roman",
            FontFamily::MicrosoftYaHei => "微软雅黑",
            FontFamily::SimSun => "宋体",
            FontFamily::SimHei => "黑体",
        }
    }

    /// CSS `font-family` value. Single quotes keep the value readable once it
    /// sits inside a double-quoted `style` attribute.
    pub fn css_stack(self) -> &'static str {
        match self {
            FontFamily::Arial => "Arial, sans-serif",
            FontFamily::TimesNewRoman => "'Times New Roman', serif",
            FontFamily::MicrosoftYaHei => "'Microsoft YaHei', '微软雅黑', sans-serif",
            FontFamily::SimSun => "SimSun, '宋体', serif",
            FontFamily::SimHei => "SimHei, '黑体', sans-serif",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleConfig {
    pub font_family: FontFamily,
    /// Points.
    pub font_size: f64,
    pub bold: bool,
    /// Space above the block, in points.
    pub margin_before: f64,
    /// Space below the block, in points.
    pub margin_after: f64,
}

impl StyleConfig {
    fn new(font_size: f64, bold: bool, margin: f64) -> Self {
        StyleConfig {
            font_family: FontFamily::default(),
            font_size,
            bold,
            margin_before: margin,
            margin_after: margin,
        }
    }

    /// Inline CSS written onto every element of this category. Every property
    /// is always present.
    pub fn css_declaration(&self) -> String {
        format!(
            "font-family: {}; font-size: {}pt; font-weight: {}; margin-top: {}pt; margin-bottom: {}pt;",
            self.font_family.css_stack(),
            self.font_size,
            if self.bold { "bold" } else { "normal" },
            self.margin_before + 0.0,
            self.margin_after + 0.0,
        )
    }

    fn validate(&self) -> ConfigResult<()> {
        check_font_size(self.font_size)?;
        check_margin(self.margin_before)?;
        check_margin(self.margin_after)
    }
}

/// One field change for one category.
#[derive(Clone, Debug, PartialEq)]
pub enum StyleEdit {
    FontFamily(FontFamily),
    FontSize(f64),
    Bold(bool),
    MarginBefore(f64),
    MarginAfter(f64),
}

impl StyleEdit {
    /// Free-entry font size as typed by the user.
    pub fn font_size_entry(raw: &str) -> ConfigResult<Self> {
        let value = parse_points(raw)?;
        check_font_size(value)?;
        Ok(StyleEdit::FontSize(value))
    }

    pub fn margin_before_entry(raw: &str) -> ConfigResult<Self> {
        let value = parse_points(raw)?;
        check_margin(value)?;
        Ok(StyleEdit::MarginBefore(value + 0.0))
    }

    pub fn margin_after_entry(raw: &str) -> ConfigResult<Self> {
        let value = parse_points(raw)?;
        check_margin(value)?;
        Ok(StyleEdit::MarginAfter(value + 0.0))
    }
}

fn parse_points(raw: &str) -> ConfigResult<f64> {
    let t = raw.trim();
    let t = t.strip_suffix("pt").unwrap_or(t).trim_end();
    t.parse::<f64>().map_err(|_| ConfigError::NotANumber {
        input: raw.to_string(),
    })
}

fn check_font_size(value: f64) -> ConfigResult<()> {
    if value.is_finite() && value > 0.0 && value <= MAX_FONT_SIZE_PT {
        Ok(())
    } else {
        Err(ConfigError::InvalidFontSize { value })
    }
}

fn check_margin(value: f64) -> ConfigResult<()> {
    if value.is_finite() && (0.0..=MAX_MARGIN_PT).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::InvalidMargin { value })
    }
}

/// One [`StyleConfig`] per [`StyleCategory`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleConfigSet {
    pub heading1: StyleConfig,
    pub heading2: StyleConfig,
    pub heading3: StyleConfig,
    pub body: StyleConfig,
}

impl Default for StyleConfigSet {
    fn default() -> Self {
        StyleConfigSet {
            heading1: StyleConfig::new(28.0, true, 16.0),
            heading2: StyleConfig::new(22.0, true, 12.0),
            heading3: StyleConfig::new(18.0, true, 8.0),
            body: StyleConfig::new(16.0, false, 4.0),
        }
    }
}

impl StyleConfigSet {
    pub fn get(&self, category: StyleCategory) -> &StyleConfig {
        match category {
            StyleCategory::Heading1 => &self.heading1,
            StyleCategory::Heading2 => &self.heading2,
            StyleCategory::Heading3 => &self.heading3,
            StyleCategory::Body => &self.body,
        }
    }

    fn get_mut(&mut self, category: StyleCategory) -> &mut StyleConfig {
        match category {
            StyleCategory::Heading1 => &mut self.heading1,
            StyleCategory::Heading2 => &mut self.heading2,
            StyleCategory::Heading3 => &mut self.heading3,
            StyleCategory::Body => &mut self.body,
        }
    }

    /// Applies a single field change. A refused edit leaves the set as it was.
    pub fn apply_edit(&mut self, category: StyleCategory, edit: StyleEdit) -> ConfigResult<()> {
        match &edit {
            StyleEdit::FontSize(v) => check_font_size(*v)?,
            StyleEdit::MarginBefore(v) | StyleEdit::MarginAfter(v) => check_margin(*v)?,
            StyleEdit::FontFamily(_) | StyleEdit::Bold(_) => {}
        }
        let style = self.get_mut(category);
        match edit {
            StyleEdit::FontFamily(f) => style.font_family = f,
            StyleEdit::FontSize(v) => style.font_size = v,
            StyleEdit::Bold(b) => style.bold = b,
            // -0.0 passes the range check; store it as 0
            StyleEdit::MarginBefore(v) => style.margin_before = v + 0.0,
            StyleEdit::MarginAfter(v) => style.margin_after = v + 0.0,
        }
        Ok(())
    }

    pub fn reset(&mut self) {
        *self = StyleConfigSet::default();
    }

    /// Checks every category; used for sets that arrive from outside (JSON).
    pub fn validate(&self) -> ConfigResult<()> {
        for category in StyleCategory::ALL {
            self.get(category)
                .validate()
                .map_err(|e| ConfigError::InCategory {
                    category: category.label(),
                    source: Box::new(e),
                })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let s = StyleConfigSet::default();
        let expect = [
            (StyleCategory::Heading1, 28.0, true, 16.0),
            (StyleCategory::Heading2, 22.0, true, 12.0),
            (StyleCategory::Heading3, 18.0, true, 8.0),
            (StyleCategory::Body, 16.0, false, 4.0),
        ];
        for (cat, size, bold, margin) in expect {
            let c = s.get(cat);
            assert_eq!(c.font_family, FontFamily::ALL[0]);
            assert_eq!(c.font_size, size);
            assert_eq!(c.bold, bold);
            assert_eq!(c.margin_before, margin);
            assert_eq!(c.margin_after, margin);
        }
    }

    #[test]
    fn reset_restores_defaults_after_edits() {
        let mut s = StyleConfigSet::default();
        s.apply_edit(StyleCategory::Heading1, StyleEdit::FontSize(40.0))
            .unwrap();
        s.apply_edit(StyleCategory::Body, StyleEdit::Bold(true)).unwrap();
        s.apply_edit(StyleCategory::Heading3, StyleEdit::FontFamily(FontFamily::SimSun))
            .unwrap();
        s.apply_edit(StyleCategory::Heading2, StyleEdit::MarginAfter(0.0))
            .unwrap();
        assert_ne!(s, StyleConfigSet::default());
        s.reset();
        assert_eq!(s, StyleConfigSet::default());
    }

    #[test]
    fn edit_touches_only_one_field() {
        let mut s = StyleConfigSet::default();
        s.apply_edit(StyleCategory::Heading2, StyleEdit::MarginBefore(3.5))
            .unwrap();
        let mut expect = StyleConfigSet::default();
        expect.heading2.margin_before = 3.5;
        assert_eq!(s, expect);
    }

    #[test]
    fn refuses_out_of_range_numbers() {
        let mut s = StyleConfigSet::default();
        for edit in [
            StyleEdit::MarginBefore(-1.0),
            StyleEdit::MarginAfter(f64::NAN),
            StyleEdit::MarginAfter(MAX_MARGIN_PT + 1.0),
            StyleEdit::FontSize(0.0),
            StyleEdit::FontSize(-12.0),
            StyleEdit::FontSize(f64::INFINITY),
            StyleEdit::FontSize(MAX_FONT_SIZE_PT + 0.5),
        ] {
            assert!(s.apply_edit(StyleCategory::Body, edit).is_err());
        }
        assert_eq!(s, StyleConfigSet::default());
    }

    #[test]
    fn free_entry_parses_points() {
        assert_eq!(
            StyleEdit::font_size_entry(" 10.5 ").unwrap(),
            StyleEdit::FontSize(10.5)
        );
        assert_eq!(
            StyleEdit::font_size_entry("72pt").unwrap(),
            StyleEdit::FontSize(72.0)
        );
        assert_eq!(
            StyleEdit::margin_after_entry("0").unwrap(),
            StyleEdit::MarginAfter(0.0)
        );
        assert!(matches!(
            StyleEdit::font_size_entry("big"),
            Err(ConfigError::NotANumber { .. })
        ));
        assert!(matches!(
            StyleEdit::margin_before_entry("-2"),
            Err(ConfigError::InvalidMargin { .. })
        ));
    }

    #[test]
    fn css_declaration_writes_every_property() {
        let s = StyleConfigSet::default();
        assert_eq!(
            s.heading1.css_declaration(),
            "font-family: Arial, sans-serif; font-size: 28pt; font-weight: bold; margin-top: 16pt; margin-bottom: 16pt;"
        );
        let mut body = s.body.clone();
        body.font_family = FontFamily::TimesNewRoman;
        body.font_size = 10.5;
        assert_eq!(
            body.css_declaration(),
            "font-family: 'Times New Roman', serif; font-size: 10.5pt; font-weight: normal; margin-top: 4pt; margin-bottom: 4pt;"
        );
    }

    #[test]
    fn negative_zero_margin_is_written_as_zero() {
        let mut s = StyleConfigSet::default();
        s.apply_edit(StyleCategory::Body, StyleEdit::MarginBefore(-0.0))
            .unwrap();
        assert!(s.body.margin_before.is_sign_positive());

        let edit = StyleEdit::margin_after_entry("-0").unwrap();
        s.apply_edit(StyleCategory::Body, edit).unwrap();
        let css = s.body.css_declaration();
        assert!(css.contains("margin-top: 0pt;"));
        assert!(css.contains("margin-bottom: 0pt;"));
        assert!(!css.contains("-0pt"));
    }

    #[test]
    fn negative_zero_from_outside_is_still_written_as_zero() {
        let mut s = StyleConfigSet::default();
        s.heading1.margin_after = -0.0;
        assert!(s.validate().is_ok());
        assert!(s.heading1.css_declaration().ends_with("margin-bottom: 0pt;"));
    }

    #[test]
    fn validate_names_the_offending_category() {
        let mut s = StyleConfigSet::default();
        s.heading3.font_size = -1.0;
        let err = s.validate().unwrap_err();
        assert!(err.to_string().contains("Heading 3"));
    }
}
