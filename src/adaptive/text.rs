//! Adaptive text element

use crate::adaptive::{TextAlign, TextStyle};
use crate::error::{Error, Result};
use crate::xml::node::{AttrValue, XmlNode};

/// A `<text>` element: one line (or wrapped block) of adaptive text
///
/// Attribute order follows the schema: `lang`, `hint-style`, `hint-wrap`,
/// `hint-maxLines`, `hint-minLines`, `hint-align`. The text itself is the
/// element's content.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AdaptiveText {
    text: Option<String>,
    lang: Option<String>,
    style: TextStyle,
    wrap: Option<bool>,
    max_lines: Option<u32>,
    min_lines: Option<u32>,
    align: TextAlign,
}

impl AdaptiveText {
    /// Create a text element with the given content
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::default()
        }
    }

    /// Set the text content
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = Some(text.into());
    }

    /// Set the BCP-47 language tag
    pub fn set_lang(&mut self, lang: impl Into<String>) {
        self.lang = Some(lang.into());
    }

    /// Set the text style
    pub fn set_style(&mut self, style: TextStyle) {
        self.style = style;
    }

    /// Set whether the text wraps onto additional lines
    pub fn set_wrap(&mut self, wrap: bool) {
        self.wrap = Some(wrap);
    }

    /// Set the maximum number of lines shown
    ///
    /// Fails with [`Error::OutOfRange`] if `lines` is zero; the stored value
    /// is left unchanged.
    pub fn set_max_lines(&mut self, lines: u32) -> Result<()> {
        if lines < 1 {
            return Err(Error::OutOfRange {
                field: "hint-maxLines",
                value: i64::from(lines),
                min: 1,
                max: i64::from(u32::MAX),
            });
        }
        self.max_lines = Some(lines);
        Ok(())
    }

    /// Set the minimum number of lines shown
    ///
    /// Fails with [`Error::OutOfRange`] if `lines` is zero; the stored value
    /// is left unchanged.
    pub fn set_min_lines(&mut self, lines: u32) -> Result<()> {
        if lines < 1 {
            return Err(Error::OutOfRange {
                field: "hint-minLines",
                value: i64::from(lines),
                min: 1,
                max: i64::from(u32::MAX),
            });
        }
        self.min_lines = Some(lines);
        Ok(())
    }

    /// Set the horizontal alignment
    pub fn set_align(&mut self, align: TextAlign) {
        self.align = align;
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn style(&self) -> TextStyle {
        self.style
    }

    pub fn max_lines(&self) -> Option<u32> {
        self.max_lines
    }

    pub fn min_lines(&self) -> Option<u32> {
        self.min_lines
    }

    pub fn align(&self) -> TextAlign {
        self.align
    }
}

impl XmlNode for AdaptiveText {
    fn name(&self) -> &'static str {
        "text"
    }

    fn attributes(&self) -> Vec<(&'static str, Option<AttrValue>)> {
        vec![
            ("lang", self.lang.as_ref().map(AttrValue::from)),
            ("hint-style", self.style.schema_str().map(AttrValue::from)),
            ("hint-wrap", self.wrap.map(AttrValue::from)),
            ("hint-maxLines", self.max_lines.map(AttrValue::from)),
            ("hint-minLines", self.min_lines.map(AttrValue::from)),
            ("hint-align", self.align.schema_str().map(AttrValue::from)),
        ]
    }

    fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }
}
