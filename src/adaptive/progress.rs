//! Adaptive progress bar element (toast bindings only)

use crate::error::{Error, Result};
use crate::xml::node::{AttrValue, XmlNode};

/// Value of a progress bar: a fraction of the unit interval or an
/// indeterminate animation
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ProgressValue {
    Indeterminate,
    Fraction(f64),
}

impl ProgressValue {
    fn to_attr(self) -> AttrValue {
        match self {
            Self::Indeterminate => AttrValue::from("indeterminate"),
            Self::Fraction(value) => AttrValue::from(value),
        }
    }
}

/// A `<progress>` element
///
/// Attribute order follows the schema: `title`, `status`, `value`,
/// `valueStringOverride`.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AdaptiveProgressBar {
    title: Option<String>,
    status: Option<String>,
    value: Option<ProgressValue>,
    value_string_override: Option<String>,
}

impl AdaptiveProgressBar {
    /// Create an empty progress bar
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the title shown above the bar
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = Some(title.into());
    }

    /// Set the status text shown below the bar
    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = Some(status.into());
    }

    /// Set a determinate value as a fraction of completion
    ///
    /// Fails with [`Error::ProgressOutOfRange`] if `value` is not a finite
    /// number within `0.0..=1.0`; the stored value is left unchanged.
    pub fn set_value(&mut self, value: f64) -> Result<()> {
        if !value.is_finite() || !(0.0..=1.0).contains(&value) {
            return Err(Error::ProgressOutOfRange { value });
        }
        self.value = Some(ProgressValue::Fraction(value));
        Ok(())
    }

    /// Switch the bar to the indeterminate animation
    pub fn set_indeterminate(&mut self) {
        self.value = Some(ProgressValue::Indeterminate);
    }

    /// Set text replacing the default percentage string
    pub fn set_value_string_override(&mut self, text: impl Into<String>) {
        self.value_string_override = Some(text.into());
    }

    pub fn value(&self) -> Option<ProgressValue> {
        self.value
    }
}

impl XmlNode for AdaptiveProgressBar {
    fn name(&self) -> &'static str {
        "progress"
    }

    fn attributes(&self) -> Vec<(&'static str, Option<AttrValue>)> {
        vec![
            ("title", self.title.as_ref().map(AttrValue::from)),
            ("status", self.status.as_ref().map(AttrValue::from)),
            ("value", self.value.map(ProgressValue::to_attr)),
            (
                "valueStringOverride",
                self.value_string_override.as_ref().map(AttrValue::from),
            ),
        ]
    }
}
