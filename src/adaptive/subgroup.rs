//! Adaptive subgroup element

use crate::adaptive::{AdaptiveImage, AdaptiveText, TextStacking};
use crate::error::{Error, Result};
use crate::xml::node::{AttrValue, XmlDescendants, XmlNode};

/// The node kinds a subgroup may contain
///
/// A closed set: anything else is unrepresentable as a subgroup child.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum SubgroupChild {
    Text(AdaptiveText),
    Image(AdaptiveImage),
}

impl From<AdaptiveText> for SubgroupChild {
    fn from(value: AdaptiveText) -> Self {
        Self::Text(value)
    }
}

impl From<AdaptiveImage> for SubgroupChild {
    fn from(value: AdaptiveImage) -> Self {
        Self::Image(value)
    }
}

impl XmlNode for SubgroupChild {
    fn name(&self) -> &'static str {
        match self {
            Self::Text(text) => text.name(),
            Self::Image(image) => image.name(),
        }
    }

    fn attributes(&self) -> Vec<(&'static str, Option<AttrValue>)> {
        match self {
            Self::Text(text) => text.attributes(),
            Self::Image(image) => image.attributes(),
        }
    }

    fn text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => XmlNode::text(text),
            Self::Image(_) => None,
        }
    }
}

/// A `<subgroup>` element: one vertical column inside a group
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AdaptiveSubgroup {
    weight: Option<u32>,
    text_stacking: TextStacking,
    children: Vec<SubgroupChild>,
}

impl AdaptiveSubgroup {
    /// Create an empty subgroup
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the relative width weight of this column
    ///
    /// Fails with [`Error::OutOfRange`] if `weight` is zero; the stored
    /// value is left unchanged.
    pub fn set_weight(&mut self, weight: u32) -> Result<()> {
        if weight < 1 {
            return Err(Error::OutOfRange {
                field: "hint-weight",
                value: i64::from(weight),
                min: 1,
                max: i64::from(u32::MAX),
            });
        }
        self.weight = Some(weight);
        Ok(())
    }

    /// Set the vertical stacking of this column's content
    pub fn set_text_stacking(&mut self, stacking: TextStacking) {
        self.text_stacking = stacking;
    }

    /// Append a child, preserving insertion order
    pub fn add_child(&mut self, child: impl Into<SubgroupChild>) {
        self.children.push(child.into());
    }

    pub fn weight(&self) -> Option<u32> {
        self.weight
    }

    pub fn children(&self) -> &[SubgroupChild] {
        &self.children
    }
}

impl XmlNode for AdaptiveSubgroup {
    fn name(&self) -> &'static str {
        "subgroup"
    }

    fn attributes(&self) -> Vec<(&'static str, Option<AttrValue>)> {
        vec![
            ("hint-weight", self.weight.map(AttrValue::from)),
            (
                "hint-textStacking",
                self.text_stacking.schema_str().map(AttrValue::from),
            ),
        ]
    }

    fn children(&self) -> Vec<&dyn XmlNode> {
        self.children.iter().map(|c| c as &dyn XmlNode).collect()
    }
}

impl XmlDescendants for AdaptiveSubgroup {
    fn descendants(&self) -> Vec<&dyn XmlNode> {
        // Text and image leaves have no subtree of their own.
        self.children.iter().map(|c| c as &dyn XmlNode).collect()
    }
}
