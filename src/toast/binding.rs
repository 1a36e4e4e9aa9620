//! Toast binding element

use crate::adaptive::{AdaptiveGroup, AdaptiveImage, AdaptiveProgressBar, AdaptiveText};
use crate::xml::node::{AttrValue, XmlDescendants, XmlNode};

/// The node kinds a toast binding may contain
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ToastBindingChild {
    Text(AdaptiveText),
    Image(AdaptiveImage),
    Group(AdaptiveGroup),
    Progress(AdaptiveProgressBar),
}

impl From<AdaptiveText> for ToastBindingChild {
    fn from(value: AdaptiveText) -> Self {
        Self::Text(value)
    }
}

impl From<AdaptiveImage> for ToastBindingChild {
    fn from(value: AdaptiveImage) -> Self {
        Self::Image(value)
    }
}

impl From<AdaptiveGroup> for ToastBindingChild {
    fn from(value: AdaptiveGroup) -> Self {
        Self::Group(value)
    }
}

impl From<AdaptiveProgressBar> for ToastBindingChild {
    fn from(value: AdaptiveProgressBar) -> Self {
        Self::Progress(value)
    }
}

impl XmlNode for ToastBindingChild {
    fn name(&self) -> &'static str {
        match self {
            Self::Text(text) => text.name(),
            Self::Image(image) => image.name(),
            Self::Group(group) => group.name(),
            Self::Progress(progress) => progress.name(),
        }
    }

    fn attributes(&self) -> Vec<(&'static str, Option<AttrValue>)> {
        match self {
            Self::Text(text) => text.attributes(),
            Self::Image(image) => image.attributes(),
            Self::Group(group) => group.attributes(),
            Self::Progress(progress) => progress.attributes(),
        }
    }

    fn children(&self) -> Vec<&dyn XmlNode> {
        match self {
            Self::Group(group) => XmlNode::children(group),
            Self::Text(_) | Self::Image(_) | Self::Progress(_) => Vec::new(),
        }
    }

    fn text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => XmlNode::text(text),
            Self::Image(_) | Self::Group(_) | Self::Progress(_) => None,
        }
    }
}

/// The `ToastGeneric` `<binding>` element
///
/// Attribute order follows the schema: `template`, `lang`, `baseUri`,
/// `addImageQuery`.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ToastBinding {
    lang: Option<String>,
    base_uri: Option<String>,
    add_image_query: Option<bool>,
    children: Vec<ToastBindingChild>,
}

impl ToastBinding {
    /// Create an empty `ToastGeneric` binding
    ///
    /// The adaptive schema defines a single toast template, so the
    /// `template` attribute is fixed rather than caller-chosen.
    pub fn generic() -> Self {
        Self::default()
    }

    /// Set the BCP-47 language tag
    pub fn set_lang(&mut self, lang: impl Into<String>) {
        self.lang = Some(lang.into());
    }

    /// Set the base URI prepended to relative image sources
    pub fn set_base_uri(&mut self, uri: impl Into<String>) {
        self.base_uri = Some(uri.into());
    }

    /// Set whether the OS appends a query string to image URIs
    pub fn set_add_image_query(&mut self, add: bool) {
        self.add_image_query = Some(add);
    }

    /// Append a child, preserving insertion order
    pub fn add_child(&mut self, child: impl Into<ToastBindingChild>) {
        self.children.push(child.into());
    }

    pub fn children(&self) -> &[ToastBindingChild] {
        &self.children
    }
}

impl XmlNode for ToastBinding {
    fn name(&self) -> &'static str {
        "binding"
    }

    fn attributes(&self) -> Vec<(&'static str, Option<AttrValue>)> {
        vec![
            ("template", Some(AttrValue::from("ToastGeneric"))),
            ("lang", self.lang.as_ref().map(AttrValue::from)),
            ("baseUri", self.base_uri.as_ref().map(AttrValue::from)),
            ("addImageQuery", self.add_image_query.map(AttrValue::from)),
        ]
    }

    fn children(&self) -> Vec<&dyn XmlNode> {
        self.children.iter().map(|c| c as &dyn XmlNode).collect()
    }
}

impl XmlDescendants for ToastBinding {
    fn descendants(&self) -> Vec<&dyn XmlNode> {
        let mut nodes: Vec<&dyn XmlNode> = Vec::new();
        for child in &self.children {
            nodes.push(child);
            if let ToastBindingChild::Group(group) = child {
                nodes.extend(group.descendants());
            }
        }
        nodes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xml::to_xml;

    #[test]
    fn test_template_is_fixed() {
        assert_eq!(
            to_xml(&ToastBinding::generic()),
            r#"<binding template="ToastGeneric"/>"#
        );
    }

    #[test]
    fn test_progress_is_a_valid_child() {
        let mut binding = ToastBinding::generic();
        binding.add_child(AdaptiveText::new("Backup"));
        let mut bar = AdaptiveProgressBar::new();
        bar.set_indeterminate();
        binding.add_child(bar);
        assert_eq!(
            to_xml(&binding),
            r#"<binding template="ToastGeneric"><text>Backup</text><progress value="indeterminate"/></binding>"#
        );
    }
}
