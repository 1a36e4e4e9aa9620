//! Toast visual element

use crate::toast::ToastBinding;
use crate::xml::node::{AttrValue, XmlNode};

/// A `<visual>` element wrapping the toast's bindings
///
/// Attribute order follows the schema: `lang`, `baseUri`, `addImageQuery`.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ToastVisual {
    lang: Option<String>,
    base_uri: Option<String>,
    add_image_query: Option<bool>,
    bindings: Vec<ToastBinding>,
}

impl ToastVisual {
    /// Create an empty visual
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the BCP-47 language tag inherited by all bindings
    pub fn set_lang(&mut self, lang: impl Into<String>) {
        self.lang = Some(lang.into());
    }

    /// Set the base URI inherited by all bindings
    pub fn set_base_uri(&mut self, uri: impl Into<String>) {
        self.base_uri = Some(uri.into());
    }

    /// Set whether the OS appends a query string to image URIs
    pub fn set_add_image_query(&mut self, add: bool) {
        self.add_image_query = Some(add);
    }

    /// Append a binding, preserving insertion order
    pub fn add_binding(&mut self, binding: ToastBinding) {
        self.bindings.push(binding);
    }

    pub fn bindings(&self) -> &[ToastBinding] {
        &self.bindings
    }
}

impl XmlNode for ToastVisual {
    fn name(&self) -> &'static str {
        "visual"
    }

    fn attributes(&self) -> Vec<(&'static str, Option<AttrValue>)> {
        vec![
            ("lang", self.lang.as_ref().map(AttrValue::from)),
            ("baseUri", self.base_uri.as_ref().map(AttrValue::from)),
            ("addImageQuery", self.add_image_query.map(AttrValue::from)),
        ]
    }

    fn children(&self) -> Vec<&dyn XmlNode> {
        self.bindings.iter().map(|b| b as &dyn XmlNode).collect()
    }
}
