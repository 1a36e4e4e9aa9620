//! Tile visual element

use crate::tile::{TileBinding, TileBranding};
use crate::xml::node::{AttrValue, XmlNode};

/// A `<visual>` element: the set of per-size bindings plus shared defaults
///
/// Attribute order follows the schema: `lang`, `baseUri`, `branding`,
/// `addImageQuery`, `displayName`, `contentId`, `arguments`.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TileVisual {
    lang: Option<String>,
    base_uri: Option<String>,
    branding: TileBranding,
    add_image_query: Option<bool>,
    display_name: Option<String>,
    content_id: Option<String>,
    arguments: Option<String>,
    bindings: Vec<TileBinding>,
}

impl TileVisual {
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

    /// Set the branding inherited by all bindings
    pub fn set_branding(&mut self, branding: TileBranding) {
        self.branding = branding;
    }

    /// Set whether the OS appends a query string to image URIs
    pub fn set_add_image_query(&mut self, add: bool) {
        self.add_image_query = Some(add);
    }

    /// Set the display name inherited by all bindings
    pub fn set_display_name(&mut self, name: impl Into<String>) {
        self.display_name = Some(name.into());
    }

    /// Set the content id used for notification cycling
    pub fn set_content_id(&mut self, id: impl Into<String>) {
        self.content_id = Some(id.into());
    }

    /// Set the arguments passed back on chaseable-tile activation
    pub fn set_arguments(&mut self, arguments: impl Into<String>) {
        self.arguments = Some(arguments.into());
    }

    /// Append a per-size binding, preserving insertion order
    pub fn add_binding(&mut self, binding: TileBinding) {
        self.bindings.push(binding);
    }

    pub fn branding(&self) -> TileBranding {
        self.branding
    }

    pub fn bindings(&self) -> &[TileBinding] {
        &self.bindings
    }
}

impl XmlNode for TileVisual {
    fn name(&self) -> &'static str {
        "visual"
    }

    fn attributes(&self) -> Vec<(&'static str, Option<AttrValue>)> {
        vec![
            ("lang", self.lang.as_ref().map(AttrValue::from)),
            ("baseUri", self.base_uri.as_ref().map(AttrValue::from)),
            ("branding", self.branding.schema_str().map(AttrValue::from)),
            ("addImageQuery", self.add_image_query.map(AttrValue::from)),
            ("displayName", self.display_name.as_ref().map(AttrValue::from)),
            ("contentId", self.content_id.as_ref().map(AttrValue::from)),
            ("arguments", self.arguments.as_ref().map(AttrValue::from)),
        ]
    }

    fn children(&self) -> Vec<&dyn XmlNode> {
        self.bindings.iter().map(|b| b as &dyn XmlNode).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tile::TileTemplate;
    use crate::xml::to_xml;

    #[test]
    fn test_default_visual_is_minimal() {
        assert_eq!(to_xml(&TileVisual::new()), "<visual/>");
    }

    #[test]
    fn test_bindings_keep_insertion_order() {
        let mut visual = TileVisual::new();
        visual.add_binding(TileBinding::new(TileTemplate::TileWide));
        visual.add_binding(TileBinding::new(TileTemplate::TileMedium));
        assert_eq!(
            to_xml(&visual),
            r#"<visual><binding template="TileWide"/><binding template="TileMedium"/></visual>"#
        );
    }

    #[test]
    fn test_visual_attributes() {
        let mut visual = TileVisual::new();
        visual.set_lang("en-US");
        visual.set_branding(TileBranding::NameAndLogo);
        visual.set_display_name("Forecast");
        assert_eq!(
            to_xml(&visual),
            r#"<visual lang="en-US" branding="nameAndLogo" displayName="Forecast"/>"#
        );
    }
}
