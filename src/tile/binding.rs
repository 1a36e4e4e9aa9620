//! Tile binding element

use crate::adaptive::{AdaptiveGroup, AdaptiveImage, AdaptiveText, TextStacking};
use crate::error::{Error, Result};
use crate::tile::{TileBranding, TileTemplate};
use crate::xml::node::{AttrValue, XmlDescendants, XmlNode};

/// The node kinds a tile binding may contain
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum TileBindingChild {
    Text(AdaptiveText),
    Image(AdaptiveImage),
    Group(AdaptiveGroup),
}

impl From<AdaptiveText> for TileBindingChild {
    fn from(value: AdaptiveText) -> Self {
        Self::Text(value)
    }
}

impl From<AdaptiveImage> for TileBindingChild {
    fn from(value: AdaptiveImage) -> Self {
        Self::Image(value)
    }
}

impl From<AdaptiveGroup> for TileBindingChild {
    fn from(value: AdaptiveGroup) -> Self {
        Self::Group(value)
    }
}

impl XmlNode for TileBindingChild {
    fn name(&self) -> &'static str {
        match self {
            Self::Text(text) => text.name(),
            Self::Image(image) => image.name(),
            Self::Group(group) => group.name(),
        }
    }

    fn attributes(&self) -> Vec<(&'static str, Option<AttrValue>)> {
        match self {
            Self::Text(text) => text.attributes(),
            Self::Image(image) => image.attributes(),
            Self::Group(group) => group.attributes(),
        }
    }

    fn children(&self) -> Vec<&dyn XmlNode> {
        match self {
            Self::Group(group) => XmlNode::children(group),
            Self::Text(_) | Self::Image(_) => Vec::new(),
        }
    }

    fn text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => XmlNode::text(text),
            Self::Image(_) | Self::Group(_) => None,
        }
    }
}

/// A `<binding>` element: the content for one tile size
///
/// Attribute order follows the schema: `template`, `fallback`, `lang`,
/// `baseUri`, `branding`, `addImageQuery`, `displayName`, `contentId`,
/// `arguments`, `hint-textStacking`, `hint-overlay`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TileBinding {
    template: TileTemplate,
    fallback: Option<String>,
    lang: Option<String>,
    base_uri: Option<String>,
    branding: TileBranding,
    add_image_query: Option<bool>,
    display_name: Option<String>,
    content_id: Option<String>,
    arguments: Option<String>,
    text_stacking: TextStacking,
    overlay: Option<u8>,
    children: Vec<TileBindingChild>,
}

impl TileBinding {
    /// Create an empty binding for the given tile size
    pub fn new(template: TileTemplate) -> Self {
        Self {
            template,
            fallback: None,
            lang: None,
            base_uri: None,
            branding: TileBranding::default(),
            add_image_query: None,
            display_name: None,
            content_id: None,
            arguments: None,
            text_stacking: TextStacking::default(),
            overlay: None,
            children: Vec::new(),
        }
    }

    /// Set the legacy template name used on systems without adaptive support
    pub fn set_fallback(&mut self, fallback: impl Into<String>) {
        self.fallback = Some(fallback.into());
    }

    /// Set the BCP-47 language tag
    pub fn set_lang(&mut self, lang: impl Into<String>) {
        self.lang = Some(lang.into());
    }

    /// Set the base URI prepended to relative image sources
    pub fn set_base_uri(&mut self, uri: impl Into<String>) {
        self.base_uri = Some(uri.into());
    }

    /// Set the branding shown on this size, overriding the visual's
    pub fn set_branding(&mut self, branding: TileBranding) {
        self.branding = branding;
    }

    /// Set whether the OS appends a query string to image URIs
    pub fn set_add_image_query(&mut self, add: bool) {
        self.add_image_query = Some(add);
    }

    /// Set the display name shown instead of the app name
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

    /// Set the vertical stacking of the binding's content
    pub fn set_text_stacking(&mut self, stacking: TextStacking) {
        self.text_stacking = stacking;
    }

    /// Set the black overlay percentage applied over the background image
    ///
    /// Fails with [`Error::OutOfRange`] if `overlay` exceeds 100; the stored
    /// value is left unchanged.
    pub fn set_overlay(&mut self, overlay: u8) -> Result<()> {
        if overlay > 100 {
            return Err(Error::OutOfRange {
                field: "hint-overlay",
                value: i64::from(overlay),
                min: 0,
                max: 100,
            });
        }
        self.overlay = Some(overlay);
        Ok(())
    }

    /// Append a child, preserving insertion order
    pub fn add_child(&mut self, child: impl Into<TileBindingChild>) {
        self.children.push(child.into());
    }

    pub fn template(&self) -> TileTemplate {
        self.template
    }

    pub fn branding(&self) -> TileBranding {
        self.branding
    }

    pub fn overlay(&self) -> Option<u8> {
        self.overlay
    }

    pub fn children(&self) -> &[TileBindingChild] {
        &self.children
    }
}

impl XmlNode for TileBinding {
    fn name(&self) -> &'static str {
        "binding"
    }

    fn attributes(&self) -> Vec<(&'static str, Option<AttrValue>)> {
        vec![
            ("template", Some(AttrValue::from(self.template.schema_str()))),
            ("fallback", self.fallback.as_ref().map(AttrValue::from)),
            ("lang", self.lang.as_ref().map(AttrValue::from)),
            ("baseUri", self.base_uri.as_ref().map(AttrValue::from)),
            ("branding", self.branding.schema_str().map(AttrValue::from)),
            ("addImageQuery", self.add_image_query.map(AttrValue::from)),
            ("displayName", self.display_name.as_ref().map(AttrValue::from)),
            ("contentId", self.content_id.as_ref().map(AttrValue::from)),
            ("arguments", self.arguments.as_ref().map(AttrValue::from)),
            (
                "hint-textStacking",
                self.text_stacking.schema_str().map(AttrValue::from),
            ),
            ("hint-overlay", self.overlay.map(AttrValue::from)),
        ]
    }

    fn children(&self) -> Vec<&dyn XmlNode> {
        self.children.iter().map(|c| c as &dyn XmlNode).collect()
    }
}

impl XmlDescendants for TileBinding {
    fn descendants(&self) -> Vec<&dyn XmlNode> {
        let mut nodes: Vec<&dyn XmlNode> = Vec::new();
        for child in &self.children {
            nodes.push(child);
            if let TileBindingChild::Group(group) = child {
                nodes.extend(group.descendants());
            }
        }
        nodes
    }
}
