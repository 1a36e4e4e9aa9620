//! Tile notification composites
//!
//! A tile payload is `<tile>` wrapping one `<visual>` wrapping one
//! `<binding>` per tile size.

pub mod binding;
pub mod visual;

pub use binding::{TileBinding, TileBindingChild};
pub use visual::TileVisual;

use crate::xml::node::{AttrValue, XmlNode};
use crate::xml::to_xml;

/// Tile size template named by the `template` attribute
///
/// Template names are the one PascalCase corner of the schema.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum TileTemplate {
    TileSmall,
    TileMedium,
    TileWide,
    TileLarge,
}

impl TileTemplate {
    /// The schema token for this template
    pub fn schema_str(self) -> &'static str {
        match self {
            Self::TileSmall => "TileSmall",
            Self::TileMedium => "TileMedium",
            Self::TileWide => "TileWide",
            Self::TileLarge => "TileLarge",
        }
    }
}

/// Branding shown in the tile's lower corner
///
/// `Auto` is the schema default and emits no attribute.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum TileBranding {
    #[default]
    Auto,
    None,
    Name,
    Logo,
    NameAndLogo,
}

impl TileBranding {
    /// The schema token for this value, or `None` for the default
    pub fn schema_str(self) -> Option<&'static str> {
        match self {
            Self::Auto => None,
            Self::None => Some("none"),
            Self::Name => Some("name"),
            Self::Logo => Some("logo"),
            Self::NameAndLogo => Some("nameAndLogo"),
        }
    }
}

/// The `<tile>` root element
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Tile {
    visual: TileVisual,
}

impl Tile {
    /// Create a tile wrapping the given visual
    pub fn new(visual: TileVisual) -> Self {
        Self { visual }
    }

    pub fn visual(&self) -> &TileVisual {
        &self.visual
    }

    pub fn visual_mut(&mut self) -> &mut TileVisual {
        &mut self.visual
    }

    /// Serialize the whole payload to notification XML
    pub fn to_xml(&self) -> String {
        to_xml(self)
    }
}

impl XmlNode for Tile {
    fn name(&self) -> &'static str {
        "tile"
    }

    fn attributes(&self) -> Vec<(&'static str, Option<AttrValue>)> {
        Vec::new()
    }

    fn children(&self) -> Vec<&dyn XmlNode> {
        vec![&self.visual]
    }
}
