//! Adaptive content elements shared by tile and toast payloads
//!
//! These are the leaf and group nodes of the notification tree: text,
//! images, progress, and the group/subgroup column layout. Each type is a
//! validated property bag; every optional field has a documented default and
//! serialization omits the attribute whenever the value equals it.

pub mod group;
pub mod image;
pub mod progress;
pub mod subgroup;
pub mod text;

pub use group::AdaptiveGroup;
pub use image::AdaptiveImage;
pub use progress::{AdaptiveProgressBar, ProgressValue};
pub use subgroup::{AdaptiveSubgroup, SubgroupChild};
pub use text::AdaptiveText;

/// Text style applied by `hint-style`
///
/// `Default` defers to the renderer and emits no attribute.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum TextStyle {
    #[default]
    Default,
    Caption,
    CaptionSubtle,
    Body,
    BodySubtle,
    Base,
    BaseSubtle,
    Subtitle,
    SubtitleSubtle,
    Title,
    TitleSubtle,
    TitleNumeral,
    Subheader,
    SubheaderSubtle,
    SubheaderNumeral,
    Header,
    HeaderSubtle,
    HeaderNumeral,
}

impl TextStyle {
    /// The schema token for this value, or `None` for the default
    pub fn schema_str(self) -> Option<&'static str> {
        match self {
            Self::Default => None,
            Self::Caption => Some("caption"),
            Self::CaptionSubtle => Some("captionSubtle"),
            Self::Body => Some("body"),
            Self::BodySubtle => Some("bodySubtle"),
            Self::Base => Some("base"),
            Self::BaseSubtle => Some("baseSubtle"),
            Self::Subtitle => Some("subtitle"),
            Self::SubtitleSubtle => Some("subtitleSubtle"),
            Self::Title => Some("title"),
            Self::TitleSubtle => Some("titleSubtle"),
            Self::TitleNumeral => Some("titleNumeral"),
            Self::Subheader => Some("subheader"),
            Self::SubheaderSubtle => Some("subheaderSubtle"),
            Self::SubheaderNumeral => Some("subheaderNumeral"),
            Self::Header => Some("header"),
            Self::HeaderSubtle => Some("headerSubtle"),
            Self::HeaderNumeral => Some("headerNumeral"),
        }
    }
}

/// Horizontal text alignment applied by `hint-align`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum TextAlign {
    #[default]
    Default,
    Auto,
    Left,
    Center,
    Right,
}

impl TextAlign {
    /// The schema token for this value, or `None` for the default
    pub fn schema_str(self) -> Option<&'static str> {
        match self {
            Self::Default => None,
            Self::Auto => Some("auto"),
            Self::Left => Some("left"),
            Self::Center => Some("center"),
            Self::Right => Some("right"),
        }
    }
}

/// Where an image is placed within its binding
///
/// `Inline` is the schema default and emits no attribute.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ImagePlacement {
    #[default]
    Inline,
    Background,
    Peek,
}

impl ImagePlacement {
    /// The schema token for this value, or `None` for the default
    pub fn schema_str(self) -> Option<&'static str> {
        match self {
            Self::Inline => None,
            Self::Background => Some("background"),
            Self::Peek => Some("peek"),
        }
    }
}

/// Image cropping applied by `hint-crop`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ImageCrop {
    #[default]
    Default,
    None,
    Circle,
}

impl ImageCrop {
    /// The schema token for this value, or `None` for the default
    pub fn schema_str(self) -> Option<&'static str> {
        match self {
            Self::Default => None,
            Self::None => Some("none"),
            Self::Circle => Some("circle"),
        }
    }
}

/// Horizontal image alignment applied by `hint-align`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ImageAlign {
    #[default]
    Default,
    Stretch,
    Left,
    Center,
    Right,
}

impl ImageAlign {
    /// The schema token for this value, or `None` for the default
    pub fn schema_str(self) -> Option<&'static str> {
        match self {
            Self::Default => None,
            Self::Stretch => Some("stretch"),
            Self::Left => Some("left"),
            Self::Center => Some("center"),
            Self::Right => Some("right"),
        }
    }
}

/// Vertical stacking of text applied by `hint-textStacking`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum TextStacking {
    #[default]
    Default,
    Top,
    Center,
    Bottom,
}

impl TextStacking {
    /// The schema token for this value, or `None` for the default
    pub fn schema_str(self) -> Option<&'static str> {
        match self {
            Self::Default => None,
            Self::Top => Some("top"),
            Self::Center => Some("center"),
            Self::Bottom => Some("bottom"),
        }
    }
}
