//! notixml - Adaptive tile/toast notification XML builder
//!
//! Builds the object graph behind Windows adaptive tile and toast
//! notifications and serializes it to the minimal XML the OS notification
//! pipeline consumes. Constrained properties are validated at set time, so
//! a graph can never hold an out-of-range value; serialization omits every
//! attribute that equals its documented default.
//!
//! # Quick Start
//!
//! ```
//! use notixml::adaptive::AdaptiveText;
//! use notixml::tile::{Tile, TileBinding, TileTemplate, TileVisual};
//!
//! # fn main() -> Result<(), notixml::Error> {
//! let mut text = AdaptiveText::new("Partly cloudy");
//! text.set_max_lines(2)?;
//!
//! let mut binding = TileBinding::new(TileTemplate::TileMedium);
//! binding.add_child(text);
//!
//! let mut visual = TileVisual::new();
//! visual.add_binding(binding);
//!
//! let xml = Tile::new(visual).to_xml();
//! assert_eq!(
//!     xml,
//!     "<tile><visual><binding template=\"TileMedium\">\
//!      <text hint-maxLines=\"2\">Partly cloudy</text></binding></visual></tile>"
//! );
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub use error::{Error, Result};

pub mod xml;
pub use xml::{to_xml, AttrValue, XmlDescendants, XmlNode};

pub mod adaptive;
pub use adaptive::{
    AdaptiveGroup, AdaptiveImage, AdaptiveProgressBar, AdaptiveSubgroup, AdaptiveText,
};

pub mod tile;
pub use tile::{Tile, TileBinding, TileBranding, TileTemplate, TileVisual};

pub mod toast;
pub use toast::{Toast, ToastBinding, ToastDuration, ToastScenario, ToastVisual};
