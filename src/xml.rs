//! XML capability traits and generic writer

pub mod node;
pub mod writer;

pub use node::{AttrValue, XmlDescendants, XmlNode};
pub use writer::to_xml;
