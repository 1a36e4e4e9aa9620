//! Capability contracts for serializable notification nodes

use std::fmt;

/// Canonical forms an attribute value can take
#[derive(Clone, Debug, PartialEq)]
pub enum AttrValue {
    String(String),
    Uint(u64),
    Float(f64),
    Bool(bool),
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => f.write_str(s),
            Self::Uint(n) => write!(f, "{n}"),
            Self::Float(n) => write!(f, "{n}"),
            Self::Bool(b) => f.write_str(if *b { "true" } else { "false" }),
        }
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&String> for AttrValue {
    fn from(value: &String) -> Self {
        Self::String(value.clone())
    }
}

impl From<u8> for AttrValue {
    fn from(value: u8) -> Self {
        Self::Uint(u64::from(value))
    }
}

impl From<u32> for AttrValue {
    fn from(value: u32) -> Self {
        Self::Uint(u64::from(value))
    }
}

impl From<u64> for AttrValue {
    fn from(value: u64) -> Self {
        Self::Uint(value)
    }
}

impl From<f64> for AttrValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// A serializable node in the notification content tree
///
/// The generic writer is driven entirely by this contract; node types never
/// emit XML themselves.
pub trait XmlNode {
    /// Fixed schema tag name for this node kind
    fn name(&self) -> &'static str;

    /// (attribute name, value) pairs in schema-defined order
    ///
    /// `None` values mark absent or default-valued attributes; the writer
    /// skips them. Each call produces a fresh sequence.
    fn attributes(&self) -> Vec<(&'static str, Option<AttrValue>)>;

    /// Ordered child nodes
    fn children(&self) -> Vec<&dyn XmlNode> {
        Vec::new()
    }

    /// Inner text content, if this node kind carries any
    fn text(&self) -> Option<&str> {
        None
    }
}

/// Depth-first enumeration of a composite node's subtree
pub trait XmlDescendants {
    /// Every node below this one: each direct child in insertion order,
    /// immediately followed by that child's own descendants. The node
    /// itself is excluded. Each call produces a fresh traversal.
    fn descendants(&self) -> Vec<&dyn XmlNode>;
}
