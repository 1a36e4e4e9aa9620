//! Adaptive group element

use crate::adaptive::AdaptiveSubgroup;
use crate::xml::node::{AttrValue, XmlDescendants, XmlNode};

/// A `<group>` element: a horizontal run of subgroup columns
///
/// Groups carry no attributes of their own; the schema constrains their
/// children to subgroups, which the child list's element type enforces.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AdaptiveGroup {
    children: Vec<AdaptiveSubgroup>,
}

impl AdaptiveGroup {
    /// Create an empty group
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a subgroup column, preserving insertion order
    pub fn add_subgroup(&mut self, subgroup: AdaptiveSubgroup) {
        self.children.push(subgroup);
    }

    pub fn subgroups(&self) -> &[AdaptiveSubgroup] {
        &self.children
    }
}

impl XmlNode for AdaptiveGroup {
    fn name(&self) -> &'static str {
        "group"
    }

    fn attributes(&self) -> Vec<(&'static str, Option<AttrValue>)> {
        Vec::new()
    }

    fn children(&self) -> Vec<&dyn XmlNode> {
        self.children.iter().map(|c| c as &dyn XmlNode).collect()
    }
}

impl XmlDescendants for AdaptiveGroup {
    fn descendants(&self) -> Vec<&dyn XmlNode> {
        let mut nodes: Vec<&dyn XmlNode> = Vec::new();
        for subgroup in &self.children {
            nodes.push(subgroup);
            nodes.extend(subgroup.descendants());
        }
        nodes
    }
}
