//! Generic recursive XML writer
//!
//! Walks the tree through the [`XmlNode`] contract and emits the minimal
//! notification XML: attributes in sequence order, children in insertion
//! order, no indentation, no declaration. Empty elements self-close.

use crate::xml::node::XmlNode;

/// Serialize a node and its subtree to an XML string
pub fn to_xml(node: &dyn XmlNode) -> String {
    let mut output = String::new();
    write_node(node, &mut output);
    output
}

fn write_node(node: &dyn XmlNode, output: &mut String) {
    output.push('<');
    output.push_str(node.name());

    for (name, value) in node.attributes() {
        let Some(value) = value else { continue };
        output.push(' ');
        output.push_str(name);
        output.push_str("=\"");
        output.push_str(&escape_xml(&value.to_string()));
        output.push('"');
    }

    let text = node.text();
    let children = node.children();
    if text.is_none() && children.is_empty() {
        output.push_str("/>");
        return;
    }

    output.push('>');
    if let Some(text) = text {
        output.push_str(&escape_xml(text));
    }
    for child in children {
        write_node(child, output);
    }
    output.push_str("</");
    output.push_str(node.name());
    output.push('>');
}

fn escape_xml(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
