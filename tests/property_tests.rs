//! Property-based tests for the notification content model
//!
//! These tests use proptest to verify:
//! 1. Escaping soundness: serialized attribute values and text content never
//!    leak raw markup characters
//! 2. Validation totality: out-of-range sets always fail and never change
//!    the stored value
//! 3. Order preservation: children and descendants follow insertion order

use proptest::prelude::*;

use notixml::adaptive::{AdaptiveImage, AdaptiveSubgroup, AdaptiveText};
use notixml::tile::{TileBinding, TileTemplate};
use notixml::xml::{to_xml, XmlDescendants};

/// Strategy for text content exercising the escape table
fn arb_content() -> impl Strategy<Value = String> {
    r#"[a-zA-Z0-9 <>&"']{0,40}"#.prop_map(|s| s)
}

/// Everything between the element's attributes/content markers must be
/// entity-escaped; raw specials may only appear as tag delimiters.
fn body_has_no_raw_specials(xml: &str) -> bool {
    let Some(start) = xml.find('>') else {
        return false;
    };
    let Some(end) = xml.rfind("</") else {
        return true;
    };
    let body = xml.get(start + 1..end).unwrap_or("");
    !body.contains('<') && !body.contains('>') && !body.contains('&') || {
        // Entities themselves contain '&'; strip them before checking.
        let stripped = body
            .replace("&amp;", "")
            .replace("&lt;", "")
            .replace("&gt;", "")
            .replace("&quot;", "")
            .replace("&apos;", "");
        !stripped.contains('<') && !stripped.contains('>') && !stripped.contains('&')
    }
}

proptest! {
    /// Text content never leaks raw markup characters into the output
    #[test]
    fn text_content_is_escaped(content in arb_content()) {
        let text = AdaptiveText::new(content);
        let xml = to_xml(&text);
        if xml.ends_with("</text>") {
            prop_assert!(body_has_no_raw_specials(&xml));
        }
    }

    /// Attribute values never leak raw quotes or markup characters
    #[test]
    fn attribute_values_are_escaped(src in arb_content()) {
        let image = AdaptiveImage::new(src);
        let xml = to_xml(&image);
        // Exactly the delimiting quotes of src="..." plus the closing "/>".
        prop_assert_eq!(xml.matches('"').count(), 2);
        prop_assert!(xml.starts_with("<image src=\""));
        prop_assert!(xml.ends_with("\"/>"));
    }

    /// Any positive weight is accepted and serialized verbatim
    #[test]
    fn valid_weights_serialize(weight in 1u32..=1_000_000) {
        let mut subgroup = AdaptiveSubgroup::new();
        subgroup.set_weight(weight).unwrap();
        let expected = format!(r#"<subgroup hint-weight="{weight}"/>"#);
        prop_assert_eq!(to_xml(&subgroup), expected);
    }

    /// Out-of-range overlays always fail and never disturb the stored value
    #[test]
    fn invalid_overlay_never_stored(valid in 0u8..=100, invalid in 101u8..=255) {
        let mut image = AdaptiveImage::new("x.png");
        image.set_overlay(valid).unwrap();
        prop_assert!(image.set_overlay(invalid).is_err());
        prop_assert_eq!(image.overlay(), Some(valid));
    }

    /// Unit-interval progress values are accepted, everything else rejected
    #[test]
    fn progress_value_validation(value in -10.0f64..10.0) {
        let mut bar = notixml::adaptive::AdaptiveProgressBar::new();
        let result = bar.set_value(value);
        prop_assert_eq!(result.is_ok(), (0.0..=1.0).contains(&value));
    }

    /// Children serialize in exactly the order they were added
    #[test]
    fn children_preserve_insertion_order(labels in prop::collection::vec("[a-z]{1,8}", 1..12)) {
        let mut binding = TileBinding::new(TileTemplate::TileWide);
        for label in &labels {
            binding.add_child(AdaptiveText::new(label.clone()));
        }
        let xml = to_xml(&binding);

        let mut cursor = 0;
        for label in &labels {
            let needle = format!(">{label}</text>");
            let found = xml[cursor..].find(&needle);
            prop_assert!(found.is_some(), "label {} out of order in {}", label, xml);
            cursor += found.unwrap_or(0) + needle.len();
        }
    }

    /// descendants() is restartable and matches child insertion order
    #[test]
    fn descendants_restartable(count in 0usize..10) {
        let mut binding = TileBinding::new(TileTemplate::TileMedium);
        for i in 0..count {
            binding.add_child(AdaptiveImage::new(format!("{i}.png")));
        }
        let first = binding.descendants().len();
        let second = binding.descendants().len();
        prop_assert_eq!(first, count);
        prop_assert_eq!(first, second);
    }
}
