//! Integration tests for leaf-node validation and minimal output

use notixml::adaptive::{
    AdaptiveImage, AdaptiveProgressBar, AdaptiveSubgroup, AdaptiveText, TextAlign, TextStyle,
};
use notixml::xml::to_xml;
use notixml::Error;

#[test]
fn test_text_hints_emit_only_non_defaults() {
    // MaxLines = 3, Align = Center, Style = Default: hint-style omitted.
    let mut text = AdaptiveText::new("hello");
    text.set_max_lines(3).unwrap();
    text.set_align(TextAlign::Center);
    text.set_style(TextStyle::Default);

    let xml = to_xml(&text);
    assert!(xml.contains(r#"hint-maxLines="3""#));
    assert!(xml.contains(r#"hint-align="center""#));
    assert!(!xml.contains("hint-style"));
}

#[test]
fn test_subgroup_weight_example() {
    let mut subgroup = AdaptiveSubgroup::new();
    let err = subgroup.set_weight(0).unwrap_err();
    assert!(matches!(
        err,
        Error::OutOfRange {
            field: "hint-weight",
            value: 0,
            min: 1,
            ..
        }
    ));

    subgroup.set_weight(1).unwrap();
    assert_eq!(to_xml(&subgroup), r#"<subgroup hint-weight="1"/>"#);
}

#[test]
fn test_invalid_set_preserves_prior_value() {
    let mut text = AdaptiveText::new("x");
    text.set_max_lines(5).unwrap();
    assert!(text.set_max_lines(0).is_err());
    assert_eq!(text.max_lines(), Some(5));

    let mut image = AdaptiveImage::new("a.png");
    assert!(image.set_overlay(200).is_err());
    assert_eq!(image.overlay(), None);

    let mut bar = AdaptiveProgressBar::new();
    bar.set_value(1.0).unwrap();
    assert!(bar.set_value(f64::INFINITY).is_err());
    assert!(to_xml(&bar).contains(r#"value="1""#));
}

#[test]
fn test_error_messages_name_field_and_range() {
    let mut image = AdaptiveImage::new("a.png");
    let message = image.set_overlay(101).unwrap_err().to_string();
    assert_eq!(message, "hint-overlay must be within 0..=100, got 101");
}

#[test]
fn test_fresh_nodes_serialize_minimal() {
    assert_eq!(to_xml(&AdaptiveText::default()), "<text/>");
    assert_eq!(to_xml(&AdaptiveSubgroup::new()), "<subgroup/>");
    assert_eq!(to_xml(&AdaptiveProgressBar::new()), "<progress/>");
    assert_eq!(
        to_xml(&AdaptiveImage::new("only.png")),
        r#"<image src="only.png"/>"#
    );
}

#[test]
fn test_wrap_serializes_lowercase_booleans() {
    let mut text = AdaptiveText::new("long body");
    text.set_wrap(true);
    assert_eq!(to_xml(&text), r#"<text hint-wrap="true">long body</text>"#);
    text.set_wrap(false);
    assert_eq!(to_xml(&text), r#"<text hint-wrap="false">long body</text>"#);
}
