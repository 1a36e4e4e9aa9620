//! Adaptive image element

use crate::adaptive::{ImageAlign, ImageCrop, ImagePlacement};
use crate::error::{Error, Result};
use crate::xml::node::{AttrValue, XmlNode};

/// An `<image>` element
///
/// Attribute order follows the schema: `src`, `alt`, `addImageQuery`,
/// `placement`, `hint-crop`, `hint-removeMargin`, `hint-align`,
/// `hint-overlay`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AdaptiveImage {
    src: String,
    alt: Option<String>,
    add_image_query: Option<bool>,
    placement: ImagePlacement,
    crop: ImageCrop,
    remove_margin: Option<bool>,
    align: ImageAlign,
    overlay: Option<u8>,
}

impl AdaptiveImage {
    /// Create an image element for the given source URI
    pub fn new(src: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            alt: None,
            add_image_query: None,
            placement: ImagePlacement::default(),
            crop: ImageCrop::default(),
            remove_margin: None,
            align: ImageAlign::default(),
            overlay: None,
        }
    }

    /// Set the alternate text for accessibility
    pub fn set_alt(&mut self, alt: impl Into<String>) {
        self.alt = Some(alt.into());
    }

    /// Set whether the OS appends a query string to the image URI
    pub fn set_add_image_query(&mut self, add: bool) {
        self.add_image_query = Some(add);
    }

    /// Set the image placement
    pub fn set_placement(&mut self, placement: ImagePlacement) {
        self.placement = placement;
    }

    /// Set the crop shape
    pub fn set_crop(&mut self, crop: ImageCrop) {
        self.crop = crop;
    }

    /// Set whether the default margin around the image is removed
    pub fn set_remove_margin(&mut self, remove: bool) {
        self.remove_margin = Some(remove);
    }

    /// Set the horizontal alignment
    pub fn set_align(&mut self, align: ImageAlign) {
        self.align = align;
    }

    /// Set the black overlay percentage applied over the image
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

    pub fn src(&self) -> &str {
        &self.src
    }

    pub fn placement(&self) -> ImagePlacement {
        self.placement
    }

    pub fn overlay(&self) -> Option<u8> {
        self.overlay
    }
}

impl XmlNode for AdaptiveImage {
    fn name(&self) -> &'static str {
        "image"
    }

    fn attributes(&self) -> Vec<(&'static str, Option<AttrValue>)> {
        vec![
            ("src", Some(AttrValue::from(&self.src))),
            ("alt", self.alt.as_ref().map(AttrValue::from)),
            ("addImageQuery", self.add_image_query.map(AttrValue::from)),
            (
                "placement",
                self.placement.schema_str().map(AttrValue::from),
            ),
            ("hint-crop", self.crop.schema_str().map(AttrValue::from)),
            ("hint-removeMargin", self.remove_margin.map(AttrValue::from)),
            ("hint-align", self.align.schema_str().map(AttrValue::from)),
            ("hint-overlay", self.overlay.map(AttrValue::from)),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xml::to_xml;

    #[test]
    fn test_minimal_image() {
        let image = AdaptiveImage::new("Assets/photo.png");
        assert_eq!(to_xml(&image), r#"<image src="Assets/photo.png"/>"#);
    }

    #[test]
    fn test_overlay_range() {
        let mut image = AdaptiveImage::new("bg.png");
        image.set_overlay(100).unwrap();
        let err = image.set_overlay(101).unwrap_err();
        assert_eq!(err.field(), "hint-overlay");
        assert_eq!(image.overlay(), Some(100));
    }

    #[test]
    fn test_inline_placement_is_omitted() {
        let mut image = AdaptiveImage::new("a.png");
        image.set_placement(ImagePlacement::Inline);
        assert_eq!(to_xml(&image), r#"<image src="a.png"/>"#);
        image.set_placement(ImagePlacement::Background);
        assert_eq!(
            to_xml(&image),
            r#"<image src="a.png" placement="background"/>"#
        );
    }

    #[test]
    fn test_full_attribute_order() {
        let mut image = AdaptiveImage::new("p.png");
        image.set_alt("photo");
        image.set_add_image_query(true);
        image.set_crop(ImageCrop::Circle);
        image.set_remove_margin(false);
        image.set_align(ImageAlign::Center);
        image.set_overlay(30).unwrap();
        assert_eq!(
            to_xml(&image),
            r#"<image src="p.png" alt="photo" addImageQuery="true" hint-crop="circle" hint-removeMargin="false" hint-align="center" hint-overlay="30"/>"#
        );
    }
}
