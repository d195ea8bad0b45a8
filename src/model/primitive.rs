//! Positioned primitives produced by the extraction layer.

use super::geometry::{Bounded, Rect};

/// Default MIME type for image primitives.
pub const DEFAULT_IMAGE_TYPE: &str = "image/png";

/// A block of text with its bounding box.
#[derive(Debug, Clone, PartialEq)]
pub struct TextPrimitive {
    /// Bounding box of the block
    pub bbox: Rect,
    /// Text of the block, already assembled from its words
    pub text: String,
}

impl TextPrimitive {
    /// Create a new text primitive.
    pub fn new(bbox: Rect, text: impl Into<String>) -> Self {
        Self {
            bbox,
            text: text.into(),
        }
    }
}

/// An embedded image with its bounding box.
#[derive(Debug, Clone, PartialEq)]
pub struct ImagePrimitive {
    /// Bounding box of the image on the page
    pub bbox: Rect,
    /// Raw image bytes
    pub data: Vec<u8>,
    /// MIME type (e.g., "image/png")
    pub mime_type: String,
}

impl ImagePrimitive {
    /// Create a new image primitive.
    pub fn new(bbox: Rect, data: Vec<u8>, mime_type: impl Into<String>) -> Self {
        Self {
            bbox,
            data,
            mime_type: mime_type.into(),
        }
    }

    /// Create a PNG image primitive.
    pub fn png(bbox: Rect, data: Vec<u8>) -> Self {
        Self::new(bbox, data, DEFAULT_IMAGE_TYPE)
    }
}

/// A positioned unit on a page, prior to ordering.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    /// A text block
    Text(TextPrimitive),
    /// An image
    Image(ImagePrimitive),
}

impl Primitive {
    /// Create a text primitive.
    pub fn text(bbox: Rect, text: impl Into<String>) -> Self {
        Primitive::Text(TextPrimitive::new(bbox, text))
    }

    /// Create an image primitive.
    pub fn image(bbox: Rect, data: Vec<u8>, mime_type: impl Into<String>) -> Self {
        Primitive::Image(ImagePrimitive::new(bbox, data, mime_type))
    }

    /// Check if this is a text primitive.
    pub fn is_text(&self) -> bool {
        matches!(self, Primitive::Text(_))
    }

    /// Check if this is an image primitive.
    pub fn is_image(&self) -> bool {
        matches!(self, Primitive::Image(_))
    }
}

impl Bounded for TextPrimitive {
    fn bbox(&self) -> &Rect {
        &self.bbox
    }
}

impl Bounded for ImagePrimitive {
    fn bbox(&self) -> &Rect {
        &self.bbox
    }
}

impl Bounded for Primitive {
    fn bbox(&self) -> &Rect {
        match self {
            Primitive::Text(t) => &t.bbox,
            Primitive::Image(i) => &i.bbox,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect() -> Rect {
        Rect::new(0.0, 0.0, 10.0, 10.0).unwrap()
    }

    #[test]
    fn test_primitive_kinds() {
        let text = Primitive::text(rect(), "hello");
        let image = Primitive::image(rect(), vec![1, 2, 3], "image/jpeg");
        assert!(text.is_text());
        assert!(!text.is_image());
        assert!(image.is_image());
        assert_eq!(image.bbox(), &rect());
    }

    #[test]
    fn test_png_default_type() {
        let image = ImagePrimitive::png(rect(), vec![0x89, b'P', b'N', b'G']);
        assert_eq!(image.mime_type, "image/png");
    }
}
