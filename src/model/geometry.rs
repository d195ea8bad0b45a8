//! Bounding boxes and their one-dimensional projections.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// An axis-aligned bounding box.
///
/// Coordinates use a top-left origin: x grows to the right and y grows
/// downward, so `left <= right` and `top <= bottom` always hold. Boxes in
/// PDF user space (bottom-left origin) can be converted with
/// [`Rect::from_bottom_left`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawRect")]
pub struct Rect {
    left: f64,
    top: f64,
    right: f64,
    bottom: f64,
}

impl Rect {
    /// Create a new rectangle, rejecting inverted or non-finite bounds.
    pub fn new(left: f64, top: f64, right: f64, bottom: f64) -> Result<Self> {
        if ![left, top, right, bottom].iter().all(|c| c.is_finite()) {
            return Err(Error::MalformedGeometry(format!(
                "non-finite coordinate in ({}, {}, {}, {})",
                left, top, right, bottom
            )));
        }
        if left > right {
            return Err(Error::MalformedGeometry(format!(
                "left {} > right {}",
                left, right
            )));
        }
        if top > bottom {
            return Err(Error::MalformedGeometry(format!(
                "top {} > bottom {}",
                top, bottom
            )));
        }

        Ok(Self {
            left,
            top,
            right,
            bottom,
        })
    }

    /// Create a rectangle from an origin point and a size.
    pub fn from_origin_size(x: f64, y: f64, width: f64, height: f64) -> Result<Self> {
        Self::new(x, y, x + width, y + height)
    }

    /// Convert a bottom-left-origin box (y grows upward) on a page of the
    /// given height.
    pub fn from_bottom_left(
        left: f64,
        bottom: f64,
        right: f64,
        top: f64,
        page_height: f64,
    ) -> Result<Self> {
        Self::new(left, page_height - top, right, page_height - bottom)
    }

    /// Left edge.
    pub fn left(&self) -> f64 {
        self.left
    }

    /// Top edge.
    pub fn top(&self) -> f64 {
        self.top
    }

    /// Right edge.
    pub fn right(&self) -> f64 {
        self.right
    }

    /// Bottom edge.
    pub fn bottom(&self) -> f64 {
        self.bottom
    }

    /// Width of the box.
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    /// Height of the box.
    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    /// Projection of the box onto an axis.
    pub fn span(&self, axis: Axis) -> Span {
        match axis {
            Axis::Horizontal => Span {
                lo: self.left,
                hi: self.right,
            },
            Axis::Vertical => Span {
                lo: self.top,
                hi: self.bottom,
            },
        }
    }
}

#[derive(Deserialize)]
struct RawRect {
    left: f64,
    top: f64,
    right: f64,
    bottom: f64,
}

impl TryFrom<RawRect> for Rect {
    type Error = Error;

    fn try_from(raw: RawRect) -> Result<Self> {
        Rect::new(raw.left, raw.top, raw.right, raw.bottom)
    }
}

/// Axis a box is projected onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Left to right
    Horizontal,
    /// Top to bottom
    Vertical,
}

impl Axis {
    /// Both axes, horizontal first.
    pub const ALL: [Axis; 2] = [Axis::Horizontal, Axis::Vertical];
}

/// A closed interval `[lo, hi]` on one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span {
    /// Start of the interval
    pub lo: f64,
    /// End of the interval
    pub hi: f64,
}

/// Anything that occupies a bounding box on a page.
pub trait Bounded {
    /// The item's bounding box.
    fn bbox(&self) -> &Rect;
}

impl Bounded for Rect {
    fn bbox(&self) -> &Rect {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_accessors() {
        let rect = Rect::new(10.0, 20.0, 110.0, 70.0).unwrap();
        assert_eq!(rect.width(), 100.0);
        assert_eq!(rect.height(), 50.0);
        assert_eq!(rect.span(Axis::Horizontal), Span { lo: 10.0, hi: 110.0 });
        assert_eq!(rect.span(Axis::Vertical), Span { lo: 20.0, hi: 70.0 });
    }

    #[test]
    fn test_rect_rejects_inverted_bounds() {
        assert!(matches!(
            Rect::new(10.0, 0.0, 5.0, 10.0),
            Err(Error::MalformedGeometry(_))
        ));
        assert!(matches!(
            Rect::new(0.0, 10.0, 5.0, 0.0),
            Err(Error::MalformedGeometry(_))
        ));
    }

    #[test]
    fn test_rect_rejects_non_finite() {
        assert!(Rect::new(f64::NAN, 0.0, 1.0, 1.0).is_err());
        assert!(Rect::new(0.0, 0.0, f64::INFINITY, 1.0).is_err());
        assert!(Rect::new(0.0, f64::NEG_INFINITY, 1.0, 1.0).is_err());
    }

    #[test]
    fn test_degenerate_rect_is_allowed() {
        let rect = Rect::new(5.0, 5.0, 5.0, 5.0).unwrap();
        assert_eq!(rect.width(), 0.0);
        assert_eq!(rect.height(), 0.0);
    }

    #[test]
    fn test_from_bottom_left() {
        // Letter page, box 100pt tall sitting 50pt above the bottom edge
        let rect = Rect::from_bottom_left(72.0, 50.0, 300.0, 150.0, 792.0).unwrap();
        assert_eq!(rect.top(), 642.0);
        assert_eq!(rect.bottom(), 742.0);
        assert_eq!(rect.left(), 72.0);
        assert_eq!(rect.right(), 300.0);
    }

    #[test]
    fn test_from_origin_size() {
        let rect = Rect::from_origin_size(1.0, 2.0, 3.0, 4.0).unwrap();
        assert_eq!(rect, Rect::new(1.0, 2.0, 4.0, 6.0).unwrap());
        assert!(Rect::from_origin_size(0.0, 0.0, -1.0, 1.0).is_err());
    }

    #[test]
    fn test_deserialize_validates() {
        let rect: Rect =
            serde_json::from_str(r#"{"left":0,"top":0,"right":10,"bottom":5}"#).unwrap();
        assert_eq!(rect.right(), 10.0);

        let bad: std::result::Result<Rect, _> =
            serde_json::from_str(r#"{"left":10,"top":0,"right":0,"bottom":5}"#);
        let message = bad.unwrap_err().to_string();
        assert!(message.contains("Malformed geometry"));
    }
}
