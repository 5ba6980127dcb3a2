//! Page geometry primitives.

use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle in page coordinates.
///
/// `(x1, y1)` is the top-left corner and `(x2, y2)` the bottom-right corner;
/// y grows downward. Serialized as `[x1, y1, x2, y2]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f32; 4]", into = "[f32; 4]")]
pub struct Rect {
    /// Left edge
    pub x1: f32,
    /// Top edge
    pub y1: f32,
    /// Right edge
    pub x2: f32,
    /// Bottom edge
    pub y2: f32,
}

impl Rect {
    /// Create a new rectangle.
    pub const fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Horizontal extent. Negative when the rectangle is inverted.
    pub fn width(&self) -> f32 {
        self.x2 - self.x1
    }

    /// Vertical extent. Negative when the rectangle is inverted.
    pub fn height(&self) -> f32 {
        self.y2 - self.y1
    }

    /// Area, zero for degenerate rectangles.
    pub fn area(&self) -> f32 {
        if self.is_degenerate() {
            0.0
        } else {
            self.width() * self.height()
        }
    }

    /// True when the rectangle has zero or negative width or height.
    pub fn is_degenerate(&self) -> bool {
        !(self.width() > 0.0 && self.height() > 0.0)
    }

    /// Same horizontal extent, new top and bottom.
    pub fn with_vertical(&self, top: f32, bottom: f32) -> Self {
        Self::new(self.x1, top, self.x2, bottom)
    }

    /// Grow every side by the given margins.
    pub fn expand(&self, horizontal: f32, vertical: f32) -> Self {
        Self::new(
            self.x1 - horizontal,
            self.y1 - vertical,
            self.x2 + horizontal,
            self.y2 + vertical,
        )
    }

    /// True when `other` lies entirely inside this rectangle (edges inclusive).
    pub fn contains(&self, other: &Rect) -> bool {
        other.x1 >= self.x1 && other.x2 <= self.x2 && other.y1 >= self.y1 && other.y2 <= self.y2
    }

    /// True when the point lies inside this rectangle (edges inclusive).
    pub fn contains_point(&self, x: f32, y: f32) -> bool {
        x >= self.x1 && x <= self.x2 && y >= self.y1 && y <= self.y2
    }

    /// Smallest rectangle covering both.
    pub fn union(&self, other: &Rect) -> Self {
        Self::new(
            self.x1.min(other.x1),
            self.y1.min(other.y1),
            self.x2.max(other.x2),
            self.y2.max(other.y2),
        )
    }
}

impl From<[f32; 4]> for Rect {
    fn from([x1, y1, x2, y2]: [f32; 4]) -> Self {
        Self::new(x1, y1, x2, y2)
    }
}

impl From<Rect> for [f32; 4] {
    fn from(rect: Rect) -> Self {
        [rect.x1, rect.y1, rect.x2, rect.y2]
    }
}

/// Page orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Taller than wide
    Portrait,
    /// As wide as or wider than tall
    Landscape,
}

impl Orientation {
    /// Orientation of a page with the given dimensions.
    ///
    /// Square pages count as landscape.
    pub fn of(width: f32, height: f32) -> Self {
        if height > width {
            Orientation::Portrait
        } else {
            Orientation::Landscape
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_dimensions() {
        let rect = Rect::new(10.0, 20.0, 110.0, 70.0);
        assert_eq!(rect.width(), 100.0);
        assert_eq!(rect.height(), 50.0);
        assert_eq!(rect.area(), 5000.0);
        assert!(!rect.is_degenerate());
    }

    #[test]
    fn test_degenerate_rect() {
        assert!(Rect::new(0.0, 100.0, 612.0, 100.0).is_degenerate());
        assert!(Rect::new(0.0, 120.0, 612.0, 100.0).is_degenerate());
        assert_eq!(Rect::new(0.0, 120.0, 612.0, 100.0).area(), 0.0);
    }

    #[test]
    fn test_expand_and_contains() {
        let rect = Rect::new(10.0, 10.0, 20.0, 20.0);
        let grown = rect.expand(2.0, 3.0);
        assert_eq!(grown, Rect::new(8.0, 7.0, 22.0, 23.0));
        assert!(grown.contains(&rect));
        assert!(!rect.contains(&grown));
        assert!(rect.contains_point(10.0, 20.0));
    }

    #[test]
    fn test_rect_serializes_as_array() {
        let rect = Rect::new(34.0, 0.0, 783.0, 595.0);
        let json = serde_json::to_string(&rect).unwrap();
        assert_eq!(json, "[34.0,0.0,783.0,595.0]");

        let back: Rect = serde_json::from_str("[0, 0, 612, 792]").unwrap();
        assert_eq!(back, Rect::new(0.0, 0.0, 612.0, 792.0));
    }

    #[test]
    fn test_orientation() {
        assert_eq!(Orientation::of(612.0, 792.0), Orientation::Portrait);
        assert_eq!(Orientation::of(792.0, 612.0), Orientation::Landscape);
        assert_eq!(Orientation::of(600.0, 600.0), Orientation::Landscape);
    }
}
