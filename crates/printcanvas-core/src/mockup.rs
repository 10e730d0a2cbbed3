//! Product mockups and the designable area.

use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};

/// Axis-aligned region that design content should stay inside.
///
/// Fixed per mockup; alignment guides anchor to its edges and centers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DesignableArea {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Default for DesignableArea {
    fn default() -> Self {
        Self {
            x: 150.0,
            y: 150.0,
            width: 300.0,
            height: 300.0,
        }
    }
}

impl DesignableArea {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// The area as a rectangle.
    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.x + self.width, self.y + self.height)
    }

    /// Whether a rectangle lies fully inside the area.
    pub fn contains(&self, rect: Rect) -> bool {
        let b = self.bounds();
        rect.x0 >= b.x0 && rect.y0 >= b.y0 && rect.x1 <= b.x1 && rect.y1 <= b.y1
    }

    /// Origin for `rect` pushed inward so its full extent stays inside the
    /// area. The rectangle is never resized; oversized content pins to the
    /// area's top-left edge.
    pub fn clamp_origin(&self, rect: Rect) -> Point {
        let max_x = self.x + self.width - rect.width();
        let max_y = self.y + self.height - rect.height();
        Point::new(
            rect.x0.clamp(self.x, max_x.max(self.x)),
            rect.y0.clamp(self.y, max_y.max(self.y)),
        )
    }
}

/// A product template the design is composed over.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mockup {
    /// Display name, also used as the persistence key.
    pub name: String,
    /// Stage width in canvas units.
    pub width: f64,
    /// Stage height in canvas units.
    pub height: f64,
    /// Region where design content belongs.
    pub area: DesignableArea,
}

impl Mockup {
    pub fn new(name: impl Into<String>, width: f64, height: f64, area: DesignableArea) -> Self {
        Self {
            name: name.into(),
            width,
            height,
            area,
        }
    }

    pub fn tshirt() -> Self {
        Self::new("T-Shirt", 600.0, 600.0, DesignableArea::default())
    }

    pub fn mug() -> Self {
        Self::new("Mug", 600.0, 600.0, DesignableArea::new(180.0, 200.0, 240.0, 200.0))
    }

    pub fn tote() -> Self {
        Self::new("Tote Bag", 600.0, 600.0, DesignableArea::new(160.0, 180.0, 280.0, 280.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_keeps_inner_rect_in_place() {
        let area = DesignableArea::default();
        let rect = Rect::new(200.0, 200.0, 250.0, 250.0);
        assert_eq!(area.clamp_origin(rect), Point::new(200.0, 200.0));
    }

    #[test]
    fn test_clamp_pushes_overflow_inward() {
        let area = DesignableArea::default();

        // Hangs off the right edge: 420 + 60 > 450
        let rect = Rect::new(420.0, 200.0, 480.0, 260.0);
        assert_eq!(area.clamp_origin(rect), Point::new(390.0, 200.0));

        // Hangs off the top-left
        let rect = Rect::new(100.0, 120.0, 160.0, 180.0);
        assert_eq!(area.clamp_origin(rect), Point::new(150.0, 150.0));
    }

    #[test]
    fn test_clamp_oversized_pins_to_top_left() {
        let area = DesignableArea::default();
        let rect = Rect::new(0.0, 0.0, 500.0, 500.0);
        assert_eq!(area.clamp_origin(rect), Point::new(150.0, 150.0));
    }

    #[test]
    fn test_contains() {
        let area = DesignableArea::default();
        assert!(area.contains(Rect::new(150.0, 150.0, 450.0, 450.0)));
        assert!(!area.contains(Rect::new(149.0, 150.0, 200.0, 200.0)));
    }
}
