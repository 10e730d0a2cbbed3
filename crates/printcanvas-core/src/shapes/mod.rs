//! Shape definitions for the product designer.

mod image;
mod patch;
mod style;

pub use image::{Bitmap, ImageFormat, ImageHandle};
pub use patch::ShapePatch;
pub use style::{SerializableColor, Shadow, ShapeStyle};

use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for shapes.
pub type ShapeId = Uuid;

/// Closed set of placeable element kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeKind {
    Rectangle,
    Circle,
    Triangle,
    Star,
    Polygon,
    Line,
    Arrow,
    Text,
    Image,
    Clipart,
}

/// Horizontal text alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// Kind-specific geometry, tagged by variant.
///
/// Radius shapes keep `(x, y)` as the top-left corner of their `2r` square
/// bounding box, matching how the alignment engine measures them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Geometry {
    Rectangle {
        width: f64,
        height: f64,
    },
    Circle {
        radius: f64,
    },
    Triangle {
        radius: f64,
    },
    Star {
        num_points: u32,
        inner_radius: f64,
        outer_radius: f64,
    },
    Polygon {
        sides: u32,
        radius: f64,
    },
    Line {
        /// Vertices relative to the shape anchor.
        points: Vec<Point>,
    },
    Arrow {
        points: Vec<Point>,
    },
    Text {
        content: String,
        font_size: f64,
        font_family: String,
        align: TextAlign,
        width: f64,
        height: f64,
    },
    Image {
        handle: ImageHandle,
        width: f64,
        height: f64,
    },
    Clipart {
        handle: ImageHandle,
        width: f64,
        height: f64,
    },
}

/// Treat non-finite or negative spans as empty.
fn span(v: f64) -> f64 {
    if v.is_finite() && v > 0.0 { v } else { 0.0 }
}

impl Geometry {
    /// The kind tag for this geometry.
    pub fn kind(&self) -> ShapeKind {
        match self {
            Geometry::Rectangle { .. } => ShapeKind::Rectangle,
            Geometry::Circle { .. } => ShapeKind::Circle,
            Geometry::Triangle { .. } => ShapeKind::Triangle,
            Geometry::Star { .. } => ShapeKind::Star,
            Geometry::Polygon { .. } => ShapeKind::Polygon,
            Geometry::Line { .. } => ShapeKind::Line,
            Geometry::Arrow { .. } => ShapeKind::Arrow,
            Geometry::Text { .. } => ShapeKind::Text,
            Geometry::Image { .. } => ShapeKind::Image,
            Geometry::Clipart { .. } => ShapeKind::Clipart,
        }
    }

    /// Bounding rectangle with the given anchor as reference point.
    ///
    /// Malformed dimensions degrade to a zero-extent box, never an error.
    pub fn bounds_at(&self, anchor: Point) -> Rect {
        match self {
            Geometry::Rectangle { width, height }
            | Geometry::Text { width, height, .. }
            | Geometry::Image { width, height, .. }
            | Geometry::Clipart { width, height, .. } => Rect::new(
                anchor.x,
                anchor.y,
                anchor.x + span(*width),
                anchor.y + span(*height),
            ),
            Geometry::Circle { radius }
            | Geometry::Triangle { radius }
            | Geometry::Polygon { radius, .. } => {
                let side = 2.0 * span(*radius);
                Rect::new(anchor.x, anchor.y, anchor.x + side, anchor.y + side)
            }
            Geometry::Star { outer_radius, .. } => {
                let side = 2.0 * span(*outer_radius);
                Rect::new(anchor.x, anchor.y, anchor.x + side, anchor.y + side)
            }
            Geometry::Line { points } | Geometry::Arrow { points } => {
                let mut min = Point::ZERO;
                let mut max = Point::ZERO;
                for (i, p) in points.iter().enumerate() {
                    if i == 0 {
                        min = *p;
                        max = *p;
                    } else {
                        min.x = min.x.min(p.x);
                        min.y = min.y.min(p.y);
                        max.x = max.x.max(p.x);
                        max.y = max.y.max(p.y);
                    }
                }
                Rect::new(
                    anchor.x + min.x,
                    anchor.y + min.y,
                    anchor.x + max.x,
                    anchor.y + max.y,
                )
            }
        }
    }

    /// Default geometry for a kind, or None for kinds that require a
    /// loaded bitmap handle.
    pub fn default_for(kind: ShapeKind) -> Option<Self> {
        match kind {
            ShapeKind::Rectangle => Some(Geometry::Rectangle {
                width: 100.0,
                height: 100.0,
            }),
            ShapeKind::Circle => Some(Geometry::Circle { radius: 50.0 }),
            ShapeKind::Triangle => Some(Geometry::Triangle { radius: 50.0 }),
            ShapeKind::Star => Some(Geometry::Star {
                num_points: 5,
                inner_radius: 20.0,
                outer_radius: 40.0,
            }),
            ShapeKind::Polygon => Some(Geometry::Polygon {
                sides: 6,
                radius: 50.0,
            }),
            ShapeKind::Line => Some(Geometry::Line {
                points: vec![Point::ZERO, Point::new(100.0, 0.0)],
            }),
            ShapeKind::Arrow => Some(Geometry::Arrow {
                points: vec![Point::ZERO, Point::new(100.0, 0.0)],
            }),
            ShapeKind::Text => Some(Geometry::Text {
                content: "Text".to_string(),
                font_size: 20.0,
                font_family: "Arial".to_string(),
                align: TextAlign::default(),
                width: 200.0,
                height: 24.0,
            }),
            ShapeKind::Image | ShapeKind::Clipart => None,
        }
    }
}

/// A single placeable design element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    pub(crate) id: ShapeId,
    /// Anchor position in canvas coordinates.
    pub x: f64,
    pub y: f64,
    /// Rotation in degrees (around the anchor).
    #[serde(default)]
    pub rotation: f64,
    /// Whether the shape accepts drag input.
    pub draggable: bool,
    /// Whether the shape is rendered and participates in alignment.
    pub visible: bool,
    /// Locked shapes never accept drag input.
    pub locked: bool,
    /// Style properties.
    pub style: ShapeStyle,
    /// Kind-specific geometry.
    pub geometry: Geometry,
}

impl Shape {
    /// Create a shape with a fresh id and default flags.
    pub(crate) fn new(x: f64, y: f64, geometry: Geometry) -> Self {
        Self {
            id: Uuid::new_v4(),
            x,
            y,
            rotation: 0.0,
            draggable: true,
            visible: true,
            locked: false,
            style: ShapeStyle::default(),
            geometry,
        }
    }

    /// Get the unique identifier.
    pub fn id(&self) -> ShapeId {
        self.id
    }

    /// The kind tag for this shape.
    pub fn kind(&self) -> ShapeKind {
        self.geometry.kind()
    }

    /// Anchor position as a point.
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Bounding box in canvas coordinates, as the alignment engine sees it.
    pub fn bounds(&self) -> Rect {
        self.geometry.bounds_at(self.position())
    }

    /// Bounding box with the anchor moved to `origin`.
    pub fn bounds_at(&self, origin: Point) -> Rect {
        self.geometry.bounds_at(origin)
    }
}
