//! Typed partial updates for shapes.

use super::{Geometry, ImageHandle, SerializableColor, Shadow, Shape, TextAlign};
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// A partial set of shape properties to merge into an existing shape.
///
/// Geometry fields only apply to variants that carry them; fields irrelevant
/// to a shape's kind are silently ignored, so a caller can pass a patch
/// without knowing the exact variant.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShapePatch {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub rotation: Option<f64>,

    pub width: Option<f64>,
    pub height: Option<f64>,
    pub radius: Option<f64>,
    pub sides: Option<u32>,
    pub num_points: Option<u32>,
    pub inner_radius: Option<f64>,
    pub outer_radius: Option<f64>,
    pub points: Option<Vec<Point>>,

    pub fill: Option<SerializableColor>,
    pub stroke: Option<SerializableColor>,
    pub stroke_width: Option<f64>,
    pub dash: Option<Vec<f64>>,
    pub shadow: Option<Shadow>,

    pub text: Option<String>,
    pub font_size: Option<f64>,
    pub font_family: Option<String>,
    pub align: Option<TextAlign>,

    #[serde(skip)]
    pub image: Option<ImageHandle>,

    pub draggable: Option<bool>,
    pub visible: Option<bool>,
    pub locked: Option<bool>,
}

impl ShapePatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the anchor position.
    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.x = Some(x);
        self.y = Some(y);
        self
    }

    /// Set width and height.
    pub fn size(mut self, width: f64, height: f64) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    pub fn radius(mut self, radius: f64) -> Self {
        self.radius = Some(radius);
        self
    }

    pub fn fill(mut self, color: SerializableColor) -> Self {
        self.fill = Some(color);
        self
    }

    pub fn text(mut self, content: impl Into<String>) -> Self {
        self.text = Some(content.into());
        self
    }

    pub fn image(mut self, handle: ImageHandle) -> Self {
        self.image = Some(handle);
        self
    }

    /// Merge this patch into a shape.
    pub fn apply(&self, shape: &mut Shape) {
        if let Some(x) = self.x {
            shape.x = x;
        }
        if let Some(y) = self.y {
            shape.y = y;
        }
        if let Some(rotation) = self.rotation {
            shape.rotation = rotation;
        }
        if let Some(draggable) = self.draggable {
            shape.draggable = draggable;
        }
        if let Some(visible) = self.visible {
            shape.visible = visible;
        }
        if let Some(locked) = self.locked {
            shape.locked = locked;
        }

        if self.fill.is_some() {
            shape.style.fill = self.fill;
        }
        if self.stroke.is_some() {
            shape.style.stroke = self.stroke;
        }
        if let Some(stroke_width) = self.stroke_width {
            shape.style.stroke_width = stroke_width;
        }
        if let Some(ref dash) = self.dash {
            shape.style.dash = Some(dash.clone());
        }
        if self.shadow.is_some() {
            shape.style.shadow = self.shadow;
        }

        self.apply_geometry(shape);
    }

    fn apply_geometry(&self, shape: &mut Shape) {
        match &mut shape.geometry {
            Geometry::Rectangle { width, height } => {
                if let Some(w) = self.width {
                    *width = w;
                }
                if let Some(h) = self.height {
                    *height = h;
                }
            }
            Geometry::Circle { radius } | Geometry::Triangle { radius } => {
                if let Some(r) = self.radius {
                    *radius = r;
                }
            }
            Geometry::Star {
                num_points,
                inner_radius,
                outer_radius,
            } => {
                if let Some(n) = self.num_points {
                    *num_points = n;
                }
                if let Some(r) = self.inner_radius {
                    *inner_radius = r;
                }
                if let Some(r) = self.outer_radius {
                    *outer_radius = r;
                }
            }
            Geometry::Polygon { sides, radius } => {
                if let Some(n) = self.sides {
                    *sides = n;
                }
                if let Some(r) = self.radius {
                    *radius = r;
                }
            }
            Geometry::Line { points } | Geometry::Arrow { points } => {
                if let Some(ref p) = self.points {
                    *points = p.clone();
                }
            }
            Geometry::Text {
                content,
                font_size,
                font_family,
                align,
                width,
                height,
            } => {
                if let Some(ref t) = self.text {
                    *content = t.clone();
                }
                if let Some(s) = self.font_size {
                    *font_size = s;
                }
                if let Some(ref f) = self.font_family {
                    *font_family = f.clone();
                }
                if let Some(a) = self.align {
                    *align = a;
                }
                if let Some(w) = self.width {
                    *width = w;
                }
                if let Some(h) = self.height {
                    *height = h;
                }
            }
            Geometry::Image { handle, width, height }
            | Geometry::Clipart { handle, width, height } => {
                if let Some(ref h) = self.image {
                    *handle = h.clone();
                }
                if let Some(w) = self.width {
                    *width = w;
                }
                if let Some(h) = self.height {
                    *height = h;
                }
            }
        }
    }
}
