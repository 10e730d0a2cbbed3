//! Collaborator contracts: the rendering surface and export capture.

use crate::mockup::DesignableArea;
use crate::shapes::ShapeId;
use kurbo::{Point, Rect};

/// Result of resolving a pointer event against the stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    /// Empty canvas (or the stage background).
    Empty,
    /// An interactive shape node.
    Shape(ShapeId),
}

/// Live geometry read back from an interactive canvas node after a
/// user-driven transform gesture.
///
/// Size fields are present only when the node kind carries them; scale
/// factors are already folded in by the surface.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NodeTransform {
    pub x: f64,
    pub y: f64,
    /// Rotation in degrees.
    pub rotation: f64,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub radius: Option<f64>,
}

/// Contract the rendering surface must satisfy for the editor.
pub trait RenderSurface {
    /// Read a node's live geometry by shape id.
    fn node_transform(&self, id: ShapeId) -> Option<NodeTransform>;

    /// Imperatively move a node during a drag-move snap.
    fn set_node_position(&mut self, id: ShapeId, position: Point);

    /// Resolve a pointer position to a shape or empty canvas.
    fn hit_test(&self, position: Point) -> HitTarget;
}

/// User-facing export variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportKind {
    /// Full stage including mockup background and area border.
    #[default]
    Complete,
    /// Full stage without the designable-area border.
    NoAreaBorder,
    /// Only the designable-area content, cropped to its bounds.
    Cropped,
}

/// Capture request handed to the export collaborator.
///
/// The core only supplies the crop rectangle and visibility toggles; the
/// collaborator owns pixel capture and encoding.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportOptions {
    /// Output pixel density multiplier.
    pub pixel_ratio: f64,
    /// Crop rectangle in canvas coordinates (None = full stage).
    pub crop: Option<Rect>,
    /// Hide the designable-area border during capture.
    pub hide_area_border: bool,
    /// Hide the mockup background during capture.
    pub hide_background: bool,
}

impl ExportOptions {
    /// Default output density.
    pub const DEFAULT_PIXEL_RATIO: f64 = 2.0;

    /// Build the options for an export kind against the given area.
    pub fn for_kind(kind: ExportKind, area: &DesignableArea) -> Self {
        match kind {
            ExportKind::Complete => Self {
                pixel_ratio: Self::DEFAULT_PIXEL_RATIO,
                crop: None,
                hide_area_border: false,
                hide_background: false,
            },
            ExportKind::NoAreaBorder => Self {
                pixel_ratio: Self::DEFAULT_PIXEL_RATIO,
                crop: None,
                hide_area_border: true,
                hide_background: false,
            },
            ExportKind::Cropped => Self {
                pixel_ratio: Self::DEFAULT_PIXEL_RATIO,
                crop: Some(area.bounds()),
                hide_area_border: true,
                hide_background: true,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_kinds() {
        let area = DesignableArea::default();

        let complete = ExportOptions::for_kind(ExportKind::Complete, &area);
        assert_eq!(complete.crop, None);
        assert!(!complete.hide_area_border);

        let no_border = ExportOptions::for_kind(ExportKind::NoAreaBorder, &area);
        assert_eq!(no_border.crop, None);
        assert!(no_border.hide_area_border);
        assert!(!no_border.hide_background);

        let cropped = ExportOptions::for_kind(ExportKind::Cropped, &area);
        assert_eq!(cropped.crop, Some(area.bounds()));
        assert!(cropped.hide_area_border);
        assert!(cropped.hide_background);
    }
}
