//! Alignment guides and snapping for drag operations.
//!
//! Everything here is pure: given the dragged shape's live bounding box, the
//! other shapes, and the designable area, produce the candidate guide lines
//! for this frame and the adjusted position that locks the box onto them.

use crate::mockup::DesignableArea;
use crate::shapes::{Shape, ShapeId};
use kurbo::{Point, Rect};

/// Distance within which a dragged edge or center locks to a guide,
/// in canvas units. The comparison is strictly less-than.
pub const SNAP_THRESHOLD: f64 = 10.0;

/// Candidate alignment lines for one drag frame.
///
/// `vertical` holds x coordinates, `horizontal` holds y coordinates. The
/// set is recomputed every drag-move tick and cleared on drag-end; it is
/// never persisted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GuideSet {
    pub vertical: Vec<f64>,
    pub horizontal: Vec<f64>,
}

impl GuideSet {
    pub fn is_empty(&self) -> bool {
        self.vertical.is_empty() && self.horizontal.is_empty()
    }

    fn dedup(&mut self) {
        self.vertical.sort_by(f64::total_cmp);
        self.vertical.dedup();
        self.horizontal.sort_by(f64::total_cmp);
        self.horizontal.dedup();
    }
}

/// Result of evaluating one drag-move tick.
#[derive(Debug, Clone, PartialEq)]
pub struct DragSnap {
    /// Guide lines to render as dashed overlays.
    pub guides: GuideSet,
    /// Adjusted top-left of the dragged bounding box.
    pub position: Point,
}

/// The three stops of a box along one axis: leading edge, center,
/// trailing edge.
fn stops(min: f64, max: f64) -> [f64; 3] {
    [min, (min + max) / 2.0, max]
}

/// Record target stops the active stops come close to.
///
/// Like stops are compared pairwise (edge-edge, center-center). With
/// `adjacency`, the active box's leading edge is also tested against the
/// target's trailing edge and vice versa, so boxes can snap flush against
/// each other.
fn collect_axis(active: [f64; 3], target: [f64; 3], adjacency: bool, out: &mut Vec<f64>) {
    for i in 0..3 {
        if (active[i] - target[i]).abs() < SNAP_THRESHOLD {
            out.push(target[i]);
        }
    }
    if adjacency {
        if (active[0] - target[2]).abs() < SNAP_THRESHOLD {
            out.push(target[2]);
        }
        if (active[2] - target[0]).abs() < SNAP_THRESHOLD {
            out.push(target[0]);
        }
    }
}

/// Compute the guide set for a dragged box.
///
/// The dragged shape itself and hidden shapes contribute nothing. The
/// designable area contributes like-stop matches only; other shapes also
/// contribute flush-adjacency matches.
pub fn compute_guides(
    active_id: ShapeId,
    active: Rect,
    shapes: &[Shape],
    area: &DesignableArea,
) -> GuideSet {
    let active_v = stops(active.x0, active.x1);
    let active_h = stops(active.y0, active.y1);

    let mut guides = GuideSet::default();

    let area_bounds = area.bounds();
    collect_axis(
        active_v,
        stops(area_bounds.x0, area_bounds.x1),
        false,
        &mut guides.vertical,
    );
    collect_axis(
        active_h,
        stops(area_bounds.y0, area_bounds.y1),
        false,
        &mut guides.horizontal,
    );

    for shape in shapes {
        if shape.id() == active_id || !shape.visible {
            continue;
        }
        let bounds = shape.bounds();
        collect_axis(
            active_v,
            stops(bounds.x0, bounds.x1),
            true,
            &mut guides.vertical,
        );
        collect_axis(
            active_h,
            stops(bounds.y0, bounds.y1),
            true,
            &mut guides.horizontal,
        );
    }

    guides.dedup();
    guides
}

/// Smallest offset that moves one of the active stops onto a guide.
///
/// All (guide, stop) pairs within the threshold compete and the closest
/// match wins. Exact ties keep the first candidate found, with guides in
/// ascending order and stops ordered leading edge, center, trailing edge.
fn best_offset(active: [f64; 3], guides: &[f64]) -> Option<f64> {
    let mut best: Option<f64> = None;
    for &guide in guides {
        for stop in active {
            let offset = guide - stop;
            if offset.abs() >= SNAP_THRESHOLD {
                continue;
            }
            if best.is_none_or(|b| offset.abs() < b.abs()) {
                best = Some(offset);
            }
        }
    }
    best
}

/// Snap the active box onto the guide set, returning its adjusted
/// top-left. Axes snap independently; an axis without a qualifying guide
/// keeps its position.
pub fn snap_position(active: Rect, guides: &GuideSet) -> Point {
    let dx = best_offset(stops(active.x0, active.x1), &guides.vertical).unwrap_or(0.0);
    let dy = best_offset(stops(active.y0, active.y1), &guides.horizontal).unwrap_or(0.0);
    Point::new(active.x0 + dx, active.y0 + dy)
}

/// One drag-move tick: guides plus the snapped box origin.
pub fn evaluate_drag(
    active_id: ShapeId,
    active: Rect,
    shapes: &[Shape],
    area: &DesignableArea,
) -> DragSnap {
    let guides = compute_guides(active_id, active, shapes, area);
    let position = snap_position(active, &guides);
    DragSnap { guides, position }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::{ShapeKind, ShapePatch};
    use crate::store::ShapeStore;

    fn rect_at(store: &mut ShapeStore, x: f64, y: f64, w: f64, h: f64) -> ShapeId {
        store
            .add_shape(ShapeKind::Rectangle, ShapePatch::new().at(x, y).size(w, h))
            .map(|s| s.id())
            .unwrap()
    }

    fn area() -> DesignableArea {
        DesignableArea::default()
    }

    #[test]
    fn test_guide_inside_threshold() {
        let mut store = ShapeStore::new();
        rect_at(&mut store, 100.0, 100.0, 100.0, 100.0);
        let active_id = rect_at(&mut store, 205.0, 100.0, 100.0, 100.0);

        // Left edge 9 units from the first rectangle's right edge
        let live = Rect::new(209.0, 100.0, 309.0, 200.0);
        let guides = compute_guides(active_id, live, store.shapes(), &area());
        assert!(guides.vertical.contains(&200.0));
    }

    #[test]
    fn test_no_guide_at_threshold() {
        let mut store = ShapeStore::new();
        rect_at(&mut store, 100.0, 100.0, 100.0, 100.0);
        let active_id = rect_at(&mut store, 205.0, 300.0, 100.0, 100.0);

        // Exactly 10 units away: strict less-than, no guide
        let live = Rect::new(210.0, 300.0, 310.0, 400.0);
        let guides = compute_guides(active_id, live, store.shapes(), &area());
        assert!(!guides.vertical.contains(&200.0));
    }

    #[test]
    fn test_flush_snap_to_neighbor_edge() {
        let mut store = ShapeStore::new();
        rect_at(&mut store, 100.0, 100.0, 100.0, 100.0);
        let active_id = rect_at(&mut store, 205.0, 100.0, 100.0, 100.0);

        for x in [198.0, 199.0, 200.0, 201.0, 202.0] {
            let live = Rect::new(x, 100.0, x + 100.0, 200.0);
            let snap = evaluate_drag(active_id, live, store.shapes(), &area());
            assert!(snap.guides.vertical.contains(&200.0), "no guide at x={x}");
            assert_eq!(snap.position.x, 200.0, "bad snap at x={x}");
        }
    }

    #[test]
    fn test_area_center_guide() {
        let mut store = ShapeStore::new();
        // Area is 150..450, center 300. Box centered near 300 snaps onto it.
        let active_id = rect_at(&mut store, 253.0, 200.0, 100.0, 100.0);

        let live = Rect::new(253.0, 200.0, 353.0, 300.0);
        let snap = evaluate_drag(active_id, live, store.shapes(), &area());
        assert!(snap.guides.vertical.contains(&300.0));
        // Center 303 moves to 300, so the origin lands at 250
        assert_eq!(snap.position.x, 250.0);
    }

    #[test]
    fn test_area_uses_like_stops_only() {
        let mut store = ShapeStore::new();
        // Right edge at 298 is near the area center stop (300) but that is
        // not a like-for-like pair, so the area contributes no guide.
        let active_id = rect_at(&mut store, 198.0, 200.0, 100.0, 100.0);

        let live = Rect::new(198.0, 200.0, 298.0, 300.0);
        let guides = compute_guides(active_id, live, store.shapes(), &area());
        assert!(!guides.vertical.contains(&300.0));
    }

    #[test]
    fn test_hidden_shapes_do_not_attract() {
        let mut store = ShapeStore::new();
        let other = rect_at(&mut store, 100.0, 100.0, 100.0, 100.0);
        let active_id = rect_at(&mut store, 205.0, 100.0, 100.0, 100.0);
        store.toggle_visibility(other);

        let live = Rect::new(198.0, 100.0, 298.0, 200.0);
        let guides = compute_guides(active_id, live, store.shapes(), &area());
        assert!(!guides.vertical.contains(&200.0));
    }

    #[test]
    fn test_guides_dedup_per_axis() {
        let mut store = ShapeStore::new();
        // Two shapes sharing the same right edge at x=200
        rect_at(&mut store, 100.0, 100.0, 100.0, 50.0);
        rect_at(&mut store, 150.0, 160.0, 50.0, 50.0);
        let active_id = rect_at(&mut store, 205.0, 100.0, 100.0, 100.0);

        let live = Rect::new(198.0, 100.0, 298.0, 200.0);
        let guides = compute_guides(active_id, live, store.shapes(), &area());
        let hits = guides.vertical.iter().filter(|&&g| g == 200.0).count();
        assert_eq!(hits, 1);
    }

    #[test]
    fn test_closest_guide_wins() {
        let mut store = ShapeStore::new();
        // Right edges at 200 and 207
        rect_at(&mut store, 100.0, 100.0, 100.0, 100.0);
        rect_at(&mut store, 107.0, 250.0, 100.0, 50.0);
        let active_id = rect_at(&mut store, 300.0, 100.0, 100.0, 100.0);

        // Left edge at 205: 2 from 207, 5 from 200
        let live = Rect::new(205.0, 100.0, 305.0, 200.0);
        let snap = evaluate_drag(active_id, live, store.shapes(), &area());
        assert_eq!(snap.position.x, 207.0);
    }

    #[test]
    fn test_axes_snap_independently() {
        let mut store = ShapeStore::new();
        rect_at(&mut store, 100.0, 100.0, 100.0, 100.0);
        let active_id = rect_at(&mut store, 205.0, 500.0, 100.0, 100.0);

        // Vertical match only; y is far from everything
        let live = Rect::new(198.0, 500.0, 298.0, 600.0);
        let snap = evaluate_drag(active_id, live, store.shapes(), &area());
        assert_eq!(snap.position, Point::new(200.0, 500.0));
    }

    #[test]
    fn test_radius_shape_attracts_via_square_bounds() {
        let mut store = ShapeStore::new();
        // Circle anchored at (100, 100) with r=50 spans 100..200
        store
            .add_shape(ShapeKind::Circle, ShapePatch::new().at(100.0, 100.0).radius(50.0))
            .unwrap();
        let active_id = rect_at(&mut store, 300.0, 100.0, 100.0, 100.0);

        let live = Rect::new(203.0, 100.0, 303.0, 200.0);
        let snap = evaluate_drag(active_id, live, store.shapes(), &area());
        assert!(snap.guides.vertical.contains(&200.0));
        assert_eq!(snap.position.x, 200.0);
    }

    #[test]
    fn test_no_guides_far_from_everything() {
        let mut store = ShapeStore::new();
        rect_at(&mut store, 100.0, 100.0, 50.0, 50.0);
        let active_id = rect_at(&mut store, 500.0, 500.0, 50.0, 50.0);

        let live = Rect::new(320.0, 320.0, 370.0, 370.0);
        let snap = evaluate_drag(active_id, live, store.shapes(), &area());
        assert!(snap.guides.vertical.is_empty());
        assert!(snap.guides.horizontal.is_empty());
        assert_eq!(snap.position, Point::new(320.0, 320.0));
    }
}
