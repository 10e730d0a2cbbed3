//! Interaction controller: drag lifecycle, transforms, selection, and
//! keyboard shortcuts over the store, history, and alignment engine.

use crate::align::{self, GuideSet};
use crate::history::History;
use crate::input::{InputState, KeyEvent};
use crate::mockup::{DesignableArea, Mockup};
use crate::shapes::{ShapeId, ShapeKind, ShapePatch};
use crate::store::{LayerDirection, ShapeStore};
use crate::surface::{HitTarget, NodeTransform};
use kurbo::Point;

/// Live state of an in-flight shape drag.
#[derive(Debug, Clone)]
struct DragState {
    shape_id: ShapeId,
    /// Latest snap-adjusted anchor position.
    position: Point,
}

/// The editor session: shape store, history, and transient drag state.
///
/// Every completed gesture commits exactly one history entry; drag-move
/// ticks touch only transient state.
#[derive(Debug, Clone)]
pub struct Editor {
    /// The live document.
    pub store: ShapeStore,
    /// The region design content is constrained to.
    pub area: DesignableArea,
    history: History,
    input: InputState,
    guides: GuideSet,
    drag: Option<DragState>,
}

impl Editor {
    /// Create an editor with an empty document over the given area.
    pub fn new(area: DesignableArea) -> Self {
        let store = ShapeStore::new();
        let history = History::new(store.snapshot());
        Self {
            store,
            area,
            history,
            input: InputState::new(),
            guides: GuideSet::default(),
            drag: None,
        }
    }

    /// Create an editor for a product mockup.
    pub fn for_mockup(mockup: &Mockup) -> Self {
        Self::new(mockup.area)
    }

    /// Guide lines for the current drag frame.
    pub fn guides(&self) -> &GuideSet {
        &self.guides
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Report whether a text control owns keyboard focus. Drags and
    /// shortcuts are suppressed while it does.
    pub fn set_text_input_focused(&mut self, focused: bool) {
        self.input.set_text_input_focused(focused);
    }

    /// Add a shape and record one history entry.
    pub fn add_shape(&mut self, kind: ShapeKind, props: ShapePatch) -> Option<ShapeId> {
        let id = self.store.add_shape(kind, props).map(|s| s.id());
        if id.is_some() {
            self.commit();
        }
        id
    }

    /// Merge properties into the selected shape and record one history
    /// entry.
    pub fn update_selected(&mut self, props: &ShapePatch) {
        if let Some(id) = self.store.selected_id() {
            self.store.update_shape(id, props);
            self.commit();
        }
    }

    /// Delete the selected shape and record one history entry.
    pub fn delete_selected(&mut self) {
        if let Some(id) = self.store.selected_id() {
            self.store.delete_shape(id);
            self.commit();
        }
    }

    /// Reorder a shape one layer and record one history entry.
    pub fn move_layer(&mut self, id: ShapeId, direction: LayerDirection) {
        self.store.move_layer(id, direction);
        self.commit();
    }

    pub fn toggle_visibility(&mut self, id: ShapeId) {
        self.store.toggle_visibility(id);
        self.commit();
    }

    pub fn toggle_lock(&mut self, id: ShapeId) {
        self.store.toggle_lock(id);
        self.commit();
    }

    /// Apply a pointer hit: a shape hit selects it exclusively, an empty
    /// canvas hit clears the selection.
    pub fn pointer_select(&mut self, hit: HitTarget) {
        match hit {
            HitTarget::Empty => self.store.select(None),
            HitTarget::Shape(id) => self.store.select(Some(id)),
        }
    }

    /// Begin dragging a shape. Returns false when the drag is refused:
    /// text input focused, unknown id, or a locked, non-draggable, or
    /// hidden shape.
    pub fn drag_started(&mut self, id: ShapeId) -> bool {
        if self.input.text_input_focused {
            return false;
        }
        let Some(shape) = self.store.get(id) else {
            return false;
        };
        if shape.locked || !shape.draggable || !shape.visible {
            return false;
        }
        self.input.is_dragging = true;
        self.drag = Some(DragState {
            shape_id: id,
            position: shape.position(),
        });
        true
    }

    /// One drag-move tick. Takes the node's live anchor position, refreshes
    /// the guide set, and returns the snap-adjusted position for the
    /// surface to apply. The store is untouched until drag-end.
    pub fn drag_moved(&mut self, live: Point) -> Point {
        let Some(drag) = self.drag.as_mut() else {
            return live;
        };
        let Some(shape) = self.store.get(drag.shape_id) else {
            return live;
        };

        let bounds = shape.bounds_at(live);
        let snap = align::evaluate_drag(drag.shape_id, bounds, self.store.shapes(), &self.area);
        let adjusted = Point::new(
            live.x + (snap.position.x - bounds.x0),
            live.y + (snap.position.y - bounds.y0),
        );
        self.guides = snap.guides;
        drag.position = adjusted;
        adjusted
    }

    /// Finish the drag: clear guides, commit the final position to the
    /// store, and record the whole drag as one history entry.
    pub fn drag_ended(&mut self) {
        self.guides = GuideSet::default();
        self.input.is_dragging = false;
        if let Some(drag) = self.drag.take() {
            self.store.update_shape(
                drag.shape_id,
                &ShapePatch::new().at(drag.position.x, drag.position.y),
            );
            self.commit();
        }
    }

    /// Commit a finished resize/rotate gesture. The shape is clamped so its
    /// full extent stays inside the designable area (pushed inward, never
    /// resized), then written back with one history entry.
    pub fn transform_ended(&mut self, id: ShapeId, node: NodeTransform) {
        let Some(shape) = self.store.get(id) else {
            return;
        };

        let mut patch = ShapePatch {
            x: Some(node.x),
            y: Some(node.y),
            rotation: Some(node.rotation),
            width: node.width,
            height: node.height,
            radius: node.radius,
            ..Default::default()
        };

        let mut preview = shape.clone();
        patch.apply(&mut preview);
        let bounds = preview.bounds();
        let clamped = self.area.clamp_origin(bounds);
        // Clamp moves the bounding box; translate that back to the anchor
        patch.x = Some(preview.x + (clamped.x - bounds.x0));
        patch.y = Some(preview.y + (clamped.y - bounds.y0));

        self.store.update_shape(id, &patch);
        self.commit();
    }

    /// Handle a keyboard shortcut. Ignored while a text control has focus.
    pub fn handle_key(&mut self, event: &KeyEvent) {
        if self.input.text_input_focused {
            return;
        }
        if let KeyEvent::Pressed(key) = event {
            match key.as_str() {
                "Escape" => self.store.select(None),
                "Delete" | "Backspace" => self.delete_selected(),
                _ => {}
            }
        }
    }

    /// Step history back and re-apply the snapshot to the store.
    pub fn undo(&mut self) {
        let snapshot = self.history.undo().to_vec();
        self.store.restore(&snapshot);
    }

    /// Step history forward and re-apply the snapshot to the store.
    pub fn redo(&mut self) {
        let snapshot = self.history.redo().to_vec();
        self.store.restore(&snapshot);
    }

    fn commit(&mut self) {
        let snapshot = self.store.snapshot();
        self.history.push_state(&snapshot);
    }
}

impl Default for Editor {
    fn default() -> Self {
        Self::new(DesignableArea::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn add_rect(editor: &mut Editor, x: f64, y: f64, w: f64, h: f64) -> ShapeId {
        editor
            .add_shape(ShapeKind::Rectangle, ShapePatch::new().at(x, y).size(w, h))
            .unwrap()
    }

    #[test]
    fn test_drag_snaps_and_commits_once() {
        let mut editor = Editor::default();
        add_rect(&mut editor, 100.0, 100.0, 100.0, 100.0);
        let id = add_rect(&mut editor, 205.0, 100.0, 100.0, 100.0);

        assert!(editor.drag_started(id));
        editor.drag_moved(Point::new(203.0, 100.0));
        let last = editor.drag_moved(Point::new(198.0, 100.0));
        assert_eq!(last, Point::new(200.0, 100.0));
        assert!(editor.guides().vertical.contains(&200.0));

        editor.drag_ended();
        assert!(editor.guides().is_empty());
        assert_eq!(editor.store.get(id).unwrap().x, 200.0);

        // The whole drag is one undo step
        editor.undo();
        assert_eq!(editor.store.get(id).unwrap().x, 205.0);
    }

    #[test]
    fn test_locked_shape_refuses_drag() {
        let mut editor = Editor::default();
        let id = add_rect(&mut editor, 200.0, 200.0, 50.0, 50.0);

        editor.toggle_lock(id);
        assert!(!editor.drag_started(id));

        editor.toggle_lock(id);
        assert!(editor.drag_started(id));
    }

    #[test]
    fn test_hidden_shape_refuses_drag() {
        let mut editor = Editor::default();
        let id = add_rect(&mut editor, 200.0, 200.0, 50.0, 50.0);
        editor.toggle_visibility(id);
        assert!(!editor.drag_started(id));
    }

    #[test]
    fn test_text_focus_suppresses_drag_and_shortcuts() {
        let mut editor = Editor::default();
        let id = add_rect(&mut editor, 200.0, 200.0, 50.0, 50.0);
        editor.set_text_input_focused(true);

        assert!(!editor.drag_started(id));
        editor.handle_key(&KeyEvent::Pressed("Delete".into()));
        assert_eq!(editor.store.len(), 1);

        editor.set_text_input_focused(false);
        editor.handle_key(&KeyEvent::Pressed("Delete".into()));
        assert!(editor.store.is_empty());
    }

    #[test]
    fn test_escape_clears_selection() {
        let mut editor = Editor::default();
        let id = add_rect(&mut editor, 200.0, 200.0, 50.0, 50.0);
        assert_eq!(editor.store.selected_id(), Some(id));

        editor.handle_key(&KeyEvent::Pressed("Escape".into()));
        assert_eq!(editor.store.selected_id(), None);
    }

    #[test]
    fn test_pointer_selection() {
        let mut editor = Editor::default();
        let a = add_rect(&mut editor, 200.0, 200.0, 50.0, 50.0);
        let b = add_rect(&mut editor, 300.0, 300.0, 50.0, 50.0);

        editor.pointer_select(HitTarget::Shape(a));
        assert_eq!(editor.store.selected_id(), Some(a));
        editor.pointer_select(HitTarget::Shape(b));
        assert_eq!(editor.store.selected_id(), Some(b));
        editor.pointer_select(HitTarget::Empty);
        assert_eq!(editor.store.selected_id(), None);
    }

    #[test]
    fn test_transform_end_clamps_into_area() {
        let mut editor = Editor::default();
        let id = add_rect(&mut editor, 200.0, 200.0, 50.0, 50.0);

        // Dropped outside the area on the top-left; pushed back in
        editor.transform_ended(
            id,
            NodeTransform {
                x: 50.0,
                y: 100.0,
                rotation: 15.0,
                width: Some(60.0),
                height: Some(40.0),
                radius: None,
            },
        );

        let shape = editor.store.get(id).unwrap();
        assert_eq!((shape.x, shape.y), (150.0, 150.0));
        assert_eq!(shape.rotation, 15.0);
        let bounds = shape.bounds();
        assert_eq!((bounds.width(), bounds.height()), (60.0, 40.0));
        assert!(editor.area.contains(bounds));
    }

    #[test]
    fn test_transform_end_keeps_size_on_overflow() {
        let mut editor = Editor::default();
        let id = add_rect(&mut editor, 200.0, 200.0, 50.0, 50.0);

        // Hangs off the right edge: origin is pushed inward, size untouched
        editor.transform_ended(
            id,
            NodeTransform {
                x: 430.0,
                y: 200.0,
                rotation: 0.0,
                width: Some(60.0),
                height: Some(60.0),
                radius: None,
            },
        );

        let shape = editor.store.get(id).unwrap();
        assert_eq!((shape.x, shape.y), (390.0, 200.0));
        assert_eq!(shape.bounds().width(), 60.0);
    }

    #[test]
    fn test_delete_then_undo_restores() {
        let mut editor = Editor::default();
        let id = add_rect(&mut editor, 200.0, 200.0, 50.0, 50.0);

        editor.delete_selected();
        assert!(editor.store.is_empty());

        editor.undo();
        assert_eq!(editor.store.len(), 1);
        assert!(editor.store.get(id).is_some());
        // Selection does not survive the restore
        assert_eq!(editor.store.selected_id(), None);

        editor.redo();
        assert!(editor.store.is_empty());
    }

    #[test]
    fn test_undo_at_bottom_is_a_noop() {
        let mut editor = Editor::default();
        assert!(!editor.can_undo());
        editor.undo();
        assert!(editor.store.is_empty());
    }

    #[test]
    fn test_for_mockup_takes_its_area() {
        let mockup = Mockup::mug();
        let editor = Editor::for_mockup(&mockup);
        assert_eq!(editor.area, mockup.area);
    }

    #[test]
    fn test_drag_moved_without_drag_is_identity() {
        let mut editor = Editor::default();
        let p = Point::new(33.0, 44.0);
        assert_eq!(editor.drag_moved(p), p);
    }
}
