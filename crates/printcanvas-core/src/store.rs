//! The shape store: the ordered shape sequence and the selection.

use crate::shapes::{Geometry, Shape, ShapeId, ShapeKind, ShapePatch};

/// Direction for single-step layer reordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerDirection {
    /// Toward the end of the sequence (drawn on top).
    Up,
    /// Toward the start of the sequence (drawn below).
    Down,
}

/// Sole owner of the live shape sequence and the selected-shape id.
///
/// Z-order is sequence order: later shapes draw on top. Operations on
/// unknown ids are silent no-ops; nothing here returns an error.
#[derive(Debug, Clone, Default)]
pub struct ShapeStore {
    shapes: Vec<Shape>,
    selected_id: Option<ShapeId>,
}

impl ShapeStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// The shape sequence, bottom to top.
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Get a shape by id.
    pub fn get(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.iter().find(|s| s.id() == id)
    }

    /// Currently selected shape id, if any.
    pub fn selected_id(&self) -> Option<ShapeId> {
        self.selected_id
    }

    /// The selected shape, if any.
    pub fn selected_shape(&self) -> Option<&Shape> {
        self.selected_id.and_then(|id| self.get(id))
    }

    /// Set or clear the selection. Selecting an unknown id clears it.
    pub fn select(&mut self, id: Option<ShapeId>) {
        self.selected_id = id.filter(|&id| self.get(id).is_some());
    }

    /// Construct a shape of `kind`, merge `props`, append it at the top of
    /// the z-order, and select it.
    ///
    /// Image and clipart shapes require a ready bitmap handle in the patch;
    /// without one the call logs a diagnostic and creates nothing. The
    /// caller is responsible for waiting on image load first.
    pub fn add_shape(&mut self, kind: ShapeKind, props: ShapePatch) -> Option<&Shape> {
        let geometry = match Geometry::default_for(kind) {
            Some(geometry) => geometry,
            None => match props.image {
                Some(ref handle) if handle.is_ready() => {
                    let bitmap = handle.bitmap();
                    let (width, height) = (bitmap.width as f64, bitmap.height as f64);
                    match kind {
                        ShapeKind::Clipart => Geometry::Clipart {
                            handle: handle.clone(),
                            width,
                            height,
                        },
                        _ => Geometry::Image {
                            handle: handle.clone(),
                            width,
                            height,
                        },
                    }
                }
                _ => {
                    log::warn!("{kind:?} shape requested without a loaded bitmap, ignoring");
                    return None;
                }
            },
        };

        let mut shape = Shape::new(100.0, 100.0, geometry);
        props.apply(&mut shape);

        let id = shape.id();
        self.shapes.push(shape);
        self.selected_id = Some(id);
        self.shapes.last()
    }

    /// Merge partial properties into the shape with `id`.
    pub fn update_shape(&mut self, id: ShapeId, props: &ShapePatch) {
        if let Some(shape) = self.shapes.iter_mut().find(|s| s.id() == id) {
            props.apply(shape);
        }
    }

    /// Remove the shape with `id`, clearing the selection if it pointed at
    /// the removed shape.
    pub fn delete_shape(&mut self, id: ShapeId) {
        self.shapes.retain(|s| s.id() != id);
        if self.selected_id == Some(id) {
            self.selected_id = None;
        }
    }

    /// Swap the shape with its immediate neighbor in the given direction.
    /// No-op at the sequence boundaries.
    pub fn move_layer(&mut self, id: ShapeId, direction: LayerDirection) {
        let Some(index) = self.shapes.iter().position(|s| s.id() == id) else {
            return;
        };
        match direction {
            LayerDirection::Up if index + 1 < self.shapes.len() => {
                self.shapes.swap(index, index + 1);
            }
            LayerDirection::Down if index > 0 => {
                self.shapes.swap(index, index - 1);
            }
            _ => {}
        }
    }

    /// Flip the visibility flag of the shape with `id`.
    pub fn toggle_visibility(&mut self, id: ShapeId) {
        if let Some(shape) = self.shapes.iter_mut().find(|s| s.id() == id) {
            shape.visible = !shape.visible;
        }
    }

    /// Flip the lock flag of the shape with `id`.
    ///
    /// Locking forces `draggable` off; unlocking restores it.
    pub fn toggle_lock(&mut self, id: ShapeId) {
        if let Some(shape) = self.shapes.iter_mut().find(|s| s.id() == id) {
            shape.locked = !shape.locked;
            shape.draggable = !shape.locked;
        }
    }

    /// Value copy of the current sequence. Image handles stay shared.
    pub fn snapshot(&self) -> Vec<Shape> {
        self.shapes.clone()
    }

    /// Replace the sequence with a snapshot, dropping the selection if the
    /// selected shape no longer exists.
    pub fn restore(&mut self, snapshot: &[Shape]) {
        self.shapes = snapshot.to_vec();
        if let Some(id) = self.selected_id {
            if self.get(id).is_none() {
                self.selected_id = None;
            }
        }
    }
}
