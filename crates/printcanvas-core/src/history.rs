//! Linear undo/redo over document snapshots.

use crate::shapes::Shape;

/// A captured copy of the full shape sequence at one instant.
pub type Snapshot = Vec<Shape>;

/// Linear history: a snapshot stack plus a cursor.
///
/// The cursor always points at a valid entry. Pushing after an undo
/// truncates the redo tail; boundary undo/redo calls are no-ops that hand
/// back the unchanged current snapshot. Nothing here can fail.
#[derive(Debug, Clone)]
pub struct History {
    stack: Vec<Snapshot>,
    index: usize,
}

impl History {
    /// Start a history at the given initial state.
    pub fn new(initial: Snapshot) -> Self {
        Self {
            stack: vec![initial],
            index: 0,
        }
    }

    /// The snapshot at the cursor.
    pub fn current(&self) -> &[Shape] {
        &self.stack[self.index]
    }

    /// Record a new state.
    ///
    /// A state value-equal to the current snapshot is dropped, so re-renders
    /// that change nothing do not grow the stack. Image handles compare by
    /// identity. Otherwise the redo tail is discarded, the state is cloned
    /// in, and the cursor advances.
    pub fn push_state(&mut self, state: &[Shape]) {
        if self.stack[self.index].as_slice() == state {
            return;
        }
        self.stack.truncate(self.index + 1);
        self.stack.push(state.to_vec());
        self.index += 1;
    }

    /// Step the cursor back and return the now-current snapshot.
    pub fn undo(&mut self) -> &[Shape] {
        if self.index > 0 {
            self.index -= 1;
        }
        &self.stack[self.index]
    }

    /// Step the cursor forward and return the now-current snapshot.
    pub fn redo(&mut self) -> &[Shape] {
        if self.index + 1 < self.stack.len() {
            self.index += 1;
        }
        &self.stack[self.index]
    }

    pub fn can_undo(&self) -> bool {
        self.index > 0
    }

    pub fn can_redo(&self) -> bool {
        self.index + 1 < self.stack.len()
    }

    /// Number of snapshots on the stack.
    pub fn len(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}
