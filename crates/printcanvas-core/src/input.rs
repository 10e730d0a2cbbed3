//! Input event types for the editor.

use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Mouse button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Modifier keys state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

/// Pointer event type for unified mouse/touch handling.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum PointerEvent {
    Down {
        position: Point,
        button: MouseButton,
    },
    Up {
        position: Point,
        button: MouseButton,
    },
    Move {
        position: Point,
    },
}

/// Keyboard event type. Keys are named as the host reports them
/// ("Escape", "Delete", "Backspace", ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum KeyEvent {
    Pressed(String),
    Released(String),
}

/// Tracks input state the editor consults across events.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    /// Current pointer position in canvas coordinates.
    pub pointer_position: Point,
    /// Whether a shape drag is in flight.
    pub is_dragging: bool,
    /// Whether an input/textarea/contenteditable element has keyboard
    /// focus. Drags and shortcuts are suppressed while true.
    pub text_input_focused: bool,
    /// Current modifier keys state.
    pub modifiers: Modifiers,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process a pointer event.
    pub fn handle_pointer_event(&mut self, event: &PointerEvent) {
        match event {
            PointerEvent::Down { position, .. }
            | PointerEvent::Up { position, .. }
            | PointerEvent::Move { position } => {
                self.pointer_position = *position;
            }
        }
    }

    /// Update modifier keys state.
    pub fn set_modifiers(&mut self, modifiers: Modifiers) {
        self.modifiers = modifiers;
    }

    /// Report whether a text control owns keyboard focus.
    pub fn set_text_input_focused(&mut self, focused: bool) {
        self.text_input_focused = focused;
    }
}
