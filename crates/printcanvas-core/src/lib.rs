//! PrintCanvas Core Library
//!
//! Platform-agnostic document model and editing logic for the PrintCanvas
//! product designer: the shape store, undo/redo history, alignment guides,
//! and the interaction controller tying them together.

pub mod align;
pub mod editor;
pub mod history;
pub mod input;
pub mod mockup;
pub mod shapes;
pub mod storage;
pub mod store;
pub mod surface;

pub use align::{DragSnap, GuideSet, SNAP_THRESHOLD, compute_guides, evaluate_drag, snap_position};
pub use editor::Editor;
pub use history::{History, Snapshot};
pub use input::{InputState, KeyEvent, Modifiers, MouseButton, PointerEvent};
pub use mockup::{DesignableArea, Mockup};
pub use shapes::{
    Bitmap, Geometry, ImageFormat, ImageHandle, SerializableColor, Shadow, Shape, ShapeId,
    ShapeKind, ShapePatch, ShapeStyle, TextAlign,
};
pub use storage::{DesignStore, MemoryStorage, SavedDesign, StorageError};
pub use store::{LayerDirection, ShapeStore};
pub use surface::{ExportKind, ExportOptions, HitTarget, NodeTransform, RenderSurface};

#[cfg(not(target_arch = "wasm32"))]
pub use storage::FileStorage;
