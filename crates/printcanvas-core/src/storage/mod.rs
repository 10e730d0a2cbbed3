//! Persistence of saved designs.
//!
//! The shape store is the source of truth; a backend only receives
//! `(name, shapes, mockup name)` and hands back records. Saving under an
//! existing name updates that record in place.

mod memory;

#[cfg(not(target_arch = "wasm32"))]
mod file;

pub use memory::MemoryStorage;

#[cfg(not(target_arch = "wasm32"))]
pub use file::FileStorage;

use crate::shapes::Shape;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::pin::Pin;
use thiserror::Error;
use uuid::Uuid;

/// Storage errors.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Design not found: {0}")]
    NotFound(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("IO error: {0}")]
    Io(String),
    #[error("Storage error: {0}")]
    Other(String),
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Boxed future for async operations (compatible with WASM).
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// A stored design record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedDesign {
    pub id: Uuid,
    pub name: String,
    pub shapes: Vec<Shape>,
    pub mockup_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Trait for design storage backends.
///
/// Note: On native platforms, implementations must be Send + Sync.
/// On WASM, these bounds are relaxed since it's single-threaded.
#[cfg(not(target_arch = "wasm32"))]
pub trait DesignStore: Send + Sync {
    /// Save a design, updating any existing record with the same name.
    fn save(
        &self,
        name: &str,
        shapes: &[Shape],
        mockup_name: &str,
    ) -> BoxFuture<'_, StorageResult<SavedDesign>>;

    /// Load a design by id.
    fn load(&self, id: Uuid) -> BoxFuture<'_, StorageResult<SavedDesign>>;

    /// Delete a design by id. Returns whether a record was removed.
    fn delete(&self, id: Uuid) -> BoxFuture<'_, StorageResult<bool>>;

    /// List all saved designs.
    fn list(&self) -> BoxFuture<'_, StorageResult<Vec<SavedDesign>>>;
}

/// Trait for design storage backends (WASM version without Send + Sync).
#[cfg(target_arch = "wasm32")]
pub trait DesignStore {
    /// Save a design, updating any existing record with the same name.
    fn save(
        &self,
        name: &str,
        shapes: &[Shape],
        mockup_name: &str,
    ) -> BoxFuture<'_, StorageResult<SavedDesign>>;

    /// Load a design by id.
    fn load(&self, id: Uuid) -> BoxFuture<'_, StorageResult<SavedDesign>>;

    /// Delete a design by id. Returns whether a record was removed.
    fn delete(&self, id: Uuid) -> BoxFuture<'_, StorageResult<bool>>;

    /// List all saved designs.
    fn list(&self) -> BoxFuture<'_, StorageResult<Vec<SavedDesign>>>;
}

/// Build an updated or fresh record for an upsert-by-name save.
fn upsert_record(
    existing: Option<&SavedDesign>,
    name: &str,
    shapes: &[Shape],
    mockup_name: &str,
) -> SavedDesign {
    let now = Utc::now();
    SavedDesign {
        id: existing.map(|d| d.id).unwrap_or_else(Uuid::new_v4),
        name: name.to_string(),
        shapes: shapes.to_vec(),
        mockup_name: mockup_name.to_string(),
        created_at: existing.map(|d| d.created_at).unwrap_or(now),
        updated_at: now,
    }
}

#[cfg(test)]
pub(crate) fn block_on<F: Future>(f: F) -> F::Output {
    // Simple blocking executor for tests
    use std::task::{Context, Poll, RawWaker, RawWakerVTable, Waker};

    fn dummy_raw_waker() -> RawWaker {
        fn no_op(_: *const ()) {}
        fn clone(_: *const ()) -> RawWaker {
            dummy_raw_waker()
        }
        static VTABLE: RawWakerVTable = RawWakerVTable::new(clone, no_op, no_op, no_op);
        RawWaker::new(std::ptr::null(), &VTABLE)
    }

    let waker = unsafe { Waker::from_raw(dummy_raw_waker()) };
    let mut cx = Context::from_waker(&waker);
    let mut f = std::pin::pin!(f);

    loop {
        match f.as_mut().poll(&mut cx) {
            Poll::Ready(result) => return result,
            Poll::Pending => {}
        }
    }
}
