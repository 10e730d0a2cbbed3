//! In-memory storage implementation.

use super::{BoxFuture, DesignStore, SavedDesign, StorageError, StorageResult, upsert_record};
use crate::shapes::Shape;
use std::sync::RwLock;
use uuid::Uuid;

/// In-memory storage for testing and ephemeral use.
#[derive(Default)]
pub struct MemoryStorage {
    designs: RwLock<Vec<SavedDesign>>,
}

impl MemoryStorage {
    /// Create a new empty memory storage.
    pub fn new() -> Self {
        Self::default()
    }
}

impl DesignStore for MemoryStorage {
    fn save(
        &self,
        name: &str,
        shapes: &[Shape],
        mockup_name: &str,
    ) -> BoxFuture<'_, StorageResult<SavedDesign>> {
        let record_input = (name.to_string(), shapes.to_vec(), mockup_name.to_string());
        Box::pin(async move {
            let (name, shapes, mockup_name) = record_input;
            let mut designs = self
                .designs
                .write()
                .map_err(|e| StorageError::Other(format!("Lock error: {}", e)))?;

            let existing = designs.iter().position(|d| d.name == name);
            let record = upsert_record(
                existing.map(|i| &designs[i]),
                &name,
                &shapes,
                &mockup_name,
            );
            match existing {
                Some(i) => designs[i] = record.clone(),
                None => designs.push(record.clone()),
            }
            Ok(record)
        })
    }

    fn load(&self, id: Uuid) -> BoxFuture<'_, StorageResult<SavedDesign>> {
        Box::pin(async move {
            let designs = self
                .designs
                .read()
                .map_err(|e| StorageError::Other(format!("Lock error: {}", e)))?;
            designs
                .iter()
                .find(|d| d.id == id)
                .cloned()
                .ok_or_else(|| StorageError::NotFound(id.to_string()))
        })
    }

    fn delete(&self, id: Uuid) -> BoxFuture<'_, StorageResult<bool>> {
        Box::pin(async move {
            let mut designs = self
                .designs
                .write()
                .map_err(|e| StorageError::Other(format!("Lock error: {}", e)))?;
            let before = designs.len();
            designs.retain(|d| d.id != id);
            Ok(designs.len() != before)
        })
    }

    fn list(&self) -> BoxFuture<'_, StorageResult<Vec<SavedDesign>>> {
        Box::pin(async move {
            let designs = self
                .designs
                .read()
                .map_err(|e| StorageError::Other(format!("Lock error: {}", e)))?;
            Ok(designs.clone())
        })
    }
}
