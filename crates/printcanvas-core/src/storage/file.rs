//! File-based storage implementation for native platforms.

use super::{BoxFuture, DesignStore, SavedDesign, StorageError, StorageResult, upsert_record};
use crate::shapes::Shape;
use std::fs;
use std::path::PathBuf;
use uuid::Uuid;

/// File-based storage for native platforms.
///
/// Keeps the whole design list in one JSON file, mirroring the single
/// local-storage entry a browser host uses.
pub struct FileStorage {
    /// Path of the designs file.
    path: PathBuf,
}

impl FileStorage {
    /// Create a file storage rooted at the given directory.
    ///
    /// Creates the directory if it doesn't exist.
    pub fn new(base_path: PathBuf) -> StorageResult<Self> {
        if !base_path.exists() {
            fs::create_dir_all(&base_path).map_err(|e| {
                StorageError::Io(format!("Failed to create storage directory: {}", e))
            })?;
        }
        Ok(Self {
            path: base_path.join("designs.json"),
        })
    }

    /// Create file storage in the default location.
    ///
    /// On Unix: `~/.local/share/printcanvas/`
    /// On Windows: `%LOCALAPPDATA%\printcanvas\`
    pub fn default_location() -> StorageResult<Self> {
        let base = dirs::data_local_dir()
            .or_else(dirs::home_dir)
            .ok_or_else(|| StorageError::Io("Could not determine home directory".to_string()))?;
        Self::new(base.join("printcanvas"))
    }

    /// The designs file path.
    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    fn read_all(&self) -> StorageResult<Vec<SavedDesign>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let json = fs::read_to_string(&self.path)
            .map_err(|e| StorageError::Io(format!("Failed to read {}: {}", self.path.display(), e)))?;
        serde_json::from_str(&json).map_err(|e| {
            StorageError::Serialization(format!("Failed to parse {}: {}", self.path.display(), e))
        })
    }

    fn write_all(&self, designs: &[SavedDesign]) -> StorageResult<()> {
        let json = serde_json::to_string_pretty(designs)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;
        fs::write(&self.path, json)
            .map_err(|e| StorageError::Io(format!("Failed to write {}: {}", self.path.display(), e)))
    }
}

impl DesignStore for FileStorage {
    fn save(
        &self,
        name: &str,
        shapes: &[Shape],
        mockup_name: &str,
    ) -> BoxFuture<'_, StorageResult<SavedDesign>> {
        let input = (name.to_string(), shapes.to_vec(), mockup_name.to_string());
        Box::pin(async move {
            let (name, shapes, mockup_name) = input;
            let mut designs = self.read_all()?;

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

            self.write_all(&designs)?;
            Ok(record)
        })
    }

    fn load(&self, id: Uuid) -> BoxFuture<'_, StorageResult<SavedDesign>> {
        Box::pin(async move {
            self.read_all()?
                .into_iter()
                .find(|d| d.id == id)
                .ok_or_else(|| StorageError::NotFound(id.to_string()))
        })
    }

    fn delete(&self, id: Uuid) -> BoxFuture<'_, StorageResult<bool>> {
        Box::pin(async move {
            let mut designs = self.read_all()?;
            let before = designs.len();
            designs.retain(|d| d.id != id);
            let removed = designs.len() != before;
            if removed {
                self.write_all(&designs)?;
            }
            Ok(removed)
        })
    }

    fn list(&self) -> BoxFuture<'_, StorageResult<Vec<SavedDesign>>> {
        Box::pin(async move { self.read_all() })
    }
}
