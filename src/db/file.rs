use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::{debug, info};

use super::{StorageError, Store};
use crate::models::Inventory;

/// The inventory as one pretty-printed JSON file.
///
/// Saves go to a sibling `.tmp` file that is renamed over the target, so a
/// crash mid-write leaves the previous document in place. Nothing guards
/// against a second process writing the same file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "db.json".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn io_err(&self, source: std::io::Error) -> StorageError {
        StorageError::Io {
            path: self.path.clone(),
            source,
        }
    }

    /// Writes an empty document if the file does not exist yet.
    /// Returns whether a file was created.
    pub async fn ensure_initialized(&self) -> Result<bool, StorageError> {
        let exists = tokio::fs::try_exists(&self.path)
            .await
            .map_err(|e| self.io_err(e))?;
        if exists {
            return Ok(false);
        }

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| self.io_err(e))?;
        }
        self.save(&Inventory::default()).await?;
        info!(path = %self.path.display(), "Created empty inventory document");
        Ok(true)
    }
}

#[async_trait]
impl Store for JsonFileStore {
    async fn load(&self) -> Result<Inventory, StorageError> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|e| self.io_err(e))?;
        let inventory: Inventory =
            serde_json::from_slice(&bytes).map_err(|source| StorageError::Parse {
                path: self.path.clone(),
                source,
            })?;
        debug!(
            categories = inventory.categories.len(),
            products = inventory.products.len(),
            "Loaded inventory"
        );
        Ok(inventory)
    }

    async fn save(&self, inventory: &Inventory) -> Result<(), StorageError> {
        let mut bytes = serde_json::to_vec_pretty(inventory).map_err(StorageError::Serialize)?;
        bytes.push(b'\n');

        let tmp = self.tmp_path();
        tokio::fs::write(&tmp, &bytes)
            .await
            .map_err(|e| self.io_err(e))?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .map_err(|e| self.io_err(e))?;
        debug!(bytes = bytes.len(), "Saved inventory");
        Ok(())
    }
}
