use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::{StorageError, Store};
use crate::models::Inventory;

/// In-process store used by tests in place of the JSON file.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inventory: Mutex<Inventory>,
    saves: AtomicU64,
}

impl MemoryStore {
    pub fn new(inventory: Inventory) -> Self {
        Self {
            inventory: Mutex::new(inventory),
            saves: AtomicU64::new(0),
        }
    }

    pub async fn snapshot(&self) -> Inventory {
        self.inventory.lock().await.clone()
    }

    pub fn save_count(&self) -> u64 {
        self.saves.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn load(&self) -> Result<Inventory, StorageError> {
        Ok(self.inventory.lock().await.clone())
    }

    async fn save(&self, inventory: &Inventory) -> Result<(), StorageError> {
        *self.inventory.lock().await = inventory.clone();
        self.saves.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }
}
