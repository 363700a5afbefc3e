pub mod file;
#[cfg(test)]
pub mod memory;

use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::RwLock;

use crate::error::AppResult;
use crate::models::*;

pub use file::JsonFileStore;
#[cfg(test)]
pub use memory::MemoryStore;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{} is not a valid inventory document: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to serialize inventory: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// Whole-document persistence. Implementations do no locking of their own;
/// `Db` serializes access.
#[async_trait]
pub trait Store: Send + Sync {
    async fn load(&self) -> Result<Inventory, StorageError>;
    async fn save(&self, inventory: &Inventory) -> Result<(), StorageError>;
}

/// Shared handle over a `Store`. Each mutation runs load → mutate → save
/// under the write side of `lock`, so concurrent requests in this process
/// cannot lose each other's updates.
#[derive(Clone)]
pub struct Db {
    store: Arc<dyn Store>,
    lock: Arc<RwLock<()>>,
}

impl Db {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self {
            store,
            lock: Arc::new(RwLock::new(())),
        }
    }

    pub async fn read(&self) -> AppResult<Inventory> {
        let _guard = self.lock.read().await;
        Ok(self.store.load().await?)
    }

    /// Nothing is saved when `f` fails.
    pub async fn mutate<F, R>(&self, f: F) -> AppResult<R>
    where
        F: FnOnce(&mut Inventory) -> AppResult<R>,
    {
        let _guard = self.lock.write().await;
        let mut inventory = self.store.load().await?;
        let out = f(&mut inventory)?;
        self.store.save(&inventory).await?;
        Ok(out)
    }
}

// ── Categories ────────────────────────────────────────────────────────────────

pub async fn fetch_all_categories(db: &Db) -> AppResult<Vec<Category>> {
    Ok(db.read().await?.categories)
}

pub async fn insert_category(db: &Db, payload: Category) -> AppResult<Category> {
    db.mutate(|inv| inv.insert_category(payload)).await
}

pub async fn update_category(db: &Db, id: i64, payload: Category) -> AppResult<Category> {
    db.mutate(|inv| inv.update_category(id, payload)).await
}

pub async fn delete_category(db: &Db, id: i64) -> AppResult<Category> {
    db.mutate(|inv| inv.remove_category(id)).await
}

// ── Products ──────────────────────────────────────────────────────────────────

pub async fn fetch_all_products(db: &Db) -> AppResult<Vec<ProductWithCategory>> {
    Ok(db.read().await?.products_with_categories())
}

pub async fn insert_product(db: &Db, payload: Product) -> AppResult<Product> {
    db.mutate(|inv| inv.insert_product(payload)).await
}

pub async fn update_product(db: &Db, sku: &str, payload: &ProductUpdate) -> AppResult<Product> {
    db.mutate(|inv| inv.update_product(sku, payload)).await
}

pub async fn delete_product(db: &Db, sku: &str) -> AppResult<Product> {
    db.mutate(|inv| inv.remove_product(sku)).await
}
