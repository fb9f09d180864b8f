//! In-Memory Collection Store Adapter
//!
//! Stores serialized collections in memory.
//! Useful for testing and development.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::ports::{CollectionKey, CollectionStore, StoreError};

/// In-memory storage for serialized collections
#[derive(Debug, Clone, Default)]
pub struct InMemoryCollectionStore {
    documents: Arc<RwLock<HashMap<CollectionKey, String>>>,
    backups: Arc<RwLock<HashMap<CollectionKey, String>>>,
    fail_writes: Arc<AtomicBool>,
    fail_reads: Arc<AtomicBool>,
    save_count: Arc<AtomicUsize>,
}

impl InMemoryCollectionStore {
    /// Create a new in-memory store
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent save fail (or succeed again)
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Make every subsequent load fail (or succeed again)
    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    /// Seed a raw document, bypassing failure injection
    pub async fn put_raw(&self, key: CollectionKey, document: impl Into<String>) {
        self.documents.write().await.insert(key, document.into());
    }

    /// Get the raw document stored for a collection
    pub async fn document(&self, key: CollectionKey) -> Option<String> {
        self.documents.read().await.get(&key).cloned()
    }

    /// Get the backed-up document for a collection
    pub async fn backup_document(&self, key: CollectionKey) -> Option<String> {
        self.backups.read().await.get(&key).cloned()
    }

    /// Number of successful saves since creation
    pub fn save_count(&self) -> usize {
        self.save_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CollectionStore for InMemoryCollectionStore {
    async fn load(&self, key: CollectionKey) -> Result<Option<String>, StoreError> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(StoreError::Read {
                key,
                message: "simulated read failure".to_string(),
            });
        }
        Ok(self.documents.read().await.get(&key).cloned())
    }

    async fn save(&self, key: CollectionKey, document: &str) -> Result<(), StoreError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StoreError::Write {
                key,
                message: "simulated write failure".to_string(),
            });
        }
        self.documents
            .write()
            .await
            .insert(key, document.to_string());
        self.save_count.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn backup(&self, key: CollectionKey) -> Result<(), StoreError> {
        if let Some(document) = self.document(key).await {
            self.backups.write().await.insert(key, document);
        }
        Ok(())
    }
}
