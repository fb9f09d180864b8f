//! File-based Collection Store Adapter
//!
//! Stores each collection as a JSON document on disk, one file per
//! collection key (`users.json`, `properties.json`, `tokens.json`).
//! Backups of documents that did not decode go to `<key>.json.corrupt`.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::ports::{CollectionKey, CollectionStore, StoreError};

/// File-based storage for serialized collections
#[derive(Debug, Clone)]
pub struct FileCollectionStore {
    base_path: PathBuf,
}

impl FileCollectionStore {
    /// Create a new file store rooted at a directory
    ///
    /// # Example
    /// ```ignore
    /// let store = FileCollectionStore::new("./data");
    /// ```
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    /// Get the document path for a collection
    fn collection_path(&self, key: CollectionKey) -> PathBuf {
        self.base_path.join(format!("{}.json", key.as_str()))
    }

    /// Get the staging path used while replacing a collection
    fn staging_path(&self, key: CollectionKey) -> PathBuf {
        self.base_path.join(format!("{}.json.tmp", key.as_str()))
    }

    /// Get the path holding the backup of a collection
    fn backup_path(&self, key: CollectionKey) -> PathBuf {
        self.base_path.join(format!("{}.json.corrupt", key.as_str()))
    }
}

#[async_trait]
impl CollectionStore for FileCollectionStore {
    async fn load(&self, key: CollectionKey) -> Result<Option<String>, StoreError> {
        let file_path = self.collection_path(key);

        if !file_path.exists() {
            return Ok(None);
        }

        let document = fs::read_to_string(&file_path)
            .await
            .map_err(|e| StoreError::Read {
                key,
                message: e.to_string(),
            })?;

        Ok(Some(document))
    }

    async fn save(&self, key: CollectionKey, document: &str) -> Result<(), StoreError> {
        let write_err = |e: std::io::Error| StoreError::Write {
            key,
            message: e.to_string(),
        };

        fs::create_dir_all(&self.base_path).await.map_err(write_err)?;

        // Stage then rename so a crash never leaves a half-written collection
        let staging = self.staging_path(key);
        fs::write(&staging, document).await.map_err(write_err)?;
        fs::rename(&staging, self.collection_path(key))
            .await
            .map_err(write_err)?;

        Ok(())
    }

    async fn backup(&self, key: CollectionKey) -> Result<(), StoreError> {
        let file_path = self.collection_path(key);
        if !file_path.exists() {
            return Ok(());
        }

        fs::copy(&file_path, self.backup_path(key))
            .await
            .map_err(|e| StoreError::Write {
                key,
                message: e.to_string(),
            })?;

        Ok(())
    }
}
