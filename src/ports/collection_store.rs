//! Collection Store Port - Interface for durable key-value persistence.
//!
//! The store holds one text document per named collection. Each save
//! replaces the whole collection snapshot; there is no partial update.
//!
//! # Failure policy
//!
//! - Reads are best-effort: [`load_records`] decodes records one by one,
//!   skipping the ones that do not decode and logging a warning. A missing
//!   or unreadable collection starts empty.
//! - A document that did not decode cleanly is backed up through
//!   [`CollectionStore::backup`] before the next save replaces it.
//! - Writes are reported: [`save_collection`] returns the error so callers
//!   can surface it as a warning while keeping in-memory state.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::fmt;

use crate::domain::foundation::ErrorCode;

/// The named collections kept in durable storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollectionKey {
    Users,
    Properties,
    Tokens,
}

impl CollectionKey {
    pub const ALL: [CollectionKey; 3] = [
        CollectionKey::Users,
        CollectionKey::Properties,
        CollectionKey::Tokens,
    ];

    /// The storage key for this collection.
    pub fn as_str(&self) -> &'static str {
        match self {
            CollectionKey::Users => "users",
            CollectionKey::Properties => "properties",
            CollectionKey::Tokens => "tokens",
        }
    }
}

impl fmt::Display for CollectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Errors that can occur during store operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("Failed to read collection '{key}': {message}")]
    Read { key: CollectionKey, message: String },

    #[error("Failed to write collection '{key}': {message}")]
    Write { key: CollectionKey, message: String },

    #[error("Failed to serialize collection '{key}': {message}")]
    Serialization { key: CollectionKey, message: String },

    #[error("Failed to deserialize collection '{key}': {message}")]
    Deserialization { key: CollectionKey, message: String },
}

impl StoreError {
    pub fn code(&self) -> ErrorCode {
        match self {
            StoreError::Read { .. } | StoreError::Deserialization { .. } => {
                ErrorCode::StorageReadError
            }
            StoreError::Write { .. } | StoreError::Serialization { .. } => {
                ErrorCode::StorageWriteError
            }
        }
    }
}

/// Port for persisting serialized collections
#[async_trait]
pub trait CollectionStore: Send + Sync {
    /// Load the serialized document for a collection.
    ///
    /// # Returns
    /// `None` if the collection has never been saved
    ///
    /// # Errors
    /// Returns `StoreError::Read` if the backing medium cannot be read
    async fn load(&self, key: CollectionKey) -> Result<Option<String>, StoreError>;

    /// Replace the serialized document for a collection.
    ///
    /// # Errors
    /// Returns `StoreError::Write` if the document cannot be written
    async fn save(&self, key: CollectionKey, document: &str) -> Result<(), StoreError>;

    /// Copy the current document for a collection aside, replacing any
    /// earlier copy. Does nothing if the collection has never been saved.
    ///
    /// # Errors
    /// Returns `StoreError::Write` if the copy cannot be made
    async fn backup(&self, key: CollectionKey) -> Result<(), StoreError>;
}

/// Loads a collection and decodes each record on its own.
///
/// Records that fail to decode are skipped; the rest are kept in stored
/// order. When anything was skipped, or the document is not a JSON array,
/// the stored document is backed up first.
pub async fn load_records<T>(store: &dyn CollectionStore, key: CollectionKey) -> Vec<T>
where
    T: DeserializeOwned,
{
    let document = match store.load(key).await {
        Ok(Some(document)) => document,
        Ok(None) => {
            tracing::debug!(collection = %key, "No stored collection, starting empty");
            return Vec::new();
        }
        Err(e) => {
            tracing::warn!(collection = %key, error = %e, "Collection unreadable, starting empty");
            return Vec::new();
        }
    };

    let entries: Vec<Value> = match serde_json::from_str(&document) {
        Ok(entries) => entries,
        Err(e) => {
            let err = StoreError::Deserialization {
                key,
                message: e.to_string(),
            };
            tracing::warn!(collection = %key, error = %err, "Collection corrupt, starting empty");
            keep_backup(store, key).await;
            return Vec::new();
        }
    };

    let total = entries.len();
    let mut records = Vec::with_capacity(total);
    for (index, entry) in entries.into_iter().enumerate() {
        match serde_json::from_value(entry) {
            Ok(record) => records.push(record),
            Err(e) => {
                tracing::warn!(collection = %key, index, error = %e, "Skipping undecodable record");
            }
        }
    }

    if records.len() < total {
        keep_backup(store, key).await;
    }
    records
}

async fn keep_backup(store: &dyn CollectionStore, key: CollectionKey) {
    match store.backup(key).await {
        Ok(()) => tracing::info!(collection = %key, "Stored document backed up"),
        Err(e) => tracing::warn!(collection = %key, error = %e, "Stored document could not be backed up"),
    }
}

/// Encodes and saves a collection snapshot.
pub async fn save_collection<T>(
    store: &dyn CollectionStore,
    key: CollectionKey,
    value: &T,
) -> Result<(), StoreError>
where
    T: Serialize + ?Sized,
{
    let document = serde_json::to_string(value).map_err(|e| StoreError::Serialization {
        key,
        message: e.to_string(),
    })?;
    store.save(key, &document).await
}
