//! Storage Adapters
//!
//! Implementations of the CollectionStore port.
//!
//! ## Available Adapters
//!
//! - **FileCollectionStore** - Stores collections as JSON files on disk
//! - **InMemoryCollectionStore** - Stores collections in memory (testing/development)
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::{FileCollectionStore, InMemoryCollectionStore};
//!
//! // Production: file-based storage
//! let store = FileCollectionStore::new("./data");
//!
//! // Testing: in-memory storage
//! let store = InMemoryCollectionStore::new();
//! ```

mod file_collection_store;
mod in_memory_collection_store;

pub use file_collection_store::FileCollectionStore;
pub use in_memory_collection_store::InMemoryCollectionStore;
