//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Persistence
//!
//! - `CollectionStore` - Durable key-value storage of serialized collections
//!
//! ## Pluggable Services
//!
//! - `PropertySearch` - Free-text property filtering
//! - `ValuationService` - Property valuation
//! - `MintingService` - Token issuance

mod collection_store;
mod minting_service;
mod property_search;
mod valuation_service;

pub use collection_store::{
    load_records, save_collection, CollectionKey, CollectionStore, StoreError,
};
pub use minting_service::MintingService;
pub use property_search::PropertySearch;
pub use valuation_service::{Confidence, ValuationResult, ValuationService};
