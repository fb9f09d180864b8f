//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to infrastructure and to the pluggable
//! services. Each submodule provides implementations for a specific port.
//!
//! ## Available Adapters
//!
//! - `storage` - File and in-memory collection stores
//! - `search` - Substring property search
//! - `valuation` - Weighted-average valuation
//! - `minting` - Random-identifier token minting

pub mod minting;
pub mod search;
pub mod storage;
pub mod valuation;

pub use minting::RandomIdMinter;
pub use search::SubstringSearch;
pub use storage::{FileCollectionStore, InMemoryCollectionStore};
pub use valuation::WeightedAverageValuation;
