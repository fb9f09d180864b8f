//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Command handlers mutate state and persist; query handlers only read.

pub mod handlers;
mod persistence;
mod state;
mod tokenization_core;

pub use persistence::PersistenceWarning;
pub use state::AppState;
pub use tokenization_core::{CoreError, CoreOptions, CoreServices, TokenizationCore};
