//! RWA Tokenizer - local state and domain mutation layer
//!
//! Users, properties and tokens for a real-world-asset tokenization
//! prototype, kept consistent with a durable collection store.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
