//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors)
//! - `user` - Accounts, identity resolution and sessions
//! - `property` - Property listing, assignment and comparables
//! - `token` - Minted tokens and the token ledger

pub mod foundation;
pub mod property;
pub mod token;
pub mod user;
