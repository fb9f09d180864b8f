//! User module - accounts, identity resolution and sessions.
//!
//! # Domain Invariants
//!
//! 1. A phone number belongs to at most one user
//! 2. Login succeeds only when the name matches the stored name exactly
//! 3. Users are never deleted and never renamed
//! 4. Roles are fixed at creation; only provisioning can promote

mod aggregate;
mod identity;
mod session;

pub use aggregate::{Role, User};
pub use identity::{resolve_identity, IdentityError, IdentityResolution, RolePolicy};
pub use session::Session;
