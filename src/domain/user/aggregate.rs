//! User entity.
//!
//! A user is identified by phone number; the name acts as the matching
//! half of the (name, phone) pair presented at login.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{require_text, UserId, ValidationError};

/// Privilege level of a user account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// May list properties, assign them and add comparables.
    Administrator,
    /// May browse, request valuations and mint tokens.
    Standard,
}

impl Role {
    /// Returns true for the administrator role.
    pub fn is_administrator(&self) -> bool {
        matches!(self, Role::Administrator)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Administrator => write!(f, "administrator"),
            Role::Standard => write!(f, "standard"),
        }
    }
}

/// A registered user.
///
/// # Invariants
///
/// - `phone` is unique across the user collection
/// - `name` and `phone` never change after creation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    name: String,
    phone: String,

    /// Absent on records written before roles were stored.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<Role>,
}

impl User {
    /// Create a new user with a fresh id.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if name or phone is blank
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        role: Role,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        let phone = phone.into();
        require_text("name", &name)?;
        require_text("phone", &phone)?;

        Ok(Self {
            id: UserId::new(),
            name,
            phone,
            role: Some(role),
        })
    }

    /// Reconstitute a user from persistence (no validation).
    pub fn reconstitute(id: UserId, name: String, phone: String, role: Option<Role>) -> Self {
        Self {
            id,
            name,
            phone,
            role,
        }
    }

    pub fn id(&self) -> &UserId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    /// The stored role, if one was recorded.
    pub fn role(&self) -> Option<Role> {
        self.role
    }

    /// Grants the administrator role. Only reachable through provisioning.
    pub(crate) fn promote_to_administrator(&mut self) {
        self.role = Some(Role::Administrator);
    }
}
