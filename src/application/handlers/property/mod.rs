//! Property command and query handlers.
//!
//! Creation, assignment and comparables are administrator actions by
//! convention; the handlers do not check the caller's role.

mod add_comparable;
mod assign_property;
mod create_property;
mod list_properties;

pub use add_comparable::{AddComparableCommand, AddComparableHandler, AddComparableResult};
pub use assign_property::{AssignPropertyCommand, AssignPropertyHandler, AssignPropertyResult};
pub use create_property::{CreatePropertyCommand, CreatePropertyHandler, CreatePropertyResult};
pub use list_properties::{ListPropertiesHandler, ListPropertiesQuery};
