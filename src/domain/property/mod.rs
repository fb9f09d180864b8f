//! Property domain module.
//!
//! Listing, assignment and comparable annotation of real-world assets.
//! Properties are never deleted.

mod aggregate;
mod catalogue;
mod errors;

pub use aggregate::{Comparable, NewProperty, Property};
pub use catalogue::PropertyCatalogue;
pub use errors::PropertyError;
