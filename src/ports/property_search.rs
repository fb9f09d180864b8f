//! Property Search Port - Interface for property retrieval.
//!
//! The in-repo implementation is a substring filter; a ranked or semantic
//! backend can replace it as long as it keeps the same shape.

use crate::domain::property::Property;

/// Port for filtering properties by a free-text query.
///
/// # Contract
///
/// - A blank query returns the input unchanged
/// - Results keep the input's relative order
/// - Input properties are never modified
pub trait PropertySearch: Send + Sync {
    fn search(&self, query: &str, properties: &[Property]) -> Vec<Property>;
}
