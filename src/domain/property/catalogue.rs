//! Ordered property collection.

use serde::{Deserialize, Serialize};

use super::{Comparable, Property};
use crate::domain::foundation::{PropertyId, UserId, ValidationError};

/// All listed properties, most recently created first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropertyCatalogue {
    properties: Vec<Property>,
}

impl PropertyCatalogue {
    pub fn new(properties: Vec<Property>) -> Self {
        Self { properties }
    }

    pub fn as_slice(&self) -> &[Property] {
        &self.properties
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn get(&self, id: &PropertyId) -> Option<&Property> {
        self.properties.iter().find(|p| p.id() == id)
    }

    /// Inserts at the head of the collection.
    pub fn insert_newest(&mut self, property: Property) {
        self.properties.insert(0, property);
    }

    /// Assigns the matching property. Returns false, changing nothing,
    /// when no property has `id`.
    pub fn assign(&mut self, id: &PropertyId, user_id: UserId) -> bool {
        match self.properties.iter_mut().find(|p| p.id() == id) {
            Some(property) => {
                property.assign_to(user_id);
                true
            }
            None => false,
        }
    }

    /// Appends a comparable to the matching property. Returns `Ok(None)`,
    /// changing nothing, when no property has `id`.
    pub fn add_comparable(
        &mut self,
        id: &PropertyId,
        value: f64,
    ) -> Result<Option<Comparable>, ValidationError> {
        match self.properties.iter_mut().find(|p| p.id() == id) {
            Some(property) => property.add_comparable(value).map(|c| Some(c.clone())),
            None => Ok(None),
        }
    }

    /// Properties currently assigned to `user_id`, in catalogue order.
    pub fn assigned_to<'a>(&'a self, user_id: &'a UserId) -> impl Iterator<Item = &'a Property> {
        self.properties
            .iter()
            .filter(move |p| p.assigned_to() == Some(user_id))
    }
}
