//! Property entity.
//!
//! Properties are listed by an administrator, optionally assigned to a
//! user, and annotated with comparable sales that feed valuation.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::foundation::{
    require_amount, require_text, ComparableId, PropertyId, Timestamp, UserId, ValidationError,
};

/// A comparable sale recorded against a property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comparable {
    pub id: ComparableId,
    pub value: f64,
}

/// Fields supplied when listing a new property.
#[derive(Debug, Clone, Default)]
pub struct NewProperty {
    pub title: String,
    pub address: String,
    pub estimated_value: f64,
    pub assigned_to: Option<UserId>,
    pub metadata: Map<String, Value>,
}

/// A listed real-world asset.
///
/// # Invariants
///
/// - `title` is non-empty
/// - `estimated_value`, when present, is finite and non-negative
/// - `comparables` only grows and keeps insertion order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    id: PropertyId,
    title: String,
    #[serde(default)]
    address: String,

    /// `None` only for stored documents that never carried a value.
    #[serde(default)]
    estimated_value: Option<f64>,

    #[serde(default)]
    comparables: Vec<Comparable>,

    /// Placeholder attachments, carried through untouched.
    #[serde(default)]
    documents: Vec<Value>,

    #[serde(default)]
    assigned_to: Option<UserId>,

    created_at: Timestamp,

    /// Free-form attributes, searched as text.
    #[serde(default)]
    metadata: Map<String, Value>,
}

impl Property {
    /// Create a new property with a fresh id and empty annotations.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the title is blank
    /// - `InvalidAmount` if the estimated value is negative or not finite
    pub fn new(input: NewProperty) -> Result<Self, ValidationError> {
        require_text("title", &input.title)?;
        require_amount("estimated_value", input.estimated_value)?;

        Ok(Self {
            id: PropertyId::new(),
            title: input.title,
            address: input.address,
            estimated_value: Some(input.estimated_value),
            comparables: Vec::new(),
            documents: Vec::new(),
            assigned_to: input.assigned_to,
            created_at: Timestamp::now(),
            metadata: input.metadata,
        })
    }

    pub fn id(&self) -> &PropertyId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn estimated_value(&self) -> Option<f64> {
        self.estimated_value
    }

    pub fn comparables(&self) -> &[Comparable] {
        &self.comparables
    }

    pub fn documents(&self) -> &[Value] {
        &self.documents
    }

    pub fn assigned_to(&self) -> Option<&UserId> {
        self.assigned_to.as_ref()
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn metadata(&self) -> &Map<String, Value> {
        &self.metadata
    }

    /// Assigns the property to a user, replacing any previous assignee.
    pub fn assign_to(&mut self, user_id: UserId) {
        self.assigned_to = Some(user_id);
    }

    /// Appends a comparable sale and returns it.
    ///
    /// # Errors
    ///
    /// - `InvalidAmount` if the value is negative or not finite
    pub fn add_comparable(&mut self, value: f64) -> Result<&Comparable, ValidationError> {
        require_amount("comparable_value", value)?;
        self.comparables.push(Comparable {
            id: ComparableId::new(),
            value,
        });
        Ok(&self.comparables[self.comparables.len() - 1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn listing(title: &str, value: f64) -> NewProperty {
        NewProperty {
            title: title.to_string(),
            address: "12 Harbour Rd".to_string(),
            estimated_value: value,
            ..Default::default()
        }
    }

    #[test]
    fn new_property_defaults_annotations() {
        let property = Property::new(listing("Harbour Loft", 250_000.0)).unwrap();
        assert_eq!(property.title(), "Harbour Loft");
        assert_eq!(property.estimated_value(), Some(250_000.0));
        assert!(property.comparables().is_empty());
        assert!(property.documents().is_empty());
        assert!(property.assigned_to().is_none());
        assert!(property.metadata().is_empty());
    }

    #[test]
    fn new_property_rejects_empty_title() {
        let err = Property::new(listing("", 1.0)).unwrap_err();
        assert_eq!(err, ValidationError::empty_field("title"));
    }

    #[test]
    fn new_property_rejects_negative_value() {
        let err = Property::new(listing("Loft", -10.0)).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidAmount { .. }));
    }

    #[test]
    fn new_property_accepts_zero_value() {
        let property = Property::new(listing("Plot", 0.0)).unwrap();
        assert_eq!(property.estimated_value(), Some(0.0));
    }

    #[test]
    fn comparables_keep_insertion_order() {
        let mut property = Property::new(listing("Loft", 1.0)).unwrap();
        property.add_comparable(300.0).unwrap();
        property.add_comparable(100.0).unwrap();
        property.add_comparable(200.0).unwrap();

        let values: Vec<f64> = property.comparables().iter().map(|c| c.value).collect();
        assert_eq!(values, vec![300.0, 100.0, 200.0]);
    }

    #[test]
    fn invalid_comparable_is_not_appended() {
        let mut property = Property::new(listing("Loft", 1.0)).unwrap();
        assert!(property.add_comparable(f64::NAN).is_err());
        assert!(property.comparables().is_empty());
    }

    #[test]
    fn assign_replaces_previous_assignee() {
        let mut property = Property::new(listing("Loft", 1.0)).unwrap();
        let first = UserId::new();
        let second = UserId::new();
        property.assign_to(first);
        property.assign_to(second);
        assert_eq!(property.assigned_to(), Some(&second));
    }

    #[test]
    fn serializes_with_camel_case_fields() {
        let property = Property::new(listing("Loft", 5.0)).unwrap();
        let value = serde_json::to_value(&property).unwrap();
        assert_eq!(value["estimatedValue"], json!(5.0));
        assert_eq!(value["assignedTo"], Value::Null);
        assert!(value.get("createdAt").is_some());
        assert_eq!(value["comparables"], json!([]));
    }

    #[test]
    fn document_without_estimated_value_deserializes_as_absent() {
        let doc = json!({
            "id": "550e8400-e29b-41d4-a716-446655440000",
            "title": "Old listing",
            "createdAt": "2024-01-01T00:00:00Z"
        });
        let property: Property = serde_json::from_value(doc).unwrap();
        assert_eq!(property.estimated_value(), None);
        assert_eq!(property.address(), "");
    }
}
