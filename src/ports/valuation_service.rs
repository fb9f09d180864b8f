//! Valuation Service Port - Interface for property valuation.
//!
//! Valuation is a pure function of a property and its comparables. The
//! in-repo implementation is a weighted average; a model-backed service
//! can replace it behind this trait.

use serde::{Deserialize, Serialize};

use crate::domain::property::Property;

/// How much the estimate should be trusted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    /// No comparables were available.
    Low,
    /// At least one comparable contributed.
    Medium,
}

/// Result of a valuation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValuationResult {
    pub valuation: i64,
    pub base: f64,
    pub comparable_average: i64,
    pub confidence: Confidence,
    /// Human-readable explanation including a ±10% band.
    pub reasoning: String,
}

/// Port for valuing a property.
pub trait ValuationService: Send + Sync {
    fn valuate(&self, property: &Property) -> ValuationResult;
}
