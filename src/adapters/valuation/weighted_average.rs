//! Weighted-average valuation.
//!
//! `valuation = round(0.7 * base + 0.3 * comparable_average)` where `base`
//! is the property's estimated value and the comparable average is rounded
//! to a whole number first.

use crate::domain::property::Property;
use crate::ports::{Confidence, ValuationResult, ValuationService};

/// Base value used when a property carries no estimate at all.
pub const DEFAULT_BASE_VALUE: f64 = 100_000.0;

const BASE_WEIGHT: f64 = 0.7;
const COMPARABLE_WEIGHT: f64 = 0.3;
const BAND: f64 = 0.10;

/// Blends a property's own estimate with the mean of its comparables.
#[derive(Debug, Clone, Copy)]
pub struct WeightedAverageValuation {
    default_base: f64,
}

impl WeightedAverageValuation {
    pub fn new(default_base: f64) -> Self {
        Self { default_base }
    }

    /// Mean comparable value rounded to the nearest integer, 0 when empty.
    fn comparable_average(property: &Property) -> i64 {
        let comparables = property.comparables();
        if comparables.is_empty() {
            return 0;
        }
        let total: f64 = comparables.iter().map(|c| c.value).sum();
        (total / comparables.len() as f64).round() as i64
    }
}

impl Default for WeightedAverageValuation {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_VALUE)
    }
}

impl ValuationService for WeightedAverageValuation {
    fn valuate(&self, property: &Property) -> ValuationResult {
        // An explicit 0 is a real estimate; only a missing value falls back.
        let base = property.estimated_value().unwrap_or(self.default_base);
        let comparable_average = Self::comparable_average(property);

        let valuation =
            (BASE_WEIGHT * base + COMPARABLE_WEIGHT * comparable_average as f64).round() as i64;

        let confidence = if property.comparables().is_empty() {
            Confidence::Low
        } else {
            Confidence::Medium
        };

        let low = (valuation as f64 * (1.0 - BAND)).round() as i64;
        let high = (valuation as f64 * (1.0 + BAND)).round() as i64;
        let reasoning = format!(
            "Base value {} weighted 70% and comparable average {} weighted 30% \
             give {}. Expected range {} to {} (±10%).",
            base, comparable_average, valuation, low, high
        );

        tracing::debug!(
            property_id = %property.id(),
            valuation,
            ?confidence,
            "Valuation computed"
        );

        ValuationResult {
            valuation,
            base,
            comparable_average,
            confidence,
            reasoning,
        }
    }
}
