//! Valuation Adapters
//!
//! - **WeightedAverageValuation** - Estimate/comparables blend used by the prototype

mod weighted_average;

pub use weighted_average::{WeightedAverageValuation, DEFAULT_BASE_VALUE};
