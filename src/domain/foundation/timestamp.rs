//! Timestamp value object for immutable points in time.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Immutable point in time, always UTC.
///
/// Serialized as an RFC 3339 string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Creates a timestamp for the current moment.
    pub fn now() -> Self {
        Self(Utc::now())
    }
}

impl Default for Timestamp {
    fn default() -> Self {
        Self::now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(rfc3339: &str) -> Timestamp {
        serde_json::from_value(serde_json::json!(rfc3339)).unwrap()
    }

    #[test]
    fn timestamp_now_creates_current_time() {
        let before = Utc::now();
        let ts = Timestamp::now();
        let after = Utc::now();

        assert!(ts.0 >= before);
        assert!(ts.0 <= after);
    }

    #[test]
    fn timestamp_orders_chronologically() {
        let earlier = at("2024-01-01T00:00:00Z");
        let later = at("2024-06-01T00:00:00Z");
        assert!(earlier < later);
    }

    #[test]
    fn timestamp_serializes_as_rfc3339_string() {
        let ts = at("2024-03-15T10:30:00Z");
        let json = serde_json::to_string(&ts).unwrap();
        assert_eq!(json, "\"2024-03-15T10:30:00Z\"");

        let parsed: Timestamp = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, ts);
    }

    #[test]
    fn timestamp_rejects_epoch_millis() {
        assert!(serde_json::from_value::<Timestamp>(serde_json::json!(1_704_067_200_000_i64)).is_err());
    }
}
