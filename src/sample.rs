//! Core data type for sensor readings.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single ambient-light reading from the sensor feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LightSample {
    /// Time the reading was produced.
    pub timestamp: DateTime<Utc>,
    /// Illuminance in lux. No bound is enforced beyond the domain
    /// convention that readings are non-negative.
    pub illuminance: f64,
}

impl LightSample {
    /// Create a sample stamped with the current time.
    pub fn new(illuminance: f64) -> Self {
        Self {
            timestamp: Utc::now(),
            illuminance,
        }
    }

    /// Create a sample with an explicit timestamp.
    pub fn at(timestamp: DateTime<Utc>, illuminance: f64) -> Self {
        Self {
            timestamp,
            illuminance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_stamps_current_time() {
        let before = Utc::now();
        let sample = LightSample::new(312.5);
        let after = Utc::now();
        assert_eq!(sample.illuminance, 312.5);
        assert!(sample.timestamp >= before && sample.timestamp <= after);
    }

    #[test]
    fn test_at_keeps_explicit_timestamp() {
        let ts = Utc::now();
        let sample = LightSample::at(ts, 0.0);
        assert_eq!(sample.timestamp, ts);
        assert_eq!(sample.illuminance, 0.0);
    }
}
