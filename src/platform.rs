//! Sensor capability gate.
//!
//! Availability is decided once at startup from configuration and
//! threaded through to the GUI, which shows a static message instead of
//! the monitoring controls when no sensor is present.

use crate::config::AppConfig;

/// Whether a light sensor can be used on this device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SensorAvailability {
    /// A sensor feed can be subscribed.
    Available,
    /// No sensor; `reason` is shown to the user verbatim.
    Unavailable {
        /// Human-readable explanation for the missing sensor.
        reason: String,
    },
}

impl SensorAvailability {
    /// Evaluate availability from the loaded configuration.
    pub fn detect(config: &AppConfig) -> Self {
        if config.sensor.enabled {
            Self::Available
        } else {
            Self::Unavailable {
                reason: "No ambient light sensor is available on this device.".to_string(),
            }
        }
    }

    /// True when a subscription may be started.
    pub fn is_available(&self) -> bool {
        matches!(self, Self::Available)
    }
}
