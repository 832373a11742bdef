//! Configuration loading using Figment.
//!
//! Configuration is layered from:
//! 1. Built-in defaults (every field has one)
//! 2. config/config.toml (base configuration)
//! 3. Environment variables (prefixed with LUXMON_)
//!
//! # Example
//! ```no_run
//! use luxmon::config::AppConfig;
//!
//! # fn main() -> Result<(), luxmon::LuxError> {
//! let config = AppConfig::load()?;
//! config.validate()?;
//! println!("Application: {}", config.application.name);
//! # Ok(())
//! # }
//! ```

use std::path::Path;
use std::time::Duration;

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::{AppResult, LuxError};

/// Top-level application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application settings
    #[serde(default)]
    pub application: ApplicationConfig,
    /// Sensor feed settings
    #[serde(default)]
    pub sensor: SensorConfig,
    /// Display settings
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Application name
    #[serde(default = "default_name")]
    pub name: String,
    /// Logging level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

/// Sensor feed configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SensorConfig {
    /// Whether a light sensor is present on this device. When false the
    /// GUI shows a static unavailable message and never subscribes.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Readings delivered per second
    #[serde(default = "default_sample_rate")]
    pub sample_rate_hz: f64,
    /// Mean illuminance of the simulated signal, in lux
    #[serde(default = "default_base_lux")]
    pub base_lux: f64,
    /// Uniform noise amplitude around the base, in lux
    #[serde(default = "default_noise_lux")]
    pub noise_lux: f64,
    /// Optional RNG seed for a reproducible reading sequence
    #[serde(default)]
    pub seed: Option<u64>,
}

/// Display configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Number of samples kept in the history buffer
    #[serde(default = "default_history_capacity")]
    pub history_capacity: usize,
}

// Default value functions
fn default_name() -> String {
    "luxmon".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_enabled() -> bool {
    true
}

fn default_sample_rate() -> f64 {
    2.0
}

fn default_base_lux() -> f64 {
    400.0
}

fn default_noise_lux() -> f64 {
    25.0
}

fn default_history_capacity() -> usize {
    crate::buffer::DEFAULT_CAPACITY
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            log_level: default_log_level(),
        }
    }
}

impl Default for SensorConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            sample_rate_hz: default_sample_rate(),
            base_lux: default_base_lux(),
            noise_lux: default_noise_lux(),
            seed: None,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            history_capacity: default_history_capacity(),
        }
    }
}

impl AppConfig {
    /// Load configuration from config/config.toml and environment variables
    ///
    /// Environment variables can override configuration with prefix LUXMON_
    /// Example: LUXMON_APPLICATION_LOG_LEVEL=debug
    pub fn load() -> AppResult<Self> {
        Self::load_from("config/config.toml")
    }

    /// Load configuration from a specific file path
    pub fn load_from<P: AsRef<Path>>(path: P) -> AppResult<Self> {
        let config: Self = Figment::new()
            .merge(Toml::file(path.as_ref()))
            .merge(Env::prefixed("LUXMON_").split("_"))
            .extract()?;
        Ok(config)
    }

    /// Validate configuration after loading
    pub fn validate(&self) -> AppResult<()> {
        // Validate log level
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.application.log_level.as_str()) {
            return Err(LuxError::Configuration(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.application.log_level,
                valid_levels.join(", ")
            )));
        }

        // Validate sample rate
        if !self.sensor.sample_rate_hz.is_finite() || self.sensor.sample_rate_hz <= 0.0 {
            return Err(LuxError::Configuration(format!(
                "Invalid sample_rate_hz {}. Must be a positive number",
                self.sensor.sample_rate_hz
            )));
        }

        // Validate noise amplitude
        if !self.sensor.noise_lux.is_finite() || self.sensor.noise_lux < 0.0 {
            return Err(LuxError::Configuration(format!(
                "Invalid noise_lux {}. Must be non-negative",
                self.sensor.noise_lux
            )));
        }

        // Validate history capacity
        if self.display.history_capacity < 1 {
            return Err(LuxError::Configuration(
                "Invalid history_capacity 0. Must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}

impl SensorConfig {
    /// Interval between consecutive readings
    pub fn period(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.sample_rate_hz)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_validate() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.display.history_capacity, 30);
        assert!(config.sensor.enabled);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[application]
name = "test"
log_level = "debug"

[sensor]
enabled = false
sample_rate_hz = 10.0
seed = 42

[display]
history_capacity = 5
"#
        )
        .unwrap();

        let config = AppConfig::load_from(file.path()).unwrap();
        assert_eq!(config.application.name, "test");
        assert_eq!(config.application.log_level, "debug");
        assert!(!config.sensor.enabled);
        assert_eq!(config.sensor.sample_rate_hz, 10.0);
        assert_eq!(config.sensor.seed, Some(42));
        assert_eq!(config.display.history_capacity, 5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let config = AppConfig::load_from("does/not/exist.toml").unwrap();
        assert_eq!(config.application.name, "luxmon");
        assert_eq!(config.display.history_capacity, 30);
    }

    #[test]
    fn test_invalid_log_level() {
        let mut config = AppConfig::default();
        config.application.log_level = "verbose".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_sample_rate() {
        let mut config = AppConfig::default();
        config.sensor.sample_rate_hz = 0.0;
        assert!(config.validate().is_err());
        config.sensor.sample_rate_hz = f64::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_history_capacity() {
        let mut config = AppConfig::default();
        config.display.history_capacity = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_period() {
        let config = SensorConfig {
            sample_rate_hz: 4.0,
            ..Default::default()
        };
        assert_eq!(config.period(), Duration::from_millis(250));
    }
}
