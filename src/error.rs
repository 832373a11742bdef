//! Custom error types for the application.
//!
//! `LuxError` consolidates the error sources this application has:
//! configuration loading and validation, I/O, and sensor setup. Invalid
//! capacity input from the user is deliberately *not* an error; the
//! capacity editor discards it silently, so no variant exists for it.

use thiserror::Error;

/// Convenience alias for results using the application error type.
pub type AppResult<T> = std::result::Result<T, LuxError>;

/// Primary error type for the application.
#[derive(Error, Debug)]
pub enum LuxError {
    /// Configuration file or environment parsing failed.
    ///
    /// Permanent: fix the configuration and restart.
    #[error("Configuration error: {0}")]
    Config(#[from] figment::Error),

    /// Configuration values parsed but failed semantic validation
    /// (e.g. a zero sample rate or an unknown log level).
    #[error("Configuration validation error: {0}")]
    Configuration(String),

    /// Standard I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Sensor feed setup or delivery failed.
    #[error("Sensor error: {0}")]
    Sensor(String),

    /// A buffer was asked for a capacity below the minimum of 1.
    ///
    /// The capacity editor filters user input before it reaches the
    /// buffer, so this only surfaces on programmer error.
    #[error("Buffer capacity must be at least 1, got {0}")]
    InvalidCapacity(usize),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LuxError::Sensor("feed task died".to_string());
        assert_eq!(err.to_string(), "Sensor error: feed task died");
    }

    #[test]
    fn test_invalid_capacity_display() {
        let err = LuxError::InvalidCapacity(0);
        assert_eq!(err.to_string(), "Buffer capacity must be at least 1, got 0");
    }
}
