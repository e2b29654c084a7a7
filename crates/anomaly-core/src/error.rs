//! Error types for anomaly detection
//!
//! Provides a unified error type for all anomaly-detection crates.

use thiserror::Error;

/// Core error type for anomaly detection operations
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Insufficient data for the requested operation
    #[error("Insufficient data: expected at least {expected} samples, got {actual}")]
    InsufficientData { expected: usize, actual: usize },

    /// The input sequence contains a not-a-number value
    #[error("Series contains a non-numeric value at position {position}")]
    NonNumeric { position: usize },

    /// Numerical computation error
    #[error("Computation error: {0}")]
    Computation(String),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for an empty sample
    pub fn empty_sample(operation: &str) -> Self {
        Self::InvalidParameter(format!("{operation} requires a non-empty sample"))
    }

    /// Create an error for a fraction outside (0, 1]
    pub fn invalid_fraction(name: &str, value: f64) -> Self {
        Self::InvalidParameter(format!("{name} must be in (0, 1], got {value}"))
    }

    /// Create an error for a significance level outside (0, 1)
    pub fn invalid_significance(value: f64) -> Self {
        Self::InvalidParameter(format!("alpha must be in (0, 1), got {value}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidParameter("alpha must be positive".to_string());
        assert_eq!(err.to_string(), "Invalid parameter: alpha must be positive");

        let err = Error::InsufficientData {
            expected: 14,
            actual: 5,
        };
        assert_eq!(
            err.to_string(),
            "Insufficient data: expected at least 14 samples, got 5"
        );

        let err = Error::NonNumeric { position: 15 };
        assert_eq!(
            err.to_string(),
            "Series contains a non-numeric value at position 15"
        );

        let err = Error::Computation("quantile inversion failed".to_string());
        assert_eq!(err.to_string(), "Computation error: quantile inversion failed");
    }

    #[test]
    fn test_error_helper_functions() {
        let err = Error::empty_sample("median");
        assert_eq!(
            err.to_string(),
            "Invalid parameter: median requires a non-empty sample"
        );

        let err = Error::invalid_fraction("max_anoms", 1.5);
        assert_eq!(
            err.to_string(),
            "Invalid parameter: max_anoms must be in (0, 1], got 1.5"
        );

        let err = Error::invalid_significance(0.0);
        assert_eq!(err.to_string(), "Invalid parameter: alpha must be in (0, 1), got 0");
    }

    #[test]
    fn test_result_type_alias() {
        fn test_function(succeed: bool) -> Result<i32> {
            if succeed {
                Ok(42)
            } else {
                Err(Error::Computation("test failure".to_string()))
            }
        }

        assert_eq!(test_function(true).unwrap(), 42);
        assert!(test_function(false).is_err());
    }
}
