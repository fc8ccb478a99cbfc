// src/error.rs
use std::fmt;

/// Error types for the gbm-mc-pricer library
#[derive(Debug, Clone, PartialEq)]
pub enum McError {
    /// Invalid scalar parameter values
    InvalidParameters {
        parameter: String,
        value: f64,
        constraint: String,
    },

    /// Invalid configuration (counts, unparsable settings)
    InvalidConfiguration { field: String, reason: String },

    /// Pricing requested on an empty terminal price set
    EmptySample { reason: String },

    /// Non-finite result from extreme inputs
    NumericalInstability { method: String, reason: String },
}

impl fmt::Display for McError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            McError::InvalidParameters {
                parameter,
                value,
                constraint,
            } => {
                write!(
                    f,
                    "Invalid parameter '{}' = {}: {}",
                    parameter, value, constraint
                )
            }
            McError::InvalidConfiguration { field, reason } => {
                write!(f, "Invalid configuration for '{}': {}", field, reason)
            }
            McError::EmptySample { reason } => {
                write!(f, "Empty terminal price sample: {}", reason)
            }
            McError::NumericalInstability { method, reason } => {
                write!(f, "Numerical instability in {}: {}", method, reason)
            }
        }
    }
}

impl std::error::Error for McError {}

/// Result type alias for gbm-mc-pricer operations
pub type McResult<T> = Result<T, McError>;

/// Validation utilities
pub mod validation {
    use super::{McError, McResult};

    /// Validate that a parameter is finite and positive
    pub fn validate_positive(name: &str, value: f64) -> McResult<()> {
        validate_finite(name, value)?;
        if value <= 0.0 {
            Err(McError::InvalidParameters {
                parameter: name.to_string(),
                value,
                constraint: "must be positive (> 0)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate that a parameter is finite and non-negative
    pub fn validate_non_negative(name: &str, value: f64) -> McResult<()> {
        validate_finite(name, value)?;
        if value < 0.0 {
            Err(McError::InvalidParameters {
                parameter: name.to_string(),
                value,
                constraint: "must be non-negative (≥ 0)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate that a value is finite and not NaN
    pub fn validate_finite(name: &str, value: f64) -> McResult<()> {
        if !value.is_finite() {
            Err(McError::InvalidParameters {
                parameter: name.to_string(),
                value,
                constraint: "must be finite (not NaN or infinite)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate the number of simulated paths (M)
    pub fn validate_paths(paths: usize) -> McResult<()> {
        if paths == 0 {
            Err(McError::InvalidConfiguration {
                field: "paths".to_string(),
                reason: "must be greater than 0".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate the number of time steps (N)
    pub fn validate_steps(steps: usize) -> McResult<()> {
        if steps == 0 {
            Err(McError::InvalidConfiguration {
                field: "steps".to_string(),
                reason: "must be greater than 0".to_string(),
            })
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::validation::*;
    use super::*;

    #[test]
    fn test_validate_positive() {
        assert!(validate_positive("s0", 100.0).is_ok());
        assert!(validate_positive("s0", 0.0).is_err());
        assert!(validate_positive("s0", -1.0).is_err());
        assert!(validate_positive("s0", f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_non_negative() {
        assert!(validate_non_negative("sigma", 0.0).is_ok());
        assert!(validate_non_negative("sigma", 0.2).is_ok());
        assert!(validate_non_negative("sigma", -0.01).is_err());
        assert!(validate_non_negative("sigma", f64::NAN).is_err());
    }

    #[test]
    fn test_validate_finite() {
        assert!(validate_finite("value", 1.0).is_ok());
        assert!(validate_finite("value", f64::NAN).is_err());
        assert!(validate_finite("value", f64::INFINITY).is_err());
        assert!(validate_finite("value", f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_validate_counts() {
        assert!(validate_paths(1).is_ok());
        assert!(validate_steps(1).is_ok());
        assert!(validate_paths(2_000_000_000).is_ok());
        assert!(validate_steps(200_000).is_ok());

        let err = validate_paths(0).unwrap_err();
        assert!(matches!(err, McError::InvalidConfiguration { ref field, .. } if field == "paths"));

        let err = validate_steps(0).unwrap_err();
        assert!(matches!(err, McError::InvalidConfiguration { ref field, .. } if field == "steps"));
    }

    #[test]
    fn test_error_display() {
        let error = McError::InvalidParameters {
            parameter: "sigma".to_string(),
            value: -0.1,
            constraint: "must be non-negative".to_string(),
        };

        let display = format!("{}", error);
        assert!(display.contains("sigma"));
        assert!(display.contains("-0.1"));
        assert!(display.contains("non-negative"));
    }
}
