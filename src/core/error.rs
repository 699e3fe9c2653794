//! Error types for windowta.

use thiserror::Error;

/// Result type alias for indicator operations.
pub type Result<T> = std::result::Result<T, IndicatorError>;

/// Errors raised before an indicator computation starts.
///
/// Numeric singularities (flat windows, zero denominators) and short
/// inputs are not errors: they show up as NaN in the output.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum IndicatorError {
    /// Paired input series have different lengths.
    #[error("Data length mismatch: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// Invalid parameter value.
    #[error("Invalid parameter: {message}")]
    InvalidParameter { message: String },

    /// Invalid configuration.
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },
}

impl IndicatorError {
    /// Create a length mismatch error.
    pub fn length_mismatch(expected: usize, actual: usize) -> Self {
        Self::LengthMismatch { expected, actual }
    }

    /// Create an invalid parameter error.
    pub fn invalid_parameter(message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            message: message.into(),
        }
    }

    /// Create an invalid config error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }
}

#[cfg(feature = "python")]
impl From<IndicatorError> for pyo3::PyErr {
    fn from(err: IndicatorError) -> pyo3::PyErr {
        pyo3::exceptions::PyValueError::new_err(err.to_string())
    }
}
