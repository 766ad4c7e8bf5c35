//! Error types for NDFD forecast data handling.

use thiserror::Error;

/// Result type alias using NdfdError.
pub type NdfdResult<T> = Result<T, NdfdError>;

/// Primary error type for forecast data validation.
#[derive(Debug, Error)]
pub enum NdfdError {
    // === Source Errors ===
    #[error("Unknown NDFD directory '{name}'. Valid directories: {}", valid.join(", "))]
    UnknownDirectory { name: String, valid: Vec<String> },

    #[error("Invalid forecast kind: {0}")]
    InvalidForecastKind(String),

    #[error("Invalid element: {0}")]
    InvalidElement(String),

    // === Grid Errors ===
    #[error("Grid shape mismatch: expected {expected_nx}x{expected_ny}, got {nx}x{ny}")]
    ShapeMismatch {
        expected_nx: usize,
        expected_ny: usize,
        nx: usize,
        ny: usize,
    },

    #[error("Grid buffer has {len} values, expected {nx}x{ny}")]
    BufferLength { nx: usize, ny: usize, len: usize },

    // === Period Errors ===
    #[error("Forecast period set is empty")]
    EmptyPeriodSet,

    #[error("Invalid forecast period: {0}")]
    InvalidPeriod(String),

    // === Map Errors ===
    #[error("Invalid map extent: {0}")]
    InvalidExtent(String),

    #[error("Invalid parameter value for '{param}': {message}")]
    InvalidParameter { param: String, message: String },
}

impl NdfdError {
    /// Create an InvalidParameter error.
    pub fn invalid_parameter(param: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            param: param.into(),
            message: message.into(),
        }
    }

    /// Create an InvalidPeriod error.
    pub fn invalid_period(msg: impl Into<String>) -> Self {
        Self::InvalidPeriod(msg.into())
    }
}
