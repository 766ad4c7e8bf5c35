//! Error types for the graphics pipeline.

use forecast_window::WindowError;
use ndfd_common::NdfdError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type for graphics operations.
pub type GraphicsResult<T> = Result<T, GraphicsError>;

/// Errors that can occur while producing one graphic.
#[derive(Debug, Error)]
pub enum GraphicsError {
    /// Download failed, decode failed or no periods were available.
    #[error("forecast data unavailable: {0}")]
    DataUnavailable(String),

    /// The NDFD directory name was not recognized.
    #[error(transparent)]
    InvalidDirectory(NdfdError),

    /// Map parameters or request fields are invalid.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Window selection found nothing to draw.
    #[error("no forecast window: {0}")]
    NoWindow(#[from] WindowError),

    /// Boundary geometries could not be loaded.
    #[error("boundary overlay failed: {0}")]
    Boundary(String),

    /// The renderer failed.
    #[error("rendering failed: {0}")]
    Render(String),

    /// The figure could not be written.
    #[error("failed to write figure: {0}")]
    Output(#[from] std::io::Error),
}

/// Coarse classification of a failure, used for placeholder decisions,
/// logging and metrics labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    DataUnavailable,
    InvalidDirectory,
    InvalidRequest,
    Render,
    Output,
}

impl FailureKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureKind::DataUnavailable => "data_unavailable",
            FailureKind::InvalidDirectory => "invalid_directory",
            FailureKind::InvalidRequest => "invalid_request",
            FailureKind::Render => "render",
            FailureKind::Output => "output",
        }
    }
}

impl GraphicsError {
    /// Create a DataUnavailable error.
    pub fn data_unavailable(msg: impl Into<String>) -> Self {
        Self::DataUnavailable(msg.into())
    }

    /// Create a Render error.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    pub fn kind(&self) -> FailureKind {
        match self {
            GraphicsError::DataUnavailable(_) | GraphicsError::NoWindow(_) => FailureKind::DataUnavailable,
            GraphicsError::InvalidDirectory(_) => FailureKind::InvalidDirectory,
            GraphicsError::InvalidRequest(_) => FailureKind::InvalidRequest,
            GraphicsError::Boundary(_) | GraphicsError::Render(_) => FailureKind::Render,
            GraphicsError::Output(_) => FailureKind::Output,
        }
    }
}

impl From<NdfdError> for GraphicsError {
    fn from(err: NdfdError) -> Self {
        match err {
            NdfdError::UnknownDirectory { .. } => GraphicsError::InvalidDirectory(err),
            NdfdError::EmptyPeriodSet
            | NdfdError::InvalidPeriod(_)
            | NdfdError::ShapeMismatch { .. }
            | NdfdError::BufferLength { .. } => GraphicsError::DataUnavailable(err.to_string()),
            _ => GraphicsError::InvalidRequest(err.to_string()),
        }
    }
}
