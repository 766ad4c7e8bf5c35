//! Error types for window selection.

use ndfd_common::{ElementKind, ForecastKind};
use thiserror::Error;

/// Result type for window selection.
pub type WindowResult<T> = Result<T, WindowError>;

/// Errors raised while selecting a forecast window.
#[derive(Debug, Error)]
pub enum WindowError {
    /// No forecast periods are available at all.
    #[error("no forecast periods available")]
    NoPeriods,

    /// Hour outside 0-23.
    #[error("invalid UTC hour: {0}")]
    InvalidHour(u32),

    /// Month outside 1-12.
    #[error("invalid month: {0}")]
    InvalidMonth(u32),

    /// No row of the rule table covers the request.
    #[error("no window rule for {forecast_kind} {element} with {period_count} periods at {utc_hour}Z")]
    NoMatchingRule {
        forecast_kind: ForecastKind,
        element: ElementKind,
        period_count: usize,
        utc_hour: u32,
    },

    /// A rule referenced a period the set does not contain.
    #[error("window references period {index} but only {available} are available")]
    MissingPeriod { index: usize, available: usize },
}
