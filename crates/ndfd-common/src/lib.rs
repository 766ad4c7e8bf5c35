//! Common types and utilities shared across the NDFD forecast graphics crates.

pub mod directory;
pub mod error;
pub mod extent;
pub mod grid;
pub mod period;
pub mod time;

pub use directory::{ForecastKind, NdfdDirectory, SourceLocation};
pub use error::{NdfdError, NdfdResult};
pub use extent::{FigureSize, LambertConformal, MapExtent, MapParams};
pub use grid::Grid2D;
pub use period::{ElementKind, ForecastPeriod, ForecastPeriodSet};
pub use time::{Clock, FixedClock, SystemClock};
