//! Test data generators for synthetic NDFD forecast periods.
//!
//! These generators create predictable, verifiable test data patterns
//! that can be used across the test suite.

use chrono::{DateTime, Duration, Utc};
use ndfd_common::{ElementKind, ForecastPeriod, ForecastPeriodSet, Grid2D, MapExtent};

/// Creates a temperature grid in °F.
///
/// Each cell value is `base + col + 10 * row`, which makes it easy to check
/// which grid (and which point) ended up where.
///
/// # Example
///
/// ```
/// use test_utils::temperature_grid;
///
/// let grid = temperature_grid(4, 3, 70.0);
/// assert_eq!(grid.len(), 12);
/// assert_eq!(grid.get(0, 0), Some(70.0));
/// assert_eq!(grid.get(1, 2), Some(91.0)); // 70 + 1 + 20
/// ```
pub fn temperature_grid(width: usize, height: usize, base: f32) -> Grid2D {
    Grid2D::from_fn(width, height, |col, row| base + col as f32 + 10.0 * row as f32)
}

/// Creates latitude and longitude grids spanning `extent`.
///
/// Row 0 is the southern edge, column 0 the western edge.
pub fn lat_lon_grids(width: usize, height: usize, extent: &MapExtent) -> (Grid2D, Grid2D) {
    let step = |span: f64, n: usize| if n > 1 { span / (n - 1) as f64 } else { 0.0 };
    let dlon = step(extent.width(), width);
    let dlat = step(extent.height(), height);

    let lats = Grid2D::from_fn(width, height, |_, row| {
        (extent.southern_bound + row as f64 * dlat) as f32
    });
    let lons = Grid2D::from_fn(width, height, |col, _| {
        (extent.western_bound + col as f64 * dlon) as f32
    });
    (lats, lons)
}

/// Creates one forecast period with hour-aligned start and end times.
///
/// `base` offsets the temperature pattern so periods are distinguishable.
pub fn forecast_period(start: DateTime<Utc>, hours: i64, base: f32) -> ForecastPeriod {
    let extent = MapExtent::new(-125.0, -65.0, 24.0, 50.0);
    let (lats, lons) = lat_lon_grids(6, 4, &extent);
    ForecastPeriod::new(
        temperature_grid(6, 4, base),
        lats,
        lons,
        start,
        start + Duration::hours(hours),
    )
    .expect("generated period is valid")
}

/// Creates `count` consecutive daily periods for an element.
///
/// Maximum temperature periods run 12Z-00Z and minimum temperature periods
/// run 00Z-14Z, as NDFD issues them. Period `n` has base temperature
/// `60 + 5n` (max) or `40 + 5n` (min).
///
/// # Panics
///
/// Panics if `count` is 0; an empty set cannot be constructed.
pub fn period_set(count: usize, element: ElementKind, first_day: DateTime<Utc>) -> ForecastPeriodSet {
    let (offset_hours, span_hours, base) = match element {
        ElementKind::MaxTemp => (12, 12, 60.0),
        ElementKind::MinTemp => (24, 14, 40.0),
    };
    let periods = (0..count)
        .map(|n| {
            let start = first_day + Duration::hours(offset_hours + 24 * n as i64);
            forecast_period(start, span_hours, base + 5.0 * n as f32)
        })
        .collect();
    ForecastPeriodSet::new(periods).expect("generated period set is valid")
}

/// Creates a grid filled with a constant value.
///
/// Useful for testing edge cases and simple scenarios.
pub fn constant_grid(width: usize, height: usize, value: f32) -> Grid2D {
    Grid2D::filled(width, height, value)
}
