//! Common test fixtures for the forecast graphics tests.
//!
//! This module provides pre-defined test data that represents common
//! scenarios in NDFD graphics generation.

use chrono::{DateTime, TimeZone, Utc};
use ndfd_common::{FigureSize, LambertConformal, MapExtent, MapParams};

/// Hour-aligned UTC instant.
///
/// # Panics
///
/// Panics on an invalid date.
pub fn utc(year: i32, month: u32, day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, 0, 0)
        .single()
        .expect("valid fixture date")
}

/// Common map extents, (west, east, south, north).
pub mod extent {
    /// Continental United States
    pub const CONUS: (f64, f64, f64, f64) = (-126.0, -66.0, 24.0, 50.5);

    /// Southern California GACC
    pub const SOUTH_OPS: (f64, f64, f64, f64) = (-122.1, -114.0, 32.4, 39.0);
}

/// Map parameters for a CONUS graphic.
pub fn conus_map_params() -> MapParams {
    map_params(extent::CONUS, -96.0, 39.0)
}

/// Map parameters for a Southern California graphic.
pub fn south_ops_map_params() -> MapParams {
    map_params(extent::SOUTH_OPS, -118.0, 35.7)
}

fn map_params(
    (west, east, south, north): (f64, f64, f64, f64),
    central_longitude: f64,
    central_latitude: f64,
) -> MapParams {
    MapParams {
        extent: MapExtent::new(west, east, south, north),
        projection: LambertConformal {
            central_longitude,
            central_latitude,
            first_standard_parallel: 33.0,
            second_standard_parallel: 45.0,
        },
        figure_sizes: [
            FigureSize::new(12.0, 10.0),
            FigureSize::new(16.0, 8.0),
            FigureSize::new(24.0, 8.0),
            FigureSize::new(16.0, 14.0),
            FigureSize::new(30.0, 7.0),
        ],
        color_table_shrink: 0.7,
        colorbar_pad: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_params_are_valid() {
        assert!(conus_map_params().validate().is_ok());
        assert!(south_ops_map_params().validate().is_ok());
    }
}
