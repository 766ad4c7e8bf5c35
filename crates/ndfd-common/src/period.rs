//! Decoded forecast periods.
//!
//! One NDFD GRIB message corresponds to one forecast period: a value grid
//! plus the latitude/longitude grids it is defined on and the period's
//! valid start and end times.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::time::is_hour_aligned;
use crate::{Grid2D, NdfdError, NdfdResult};

/// The NDFD weather element a forecast period was decoded from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementKind {
    /// Daytime maximum temperature (`ds.maxt.bin`)
    MaxTemp,
    /// Overnight minimum temperature (`ds.mint.bin`)
    MinTemp,
}

impl ElementKind {
    /// File name of the element within an NDFD forecast directory.
    pub fn file_name(&self) -> &'static str {
        match self {
            ElementKind::MaxTemp => "ds.maxt.bin",
            ElementKind::MinTemp => "ds.mint.bin",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ElementKind::MaxTemp => "max_temp",
            ElementKind::MinTemp => "min_temp",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ElementKind {
    type Err = NdfdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "max_temp" | "maxt" => Ok(ElementKind::MaxTemp),
            "min_temp" | "mint" => Ok(ElementKind::MinTemp),
            _ => Err(NdfdError::InvalidElement(s.to_string())),
        }
    }
}

/// A single decoded forecast period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastPeriod {
    /// Forecast values in °F
    pub values: Grid2D,
    pub latitudes: Grid2D,
    pub longitudes: Grid2D,
    /// Start of the period's valid window
    pub start: DateTime<Utc>,
    /// End of the period's valid window
    pub end: DateTime<Utc>,
}

impl ForecastPeriod {
    /// Create a period, checking that all grids agree on shape and that
    /// the valid window is a non-empty span of whole hours.
    pub fn new(
        values: Grid2D,
        latitudes: Grid2D,
        longitudes: Grid2D,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> NdfdResult<Self> {
        values.ensure_same_shape(&latitudes)?;
        values.ensure_same_shape(&longitudes)?;
        // Labels carry hour precision
        for (name, t) in [("start", &start), ("end", &end)] {
            if !is_hour_aligned(t) {
                return Err(NdfdError::invalid_period(format!(
                    "{} {} is not on the hour",
                    name,
                    t.to_rfc3339()
                )));
            }
        }
        if end <= start {
            return Err(NdfdError::invalid_period(format!(
                "end {} is not after start {}",
                end.to_rfc3339(),
                start.to_rfc3339()
            )));
        }
        Ok(Self {
            values,
            latitudes,
            longitudes,
            start,
            end,
        })
    }

    pub fn shape(&self) -> (usize, usize) {
        self.values.shape()
    }
}

/// The ordered periods decoded for one element and forecast range.
///
/// Never empty. Periods are kept in ascending start-time order and all
/// share one grid shape.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastPeriodSet {
    periods: Vec<ForecastPeriod>,
}

impl ForecastPeriodSet {
    /// Build a set from decoded periods, sorting them into canonical order.
    pub fn new(mut periods: Vec<ForecastPeriod>) -> NdfdResult<Self> {
        let (expected_nx, expected_ny) = periods.first().ok_or(NdfdError::EmptyPeriodSet)?.shape();
        if let Some(period) = periods.iter().find(|p| p.shape() != (expected_nx, expected_ny)) {
            let (nx, ny) = period.shape();
            return Err(NdfdError::ShapeMismatch {
                expected_nx,
                expected_ny,
                nx,
                ny,
            });
        }
        periods.sort_by_key(|p| p.start);
        Ok(Self { periods })
    }

    /// Number of decoded periods.
    pub fn len(&self) -> usize {
        self.periods.len()
    }

    /// Always false.
    pub fn is_empty(&self) -> bool {
        self.periods.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ForecastPeriod> {
        self.periods.get(index)
    }

    pub fn periods(&self) -> &[ForecastPeriod] {
        &self.periods
    }

    pub fn iter(&self) -> impl Iterator<Item = &ForecastPeriod> {
        self.periods.iter()
    }

    /// Grid shape shared by every period.
    pub fn shape(&self) -> (usize, usize) {
        self.periods[0].shape()
    }
}

impl<'a> IntoIterator for &'a ForecastPeriodSet {
    type Item = &'a ForecastPeriod;
    type IntoIter = std::slice::Iter<'a, ForecastPeriod>;

    fn into_iter(self) -> Self::IntoIter {
        self.periods.iter()
    }
}
