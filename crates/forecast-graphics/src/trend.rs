//! Trend grids: the change in a forecast field between two periods.

use std::borrow::Cow;

use forecast_window::PanelSource;
use ndfd_common::{ForecastPeriodSet, Grid2D, NdfdError, NdfdResult};
use rayon::prelude::*;

/// `current - previous`, point by point. Missing (NaN) points stay missing.
pub fn difference(current: &Grid2D, previous: &Grid2D) -> NdfdResult<Grid2D> {
    current.ensure_same_shape(previous)?;

    let data: Vec<f32> = current
        .values()
        .par_iter()
        .zip(previous.values().par_iter())
        .map(|(c, p)| c - p)
        .collect();

    Grid2D::new(current.nx(), current.ny(), data)
}

/// Values shown by a panel: borrowed for raw panels, computed for trends.
pub fn panel_values<'a>(periods: &'a ForecastPeriodSet, source: &PanelSource) -> NdfdResult<Cow<'a, Grid2D>> {
    let period = |index: usize| {
        periods.get(index).ok_or_else(|| {
            NdfdError::invalid_period(format!(
                "panel references period {} of {}",
                index,
                periods.len()
            ))
        })
    };

    match *source {
        PanelSource::Raw { period: index } => Ok(Cow::Borrowed(&period(index)?.values)),
        PanelSource::Trend { current, previous } => {
            let grid = difference(&period(current)?.values, &period(previous)?.values)?;
            Ok(Cow::Owned(grid))
        }
    }
}
