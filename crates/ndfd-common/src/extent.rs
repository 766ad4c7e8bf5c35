//! Map extent, projection and figure sizing parameters.

use serde::{Deserialize, Serialize};

use crate::{NdfdError, NdfdResult};

/// Geographic extent of a map in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapExtent {
    pub western_bound: f64,
    pub eastern_bound: f64,
    pub southern_bound: f64,
    pub northern_bound: f64,
}

impl MapExtent {
    pub fn new(western_bound: f64, eastern_bound: f64, southern_bound: f64, northern_bound: f64) -> Self {
        Self {
            western_bound,
            eastern_bound,
            southern_bound,
            northern_bound,
        }
    }

    /// Width of the extent in degrees of longitude.
    pub fn width(&self) -> f64 {
        self.eastern_bound - self.western_bound
    }

    /// Height of the extent in degrees of latitude.
    pub fn height(&self) -> f64 {
        self.northern_bound - self.southern_bound
    }

    pub fn validate(&self) -> NdfdResult<()> {
        let all = [
            self.western_bound,
            self.eastern_bound,
            self.southern_bound,
            self.northern_bound,
        ];
        if all.iter().any(|v| !v.is_finite()) {
            return Err(NdfdError::InvalidExtent("bounds must be finite".to_string()));
        }
        if self.western_bound >= self.eastern_bound {
            return Err(NdfdError::InvalidExtent(format!(
                "western bound {} must be less than eastern bound {}",
                self.western_bound, self.eastern_bound
            )));
        }
        if self.southern_bound >= self.northern_bound {
            return Err(NdfdError::InvalidExtent(format!(
                "southern bound {} must be less than northern bound {}",
                self.southern_bound, self.northern_bound
            )));
        }
        if self.southern_bound < -90.0 || self.northern_bound > 90.0 {
            return Err(NdfdError::InvalidExtent(
                "latitudes must be within [-90, 90]".to_string(),
            ));
        }
        Ok(())
    }
}

/// Lambert conformal conic projection parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LambertConformal {
    pub central_longitude: f64,
    pub central_latitude: f64,
    pub first_standard_parallel: f64,
    pub second_standard_parallel: f64,
}

impl LambertConformal {
    pub fn validate(&self) -> NdfdResult<()> {
        for (param, value) in [
            ("central_latitude", self.central_latitude),
            ("first_standard_parallel", self.first_standard_parallel),
            ("second_standard_parallel", self.second_standard_parallel),
        ] {
            if !(-90.0..=90.0).contains(&value) {
                return Err(NdfdError::invalid_parameter(param, format!("{} is not a latitude", value)));
            }
        }
        if !(-180.0..=180.0).contains(&self.central_longitude) {
            return Err(NdfdError::invalid_parameter(
                "central_longitude",
                format!("{} is not a longitude", self.central_longitude),
            ));
        }
        Ok(())
    }
}

/// Figure width and height in inches.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FigureSize {
    pub width: f32,
    pub height: f32,
}

impl FigureSize {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Everything a plotting call needs to know about the map it draws.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapParams {
    #[serde(flatten)]
    pub extent: MapExtent,
    #[serde(flatten)]
    pub projection: LambertConformal,
    /// One figure size per panel count, 1 through 5.
    pub figure_sizes: [FigureSize; 5],
    /// Fraction of the axis the colorbar occupies, in (0, 1].
    pub color_table_shrink: f32,
    #[serde(default)]
    pub colorbar_pad: Option<f32>,
}

impl MapParams {
    /// Figure size for a figure with `panel_count` panels.
    pub fn figure_size(&self, panel_count: usize) -> Option<FigureSize> {
        panel_count
            .checked_sub(1)
            .and_then(|i| self.figure_sizes.get(i))
            .copied()
    }

    pub fn validate(&self) -> NdfdResult<()> {
        self.extent.validate()?;
        self.projection.validate()?;

        for (i, size) in self.figure_sizes.iter().enumerate() {
            if !(size.width > 0.0 && size.height > 0.0) {
                return Err(NdfdError::invalid_parameter(
                    format!("figure_sizes[{}]", i),
                    format!("{}x{} must be positive", size.width, size.height),
                ));
            }
        }

        if !(self.color_table_shrink > 0.0 && self.color_table_shrink <= 1.0) {
            return Err(NdfdError::invalid_parameter(
                "color_table_shrink",
                format!("{} is outside (0, 1]", self.color_table_shrink),
            ));
        }

        if let Some(pad) = self.colorbar_pad {
            if !(pad >= 0.0 && pad < 1.0) {
                return Err(NdfdError::invalid_parameter(
                    "colorbar_pad",
                    format!("{} is outside [0, 1)", pad),
                ));
            }
        }

        Ok(())
    }
}
