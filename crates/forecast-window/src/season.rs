//! Seasonal color scale selection.
//!
//! Temperature graphics use different contour ranges in the warm season
//! (April through October) and the cold season (November through March).
//! The switch happens at month rollover with no regard for day of month.

use std::fmt;

use chrono::{DateTime, Datelike, Utc};
use ndfd_common::ElementKind;
use serde::{Deserialize, Serialize};

use crate::{WindowError, WindowResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Season {
    Warm,
    Cold,
}

impl Season {
    /// Season for a calendar month, 1 = January.
    pub fn for_month(month: u32) -> WindowResult<Self> {
        match month {
            4..=10 => Ok(Season::Warm),
            1..=3 | 11..=12 => Ok(Season::Cold),
            _ => Err(WindowError::InvalidMonth(month)),
        }
    }

    /// Season at an instant, by UTC month.
    pub fn at(time: DateTime<Utc>) -> Self {
        // chrono months are always 1-12
        Self::for_month(time.month()).unwrap_or(Season::Cold)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Season::Warm => "warm",
            Season::Cold => "cold",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Groups of graphics that share contour levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScaleFamily {
    MaximumTemperature,
    MinimumTemperature,
    ExtremeHeat,
    FrostFreeze,
}

/// Contour levels and title for one graphic.
///
/// `colormap` names the palette; building it is up to the renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorScale {
    pub season: Option<Season>,
    pub levels: Vec<f32>,
    pub title: String,
    pub colormap: String,
    pub units: String,
}

impl ColorScale {
    /// Scale for a family in the given season.
    pub fn seasonal(family: ScaleFamily, season: Season) -> Self {
        use ScaleFamily::*;
        use Season::*;

        let (low, high, title, colormap) = match (family, season) {
            (MaximumTemperature, Warm) => (40, 120, "Maximum Temperature", "temperature"),
            (MaximumTemperature, Cold) => (-10, 80, "Maximum Temperature", "temperature"),
            (MinimumTemperature, Warm) => (20, 100, "Minimum Temperature", "temperature"),
            (MinimumTemperature, Cold) => (-30, 60, "Minimum Temperature", "temperature"),
            (ExtremeHeat, Warm) => (
                80,
                120,
                "Extreme Heat (Maximum Temperature >= 80°F)",
                "excessive_heat",
            ),
            (ExtremeHeat, Cold) => (
                70,
                110,
                "Extreme Heat (Maximum Temperature >= 70°F)",
                "excessive_heat",
            ),
            (FrostFreeze, _) => (
                -10,
                32,
                "Frost/Freeze (Minimum Temperature <= 32°F)",
                "frost_freeze",
            ),
        };

        Self {
            season: Some(season),
            levels: levels(low, high),
            title: title.to_string(),
            colormap: colormap.to_string(),
            units: "°F".to_string(),
        }
    }

    /// Diverging scale for trend panels. Same in every season.
    pub fn trend(element: ElementKind) -> Self {
        let title = match element {
            ElementKind::MaxTemp => "Maximum Temperature Trend",
            ElementKind::MinTemp => "Minimum Temperature Trend",
        };
        Self {
            season: None,
            levels: levels(-20, 20),
            title: title.to_string(),
            colormap: "temperature_change".to_string(),
            units: "°F".to_string(),
        }
    }

    /// Lowest contour level; values below it are left unfilled.
    pub fn threshold(&self) -> Option<f32> {
        self.levels.first().copied()
    }
}

/// Whole-degree levels from `low` to `high` inclusive.
fn levels(low: i32, high: i32) -> Vec<f32> {
    (low..=high).map(|v| v as f32).collect()
}
