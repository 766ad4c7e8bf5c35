//! NDFD geographic directories and forecast ranges.
//!
//! NDFD publishes each element as one binary per area and valid-period
//! range, e.g. `/SL.us008001/ST.opnl/DF.gr2/DC.ndfd/AR.conus/VP.001-003/ds.maxt.bin`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{ElementKind, NdfdError};

/// Root of the operational NDFD GRIB2 tree.
pub const NDFD_ROOT: &str = "/SL.us008001/ST.opnl/DF.gr2/DC.ndfd";

/// Forecast range of an NDFD product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ForecastKind {
    /// Days 1-3
    ShortTerm,
    /// Days 4-7
    Extended,
}

impl ForecastKind {
    /// Valid-period directory for this range.
    pub fn period_directory(&self) -> &'static str {
        match self {
            ForecastKind::ShortTerm => "VP.001-003",
            ForecastKind::Extended => "VP.004-007",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ForecastKind::ShortTerm => "short_term",
            ForecastKind::Extended => "extended",
        }
    }
}

impl fmt::Display for ForecastKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ForecastKind {
    type Err = NdfdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "short_term" | "short" => Ok(ForecastKind::ShortTerm),
            "extended" => Ok(ForecastKind::Extended),
            _ => Err(NdfdError::InvalidForecastKind(s.to_string())),
        }
    }
}

/// (area code, display name)
const AREAS: &[(&str, &str)] = &[
    ("conus", "CONUS"),
    ("alaska", "Alaska"),
    ("hawaii", "Hawaii"),
    ("guam", "Guam"),
    ("puertori", "Puerto Rico"),
    ("pacnwest", "Pacific Northwest"),
    ("pacswest", "Pacific Southwest"),
    ("nrockies", "Northern Rockies"),
    ("crrocks", "Central Rockies"),
    ("srockies", "Southern Rockies"),
    ("nplains", "Northern Plains"),
    ("crplains", "Central Plains"),
    ("splains", "Southern Plains"),
    ("umissvly", "Upper Mississippi Valley"),
    ("crmissvy", "Central Mississippi Valley"),
    ("smissvly", "Southern Mississippi Valley"),
    ("crgrlake", "Central Great Lakes"),
    ("ergrlake", "Eastern Great Lakes"),
    ("neast", "Northeast"),
    ("midatlan", "Mid-Atlantic"),
    ("seast", "Southeast"),
];

/// A named NDFD geographic area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NdfdDirectory {
    index: usize,
}

impl NdfdDirectory {
    pub const CONUS: NdfdDirectory = NdfdDirectory { index: 0 };

    /// Every known directory, in catalogue order.
    pub fn all() -> impl Iterator<Item = NdfdDirectory> {
        (0..AREAS.len()).map(|index| NdfdDirectory { index })
    }

    /// Identifiers accepted by [`NdfdDirectory::from_str`], for diagnostics.
    pub fn valid_names() -> Vec<String> {
        Self::all()
            .map(|d| format!("{} ({})", d.code(), d.display_name()))
            .collect()
    }

    /// NDFD area code, e.g. `pacswest`.
    pub fn code(&self) -> &'static str {
        AREAS[self.index].0
    }

    /// Human readable area name.
    pub fn display_name(&self) -> &'static str {
        AREAS[self.index].1
    }

    /// Area directory without the valid-period component.
    pub fn area_path(&self) -> String {
        format!("{}/AR.{}/", NDFD_ROOT, self.code())
    }

    /// Directory holding the binaries for a forecast range.
    pub fn forecast_path(&self, kind: ForecastKind) -> String {
        format!("{}{}/", self.area_path(), kind.period_directory())
    }
}

impl fmt::Display for NdfdDirectory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for NdfdDirectory {
    type Err = NdfdError;

    /// Accepts an area code, a display name or a full NDFD area path.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let key = match trimmed.split_once("/AR.") {
            Some((_, rest)) => rest.split('/').next().unwrap_or_default(),
            None => trimmed,
        };
        let normalized = normalize(key);

        AREAS
            .iter()
            .position(|(code, name)| normalize(code) == normalized || normalize(name) == normalized)
            .map(|index| NdfdDirectory { index })
            .ok_or_else(|| NdfdError::UnknownDirectory {
                name: s.to_string(),
                valid: Self::valid_names(),
            })
    }
}

fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

impl Serialize for NdfdDirectory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for NdfdDirectory {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Where the binaries for one element and forecast range live.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourceLocation {
    pub directory: NdfdDirectory,
    pub forecast_kind: ForecastKind,
    pub element: ElementKind,
}

impl SourceLocation {
    pub fn new(directory: NdfdDirectory, forecast_kind: ForecastKind, element: ElementKind) -> Self {
        Self {
            directory,
            forecast_kind,
            element,
        }
    }

    /// Full path of the element binary.
    pub fn file_path(&self) -> String {
        format!(
            "{}{}",
            self.directory.forecast_path(self.forecast_kind),
            self.element.file_name()
        )
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.file_path())
    }
}
