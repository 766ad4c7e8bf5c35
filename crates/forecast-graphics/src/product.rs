//! Graphic products and map overlays.

use std::fmt;
use std::str::FromStr;

use forecast_window::{ColorScale, ScaleFamily, Season};
use ndfd_common::ElementKind;
use serde::{Deserialize, Serialize};

use crate::GraphicsError;

/// A kind of temperature graphic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Product {
    MaximumTemperature,
    MinimumTemperature,
    /// Day 1 maximum temperature, then day-over-day changes
    MaximumTemperatureTrends,
    /// Night 1 minimum temperature, then night-over-night changes
    MinimumTemperatureTrends,
    /// Minimum temperature at or below freezing
    FrostFreeze,
    /// Maximum temperature above the seasonal heat threshold
    ExtremeHeat,
}

impl Product {
    pub const ALL: [Product; 6] = [
        Product::MaximumTemperature,
        Product::MinimumTemperature,
        Product::MaximumTemperatureTrends,
        Product::MinimumTemperatureTrends,
        Product::FrostFreeze,
        Product::ExtremeHeat,
    ];

    /// NDFD element the product is drawn from.
    pub fn element(&self) -> ElementKind {
        match self {
            Product::MaximumTemperature
            | Product::MaximumTemperatureTrends
            | Product::ExtremeHeat => ElementKind::MaxTemp,
            Product::MinimumTemperature
            | Product::MinimumTemperatureTrends
            | Product::FrostFreeze => ElementKind::MinTemp,
        }
    }

    /// Whether panels after the first show changes between periods.
    pub fn trends(&self) -> bool {
        matches!(
            self,
            Product::MaximumTemperatureTrends | Product::MinimumTemperatureTrends
        )
    }

    pub fn scale_family(&self) -> ScaleFamily {
        match self {
            Product::MaximumTemperature | Product::MaximumTemperatureTrends => {
                ScaleFamily::MaximumTemperature
            }
            Product::MinimumTemperature | Product::MinimumTemperatureTrends => {
                ScaleFamily::MinimumTemperature
            }
            Product::FrostFreeze => ScaleFamily::FrostFreeze,
            Product::ExtremeHeat => ScaleFamily::ExtremeHeat,
        }
    }

    /// Color scale for raw-value panels.
    pub fn color_scale(&self, season: Season) -> ColorScale {
        ColorScale::seasonal(self.scale_family(), season)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Product::MaximumTemperature => "maximum_temperature",
            Product::MinimumTemperature => "minimum_temperature",
            Product::MaximumTemperatureTrends => "maximum_temperature_trends",
            Product::MinimumTemperatureTrends => "minimum_temperature_trends",
            Product::FrostFreeze => "frost_freeze",
            Product::ExtremeHeat => "extreme_heat",
        }
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Product {
    type Err = GraphicsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace('-', "_");
        Product::ALL
            .into_iter()
            .find(|p| p.as_str() == key)
            .ok_or_else(|| {
                GraphicsError::InvalidRequest(format!(
                    "unknown product '{}', expected one of: {}",
                    s,
                    Product::ALL.map(|p| p.as_str()).join(", ")
                ))
            })
    }
}

/// Boundary set drawn over the forecast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverlayKind {
    /// County and state borders
    CountyState,
    /// Predictive Services Areas and Geographic Area Coordination Centers
    PsaGacc,
}

impl OverlayKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            OverlayKind::CountyState => "county_state",
            OverlayKind::PsaGacc => "psa_gacc",
        }
    }
}

impl fmt::Display for OverlayKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OverlayKind {
    type Err = GraphicsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "county_state" | "counties" => Ok(OverlayKind::CountyState),
            "psa_gacc" | "psa" => Ok(OverlayKind::PsaGacc),
            _ => Err(GraphicsError::InvalidRequest(format!(
                "unknown overlay '{}', expected county_state or psa_gacc",
                s
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_elements() {
        assert_eq!(Product::ExtremeHeat.element(), ElementKind::MaxTemp);
        assert_eq!(Product::FrostFreeze.element(), ElementKind::MinTemp);
        assert!(Product::MinimumTemperatureTrends.trends());
        assert!(!Product::MinimumTemperature.trends());
    }

    #[test]
    fn test_product_parse_roundtrip() {
        for product in Product::ALL {
            assert_eq!(product.as_str().parse::<Product>().unwrap(), product);
        }
        assert_eq!(
            "maximum-temperature-trends".parse::<Product>().unwrap(),
            Product::MaximumTemperatureTrends
        );
        let err = "snowfall".parse::<Product>().unwrap_err();
        assert!(err.to_string().contains("frost_freeze"));
    }

    #[test]
    fn test_overlay_parse() {
        assert_eq!("PSA-GACC".parse::<OverlayKind>().unwrap(), OverlayKind::PsaGacc);
        assert!("rivers".parse::<OverlayKind>().is_err());
    }

    #[test]
    fn test_extreme_heat_uses_heat_scale() {
        let scale = Product::ExtremeHeat.color_scale(Season::Warm);
        assert_eq!(scale.colormap, "excessive_heat");
        assert_eq!(scale.threshold(), Some(80.0));
    }
}
