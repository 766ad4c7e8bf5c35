//! Requests for a single graphic.

use ndfd_common::{ForecastKind, MapParams, NdfdDirectory, SourceLocation};
use serde::{Deserialize, Serialize};

use crate::{GraphicsResult, OverlayKind, Product};

/// Everything needed to produce one graphic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastRequest {
    pub product: Product,
    pub forecast_kind: ForecastKind,
    pub overlay: OverlayKind,
    pub directory: NdfdDirectory,
    pub map: MapParams,
}

impl ForecastRequest {
    /// Build a request, resolving the directory name.
    pub fn new(
        product: Product,
        forecast_kind: ForecastKind,
        overlay: OverlayKind,
        directory_name: &str,
        map: MapParams,
    ) -> GraphicsResult<Self> {
        let directory: NdfdDirectory = directory_name.parse()?;
        Ok(Self {
            product,
            forecast_kind,
            overlay,
            directory,
            map,
        })
    }

    /// Where the forecast binaries for this request live.
    pub fn source_location(&self) -> SourceLocation {
        SourceLocation::new(self.directory, self.forecast_kind, self.product.element())
    }

    pub fn validate(&self) -> GraphicsResult<()> {
        self.map.validate()?;
        Ok(())
    }

    /// Short identifier for logs, e.g. `conus/short_term/frost_freeze/psa_gacc`.
    pub fn describe(&self) -> String {
        format!(
            "{}/{}/{}/{}",
            self.directory, self.forecast_kind, self.product, self.overlay
        )
    }
}
