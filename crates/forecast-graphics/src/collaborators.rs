//! Seams to the services the pipeline consumes but does not implement:
//! data acquisition, GRIB decoding, boundary loading and figure rendering.

use std::io::Write;

use async_trait::async_trait;
use bytes::Bytes;
use ndfd_common::{ForecastPeriodSet, SourceLocation};
use serde::{Deserialize, Serialize};

use crate::figure::FigureSpec;
use crate::{ForecastRequest, OverlayKind};

/// Error returned by a collaborator. The pipeline classifies it by which
/// collaborator failed.
pub type CollaboratorError = Box<dyn std::error::Error + Send + Sync>;

/// Retrieves raw NDFD binaries.
#[async_trait]
pub trait ForecastSource: Send + Sync {
    async fn fetch(&self, location: &SourceLocation) -> Result<Bytes, CollaboratorError>;
}

/// Decodes raw binaries into periods sorted in canonical order.
pub trait PeriodDecoder: Send + Sync {
    fn decode(&self, raw: &Bytes) -> Result<ForecastPeriodSet, CollaboratorError>;
}

/// A named set of boundary polylines in lon/lat degrees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoundaryLayer {
    pub name: String,
    pub polylines: Vec<Vec<(f64, f64)>>,
    pub line_width: f32,
}

/// Loads boundary geometries for an overlay.
pub trait BoundaryProvider: Send + Sync {
    fn load(&self, overlay: OverlayKind) -> Result<Vec<BoundaryLayer>, CollaboratorError>;
}

/// A rendered figure.
pub trait Figure {
    fn write_png(&self, out: &mut dyn Write) -> std::io::Result<()>;
}

/// Draws figures.
pub trait FigureRenderer: Send + Sync {
    type Figure: Figure;

    /// Draw a forecast figure.
    fn render(&self, spec: &FigureSpec<'_>) -> Result<Self::Figure, CollaboratorError>;

    /// Draw the generic "no data" placeholder for a request.
    fn render_no_data(&self, request: &ForecastRequest) -> Result<Self::Figure, CollaboratorError>;
}
