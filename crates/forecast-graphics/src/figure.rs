//! Fully resolved figure descriptions handed to the renderer.

use std::borrow::Cow;

use chrono::{DateTime, Utc};
use forecast_window::{ColorScale, PanelLayout, PlannedPanel, RenderPlan};
use ndfd_common::{FigureSize, Grid2D};

use crate::collaborators::BoundaryLayer;
use crate::ForecastRequest;

/// One map panel with its data resolved.
#[derive(Debug, Clone)]
pub struct FigurePanel<'a> {
    pub planned: &'a PlannedPanel,
    /// Raw period values, or the trend difference
    pub values: Cow<'a, Grid2D>,
    pub latitudes: &'a Grid2D,
    pub longitudes: &'a Grid2D,
    pub scale: &'a ColorScale,
    /// (row, col) within the figure layout
    pub cell: (usize, usize),
}

impl FigurePanel<'_> {
    /// Multi-line panel title.
    pub fn title(&self) -> String {
        self.planned.label.to_string()
    }
}

/// Everything the renderer needs to draw one figure.
#[derive(Debug, Clone)]
pub struct FigureSpec<'a> {
    pub request: &'a ForecastRequest,
    pub plan: &'a RenderPlan,
    pub title: String,
    pub figure_size: FigureSize,
    pub panels: Vec<FigurePanel<'a>>,
    pub boundaries: &'a [BoundaryLayer],
    /// Instant the figure was planned for
    pub issued_at: DateTime<Utc>,
}

impl FigureSpec<'_> {
    pub fn layout(&self) -> PanelLayout {
        self.plan.layout
    }
}
