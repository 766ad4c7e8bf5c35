//! The render pipeline: fetch, decode, plan, resolve panels, render.

use std::time::Instant;

use chrono::{DateTime, Timelike, Utc};
use forecast_window::{ColorScale, RenderPlan, Season};
use tracing::{debug, info, instrument};

use crate::collaborators::{BoundaryProvider, FigureRenderer, ForecastSource, PeriodDecoder};
use crate::figure::{FigurePanel, FigureSpec};
use crate::{metrics, trend, ForecastRequest, GraphicsError, GraphicsResult};

/// Produces forecast graphics from a set of collaborators.
///
/// One instance replaces the family of per-product plotting functions:
/// the product, forecast range and overlay all come from the request.
pub struct ForecastGraphics<S, D, B, R> {
    source: S,
    decoder: D,
    boundaries: B,
    renderer: R,
}

impl<S, D, B, R> ForecastGraphics<S, D, B, R>
where
    S: ForecastSource,
    D: PeriodDecoder,
    B: BoundaryProvider,
    R: FigureRenderer,
{
    pub fn new(source: S, decoder: D, boundaries: B, renderer: R) -> Self {
        Self {
            source,
            decoder,
            boundaries,
            renderer,
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Render one graphic as of `at`.
    ///
    /// `at` drives both the forecast window (UTC hour) and the color scale
    /// (UTC month). Read the clock once and pass the same instant to every
    /// graphic of a run.
    #[instrument(skip(self, request), fields(request = %request.describe()))]
    pub async fn render_forecast(
        &self,
        request: &ForecastRequest,
        at: DateTime<Utc>,
    ) -> GraphicsResult<R::Figure> {
        request.validate()?;

        let location = request.source_location();
        let raw = self.source.fetch(&location).await.map_err(|e| {
            GraphicsError::data_unavailable(format!("fetching {}: {}", location, e))
        })?;
        let periods = self.decoder.decode(&raw).map_err(|e| {
            GraphicsError::data_unavailable(format!("decoding {}: {}", location, e))
        })?;
        debug!(periods = periods.len(), bytes = raw.len(), "Decoded forecast periods");

        let product = request.product;
        let plan = RenderPlan::build(
            &periods,
            at.hour(),
            request.forecast_kind,
            product.element(),
            product.trends(),
        )?;

        let season = Season::at(at);
        let scale = product.color_scale(season);
        let trend_scale = ColorScale::trend(product.element());

        let figure_size = request.map.figure_size(plan.panel_count()).ok_or_else(|| {
            GraphicsError::InvalidRequest(format!(
                "no figure size for {} panels",
                plan.panel_count()
            ))
        })?;

        let boundaries = self
            .boundaries
            .load(request.overlay)
            .map_err(|e| GraphicsError::Boundary(format!("{}: {}", request.overlay, e)))?;

        let panels = plan
            .panels
            .iter()
            .map(|planned| {
                let period = periods.get(planned.source.period()).ok_or_else(|| {
                    GraphicsError::data_unavailable(format!(
                        "period {} missing from decoded set",
                        planned.source.period()
                    ))
                })?;
                let cell = plan.layout.cell(planned.position).ok_or_else(|| {
                    GraphicsError::render(format!("panel {} outside layout", planned.position))
                })?;
                Ok(FigurePanel {
                    planned,
                    values: trend::panel_values(&periods, &planned.source)?,
                    latitudes: &period.latitudes,
                    longitudes: &period.longitudes,
                    scale: if planned.source.is_trend() {
                        &trend_scale
                    } else {
                        &scale
                    },
                    cell,
                })
            })
            .collect::<GraphicsResult<Vec<_>>>()?;

        let spec = FigureSpec {
            request,
            plan: &plan,
            title: format!("National Weather Service {}", scale.title),
            figure_size,
            panels,
            boundaries: &boundaries,
            issued_at: at,
        };

        let started = Instant::now();
        let figure = self
            .renderer
            .render(&spec)
            .map_err(|e| GraphicsError::render(e.to_string()))?;
        let duration_us = started.elapsed().as_micros() as u64;
        metrics::record_render(product, duration_us);

        info!(
            panels = plan.panel_count(),
            season = %season,
            duration_ms = duration_us as f64 / 1000.0,
            "Rendered forecast figure"
        );

        Ok(figure)
    }
}
