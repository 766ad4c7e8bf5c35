//! NDFD temperature graphics pipeline.
//!
//! Turns a [`ForecastRequest`] (product, forecast range, overlay, NDFD
//! directory, map parameters) into a figure:
//!
//! 1. fetch the element binary through a [`ForecastSource`]
//! 2. decode it into periods with a [`PeriodDecoder`]
//! 3. plan panels with [`forecast_window::RenderPlan`]
//! 4. resolve panel values, computing trend differences where needed
//! 5. hand a [`FigureSpec`] to the [`FigureRenderer`]
//!
//! [`ForecastGraphics::run_batch`] drives many requests from a single clock
//! reading and writes a placeholder wherever a graphic fails.

pub mod batch;
pub mod collaborators;
pub mod error;
pub mod figure;
pub mod metrics;
pub mod output;
pub mod pipeline;
pub mod product;
pub mod request;
pub mod trend;

pub use batch::{BatchReport, RenderTask, TaskOutcome, TaskStatus};
pub use collaborators::{
    BoundaryLayer, BoundaryProvider, CollaboratorError, Figure, FigureRenderer, ForecastSource,
    PeriodDecoder,
};
pub use error::{FailureKind, GraphicsError, GraphicsResult};
pub use figure::{FigurePanel, FigureSpec};
pub use output::save_png;
pub use pipeline::ForecastGraphics;
pub use product::{OverlayKind, Product};
pub use request::ForecastRequest;
