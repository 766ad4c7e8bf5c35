//! Fake collaborators for forecast-graphics integration tests.
//!
//! Provides:
//! - A source that serves fixed bytes (or fails) and records what was fetched
//! - A decoder returning a generated period set
//! - A boundary provider with one small layer per overlay
//! - A renderer that records a summary of every figure it draws

#![allow(dead_code)]

use std::io::Write;
use std::sync::Mutex;

use async_trait::async_trait;
use bytes::Bytes;
use chrono::{DateTime, Utc};
use forecast_graphics::{
    BoundaryLayer, BoundaryProvider, CollaboratorError, Figure, FigureRenderer, FigureSpec,
    ForecastGraphics, ForecastRequest, ForecastSource, OverlayKind, PeriodDecoder,
};
use ndfd_common::{ElementKind, FigureSize, ForecastPeriodSet, SourceLocation};
use test_utils::period_set;

// ============================================================================
// Source
// ============================================================================

/// Serves the same payload for every location, or fails every fetch.
pub struct StaticSource {
    payload: Option<Bytes>,
    fetched: Mutex<Vec<String>>,
}

impl StaticSource {
    pub fn new() -> Self {
        Self {
            payload: Some(Bytes::from_static(b"GRIB")),
            fetched: Mutex::new(Vec::new()),
        }
    }

    pub fn unreachable() -> Self {
        Self {
            payload: None,
            fetched: Mutex::new(Vec::new()),
        }
    }

    pub fn fetched(&self) -> Vec<String> {
        self.fetched.lock().unwrap().clone()
    }
}

#[async_trait]
impl ForecastSource for StaticSource {
    async fn fetch(&self, location: &SourceLocation) -> Result<Bytes, CollaboratorError> {
        self.fetched.lock().unwrap().push(location.file_path());
        self.payload
            .clone()
            .ok_or_else(|| "connection refused".into())
    }
}

// ============================================================================
// Decoder
// ============================================================================

/// Returns a generated period set regardless of input.
pub struct FakeDecoder {
    periods: Option<ForecastPeriodSet>,
}

impl FakeDecoder {
    /// `count` daily periods starting the day of `first_day`.
    pub fn with_periods(count: usize, element: ElementKind, first_day: DateTime<Utc>) -> Self {
        Self {
            periods: Some(period_set(count, element, first_day)),
        }
    }

    /// A decoder that rejects every payload.
    pub fn corrupt() -> Self {
        Self { periods: None }
    }
}

impl PeriodDecoder for FakeDecoder {
    fn decode(&self, _raw: &Bytes) -> Result<ForecastPeriodSet, CollaboratorError> {
        self.periods
            .clone()
            .ok_or_else(|| "truncated GRIB message".into())
    }
}

// ============================================================================
// Boundaries
// ============================================================================

pub struct FakeBoundaries {
    pub fail: bool,
}

impl BoundaryProvider for FakeBoundaries {
    fn load(&self, overlay: OverlayKind) -> Result<Vec<BoundaryLayer>, CollaboratorError> {
        if self.fail {
            return Err("shapefile missing".into());
        }
        Ok(vec![BoundaryLayer {
            name: overlay.as_str().to_string(),
            polylines: vec![vec![(-100.0, 35.0), (-99.0, 35.0), (-99.0, 36.0)]],
            line_width: 0.5,
        }])
    }
}

// ============================================================================
// Renderer
// ============================================================================

/// What the renderer saw for one figure.
#[derive(Debug, Clone)]
pub struct RenderSummary {
    pub title: String,
    pub figure_size: FigureSize,
    pub rows: usize,
    pub cols: usize,
    pub panel_titles: Vec<String>,
    pub cells: Vec<(usize, usize)>,
    pub colormaps: Vec<String>,
    /// Value at grid point (0, 0) of each panel
    pub corner_values: Vec<f32>,
    pub boundary_layers: Vec<String>,
    pub issued_at: DateTime<Utc>,
}

/// Figure that writes its bytes verbatim.
#[derive(Debug)]
pub struct TestFigure(pub Vec<u8>);

impl Figure for TestFigure {
    fn write_png(&self, out: &mut dyn Write) -> std::io::Result<()> {
        out.write_all(&self.0)
    }
}

pub const NO_DATA: &[u8] = b"NO DATA";

pub struct RecordingRenderer {
    pub fail: bool,
    pub fail_no_data: bool,
    rendered: Mutex<Vec<RenderSummary>>,
    placeholders: Mutex<Vec<String>>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self {
            fail: false,
            fail_no_data: false,
            rendered: Mutex::new(Vec::new()),
            placeholders: Mutex::new(Vec::new()),
        }
    }

    pub fn rendered(&self) -> Vec<RenderSummary> {
        self.rendered.lock().unwrap().clone()
    }

    pub fn placeholders(&self) -> Vec<String> {
        self.placeholders.lock().unwrap().clone()
    }
}

impl FigureRenderer for RecordingRenderer {
    type Figure = TestFigure;

    fn render(&self, spec: &FigureSpec<'_>) -> Result<TestFigure, CollaboratorError> {
        if self.fail {
            return Err("colormap not found".into());
        }
        let layout = spec.layout();
        let summary = RenderSummary {
            title: spec.title.clone(),
            figure_size: spec.figure_size,
            rows: layout.rows,
            cols: layout.cols,
            panel_titles: spec.panels.iter().map(|p| p.title()).collect(),
            cells: spec.panels.iter().map(|p| p.cell).collect(),
            colormaps: spec.panels.iter().map(|p| p.scale.colormap.clone()).collect(),
            corner_values: spec
                .panels
                .iter()
                .map(|p| p.values.get(0, 0).unwrap_or(f32::NAN))
                .collect(),
            boundary_layers: spec.boundaries.iter().map(|b| b.name.clone()).collect(),
            issued_at: spec.issued_at,
        };
        let bytes = format!("PNG {}", summary.title).into_bytes();
        self.rendered.lock().unwrap().push(summary);
        Ok(TestFigure(bytes))
    }

    fn render_no_data(&self, request: &ForecastRequest) -> Result<TestFigure, CollaboratorError> {
        if self.fail_no_data {
            return Err("font missing".into());
        }
        self.placeholders.lock().unwrap().push(request.describe());
        Ok(TestFigure(NO_DATA.to_vec()))
    }
}

// ============================================================================
// Assembly
// ============================================================================

pub type TestGraphics = ForecastGraphics<StaticSource, FakeDecoder, FakeBoundaries, RecordingRenderer>;

/// Pipeline with working collaborators and `count` generated periods.
pub fn graphics(count: usize, element: ElementKind, first_day: DateTime<Utc>) -> TestGraphics {
    ForecastGraphics::new(
        StaticSource::new(),
        FakeDecoder::with_periods(count, element, first_day),
        FakeBoundaries { fail: false },
        RecordingRenderer::new(),
    )
}
