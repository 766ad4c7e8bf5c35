//! Batch generation: many graphics from one clock reading.
//!
//! A failing graphic never aborts the batch. Its output path receives the
//! "no data" placeholder instead, so downstream consumers always find a
//! file at every configured location.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, warn};

use crate::collaborators::{BoundaryProvider, FigureRenderer, ForecastSource, PeriodDecoder};
use crate::output::save_png;
use crate::pipeline::ForecastGraphics;
use crate::{metrics, FailureKind, ForecastRequest, GraphicsError, GraphicsResult};

/// A named graphic and where to write it.
#[derive(Debug, Clone)]
pub struct RenderTask {
    pub name: String,
    pub request: ForecastRequest,
    pub output: PathBuf,
}

/// What ended up at a task's output path.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TaskStatus {
    /// The forecast graphic was written.
    Rendered,
    /// The graphic failed and the placeholder was written in its place.
    Placeholder { kind: FailureKind, reason: String },
    /// Neither the graphic nor the placeholder could be written.
    Failed { reason: String },
}

#[derive(Debug, Clone, Serialize)]
pub struct TaskOutcome {
    pub name: String,
    pub output: PathBuf,
    #[serde(flatten)]
    pub status: TaskStatus,
}

/// Summary of a batch run.
#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    pub issued_at: DateTime<Utc>,
    pub outcomes: Vec<TaskOutcome>,
}

impl BatchReport {
    pub fn rendered(&self) -> usize {
        self.count(|s| matches!(s, TaskStatus::Rendered))
    }

    pub fn placeholders(&self) -> usize {
        self.count(|s| matches!(s, TaskStatus::Placeholder { .. }))
    }

    pub fn failed(&self) -> usize {
        self.count(|s| matches!(s, TaskStatus::Failed { .. }))
    }

    /// True when every output path holds a file.
    pub fn all_written(&self) -> bool {
        self.failed() == 0
    }

    fn count(&self, pred: impl Fn(&TaskStatus) -> bool) -> usize {
        self.outcomes.iter().filter(|o| pred(&o.status)).count()
    }
}

impl<S, D, B, R> ForecastGraphics<S, D, B, R>
where
    S: ForecastSource,
    D: PeriodDecoder,
    B: BoundaryProvider,
    R: FigureRenderer,
{
    /// Render one task, writing the placeholder if the graphic fails.
    pub async fn run_task(&self, task: &RenderTask, at: DateTime<Utc>) -> TaskOutcome {
        let status = match self.render_to_file(task, at).await {
            Ok(()) => TaskStatus::Rendered,
            Err(e) => {
                warn!(
                    task = %task.name,
                    kind = e.kind().as_str(),
                    error = %e,
                    "Graphic failed, writing no-data placeholder"
                );
                match self.write_placeholder(task) {
                    Ok(()) => TaskStatus::Placeholder {
                        kind: e.kind(),
                        reason: e.to_string(),
                    },
                    Err(placeholder_err) => {
                        warn!(
                            task = %task.name,
                            error = %placeholder_err,
                            "Placeholder could not be written"
                        );
                        TaskStatus::Failed {
                            reason: format!("{}; placeholder: {}", e, placeholder_err),
                        }
                    }
                }
            }
        };

        metrics::record_task(&status);
        TaskOutcome {
            name: task.name.clone(),
            output: task.output.clone(),
            status,
        }
    }

    /// Run every task in order against the same instant.
    pub async fn run_batch(&self, tasks: &[RenderTask], at: DateTime<Utc>) -> BatchReport {
        let mut outcomes = Vec::with_capacity(tasks.len());
        for task in tasks {
            outcomes.push(self.run_task(task, at).await);
        }

        let report = BatchReport {
            issued_at: at,
            outcomes,
        };
        info!(
            tasks = tasks.len(),
            rendered = report.rendered(),
            placeholders = report.placeholders(),
            failed = report.failed(),
            "Batch complete"
        );
        report
    }

    async fn render_to_file(&self, task: &RenderTask, at: DateTime<Utc>) -> GraphicsResult<()> {
        let figure = self.render_forecast(&task.request, at).await?;
        save_png(&figure, &task.output)?;
        Ok(())
    }

    fn write_placeholder(&self, task: &RenderTask) -> GraphicsResult<()> {
        let figure = self
            .renderer()
            .render_no_data(&task.request)
            .map_err(|e| GraphicsError::render(e.to_string()))?;
        save_png(&figure, &task.output)?;
        Ok(())
    }
}
