//! Metrics for graphics generation.

use ::metrics::{counter, histogram};

use crate::batch::TaskStatus;
use crate::Product;

/// Record the outcome of one batch task.
pub fn record_task(status: &TaskStatus) {
    let label = match status {
        TaskStatus::Rendered => "rendered",
        TaskStatus::Placeholder { .. } => "placeholder",
        TaskStatus::Failed { .. } => "failed",
    };
    counter!("forecast_graphics_tasks_total", "status" => label).increment(1);

    if let TaskStatus::Placeholder { kind, .. } = status {
        counter!("forecast_graphics_failures_total", "kind" => kind.as_str()).increment(1);
    }
}

/// Record how long it took to produce one forecast figure.
pub fn record_render(product: Product, duration_us: u64) {
    histogram!("forecast_graphics_render_duration_ms", "product" => product.as_str())
        .record(duration_us as f64 / 1000.0);
}
