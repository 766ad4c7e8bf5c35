//! NDFD forecast graphics planner.
//!
//! Inspects forecast window selection and validates batch configurations
//! for the graphics pipeline. Rendering itself is performed by a host that
//! supplies the data source, GRIB decoder, boundary provider and figure
//! renderer.

mod config;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Timelike;
use clap::{Parser, Subcommand, ValueEnum};
use forecast_graphics::Product;
use forecast_window::{select_window, ColorScale, Season, WindowRequest};
use ndfd_common::{Clock, ForecastKind, SystemClock};
use serde_json::json;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "forecast-plotter")]
#[command(about = "Plan NDFD temperature graphics and check batch configurations")]
struct Args {
    /// Log level
    #[arg(long, global = true, env = "LOG_LEVEL", default_value = "info")]
    log_level: String,

    /// Log output format
    #[arg(long, global = true, value_enum, default_value = "json")]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum LogFormat {
    Json,
    Pretty,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the panels, labels and color scale a product would use
    Plan {
        /// Product, e.g. maximum_temperature or frost_freeze
        #[arg(long)]
        product: Product,

        /// Forecast range: short-term or extended
        #[arg(long, default_value = "short-term")]
        forecast: ForecastKind,

        /// Number of decoded forecast periods
        #[arg(long)]
        periods: usize,

        /// UTC hour (default: current hour)
        #[arg(long)]
        hour: Option<u32>,

        /// Month, 1-12 (default: current UTC month)
        #[arg(long)]
        month: Option<u32>,
    },

    /// Load a batch file, validate it and list its tasks
    CheckConfig {
        /// Batch configuration file
        path: PathBuf,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    init_tracing(&args.log_level, args.log_format)?;

    match args.command {
        Command::Plan {
            product,
            forecast,
            periods,
            hour,
            month,
        } => {
            let report = plan_report(&SystemClock, product, forecast, periods, hour, month)?;
            println!("{}", serde_json::to_string_pretty(&report)?);
            Ok(())
        }
        Command::CheckConfig { path } => check_config(&path),
    }
}

fn init_tracing(log_level: &str, format: LogFormat) -> Result<()> {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let builder = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .with_writer(std::io::stderr);

    match format {
        LogFormat::Json => tracing::subscriber::set_global_default(builder.json().finish())?,
        LogFormat::Pretty => tracing::subscriber::set_global_default(builder.pretty().finish())?,
    }
    Ok(())
}

/// Window, season and scales for a product. Hour and month default to the
/// clock's current UTC values.
fn plan_report(
    clock: &dyn Clock,
    product: Product,
    forecast: ForecastKind,
    periods: usize,
    hour: Option<u32>,
    month: Option<u32>,
) -> Result<serde_json::Value> {
    let now = clock.now();
    let utc_hour = hour.unwrap_or_else(|| now.hour());
    let season = match month {
        Some(m) => Season::for_month(m)?,
        None => Season::at(now),
    };

    let window = select_window(&WindowRequest {
        period_count: periods,
        utc_hour,
        forecast_kind: forecast,
        element: product.element(),
        trends: product.trends(),
    })
    .with_context(|| format!("No window for {} {} periods", forecast, periods))?;

    info!(
        product = %product,
        panels = window.panel_count(),
        season = %season,
        "Planned forecast window"
    );

    Ok(json!({
        "product": product,
        "utc_hour": utc_hour,
        "season": season,
        "window": window,
        "scale": product.color_scale(season),
        "trend_scale": product.trends().then(|| ColorScale::trend(product.element())),
    }))
}

fn check_config(path: &Path) -> Result<()> {
    let config = config::load_batch_config(path)?;
    let tasks = config.to_tasks()?;

    info!(
        path = %path.display(),
        tasks = tasks.len(),
        maps = config.maps.len(),
        "Batch configuration is valid"
    );

    for task in &tasks {
        println!(
            "{:<24} {:<48} {}",
            task.name,
            task.request.describe(),
            task.output.display()
        );
    }
    Ok(())
}
