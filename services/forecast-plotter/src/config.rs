//! Batch configuration for forecast-plotter.
//!
//! A batch file names reusable map parameter sets and lists the graphics to
//! produce:
//!
//! ```yaml
//! output_dir: ${GRAPHICS_DIR:-/var/www/ndfd}
//! maps:
//!   conus:
//!     western_bound: -126.0
//!     ...
//! tasks:
//!   - name: conus_max_t
//!     product: maximum_temperature
//!     forecast: short_term
//!     overlay: county_state
//!     directory: conus
//!     map: conus
//!     output: conus/max_t.png
//! ```
//!
//! Supports environment variable substitution using ${VAR} syntax. Expansion
//! runs over the whole file, comments included, and errors name the line.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use forecast_graphics::{ForecastRequest, OverlayKind, Product, RenderTask};
use ndfd_common::{ForecastKind, MapParams};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchConfig {
    /// Root for relative task outputs
    pub output_dir: PathBuf,
    /// Named map parameter sets
    pub maps: HashMap<String, MapParams>,
    pub tasks: Vec<TaskConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskConfig {
    pub name: String,
    pub product: Product,
    pub forecast: ForecastKind,
    #[serde(default = "default_overlay")]
    pub overlay: OverlayKind,
    /// NDFD area code, display name or path
    pub directory: String,
    /// Key into `maps`
    pub map: String,
    pub output: PathBuf,
}

fn default_overlay() -> OverlayKind {
    OverlayKind::CountyState
}

// ============================================================================
// Loading
// ============================================================================

/// Load and validate a batch file.
pub fn load_batch_config<P: AsRef<Path>>(path: P) -> Result<BatchConfig> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read batch config: {}", path.display()))?;

    let config = parse_batch_config(&content)
        .with_context(|| format!("Invalid batch config: {}", path.display()))?;
    Ok(config)
}

/// Parse and validate batch YAML, expanding environment variables first.
pub fn parse_batch_config(content: &str) -> Result<BatchConfig> {
    let expanded = expand_env_vars(content)?;
    let config: BatchConfig =
        serde_yaml::from_str(&expanded).context("Failed to parse batch YAML")?;
    config.validate()?;
    Ok(config)
}

/// Expand `${VAR}` and `${VAR:-default}` references, line by line. A
/// reference must close on the line it opens.
fn expand_env_vars(content: &str) -> Result<String> {
    let mut expanded = String::with_capacity(content.len());
    for (index, line) in content.split_inclusive('\n').enumerate() {
        expand_line(line, &mut expanded).with_context(|| format!("line {}", index + 1))?;
    }
    Ok(expanded)
}

fn expand_line(mut rest: &str, out: &mut String) -> Result<()> {
    while let Some(open) = rest.find("${") {
        out.push_str(&rest[..open]);
        let body = &rest[open + 2..];
        let close = body
            .find('}')
            .with_context(|| format!("unclosed variable reference ${{{}", body.trim_end()))?;
        out.push_str(&lookup_var(&body[..close])?);
        rest = &body[close + 1..];
    }
    out.push_str(rest);
    Ok(())
}

/// Value of one reference. Empty variables count as unset.
fn lookup_var(reference: &str) -> Result<String> {
    let (name, default) = match reference.split_once(":-") {
        Some((name, default)) => (name.trim(), Some(default)),
        None => (reference.trim(), None),
    };
    anyhow::ensure!(!name.is_empty(), "empty variable reference ${{{}}}", reference);

    match (std::env::var(name).ok().filter(|v| !v.is_empty()), default) {
        (Some(value), _) => Ok(value),
        (None, Some(default)) => Ok(default.to_string()),
        (None, None) => anyhow::bail!("environment variable {} not set", name),
    }
}

// ============================================================================
// Validation and task resolution
// ============================================================================

impl BatchConfig {
    /// Check every task, reporting all problems at once.
    pub fn validate(&self) -> Result<()> {
        let mut problems = Vec::new();

        for (name, map) in &self.maps {
            if let Err(e) = map.validate() {
                problems.push(format!("map '{}': {}", name, e));
            }
        }

        let mut seen = HashMap::new();
        for task in &self.tasks {
            if task.name.is_empty() {
                problems.push("task with empty name".to_string());
            }
            if let Some(previous) = seen.insert(task.output_path(&self.output_dir), &task.name) {
                problems.push(format!(
                    "tasks '{}' and '{}' write the same output",
                    previous, task.name
                ));
            }
            if let Err(e) = self.resolve(task) {
                problems.push(format!("task '{}': {:#}", task.name, e));
            }
        }

        anyhow::ensure!(problems.is_empty(), "{}", problems.join("\n"));
        Ok(())
    }

    /// Resolve every task into a render task.
    pub fn to_tasks(&self) -> Result<Vec<RenderTask>> {
        self.tasks.iter().map(|task| self.resolve(task)).collect()
    }

    fn resolve(&self, task: &TaskConfig) -> Result<RenderTask> {
        let map = self
            .maps
            .get(&task.map)
            .with_context(|| format!("unknown map '{}'", task.map))?;
        let request = ForecastRequest::new(
            task.product,
            task.forecast,
            task.overlay,
            &task.directory,
            map.clone(),
        )?;
        Ok(RenderTask {
            name: task.name.clone(),
            request,
            output: task.output_path(&self.output_dir),
        })
    }
}

impl TaskConfig {
    fn output_path(&self, output_dir: &Path) -> PathBuf {
        if self.output.is_absolute() {
            self.output.clone()
        } else {
            output_dir.join(&self.output)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAP: &str = r#"
    western_bound: -122.1
    eastern_bound: -114.0
    southern_bound: 32.4
    northern_bound: 39.0
    central_longitude: -118.0
    central_latitude: 35.7
    first_standard_parallel: 33.0
    second_standard_parallel: 45.0
    figure_sizes:
      - { width: 10.0, height: 10.0 }
      - { width: 16.0, height: 8.0 }
      - { width: 24.0, height: 8.0 }
      - { width: 16.0, height: 14.0 }
      - { width: 30.0, height: 7.0 }
    color_table_shrink: 0.7
"#;

    fn batch(tasks: &str) -> String {
        format!(
            "output_dir: /tmp/ndfd\nmaps:\n  south_ops:{}\ntasks:\n{}",
            MAP.replace("\n    ", "\n      "),
            tasks
        )
    }

    #[test]
    fn test_parse_batch() {
        let yaml = batch(
            r#"
  - name: frost
    product: frost_freeze
    forecast: short_term
    overlay: psa_gacc
    directory: Pacific Southwest
    map: south_ops
    output: south_ops/frost.png
  - name: heat
    product: extreme_heat
    forecast: extended
    directory: pacswest
    map: south_ops
    output: /srv/heat.png
"#,
        );
        let config = parse_batch_config(&yaml).unwrap();
        let tasks = config.to_tasks().unwrap();

        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].request.directory.code(), "pacswest");
        assert_eq!(tasks[0].output, PathBuf::from("/tmp/ndfd/south_ops/frost.png"));
        assert_eq!(tasks[1].request.overlay, OverlayKind::CountyState);
        assert_eq!(tasks[1].output, PathBuf::from("/srv/heat.png"));
    }

    #[test]
    fn test_shipped_batch_config_is_valid() {
        let config = parse_batch_config(include_str!("../config/batch.yaml")).unwrap();
        let tasks = config.to_tasks().unwrap();
        assert_eq!(tasks.len(), 5);
        assert!(tasks
            .iter()
            .all(|t| t.output.extension().is_some_and(|ext| ext == "png")));
    }

    #[test]
    fn test_invalid_directory_is_reported() {
        let yaml = batch(
            r#"
  - name: frost
    product: frost_freeze
    forecast: short_term
    directory: Atlantis
    map: south_ops
    output: frost.png
"#,
        );
        let err = parse_batch_config(&yaml).unwrap_err();
        let message = format!("{:#}", err);
        assert!(message.contains("task 'frost'"));
        assert!(message.contains("Atlantis"));
        assert!(message.contains("conus"));
    }

    #[test]
    fn test_unknown_map_and_duplicate_output() {
        let yaml = batch(
            r#"
  - name: a
    product: maximum_temperature
    forecast: short_term
    directory: conus
    map: nowhere
    output: same.png
  - name: b
    product: minimum_temperature
    forecast: short_term
    directory: conus
    map: south_ops
    output: same.png
"#,
        );
        let message = format!("{:#}", parse_batch_config(&yaml).unwrap_err());
        assert!(message.contains("unknown map 'nowhere'"));
        assert!(message.contains("write the same output"));
    }

    #[test]
    fn test_expand_env_vars_default() {
        let out = expand_env_vars("dir: ${NDFD_PLOTTER_UNSET_VAR:-/data/out}").unwrap();
        assert_eq!(out, "dir: /data/out");
    }

    #[test]
    fn test_expand_env_vars_keeps_lines() {
        let out = expand_env_vars(
            "a: ${NDFD_PLOTTER_UNSET_A:-1} ${NDFD_PLOTTER_UNSET_B:-two}\n# plain\nb: 3\n",
        )
        .unwrap();
        assert_eq!(out, "a: 1 two\n# plain\nb: 3\n");
    }

    #[test]
    fn test_expand_env_vars_unclosed() {
        let err = expand_env_vars("output_dir: /tmp\nmaps: ${MAPS\n").unwrap_err();
        let message = format!("{:#}", err);
        assert!(message.starts_with("line 2: "), "{}", message);
        assert!(message.contains("unclosed variable reference ${MAPS"), "{}", message);
    }

    #[test]
    fn test_expand_env_vars_reference_cannot_span_lines() {
        let err = expand_env_vars("dir: ${OUTPUT:-/tmp\n}").unwrap_err();
        assert!(format!("{:#}", err).starts_with("line 1: unclosed"));
    }

    #[test]
    fn test_expand_env_vars_missing() {
        let err = expand_env_vars("a: 1\nb: 2\nc: ${NDFD_PLOTTER_SURELY_UNSET}").unwrap_err();
        assert_eq!(
            format!("{:#}", err),
            "line 3: environment variable NDFD_PLOTTER_SURELY_UNSET not set"
        );
    }

    #[test]
    fn test_expand_env_vars_empty_name() {
        let err = expand_env_vars("dir: ${:-/tmp}").unwrap_err();
        assert!(format!("{:#}", err).contains("empty variable reference"));
    }

    #[test]
    fn test_parse_batch_reports_line_of_missing_var() {
        let yaml = batch("  - ${NDFD_PLOTTER_SURELY_UNSET}\n");
        let message = format!("{:#}", parse_batch_config(&yaml).unwrap_err());
        let line = yaml
            .lines()
            .position(|l| l.contains("NDFD_PLOTTER_SURELY_UNSET"))
            .unwrap()
            + 1;
        assert!(message.contains(&format!("line {}: ", line)), "{}", message);
    }
}
