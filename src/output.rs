use std::path::Path;

use tracing::info;

use crate::errors::MetricsError;
use crate::models::Metrics;
use crate::render::{dashboard, render_prometheus, render_summary};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    All,
    Json,
    Prometheus,
    Grafana,
}

impl OutputFormat {
    pub fn parse(s: &str) -> Result<OutputFormat, MetricsError> {
        match s {
            "all" => Ok(OutputFormat::All),
            "json" => Ok(OutputFormat::Json),
            "prometheus" => Ok(OutputFormat::Prometheus),
            "grafana" => Ok(OutputFormat::Grafana),
            other => Err(MetricsError::Config(format!(
                "Invalid output format: {} (expected all, json, prometheus or grafana)",
                other
            ))),
        }
    }

    fn includes(&self, format: OutputFormat) -> bool {
        *self == OutputFormat::All || *self == format
    }
}

/// Writes the selected renderings under the output directory.
///
/// Every file's content is fully constructed before the first byte is
/// written, and each file lands via a temp-file rename, so a reader can
/// never observe a partially written document. Each renderer owns exactly
/// one file.
pub async fn write_outputs(
    metrics: &Metrics,
    output_dir: &Path,
    format: OutputFormat,
) -> Result<(), MetricsError> {
    tokio::fs::create_dir_all(output_dir).await.map_err(|e| {
        MetricsError::Config(format!(
            "Cannot create output directory {}: {}",
            output_dir.display(),
            e
        ))
    })?;

    if format.includes(OutputFormat::Json) {
        let json = serde_json::to_string_pretty(metrics)?;
        write_atomic(&output_dir.join("metrics.json"), &json).await?;
    }
    if format.includes(OutputFormat::Prometheus) {
        write_atomic(&output_dir.join("metrics.prom"), &render_prometheus(metrics)).await?;
    }
    if format.includes(OutputFormat::Grafana) {
        let json = serde_json::to_string_pretty(&dashboard())?;
        write_atomic(&output_dir.join("dashboard.json"), &json).await?;
    }
    // The plain-text summary is the run's record and is written for every
    // format selection.
    write_atomic(&output_dir.join("summary.txt"), &render_summary(metrics)).await?;

    info!(dir = %output_dir.display(), "Metrics written");
    Ok(())
}

async fn write_atomic(path: &Path, content: &str) -> Result<(), MetricsError> {
    let tmp = path.with_extension("tmp");
    tokio::fs::write(&tmp, content).await?;
    tokio::fs::rename(&tmp, path).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::aggregate;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_write_all_formats() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("metrics");
        let metrics = aggregate(Vec::new());

        write_outputs(&metrics, &out, OutputFormat::All).await.unwrap();

        assert!(out.join("metrics.json").exists());
        assert!(out.join("metrics.prom").exists());
        assert!(out.join("dashboard.json").exists());
        assert!(out.join("summary.txt").exists());
    }

    #[tokio::test]
    async fn test_format_selection_gates_files() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("metrics");
        let metrics = aggregate(Vec::new());

        write_outputs(&metrics, &out, OutputFormat::Prometheus).await.unwrap();

        assert!(out.join("metrics.prom").exists());
        assert!(out.join("summary.txt").exists());
        assert!(!out.join("metrics.json").exists());
        assert!(!out.join("dashboard.json").exists());
    }

    #[tokio::test]
    async fn test_written_json_round_trips() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("metrics");
        let metrics = aggregate(Vec::new());

        write_outputs(&metrics, &out, OutputFormat::Json).await.unwrap();

        let content = std::fs::read_to_string(out.join("metrics.json")).unwrap();
        let loaded: Metrics = serde_json::from_str(&content).unwrap();
        assert_eq!(loaded, metrics);
    }

    #[test]
    fn test_parse_format() {
        assert_eq!(OutputFormat::parse("all").unwrap(), OutputFormat::All);
        assert_eq!(OutputFormat::parse("grafana").unwrap(), OutputFormat::Grafana);
        assert!(OutputFormat::parse("yaml").is_err());
    }
}
