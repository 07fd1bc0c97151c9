use std::path::PathBuf;

use futures::future::join_all;
use tracing::{debug, error, info, warn};

use crate::aggregate::aggregate;
use crate::cli::Cli;
use crate::discovery::discover_artifacts;
use crate::errors::MetricsError;
use crate::models::{RiskLevel, Trends};
use crate::output::{write_outputs, OutputFormat};
use crate::parsers::parse_artifact;
use crate::thresholds::{AlertThresholds, ThresholdVerdict};
use crate::trends::{build_trend, Granularity, ZeroHistory};

pub async fn handle_collect(args: Cli) -> Result<(), MetricsError> {
    let format = OutputFormat::parse(&args.format)?;
    let threshold_level = RiskLevel::parse(&args.alert_threshold).ok_or_else(|| {
        MetricsError::Config(format!(
            "Invalid alert threshold: {} (expected high, medium, low or info)",
            args.alert_threshold
        ))
    })?;

    let results_dir = PathBuf::from(&args.results_dir);
    let artifacts = discover_artifacts(&results_dir)?;
    if artifacts.is_empty() {
        warn!(dir = %results_dir.display(), "No scan artifacts discovered");
    } else {
        info!(count = artifacts.len(), "Processing scan results");
    }

    // Artifacts read distinct files and return pure fragments, so parsing
    // runs in parallel; merging happens on one combining path afterwards.
    let tasks: Vec<_> = artifacts
        .into_iter()
        .map(|artifact| {
            tokio::spawn(async move {
                let result = parse_artifact(&artifact).await;
                (artifact, result)
            })
        })
        .collect();

    let mut fragments = Vec::new();
    for joined in join_all(tasks).await {
        match joined {
            Ok((_, Ok(Some(fragment)))) => fragments.push(fragment),
            Ok((artifact, Ok(None))) => {
                debug!(path = %artifact.path.display(), "Skipping non-report document");
            }
            Ok((artifact, Err(e))) => {
                warn!(path = %artifact.path.display(), error = %e, "Skipping unreadable artifact");
            }
            Err(e) => warn!(error = %e, "Parser task failed"),
        }
    }

    let mut metrics = aggregate(fragments);

    let history = ZeroHistory;
    metrics.trends = Trends {
        daily: build_trend(&history, Granularity::Daily, 7),
        weekly: build_trend(&history, Granularity::Weekly, 4),
        monthly: build_trend(&history, Granularity::Monthly, 12),
    };

    match AlertThresholds::from_level(threshold_level).evaluate(&metrics.summary.risk) {
        ThresholdVerdict::Breach(count) => {
            error!(count, threshold = threshold_level.label(), "Findings at or above the alert threshold");
        }
        ThresholdVerdict::Warn(count) => {
            warn!(count, threshold = threshold_level.label(), "Findings approaching the alert threshold");
        }
        ThresholdVerdict::Pass => {
            info!("No findings at or above the alert threshold");
        }
    }

    write_outputs(&metrics, &PathBuf::from(&args.output_dir), format).await?;

    println!("\nMetrics Summary:");
    println!("  Total URLs: {}", metrics.summary.total_urls);
    println!("  Total Alerts: {}", metrics.summary.total_alerts);
    println!("  High Risk: {}", metrics.summary.risk.high);
    println!("  Medium Risk: {}", metrics.summary.risk.medium);
    println!("  Low Risk: {}", metrics.summary.risk.low);

    Ok(())
}
