use std::path::{Path, PathBuf};

use tracing::warn;

use crate::errors::MetricsError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactFormat {
    Xml,
    Json,
}

/// One report file discovered under the results directory, tagged with the
/// context it belongs to.
#[derive(Debug, Clone)]
pub struct Artifact {
    pub path: PathBuf,
    pub context: String,
    pub format: ArtifactFormat,
}

/// Finds scan report artifacts under the results directory.
///
/// The context id for an artifact is its immediate enclosing directory name.
/// JSON files named after SARIF are a different report format and are
/// excluded up front. A missing results directory is a configuration error;
/// an existing directory with no artifacts is not.
pub fn discover_artifacts(results_dir: &Path) -> Result<Vec<Artifact>, MetricsError> {
    if !results_dir.is_dir() {
        return Err(MetricsError::Config(format!(
            "Results directory does not exist: {}",
            results_dir.display()
        )));
    }

    let mut artifacts = Vec::new();
    for (suffix, format) in [("xml", ArtifactFormat::Xml), ("json", ArtifactFormat::Json)] {
        let pattern = format!("{}/**/*.{}", results_dir.display(), suffix);
        let entries = glob::glob(&pattern).map_err(|e| {
            MetricsError::Config(format!("Invalid glob pattern {}: {}", pattern, e))
        })?;
        for entry in entries {
            match entry {
                Ok(path) => {
                    if format == ArtifactFormat::Json && is_sarif_name(&path) {
                        continue;
                    }
                    let context = context_name(&path);
                    artifacts.push(Artifact { path, context, format });
                }
                Err(e) => warn!(error = %e, "Skipping unreadable directory entry"),
            }
        }
    }
    Ok(artifacts)
}

fn is_sarif_name(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .map_or(false, |n| n.contains("sarif"))
}

fn context_name(path: &Path) -> String {
    path.parent()
        .and_then(|p| p.file_name())
        .and_then(|n| n.to_str())
        .unwrap_or("unknown")
        .to_string()
}
