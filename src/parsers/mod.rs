pub mod json;
pub mod xml;

use crate::discovery::{Artifact, ArtifactFormat};
use crate::errors::MetricsError;
use crate::models::{ContextRecord, ScanMetadata};

/// A parser's contribution for one context: either a full report record or
/// a metadata-only fragment.
#[derive(Debug, Clone, PartialEq)]
pub enum Fragment {
    Report(ContextRecord),
    Metadata(ScanMetadata),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContextFragment {
    pub context: String,
    pub payload: Fragment,
}

/// Parses one discovered artifact into a fragment for its context.
///
/// Returns Ok(None) when the document is intentionally skipped (a SARIF
/// export on the JSON path), and an error when the artifact cannot be read
/// or does not parse as its declared format at all. Parsers touch no global
/// state; only the aggregator combines fragments.
pub async fn parse_artifact(artifact: &Artifact) -> Result<Option<ContextFragment>, MetricsError> {
    let content = tokio::fs::read_to_string(&artifact.path).await?;
    let payload = match artifact.format {
        ArtifactFormat::Xml => Fragment::Report(xml::parse_report(&content)?),
        ArtifactFormat::Json => match json::parse_metadata(&content)? {
            Some(metadata) => Fragment::Metadata(metadata),
            None => return Ok(None),
        },
    };
    Ok(Some(ContextFragment {
        context: artifact.context.clone(),
        payload,
    }))
}
