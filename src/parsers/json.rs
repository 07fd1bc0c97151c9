use chrono::DateTime;
use serde_json::Value;

use crate::errors::MetricsError;
use crate::models::ScanMetadata;

/// Extracts scan metadata from a ZAP JSON report.
///
/// Returns None for documents recognized as SARIF exports, which come from a
/// different report format and carry no ZAP metadata. A document that does
/// not parse as JSON at all is a hard failure for the artifact.
pub fn parse_metadata(content: &str) -> Result<Option<ScanMetadata>, MetricsError> {
    let data: Value = serde_json::from_str(content)?;
    if is_sarif(&data) {
        return Ok(None);
    }

    let mut metadata = ScanMetadata {
        generated: string_field(&data, "@generated"),
        version: string_field(&data, "@version"),
        scan_time_seconds: None,
    };

    for site in sites(&data) {
        if let Some(seconds) = site_duration(site) {
            *metadata.scan_time_seconds.get_or_insert(0.0) += seconds;
        }
    }

    Ok(Some(metadata))
}

fn is_sarif(data: &Value) -> bool {
    if data.get("runs").map_or(false, Value::is_array) {
        return true;
    }
    data.get("$schema")
        .and_then(Value::as_str)
        .map_or(false, |s| s.contains("sarif"))
}

/// ZAP emits `site` as an array, or a bare object when only one target was
/// scanned.
fn sites(data: &Value) -> Vec<&Value> {
    match data.get("site") {
        Some(Value::Array(sites)) => sites.iter().collect(),
        Some(site @ Value::Object(_)) => vec![site],
        _ => Vec::new(),
    }
}

fn site_duration(site: &Value) -> Option<f64> {
    let start = DateTime::parse_from_rfc3339(site.get("@start")?.as_str()?).ok()?;
    let end = DateTime::parse_from_rfc3339(site.get("@end")?.as_str()?).ok()?;
    Some((end - start).num_milliseconds() as f64 / 1000.0)
}

fn string_field(data: &Value, key: &str) -> Option<String> {
    data.get(key).and_then(Value::as_str).map(str::to_owned)
}
