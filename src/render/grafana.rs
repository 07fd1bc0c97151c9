use serde_json::{json, Value};

use super::prometheus::NAMESPACE;

/// Static dashboard definition.
///
/// Panels reference the exposition metric names only; the dashboard never
/// embeds values from a particular run, so it takes no model argument.
pub fn dashboard() -> Value {
    json!({
        "dashboard": {
            "title": "ZAP Security Scanning Metrics",
            "panels": [
                {
                    "title": "Total Vulnerabilities by Risk",
                    "type": "graph",
                    "targets": [
                        { "expr": format!("{NAMESPACE}_scan_high_risk_count"), "legendFormat": "High Risk" },
                        { "expr": format!("{NAMESPACE}_scan_medium_risk_count"), "legendFormat": "Medium Risk" },
                        { "expr": format!("{NAMESPACE}_scan_low_risk_count"), "legendFormat": "Low Risk" }
                    ]
                },
                {
                    "title": "Scan Coverage",
                    "type": "stat",
                    "targets": [
                        { "expr": format!("{NAMESPACE}_scan_total_urls"), "legendFormat": "URLs Scanned" }
                    ]
                },
                {
                    "title": "Scan Duration",
                    "type": "gauge",
                    "targets": [
                        { "expr": format!("{NAMESPACE}_scan_duration_seconds / 60"), "legendFormat": "Minutes" }
                    ]
                },
                {
                    "title": "Unique Vulnerabilities",
                    "type": "stat",
                    "targets": [
                        { "expr": format!("{NAMESPACE}_scan_unique_vulnerabilities"), "legendFormat": "Unique Issues" }
                    ]
                }
            ]
        }
    })
}
