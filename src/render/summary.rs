use crate::models::{Metrics, RiskLevel};

/// Renders the human-readable summary report: header with timestamp, the
/// global statistics block, then one sub-block per context in sorted order.
pub fn render_summary(metrics: &Metrics) -> String {
    let summary = &metrics.summary;
    let mut out = String::new();

    out.push_str("ZAP Scan Metrics Summary\n");
    out.push_str(&"=".repeat(50));
    out.push_str("\n\n");
    out.push_str(&format!("Timestamp: {}\n\n", metrics.timestamp.to_rfc3339()));

    out.push_str("Overall Statistics:\n");
    out.push_str(&"-".repeat(20));
    out.push('\n');
    out.push_str(&format!("Total URLs Scanned: {}\n", summary.total_urls));
    out.push_str(&format!("Total Alerts: {}\n", summary.total_alerts));
    out.push_str(&format!("High Risk: {}\n", summary.risk.high));
    out.push_str(&format!("Medium Risk: {}\n", summary.risk.medium));
    out.push_str(&format!("Low Risk: {}\n", summary.risk.low));
    out.push_str(&format!("Informational: {}\n", summary.risk.info));
    out.push_str(&format!(
        "Unique Vulnerabilities: {}\n",
        summary.unique_vulnerabilities.len()
    ));
    out.push_str(&format!(
        "Total Scan Duration: {:.2} seconds\n\n",
        summary.scan_duration_seconds
    ));

    out.push_str("Per-Context Breakdown:\n");
    out.push_str(&"-".repeat(20));
    out.push('\n');
    for (context, record) in &metrics.contexts {
        out.push_str(&format!("\n{}:\n", context));
        out.push_str(&format!("  URLs: {}\n", record.urls_scanned));
        out.push_str(&format!("  Alerts: {}\n", record.total_alerts));
        out.push_str("  Risk Distribution:\n");
        for level in RiskLevel::ALL {
            let count = record.risk_distribution.get(level);
            if count > 0 {
                out.push_str(&format!("    {}: {}\n", level.label(), count));
            }
        }
    }

    out
}
