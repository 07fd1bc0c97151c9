use crate::models::{Metrics, RiskLevel};

/// Metric namespace shared by the exposition and dashboard renderers.
pub const NAMESPACE: &str = "zap";

/// Renders the model in Prometheus exposition format.
///
/// Context keys come from a sorted map and risk levels render in fixed
/// severity order, so the same model always renders the same bytes.
pub fn render_prometheus(metrics: &Metrics) -> String {
    let summary = &metrics.summary;
    let mut lines = vec![
        format!("{NAMESPACE}_scan_total_urls {}", summary.total_urls),
        format!("{NAMESPACE}_scan_total_alerts {}", summary.total_alerts),
        format!("{NAMESPACE}_scan_high_risk_count {}", summary.risk.high),
        format!("{NAMESPACE}_scan_medium_risk_count {}", summary.risk.medium),
        format!("{NAMESPACE}_scan_low_risk_count {}", summary.risk.low),
        format!("{NAMESPACE}_scan_info_count {}", summary.risk.info),
        format!(
            "{NAMESPACE}_scan_unique_vulnerabilities {}",
            summary.unique_vulnerabilities.len()
        ),
        format!(
            "{NAMESPACE}_scan_duration_seconds {}",
            summary.scan_duration_seconds
        ),
    ];

    for (context, record) in &metrics.contexts {
        for level in RiskLevel::ALL {
            let count = record.risk_distribution.get(level);
            if count > 0 {
                lines.push(format!(
                    "{NAMESPACE}_context_risk_count{{context=\"{}\",risk=\"{}\"}} {}",
                    context,
                    level.label(),
                    count
                ));
            }
        }
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}
