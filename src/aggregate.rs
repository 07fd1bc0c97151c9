use std::collections::BTreeMap;

use chrono::Utc;

use crate::models::{ContextRecord, GlobalSummary, Metrics, Trends};
use crate::parsers::{ContextFragment, Fragment};

/// Merges parsed fragments into the aggregate model.
///
/// Fragments for the same context combine by union; the global summary is
/// then recomputed in one pure fold over the final map and each context's
/// findings are sorted into canonical order, so the result does not depend
/// on the order fragments arrived in. Artifacts that failed to parse simply
/// contribute no fragment.
pub fn aggregate(fragments: Vec<ContextFragment>) -> Metrics {
    let mut contexts: BTreeMap<String, ContextRecord> = BTreeMap::new();
    for fragment in fragments {
        let record = contexts.entry(fragment.context).or_default();
        match fragment.payload {
            Fragment::Report(report) => record.merge(report),
            Fragment::Metadata(metadata) => record.merge_metadata(metadata),
        }
    }

    for record in contexts.values_mut() {
        record.finalize();
    }

    let summary = GlobalSummary::from_contexts(&contexts);

    Metrics {
        timestamp: Utc::now(),
        contexts,
        summary,
        trends: Trends::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{RiskLevel, ScanMetadata};

    fn report(context: &str, alerts: &[(&str, i64)]) -> ContextFragment {
        let mut record = ContextRecord::default();
        record.urls_scanned = 1;
        for (name, code) in alerts {
            record.record_alert(Some((*name).to_string()), Some(RiskLevel::from_code(*code)), None);
        }
        ContextFragment {
            context: context.to_string(),
            payload: Fragment::Report(record),
        }
    }

    fn metadata(context: &str, seconds: f64) -> ContextFragment {
        ContextFragment {
            context: context.to_string(),
            payload: Fragment::Metadata(ScanMetadata {
                generated: None,
                version: Some("2.14.0".into()),
                scan_time_seconds: Some(seconds),
            }),
        }
    }

    #[test]
    fn test_summary_reconciles_with_contexts() {
        let metrics = aggregate(vec![
            report("internal", &[("SQL Injection", 3), ("Cookie Without Secure Flag", 1)]),
            report("external", &[("SQL Injection", 3), ("CSP Header Missing", 2)]),
            metadata("internal", 42.5),
        ]);

        let folded: u64 = metrics
            .contexts
            .values()
            .map(|r| r.risk_distribution.total())
            .sum();
        assert_eq!(metrics.summary.risk.total(), folded);
        assert_eq!(metrics.summary.total_urls, 2);
        assert_eq!(metrics.summary.total_alerts, 4);
        assert_eq!(metrics.summary.risk.high, 2);
        assert_eq!(metrics.summary.unique_vulnerabilities.len(), 3);
        assert_eq!(metrics.summary.scan_duration_seconds, 42.5);
    }

    #[test]
    fn test_aggregation_is_order_independent() {
        let fragments = vec![
            report("internal", &[("SQL Injection", 3)]),
            metadata("internal", 10.0),
            report("internal", &[("Path Traversal", 3), ("Server Banner", 0)]),
            report("api", &[("SQL Injection", 3)]),
        ];
        let mut reversed = fragments.clone();
        reversed.reverse();

        let a = aggregate(fragments);
        let b = aggregate(reversed);
        assert_eq!(a.contexts, b.contexts);
        assert_eq!(a.summary, b.summary);
    }

    #[test]
    fn test_metadata_before_report_still_merges() {
        let metrics = aggregate(vec![
            metadata("api", 5.0),
            report("api", &[("SQL Injection", 3)]),
        ]);
        let record = &metrics.contexts["api"];
        assert_eq!(record.total_alerts, 1);
        assert_eq!(record.metadata.as_ref().unwrap().scan_time_seconds, Some(5.0));
    }

    #[test]
    fn test_no_fragments_yields_empty_model() {
        let metrics = aggregate(Vec::new());
        assert!(metrics.contexts.is_empty());
        assert_eq!(metrics.summary, GlobalSummary::default());
    }

    #[test]
    fn test_unique_set_never_exceeds_total_alerts() {
        let metrics = aggregate(vec![
            report("a", &[("Same Finding", 2), ("Same Finding", 2)]),
            report("b", &[("Same Finding", 2)]),
        ]);
        assert_eq!(metrics.summary.total_alerts, 3);
        assert_eq!(metrics.summary.unique_vulnerabilities.len(), 1);
    }
}
