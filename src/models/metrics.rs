use std::collections::{BTreeMap, HashSet};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize, Serializer};

use super::context::{ContextRecord, RiskCounts};

/// Totals folded over the final per-context map.
///
/// Invariants: `risk` equals the sum of all per-context risk distributions,
/// `total_alerts` equals the sum of all per-context alert counters, and the
/// unique-vulnerability set can never be larger than `total_alerts`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GlobalSummary {
    pub total_urls: u64,
    pub total_alerts: u64,
    pub risk: RiskCounts,
    /// Stored as a set; serialized as a sorted list.
    #[serde(serialize_with = "sorted_names")]
    pub unique_vulnerabilities: HashSet<String>,
    pub scan_duration_seconds: f64,
}

impl GlobalSummary {
    /// Recomputes the summary as a pure fold over the context map. The
    /// aggregator never mutates a summary incrementally, so the totals
    /// reconcile regardless of the order fragments arrived in.
    pub fn from_contexts(contexts: &BTreeMap<String, ContextRecord>) -> GlobalSummary {
        let mut summary = GlobalSummary::default();
        for record in contexts.values() {
            summary.total_urls += record.urls_scanned;
            summary.total_alerts += record.total_alerts;
            summary.risk.add(&record.risk_distribution);
            for finding in &record.findings {
                summary.unique_vulnerabilities.insert(finding.name.clone());
            }
            if let Some(seconds) = record.metadata.as_ref().and_then(|m| m.scan_time_seconds) {
                summary.scan_duration_seconds += seconds;
            }
        }
        summary
    }
}

fn sorted_names<S>(set: &HashSet<String>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let mut names: Vec<&String> = set.iter().collect();
    names.sort();
    names.serialize(serializer)
}

/// One point of a trend series: per-risk counts recorded for a date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub counts: RiskCounts,
}

/// Trend series at each supported granularity, ascending by date.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Trends {
    pub daily: Vec<TrendPoint>,
    pub weekly: Vec<TrendPoint>,
    pub monthly: Vec<TrendPoint>,
}

/// The complete aggregated model for one collection run. Built once per run;
/// renderers only read it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    pub timestamp: DateTime<Utc>,
    pub contexts: BTreeMap<String, ContextRecord>,
    pub summary: GlobalSummary,
    pub trends: Trends,
}
