use serde::{Deserialize, Serialize};
use super::finding::{Confidence, Finding, RiskLevel};

/// Per-risk-level counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskCounts {
    pub high: u64,
    pub medium: u64,
    pub low: u64,
    pub info: u64,
}

impl RiskCounts {
    pub fn increment(&mut self, level: RiskLevel) {
        match level {
            RiskLevel::High => self.high += 1,
            RiskLevel::Medium => self.medium += 1,
            RiskLevel::Low => self.low += 1,
            RiskLevel::Info => self.info += 1,
        }
    }

    pub fn add(&mut self, other: &RiskCounts) {
        self.high += other.high;
        self.medium += other.medium;
        self.low += other.low;
        self.info += other.info;
    }

    pub fn get(&self, level: RiskLevel) -> u64 {
        match level {
            RiskLevel::High => self.high,
            RiskLevel::Medium => self.medium,
            RiskLevel::Low => self.low,
            RiskLevel::Info => self.info,
        }
    }

    pub fn total(&self) -> u64 {
        self.high + self.medium + self.low + self.info
    }

    /// Sum of counts at the given level or more severe.
    pub fn at_or_above(&self, level: RiskLevel) -> u64 {
        RiskLevel::ALL
            .iter()
            .filter(|l| **l >= level)
            .map(|l| self.get(*l))
            .sum()
    }
}

/// Per-confidence-level counters. Alerts with no reported confidence are
/// not represented here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfidenceCounts {
    pub high: u64,
    pub medium: u64,
    pub low: u64,
}

impl ConfidenceCounts {
    pub fn increment(&mut self, confidence: Confidence) {
        match confidence {
            Confidence::High => self.high += 1,
            Confidence::Medium => self.medium += 1,
            Confidence::Low => self.low += 1,
        }
    }

    pub fn add(&mut self, other: &ConfidenceCounts) {
        self.high += other.high;
        self.medium += other.medium;
        self.low += other.low;
    }
}

/// Scan metadata reported by the tool itself, typically contributed by a
/// JSON report alongside the XML report for the same context.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScanMetadata {
    pub generated: Option<String>,
    pub version: Option<String>,
    pub scan_time_seconds: Option<f64>,
}

/// One scanned context's results, built up from the artifacts discovered
/// under that context's directory.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContextRecord {
    pub urls_scanned: u64,
    /// Every alert entry seen, including entries too degraded to retain
    /// as findings.
    pub total_alerts: u64,
    /// Named findings only; an alert without a name has no identity and
    /// is not retained here.
    pub findings: Vec<Finding>,
    pub risk_distribution: RiskCounts,
    pub confidence_distribution: ConfidenceCounts,
    pub metadata: Option<ScanMetadata>,
}

impl ContextRecord {
    /// Records one alert entry as extracted from a report. Absent fields
    /// degrade the entry rather than dropping it: a missing risk code joins
    /// no risk bucket, a missing name keeps the entry out of the findings
    /// list, but every entry counts toward total_alerts.
    pub fn record_alert(
        &mut self,
        name: Option<String>,
        risk: Option<RiskLevel>,
        confidence: Option<Confidence>,
    ) {
        self.total_alerts += 1;
        if let Some(level) = risk {
            self.risk_distribution.increment(level);
        }
        if let Some(conf) = confidence {
            self.confidence_distribution.increment(conf);
        }
        if let Some(name) = name {
            self.findings.push(Finding { name, risk, confidence });
        }
    }

    /// Combines another fragment for the same context by union: findings
    /// concatenate, counters sum, metadata merges field-wise.
    pub fn merge(&mut self, other: ContextRecord) {
        self.urls_scanned += other.urls_scanned;
        self.total_alerts += other.total_alerts;
        self.findings.extend(other.findings);
        self.risk_distribution.add(&other.risk_distribution);
        self.confidence_distribution.add(&other.confidence_distribution);
        if let Some(meta) = other.metadata {
            self.merge_metadata(meta);
        }
    }

    /// Folds in scan metadata: generated/version fill in only when absent,
    /// scan duration accumulates.
    pub fn merge_metadata(&mut self, incoming: ScanMetadata) {
        let meta = self.metadata.get_or_insert_with(ScanMetadata::default);
        if meta.generated.is_none() {
            meta.generated = incoming.generated;
        }
        if meta.version.is_none() {
            meta.version = incoming.version;
        }
        if let Some(seconds) = incoming.scan_time_seconds {
            *meta.scan_time_seconds.get_or_insert(0.0) += seconds;
        }
    }

    /// Sorts the findings list into a canonical order so the merged record
    /// does not depend on artifact arrival order.
    pub fn finalize(&mut self) {
        self.findings.sort_by(|a, b| {
            a.name
                .cmp(&b.name)
                .then_with(|| b.risk.cmp(&a.risk))
                .then_with(|| b.confidence.cmp(&a.confidence))
        });
    }
}
