use crate::models::{RiskCounts, RiskLevel};

/// Alerting levels derived from one configured threshold.
///
/// The error level is the configured level itself and the warn level sits
/// one step below it, so a non-High threshold actually changes what is
/// treated as an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlertThresholds {
    pub error_level: RiskLevel,
    pub warn_level: RiskLevel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThresholdVerdict {
    Pass,
    /// Findings at or above the warn level, none at the error level.
    Warn(u64),
    /// Findings at or above the error level.
    Breach(u64),
}

impl AlertThresholds {
    pub fn from_level(level: RiskLevel) -> AlertThresholds {
        AlertThresholds {
            error_level: level,
            warn_level: level.step_down(),
        }
    }

    pub fn evaluate(&self, risk: &RiskCounts) -> ThresholdVerdict {
        let breaching = risk.at_or_above(self.error_level);
        if breaching > 0 {
            return ThresholdVerdict::Breach(breaching);
        }
        let warning = risk.at_or_above(self.warn_level);
        if warning > 0 {
            return ThresholdVerdict::Warn(warning);
        }
        ThresholdVerdict::Pass
    }
}
