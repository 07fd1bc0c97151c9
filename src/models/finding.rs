use serde::{Deserialize, Serialize};

/// Risk level for a scanner alert, ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Info,
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Rendering order for risk-level breakdowns, most severe first.
    pub const ALL: [RiskLevel; 4] = [
        RiskLevel::High,
        RiskLevel::Medium,
        RiskLevel::Low,
        RiskLevel::Info,
    ];

    /// Maps a ZAP risk code to a level. 3 = High, 2 = Medium, 1 = Low;
    /// any other code is informational.
    pub fn from_code(code: i64) -> RiskLevel {
        match code {
            3 => RiskLevel::High,
            2 => RiskLevel::Medium,
            1 => RiskLevel::Low,
            _ => RiskLevel::Info,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::High => "high",
            RiskLevel::Medium => "medium",
            RiskLevel::Low => "low",
            RiskLevel::Info => "info",
        }
    }

    pub fn parse(s: &str) -> Option<RiskLevel> {
        match s {
            "high" => Some(RiskLevel::High),
            "medium" => Some(RiskLevel::Medium),
            "low" => Some(RiskLevel::Low),
            "info" => Some(RiskLevel::Info),
            _ => None,
        }
    }

    /// The next level down, saturating at Info.
    pub fn step_down(&self) -> RiskLevel {
        match self {
            RiskLevel::High => RiskLevel::Medium,
            RiskLevel::Medium => RiskLevel::Low,
            RiskLevel::Low => RiskLevel::Info,
            RiskLevel::Info => RiskLevel::Info,
        }
    }
}

/// Scanner confidence in an alert. Code 0 means the scanner reported no
/// confidence, which is modeled as absence rather than a level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    Low,
    Medium,
    High,
}

impl Confidence {
    pub fn from_code(code: i64) -> Option<Confidence> {
        match code {
            3 => Some(Confidence::High),
            2 => Some(Confidence::Medium),
            1 => Some(Confidence::Low),
            _ => None,
        }
    }
}

/// One reported vulnerability instance. The name is the identity key used
/// for deduplication across contexts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    pub name: String,
    /// Absent when the report entry carried no risk code.
    pub risk: Option<RiskLevel>,
    /// Absent when the report entry carried no confidence, or code 0.
    pub confidence: Option<Confidence>,
}
