use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Score at or above which a report is at least `Moderate`.
pub const MODERATE_THRESHOLD: f64 = 30.0;

/// Score at or above which a report is `High`.
pub const HIGH_THRESHOLD: f64 = 60.0;

/// Discrete risk category derived from a risk score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

impl RiskLevel {
    /// Thresholds are lower-bound inclusive: 30.00 is `Moderate`, 60.00 is `High`.
    pub fn from_score(score: f64) -> Self {
        if score < MODERATE_THRESHOLD {
            RiskLevel::Low
        } else if score < HIGH_THRESHOLD {
            RiskLevel::Moderate
        } else {
            RiskLevel::High
        }
    }

    /// Fixed advisory text shown to reviewers.
    pub fn recommendation(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Patient is healthy and active. Maintain routine.",
            RiskLevel::Moderate => "Encourage regular walks and proper rest.",
            RiskLevel::High => "Monitor patient closely. Possible inflammation or fatigue.",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Moderate => "Moderate",
            RiskLevel::High => "High",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RiskLevel {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(RiskLevel::Low),
            "moderate" => Ok(RiskLevel::Moderate),
            "high" => Ok(RiskLevel::High),
            other => Err(CoreError::UnknownRiskLevel(other.to_string())),
        }
    }
}

/// The pure result of scoring one report. No identity, no timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RiskEvaluation {
    pub risk_score: f64,
    pub risk_level: RiskLevel,
    pub recommendation: String,
}

impl RiskEvaluation {
    /// Build an evaluation from an already-rounded score. Level and
    /// recommendation are derived, never supplied.
    pub fn from_score(risk_score: f64) -> Self {
        let risk_level = RiskLevel::from_score(risk_score);
        Self {
            risk_score,
            risk_level,
            recommendation: risk_level.recommendation().to_string(),
        }
    }

    /// False when the weighted total went negative and the rescale produced
    /// `NaN`. Such evaluations are still classified High.
    pub fn has_finite_score(&self) -> bool {
        self.risk_score.is_finite()
    }
}

/// A `RiskEvaluation` stamped with the time it was computed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RiskAssessment {
    #[serde(flatten)]
    pub evaluation: RiskEvaluation,
    pub evaluated_at: jiff::Timestamp,
}
