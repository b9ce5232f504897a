use serde::{Deserialize, Serialize};
use tracing::warn;
use ts_rs::TS;

use mend_core::models::assessment::{RiskAssessment, RiskEvaluation};
use mend_core::models::report::{DailyReport, Mood};

/// Exponent applied to the weighted total before scaling to 0–100.
pub const RESCALE_EXPONENT: f64 = 1.2;

/// Per-dimension weights of the combined score.
///
/// They sum to 1.0, but absent sleep or mood contribute a zero sub-score
/// rather than having their weight redistributed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Weights {
    pub steps: f64,
    pub pain: f64,
    pub medicine: f64,
    pub sleep: f64,
    pub mood: f64,
}

impl Weights {
    pub const STANDARD: Weights = Weights {
        steps: 0.35,
        pain: 0.25,
        medicine: 0.15,
        sleep: 0.15,
        mood: 0.10,
    };
}

impl Default for Weights {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// The normalized contribution of each input dimension.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SubScores {
    pub steps: f64,
    pub pain: f64,
    pub medicine: f64,
    pub sleep: f64,
    pub mood: f64,
}

impl SubScores {
    pub fn from_report(report: &DailyReport) -> Self {
        Self {
            steps: steps_sub_score(report.steps),
            pain: pain_sub_score(report.pain_level),
            medicine: medicine_sub_score(report.medicine_taken),
            sleep: sleep_sub_score(report.sleep_hours),
            mood: mood_sub_score(report.mood_signal()),
        }
    }

    /// Weighted sum, evaluated in a fixed order so results are reproducible.
    pub fn weighted_total(&self, weights: &Weights) -> f64 {
        weights.steps * self.steps
            + weights.pain * self.pain
            + weights.medicine * self.medicine
            + weights.sleep * self.sleep
            + weights.mood * self.mood
    }
}

/// Lower activity means higher risk. Upper bounds are inclusive.
pub fn steps_sub_score(steps: i64) -> f64 {
    if steps <= 1000 {
        0.9
    } else if steps <= 3000 {
        0.7
    } else if steps <= 5000 {
        0.5
    } else if steps <= 8000 {
        0.3
    } else {
        0.1
    }
}

/// Linear and unclamped: pain above 10 yields more than 1.0.
pub fn pain_sub_score(pain_level: f64) -> f64 {
    pain_level / 10.0
}

pub fn medicine_sub_score(taken: bool) -> f64 {
    if taken { 0.1 } else { 0.3 }
}

/// Unreported sleep adds nothing.
pub fn sleep_sub_score(hours: Option<f64>) -> f64 {
    match hours {
        None => 0.0,
        Some(h) if h < 5.0 => 0.6,
        Some(h) if h < 7.0 => 0.3,
        Some(_) => 0.1,
    }
}

/// Unreported or unrecognized moods add nothing.
pub fn mood_sub_score(mood: Option<Mood>) -> f64 {
    match mood {
        None => 0.0,
        Some(Mood::Sad | Mood::Tired | Mood::Angry) => 0.5,
        Some(Mood::Neutral) => 0.3,
        Some(Mood::Happy | Mood::Energetic) => 0.1,
    }
}

/// `round(total^1.2 × 100, 2)`.
pub fn rescale(total: f64) -> f64 {
    round_to_hundredths(total.powf(RESCALE_EXPONENT) * 100.0)
}

fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Score a report. Never fails; out-of-range inputs flow through the
/// arithmetic unchecked (see [`crate::validation`]).
pub fn score(report: &DailyReport) -> RiskEvaluation {
    let total = SubScores::from_report(report).weighted_total(&Weights::STANDARD);
    let evaluation = RiskEvaluation::from_score(rescale(total));
    if !evaluation.has_finite_score() {
        warn!(total, "weighted total is negative; risk score is undefined");
    }
    evaluation
}

/// Score a report and stamp it with a caller-supplied time.
pub fn assess(report: &DailyReport, evaluated_at: jiff::Timestamp) -> RiskAssessment {
    RiskAssessment {
        evaluation: score(report),
        evaluated_at,
    }
}

/// [`assess`] against the wall clock.
pub fn assess_now(report: &DailyReport) -> RiskAssessment {
    assess(report, jiff::Timestamp::now())
}
