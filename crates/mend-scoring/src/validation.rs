//! Caller-side range checks for daily reports.
//!
//! The scorer accepts anything well-typed. Form and batch collaborators run
//! these checks first and decide whether to reject, skip or just warn.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

use mend_core::models::pain_scale::PainScale;
use mend_core::models::report::DailyReport;

/// Hours in a day; anything above is a data-entry error.
pub const MAX_SLEEP_HOURS: f64 = 24.0;

/// Which report field a validation error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ReportField {
    Steps,
    PainLevel,
    SleepHours,
}

impl ReportField {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportField::Steps => "steps",
            ReportField::PainLevel => "pain level",
            ReportField::SleepHours => "sleep hours",
        }
    }
}

/// Inclusive numeric range. `max: None` means unbounded above.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ValueRange {
    pub min: f64,
    pub max: Option<f64>,
}

impl ValueRange {
    pub fn contains(&self, value: f64) -> bool {
        if !value.is_finite() || value < self.min {
            return false;
        }
        self.max.is_none_or(|max| value <= max)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{message}")]
pub struct ValidationError {
    pub field: ReportField,
    pub value: f64,
    pub expected_range: ValueRange,
    pub message: String,
}

/// Check a report against the agreed ranges. An empty result means valid.
pub fn validate_report(report: &DailyReport, pain_scale: PainScale) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    check(
        &mut errors,
        ReportField::Steps,
        report.steps as f64,
        ValueRange { min: 0.0, max: None },
    );
    check(
        &mut errors,
        ReportField::PainLevel,
        report.pain_level,
        ValueRange {
            min: pain_scale.min(),
            max: Some(pain_scale.max()),
        },
    );
    if let Some(hours) = report.sleep_hours {
        check(
            &mut errors,
            ReportField::SleepHours,
            hours,
            ValueRange {
                min: 0.0,
                max: Some(MAX_SLEEP_HOURS),
            },
        );
    }

    errors
}

fn check(errors: &mut Vec<ValidationError>, field: ReportField, value: f64, range: ValueRange) {
    if range.contains(value) {
        return;
    }

    let message = match range.max {
        Some(max) => format!(
            "{} {} is outside range [{}, {}]",
            field.as_str(),
            value,
            range.min,
            max
        ),
        None => format!("{} {} is below minimum {}", field.as_str(), value, range.min),
    };

    errors.push(ValidationError {
        field,
        value,
        expected_range: range,
        message,
    });
}
