use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::assessment::RiskEvaluation;
use super::report::DailyReport;

/// One stored daily submission, as the reviewer sees it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PatientRecord {
    pub id: String,
    pub name: String,
    #[serde(flatten)]
    pub report: DailyReport,
    /// Free-text notes from the patient. Older documents use `patient_notes`.
    #[serde(default, alias = "patient_notes", skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Reviewer prescription / annotation. Empty until a reviewer writes one.
    #[serde(default)]
    pub doctor_notes: String,
    #[ts(type = "string")]
    pub submitted_at: jiff::civil::DateTime,
}

impl PatientRecord {
    pub fn has_prescription(&self) -> bool {
        !self.doctor_notes.trim().is_empty()
    }
}

/// What a patient fills in on the submission form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NewSubmission {
    pub name: String,
    #[serde(flatten)]
    pub report: DailyReport,
    #[serde(default, alias = "patient_notes")]
    pub notes: Option<String>,
}

/// A record paired with an evaluation computed at read time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ReviewEntry {
    pub record: PatientRecord,
    pub evaluation: RiskEvaluation,
}
