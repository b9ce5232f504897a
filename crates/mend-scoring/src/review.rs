//! Read-time scoring of stored records.
//!
//! Nothing here is persisted: every review recomputes every evaluation from
//! the current weights, so a reviewer never sees a stale label.

use std::cmp::Ordering;

use tracing::{debug, info};

use mend_core::collaborators::{PresentationSink, ReportSource};
use mend_core::models::record::{PatientRecord, ReviewEntry};

use crate::error::ScoringError;
use crate::scorer;

/// Score each record and sort by descending risk score.
///
/// Non-finite scores come first, since they are classified High. Ties keep
/// their incoming order.
pub fn evaluate_records(records: Vec<PatientRecord>) -> Vec<ReviewEntry> {
    let mut entries: Vec<ReviewEntry> = records
        .into_iter()
        .map(|record| {
            let evaluation = scorer::score(&record.report);
            debug!(
                record_id = %record.id,
                risk_score = evaluation.risk_score,
                risk_level = %evaluation.risk_level,
                "scored record"
            );
            ReviewEntry { record, evaluation }
        })
        .collect();

    entries.sort_by(|a, b| {
        by_descending_risk(a.evaluation.risk_score, b.evaluation.risk_score)
    });
    entries
}

fn by_descending_risk(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => b.total_cmp(&a),
    }
}

/// Load every record from `source`, score it fresh, and hand the sorted
/// entries to `sink`. Returns the number of entries presented.
pub fn run_review<S, P>(source: &S, sink: &mut P) -> Result<usize, ScoringError>
where
    S: ReportSource,
    P: PresentationSink,
{
    let records = source
        .load_records()
        .map_err(|e| ScoringError::Source(Box::new(e)))?;
    let entries = evaluate_records(records);

    sink.present(&entries)
        .map_err(|e| ScoringError::Sink(Box::new(e)))?;

    info!(entries = entries.len(), "review presented");
    Ok(entries.len())
}
