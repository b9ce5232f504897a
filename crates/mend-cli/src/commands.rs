use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use mend_audit::events::{AuditAction, AuditEvent};
use mend_core::models::record::{NewSubmission, PatientRecord};
use mend_core::models::report::DailyReport;
use mend_export::sinks::{HtmlDashboard, TextDashboard};
use mend_ingest::ImportBatch;
use mend_scoring::review::run_review;
use mend_scoring::validation::validate_report;
use tracing::warn;

use crate::config::{self, MendConfig};
use crate::state::AppState;

const RECORD: &str = "patient_record";

const UNDEFINED_SCORE: &str =
    "weighted total is below zero, so the report cannot be scored; check the pain level and steps";

/// Print a fresh assessment for a report that is not stored anywhere.
///
/// Out-of-range values are scored anyway; they only produce warnings.
pub fn score<W: Write>(
    report: &DailyReport,
    config: &MendConfig,
    json: bool,
    out: &mut W,
) -> eyre::Result<()> {
    for problem in validate_report(report, config.pain_scale) {
        warn!(field = problem.field.as_str(), "{problem}");
    }

    let assessment = mend_scoring::assess_now(report);
    let eval = &assessment.evaluation;
    if json {
        let mut value = serde_json::to_value(&assessment)?;
        if !eval.has_finite_score() {
            value["warning"] = UNDEFINED_SCORE.into();
        }
        writeln!(out, "{}", serde_json::to_string_pretty(&value)?)?;
    } else {
        if eval.has_finite_score() {
            writeln!(out, "Risk score:     {:.2}", eval.risk_score)?;
        } else {
            writeln!(out, "Risk score:     undefined ({UNDEFINED_SCORE})")?;
        }
        writeln!(out, "Risk level:     {}", eval.risk_level)?;
        writeln!(out, "Recommendation: {}", eval.recommendation)?;
        writeln!(out, "Evaluated at:   {}", assessment.evaluated_at)?;
    }
    Ok(())
}

/// Validate and store a patient submission.
pub fn submit<W: Write>(
    state: &AppState,
    submission: NewSubmission,
    submitted_at: jiff::civil::DateTime,
    out: &mut W,
) -> eyre::Result<PatientRecord> {
    if submission.name.trim().is_empty() {
        return Err(eyre::eyre!("enter a patient name"));
    }

    let problems = validate_report(&submission.report, state.config.pain_scale);
    if !problems.is_empty() {
        let reasons: Vec<String> = problems.iter().map(ToString::to_string).collect();
        return Err(eyre::eyre!("invalid report: {}", reasons.join("; ")));
    }

    let submission = NewSubmission {
        name: submission.name.trim().to_string(),
        ..submission
    };
    let record = state.records.submit(submission, submitted_at)?;

    AuditEvent::new(AuditAction::Submit, RECORD, &record.id, &record.name).emit();
    writeln!(out, "Submitted {}", record.id)?;
    Ok(record)
}

/// Print the newest doctor notes for a patient.
pub fn prescription<W: Write>(state: &AppState, name: &str, out: &mut W) -> eyre::Result<()> {
    if name.trim().is_empty() {
        return Err(eyre::eyre!("enter a patient name"));
    }

    match state.records.latest_prescription(name)? {
        Some(notes) => writeln!(out, "Latest prescription:\n\n{notes}")?,
        None => writeln!(out, "No prescription found; the doctor has not updated it yet.")?,
    }
    Ok(())
}

/// Score every stored record and present them, highest risk first.
pub fn review<W: Write>(
    state: &AppState,
    html: Option<&Path>,
    out: &mut W,
) -> eyre::Result<usize> {
    let count = match html {
        Some(path) => {
            let file = File::create(path)
                .map_err(|e| eyre::eyre!("failed to create {}: {e}", path.display()))?;
            let mut sink = HtmlDashboard::new(BufWriter::new(file));
            let count = run_review(&state.records, &mut sink)?;
            writeln!(out, "Wrote {count} entries to {}", path.display())?;
            count
        }
        None => {
            let mut sink = TextDashboard::new(&mut *out);
            run_review(&state.records, &mut sink)?
        }
    };

    AuditEvent::new(AuditAction::Review, RECORD, "*", &state.config.actor)
        .with_details(serde_json::json!({ "entries": count }))
        .emit();
    Ok(count)
}

/// Replace the doctor notes on one record.
pub fn annotate<W: Write>(
    state: &AppState,
    id: &str,
    notes: &str,
    out: &mut W,
) -> eyre::Result<PatientRecord> {
    let record = state.records.update_doctor_notes(id, notes)?;

    AuditEvent::new(AuditAction::Annotate, RECORD, id, &state.config.actor).emit();
    writeln!(out, "Prescription updated for {}", record.name)?;
    Ok(record)
}

/// Import a CSV sheet and summarize what was kept.
pub fn import<W: Write>(
    state: &AppState,
    path: &Path,
    imported_at: jiff::civil::DateTime,
    out: &mut W,
) -> eyre::Result<ImportBatch> {
    let batch = mend_ingest::import_file(path, &state.records, imported_at, state.config.pain_scale)?;

    AuditEvent::new(
        AuditAction::Import,
        "csv",
        path.display().to_string(),
        &state.config.actor,
    )
    .with_details(serde_json::json!({
        "imported": batch.records.len(),
        "rejected": batch.rejected.len(),
    }))
    .emit();

    writeln!(
        out,
        "Imported {} records, rejected {}",
        batch.records.len(),
        batch.rejected.len()
    )?;
    for rejected in &batch.rejected {
        writeln!(out, "  line {}: {}", rejected.line, rejected.reason)?;
    }
    Ok(batch)
}

pub fn delete<W: Write>(state: &AppState, id: &str, out: &mut W) -> eyre::Result<()> {
    state.records.delete(id)?;

    AuditEvent::new(AuditAction::Delete, RECORD, id, &state.config.actor).emit();
    writeln!(out, "Deleted {id}")?;
    Ok(())
}

pub fn config_show<W: Write>(path: &Path, config: &MendConfig, out: &mut W) -> eyre::Result<()> {
    writeln!(out, "# {}", path.display())?;
    writeln!(out, "{}", serde_json::to_string_pretty(config)?)?;
    Ok(())
}

pub fn config_init<W: Write>(
    path: &Path,
    config: &MendConfig,
    force: bool,
    out: &mut W,
) -> eyre::Result<()> {
    if path.exists() && !force {
        return Err(eyre::eyre!(
            "{} already exists (use --force to overwrite)",
            path.display()
        ));
    }
    config::save_config(path, config)?;
    writeln!(out, "Wrote {}", path.display())?;
    Ok(())
}
