use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::{info, warn};

use mend_core::models::pain_scale::PainScale;
use mend_core::models::record::PatientRecord;
use mend_core::models::report::{DailyReport, parse_yes_no};
use mend_core::store_keys;
use mend_scoring::validation::validate_report;
use mend_storage::objects::DocumentStore;
use mend_storage::records::RecordRepository;

use crate::error::IngestError;

const REQUIRED_COLUMNS: [&str; 3] = ["name", "pain_level", "steps_walked"];

/// Timestamp layout written by the patient form.
const FORM_TIMESTAMP: &str = "%Y-%m-%d %H:%M:%S";

/// One spreadsheet row as written. Cells are already trimmed.
#[derive(Debug, Deserialize)]
struct CsvRow {
    name: String,
    pain_level: f64,
    steps_walked: i64,
    #[serde(default)]
    medicine_taken: Option<String>,
    #[serde(default)]
    sleep_hours: Option<f64>,
    #[serde(default)]
    mood: Option<String>,
    #[serde(default, alias = "patient_notes")]
    notes: Option<String>,
    #[serde(default)]
    doctor_notes: Option<String>,
    #[serde(default)]
    timestamp: Option<String>,
}

/// A row that could not become a record.
#[derive(Debug, Clone, PartialEq)]
pub struct RejectedRow {
    /// 1-based line number in the source file.
    pub line: u64,
    pub reason: String,
}

#[derive(Debug, Default)]
pub struct ImportBatch {
    pub records: Vec<PatientRecord>,
    pub rejected: Vec<RejectedRow>,
}

/// Parse a patient spreadsheet.
///
/// Structural problems (unreadable CSV, missing required columns) fail the
/// whole batch. Problems confined to one row reject only that row, including
/// a second row for a patient already seen earlier in the sheet.
pub fn parse_rows<R: Read>(
    reader: R,
    imported_at: jiff::civil::DateTime,
    pain_scale: PainScale,
) -> Result<ImportBatch, IngestError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b',')
        .quote(b'"')
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(IngestError::MissingColumn(column));
        }
    }

    let mut batch = ImportBatch::default();
    let mut first_line_by_id: HashMap<String, u64> = HashMap::new();
    for result in reader.records() {
        let record = result?;
        let line = record.position().map(|p| p.line()).unwrap_or_default();

        let row: CsvRow = match record.deserialize(Some(&headers)) {
            Ok(row) => row,
            Err(e) => {
                batch.rejected.push(RejectedRow {
                    line,
                    reason: e.to_string(),
                });
                continue;
            }
        };

        match row_to_record(row, imported_at, pain_scale) {
            Ok(record) => match first_line_by_id.get(&record.id) {
                Some(first) => batch.rejected.push(RejectedRow {
                    line,
                    reason: format!("patient '{}' already imported from line {first}", record.name),
                }),
                None => {
                    first_line_by_id.insert(record.id.clone(), line);
                    batch.records.push(record);
                }
            },
            Err(reason) => batch.rejected.push(RejectedRow { line, reason }),
        }
    }

    Ok(batch)
}

fn row_to_record(
    row: CsvRow,
    imported_at: jiff::civil::DateTime,
    pain_scale: PainScale,
) -> Result<PatientRecord, String> {
    if row.name.is_empty() {
        return Err("missing name".to_string());
    }

    let medicine_taken = match non_empty(row.medicine_taken) {
        None => false,
        Some(raw) => {
            parse_yes_no(&raw).ok_or_else(|| format!("medicine_taken '{raw}' is not Yes/No"))?
        }
    };

    let report = DailyReport {
        steps: row.steps_walked,
        pain_level: row.pain_level,
        medicine_taken,
        sleep_hours: row.sleep_hours,
        mood: non_empty(row.mood),
    };

    let problems = validate_report(&report, pain_scale);
    if !problems.is_empty() {
        let reasons: Vec<String> = problems.iter().map(ToString::to_string).collect();
        return Err(reasons.join("; "));
    }

    let submitted_at = match non_empty(row.timestamp) {
        None => imported_at,
        Some(raw) => parse_timestamp(&raw)?,
    };

    Ok(PatientRecord {
        id: store_keys::imported_id(&row.name),
        name: row.name,
        report,
        notes: non_empty(row.notes),
        doctor_notes: non_empty(row.doctor_notes).unwrap_or_default(),
        submitted_at,
    })
}

/// Accepts the form layout (`2025-03-01 09:30:00`) or ISO 8601.
fn parse_timestamp(raw: &str) -> Result<jiff::civil::DateTime, String> {
    jiff::civil::DateTime::strptime(FORM_TIMESTAMP, raw)
        .or_else(|_| raw.parse::<jiff::civil::DateTime>())
        .map_err(|e| format!("timestamp '{raw}': {e}"))
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Parse a CSV file and upsert every valid row. Re-importing the same sheet
/// overwrites the earlier import of each patient.
pub fn import_file<S: DocumentStore>(
    path: &Path,
    repo: &RecordRepository<S>,
    imported_at: jiff::civil::DateTime,
    pain_scale: PainScale,
) -> Result<ImportBatch, IngestError> {
    let file = std::fs::File::open(path).map_err(|e| IngestError::Open {
        path: path.to_path_buf(),
        source: csv::Error::from(e),
    })?;

    let batch = parse_rows(file, imported_at, pain_scale)?;
    for record in &batch.records {
        repo.put_record(record)?;
    }
    for rejected in &batch.rejected {
        warn!(line = rejected.line, reason = %rejected.reason, "row rejected");
    }

    info!(
        path = %path.display(),
        imported = batch.records.len(),
        rejected = batch.rejected.len(),
        "import finished"
    );
    Ok(batch)
}
