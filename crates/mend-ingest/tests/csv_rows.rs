use std::io::Write;

use mend_core::models::pain_scale::PainScale;
use mend_ingest::error::IngestError;
use mend_ingest::{import_file, parse_rows};
use mend_storage::objects::MemoryStore;
use mend_storage::records::RecordRepository;

fn now() -> jiff::civil::DateTime {
    jiff::civil::date(2025, 3, 2).at(18, 0, 0, 0)
}

const SHEET: &str = "\
 name , pain_level , steps_walked , medicine_taken , patient_notes , timestamp
Ana, 6, 2500, No,\"knee stiff, swollen\", 2025-03-01 09:30:00
Ben, 2, 9000, Yes, , 
";

#[test]
fn parses_trimmed_headers_and_quoted_cells() {
    let batch = parse_rows(SHEET.as_bytes(), now(), PainScale::ZeroToTen).unwrap();
    assert!(batch.rejected.is_empty(), "{:?}", batch.rejected);
    assert_eq!(batch.records.len(), 2);

    let ana = &batch.records[0];
    assert_eq!(ana.id, "Ana_imported");
    assert_eq!(ana.report.steps, 2500);
    assert_eq!(ana.report.pain_level, 6.0);
    assert!(!ana.report.medicine_taken);
    assert_eq!(ana.notes.as_deref(), Some("knee stiff, swollen"));
    assert_eq!(ana.submitted_at, jiff::civil::date(2025, 3, 1).at(9, 30, 0, 0));

    let ben = &batch.records[1];
    assert!(ben.report.medicine_taken);
    assert_eq!(ben.notes, None);
    assert_eq!(ben.submitted_at, now());
    assert_eq!(ben.doctor_notes, "");
}

#[test]
fn optional_columns_are_read_when_present() {
    let sheet = "name,pain_level,steps_walked,sleep_hours,mood\nCy,3,4000,6.5,Happy\nDee,3,4000,,\n";
    let batch = parse_rows(sheet.as_bytes(), now(), PainScale::ZeroToTen).unwrap();

    assert_eq!(batch.records[0].report.sleep_hours, Some(6.5));
    assert_eq!(batch.records[0].report.mood.as_deref(), Some("Happy"));
    assert_eq!(batch.records[1].report.sleep_hours, None);
    assert_eq!(batch.records[1].report.mood, None);
    assert!(!batch.records[1].report.medicine_taken);
}

#[test]
fn bad_rows_are_rejected_with_line_numbers() {
    let sheet = "\
name,pain_level,steps_walked,medicine_taken
Ana,6,2500,No
Ben,lots,9000,Yes
Cy,4,-5,Yes
Dee,4,100,Sometimes
,4,100,No
";
    let batch = parse_rows(sheet.as_bytes(), now(), PainScale::ZeroToTen).unwrap();

    assert_eq!(batch.records.len(), 1);
    let lines: Vec<u64> = batch.rejected.iter().map(|r| r.line).collect();
    assert_eq!(lines, vec![3, 4, 5, 6]);
    assert!(batch.rejected[1].reason.contains("steps"));
    assert!(batch.rejected[2].reason.contains("Sometimes"));
    assert_eq!(batch.rejected[3].reason, "missing name");
}

#[test]
fn pain_scale_applies_during_import() {
    let sheet = "name,pain_level,steps_walked\nAna,0,2500\n";
    assert_eq!(
        parse_rows(sheet.as_bytes(), now(), PainScale::ZeroToTen)
            .unwrap()
            .records
            .len(),
        1
    );
    assert_eq!(
        parse_rows(sheet.as_bytes(), now(), PainScale::OneToTen)
            .unwrap()
            .rejected
            .len(),
        1
    );
}

#[test]
fn missing_required_column_fails_the_batch() {
    let sheet = "name,pain_level\nAna,6\n";
    let err = parse_rows(sheet.as_bytes(), now(), PainScale::ZeroToTen).unwrap_err();
    assert!(matches!(err, IngestError::MissingColumn("steps_walked")));
}

#[test]
fn reimporting_overwrites_instead_of_duplicating() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(SHEET.as_bytes()).unwrap();

    let repo = RecordRepository::new(MemoryStore::new());
    import_file(file.path(), &repo, now(), PainScale::ZeroToTen).unwrap();
    import_file(file.path(), &repo, now(), PainScale::ZeroToTen).unwrap();

    assert_eq!(repo.list().unwrap().len(), 2);
    assert_eq!(repo.get("Ana_imported").unwrap().report.steps, 2500);
}

#[test]
fn missing_file_is_an_open_error() {
    let repo = RecordRepository::new(MemoryStore::new());
    let err = import_file(
        std::path::Path::new("/definitely/not/here.csv"),
        &repo,
        now(),
        PainScale::ZeroToTen,
    )
    .unwrap_err();
    assert!(matches!(err, IngestError::Open { .. }));
}

#[test]
fn lookalike_names_import_as_separate_patients() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"name,pain_level,steps_walked\nAna B,6,2500\nAna-B,2,9000\nAna.B,4,4000\n")
        .unwrap();

    let repo = RecordRepository::new(MemoryStore::new());
    let batch = import_file(file.path(), &repo, now(), PainScale::ZeroToTen).unwrap();

    assert!(batch.rejected.is_empty(), "{:?}", batch.rejected);
    assert_eq!(repo.list().unwrap().len(), 3);
    assert_eq!(repo.find_by_name("Ana B").unwrap().len(), 1);
    assert_eq!(repo.find_by_name("Ana-B").unwrap()[0].report.steps, 9000);
}

#[test]
fn repeated_patient_in_one_sheet_is_rejected() {
    let sheet = "name,pain_level,steps_walked\nAna,6,2500\nBen,2,9000\n Ana ,3,7000\n";
    let batch = parse_rows(sheet.as_bytes(), now(), PainScale::ZeroToTen).unwrap();

    assert_eq!(batch.records.len(), 2);
    assert_eq!(batch.records[0].report.steps, 2500);
    assert_eq!(batch.rejected.len(), 1);
    assert_eq!(batch.rejected[0].line, 4);
    assert!(batch.rejected[0].reason.contains("line 2"));
}
