use mend_core::collaborators::ReportSource;
use mend_core::models::record::NewSubmission;
use mend_core::models::report::DailyReport;
use mend_storage::error::StorageError;
use mend_storage::objects::{DocumentStore, FsStore, MemoryStore};
use mend_storage::records::RecordRepository;

fn at(hour: i8) -> jiff::civil::DateTime {
    jiff::civil::date(2025, 3, 1).at(hour, 0, 0, 0)
}

fn submission(name: &str, steps: i64) -> NewSubmission {
    NewSubmission {
        name: name.to_string(),
        report: DailyReport::new(steps, 4.0, true),
        notes: Some("slept badly".to_string()),
    }
}

#[test]
fn submit_creates_record_with_empty_doctor_notes() {
    let repo = RecordRepository::new(MemoryStore::new());
    let record = repo.submit(submission("Ana", 3000), at(9)).unwrap();

    assert_eq!(record.id, "Ana_20250301T090000");
    assert_eq!(record.doctor_notes, "");
    assert_eq!(repo.get(&record.id).unwrap(), record);
    assert!(
        repo.store()
            .exists("patients/Ana_20250301T090000.json")
            .unwrap()
    );
}

#[test]
fn blank_patient_notes_are_dropped() {
    let repo = RecordRepository::new(MemoryStore::new());
    let mut sub = submission("Ana", 3000);
    sub.notes = Some("   ".to_string());
    assert_eq!(repo.submit(sub, at(9)).unwrap().notes, None);
}

#[test]
fn list_is_newest_first() {
    let repo = RecordRepository::new(MemoryStore::new());
    repo.submit(submission("Ana", 1000), at(8)).unwrap();
    repo.submit(submission("Ben", 2000), at(10)).unwrap();
    repo.submit(submission("Ana", 3000), at(12)).unwrap();

    let steps: Vec<_> = repo.list().unwrap().iter().map(|r| r.report.steps).collect();
    assert_eq!(steps, vec![3000, 2000, 1000]);
    assert_eq!(repo.load_records().unwrap().len(), 3);
}

#[test]
fn latest_prescription_skips_records_without_notes() {
    let repo = RecordRepository::new(MemoryStore::new());
    let first = repo.submit(submission("Ana", 1000), at(8)).unwrap();
    repo.submit(submission("Ana", 2000), at(10)).unwrap();
    repo.submit(submission("Ben", 2000), at(11)).unwrap();

    assert_eq!(repo.latest_prescription("Ana").unwrap(), None);

    repo.update_doctor_notes(&first.id, "Ibuprofen 200mg twice daily")
        .unwrap();
    assert_eq!(
        repo.latest_prescription(" Ana ").unwrap().as_deref(),
        Some("Ibuprofen 200mg twice daily")
    );
    assert_eq!(repo.latest_prescription("Ben").unwrap(), None);
    assert_eq!(repo.latest_prescription("Cy").unwrap(), None);
}

#[test]
fn updating_missing_record_is_not_found() {
    let repo = RecordRepository::new(MemoryStore::new());
    assert!(matches!(
        repo.update_doctor_notes("nobody_20250301T090000", "rest"),
        Err(StorageError::NotFound { .. })
    ));
}

#[test]
fn unreadable_documents_are_skipped() {
    let repo = RecordRepository::new(MemoryStore::new());
    repo.submit(submission("Ana", 1000), at(8)).unwrap();
    repo.store()
        .put("patients/broken.json", b"not json".to_vec())
        .unwrap();

    assert_eq!(repo.list().unwrap().len(), 1);
}

#[test]
fn records_survive_reopening_a_directory_store() {
    let dir = tempfile::tempdir().unwrap();
    let id = {
        let repo = RecordRepository::new(FsStore::new(dir.path()));
        repo.submit(submission("Ana", 1000), at(8)).unwrap().id
    };

    let repo = RecordRepository::new(FsStore::new(dir.path()));
    assert_eq!(repo.get(&id).unwrap().report.steps, 1000);

    repo.delete(&id).unwrap();
    assert!(repo.list().unwrap().is_empty());
}
