use tracing::{info, warn};

use mend_core::collaborators::ReportSource;
use mend_core::models::record::{NewSubmission, PatientRecord};
use mend_core::store_keys;

use crate::error::StorageError;
use crate::objects::DocumentStore;
use crate::state::{load_json, save_json};

/// Patient records on top of a [`DocumentStore`].
///
/// The store is injected; the repository holds no other state.
pub struct RecordRepository<S> {
    store: S,
}

impl<S: DocumentStore> RecordRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Store a patient form submission as a new record with no doctor notes.
    pub fn submit(
        &self,
        submission: NewSubmission,
        submitted_at: jiff::civil::DateTime,
    ) -> Result<PatientRecord, StorageError> {
        let record = PatientRecord {
            id: store_keys::submission_id(&submission.name, submitted_at),
            name: submission.name,
            report: submission.report,
            notes: submission.notes.filter(|n| !n.trim().is_empty()),
            doctor_notes: String::new(),
            submitted_at,
        };
        self.put_record(&record)?;
        info!(record_id = %record.id, "submission stored");
        Ok(record)
    }

    /// Create or replace a record under its own id.
    pub fn put_record(&self, record: &PatientRecord) -> Result<(), StorageError> {
        save_json(&self.store, &store_keys::patient(&record.id), record)
    }

    pub fn get(&self, id: &str) -> Result<PatientRecord, StorageError> {
        load_json(&self.store, &store_keys::patient(id))
    }

    /// All records, newest submission first.
    ///
    /// Documents that fail to parse are skipped with a warning so that one
    /// bad row never hides the rest from a reviewer.
    pub fn list(&self) -> Result<Vec<PatientRecord>, StorageError> {
        let mut records = Vec::new();
        for key in self.store.list(store_keys::PATIENTS_PREFIX)? {
            if store_keys::patient_id(&key).is_none() {
                continue;
            }
            match load_json::<_, PatientRecord>(&self.store, &key) {
                Ok(record) => records.push(record),
                Err(StorageError::Serialization(e)) => {
                    warn!(key = %key, error = %e, "skipping unreadable patient document");
                }
                Err(e) => return Err(e),
            }
        }
        records.sort_by(|a, b| b.submitted_at.cmp(&a.submitted_at));
        Ok(records)
    }

    /// Records with exactly this name, newest first.
    pub fn find_by_name(&self, name: &str) -> Result<Vec<PatientRecord>, StorageError> {
        let name = name.trim();
        Ok(self
            .list()?
            .into_iter()
            .filter(|r| r.name == name)
            .collect())
    }

    /// The newest non-empty doctor notes written for this patient.
    pub fn latest_prescription(&self, name: &str) -> Result<Option<String>, StorageError> {
        Ok(self
            .find_by_name(name)?
            .into_iter()
            .find(PatientRecord::has_prescription)
            .map(|r| r.doctor_notes))
    }

    /// Replace the doctor notes on an existing record.
    pub fn update_doctor_notes(
        &self,
        id: &str,
        doctor_notes: &str,
    ) -> Result<PatientRecord, StorageError> {
        let mut record = self.get(id)?;
        record.doctor_notes = doctor_notes.to_string();
        self.put_record(&record)?;
        info!(record_id = %id, "doctor notes updated");
        Ok(record)
    }

    pub fn delete(&self, id: &str) -> Result<(), StorageError> {
        self.store.delete(&store_keys::patient(id))?;
        info!(record_id = %id, "record deleted");
        Ok(())
    }
}

impl<S: DocumentStore> ReportSource for RecordRepository<S> {
    type Error = StorageError;

    fn load_records(&self) -> Result<Vec<PatientRecord>, Self::Error> {
        self.list()
    }
}
