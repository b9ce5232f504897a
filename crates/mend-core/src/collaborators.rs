//! Collaborator roles around the risk scorer.
//!
//! The scorer never reaches for a store or a renderer on its own. Whoever
//! runs a review passes both in explicitly.

use crate::models::record::{PatientRecord, ReviewEntry};

/// Anything that can hand over the current set of patient records
/// (a document store, a batch loader, a test fixture).
pub trait ReportSource {
    type Error: std::error::Error + Send + Sync + 'static;

    fn load_records(&self) -> Result<Vec<PatientRecord>, Self::Error>;
}

/// Receives freshly scored entries and renders them somewhere.
///
/// Entries arrive already sorted by descending risk score.
pub trait PresentationSink {
    type Error: std::error::Error + Send + Sync + 'static;

    fn present(&mut self, entries: &[ReviewEntry]) -> Result<(), Self::Error>;
}
