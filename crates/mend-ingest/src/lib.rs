//! mend-ingest
//!
//! Batch loading of patient spreadsheets into the record store.

pub mod csv_rows;
pub mod error;

pub use csv_rows::{ImportBatch, RejectedRow, import_file, parse_rows};
