//! mend-storage
//!
//! Key-value document storage for patient records. The store itself is a
//! thin trait with an in-memory and a directory-backed implementation.

pub mod error;
pub mod objects;
pub mod records;
pub mod state;
