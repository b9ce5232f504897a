//! mend-core
//!
//! Pure domain types, collaborator traits, and document key conventions.
//! No I/O; this is the shared vocabulary of the Mend system.

pub mod collaborators;
pub mod error;
pub mod models;
pub mod store_keys;
