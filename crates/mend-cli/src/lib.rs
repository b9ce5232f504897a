//! mend-cli library root.
//!
//! Re-exports the command layer so integration tests can drive commands
//! directly against a temporary data directory.

pub mod cli;
pub mod commands;
pub mod config;
pub mod state;
