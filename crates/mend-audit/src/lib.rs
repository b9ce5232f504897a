//! mend-audit
//!
//! Application-level audit events, logged through `tracing` alongside the
//! rest of the structured output.

pub mod events;
