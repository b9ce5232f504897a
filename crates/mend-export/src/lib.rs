//! mend-export
//!
//! Presentation sinks for reviewed records: a terminal table and an HTML
//! dashboard rendered from a Tera template.

pub mod error;
pub mod render;
pub mod sinks;
pub mod styles;
pub mod table;
