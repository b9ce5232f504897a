//! Document key conventions.
//!
//! Pure string functions. These define the canonical layout of patient
//! documents in whatever key-value store backs a deployment.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

pub const PATIENTS_PREFIX: &str = "patients/";

const KEY_SUFFIX: &str = ".json";

pub fn patient(id: &str) -> String {
    format!("{PATIENTS_PREFIX}{id}{KEY_SUFFIX}")
}

/// Recover the record id from a key produced by [`patient`].
pub fn patient_id(key: &str) -> Option<&str> {
    key.strip_prefix(PATIENTS_PREFIX)?.strip_suffix(KEY_SUFFIX)
}

/// Id for a form submission: one document per patient per submission.
pub fn submission_id(name: &str, submitted_at: jiff::civil::DateTime) -> String {
    format!(
        "{}_{}",
        encode_name(name),
        submitted_at.strftime("%Y%m%dT%H%M%S")
    )
}

/// Id for a batch-imported row. Keyed by name alone so that re-importing the
/// same sheet overwrites instead of duplicating.
pub fn imported_id(name: &str) -> String {
    format!("{}_imported", encode_name(name))
}

/// Bytes kept verbatim in an id; everything else is `%XX`-escaped.
const NAME_ESCAPES: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_');

/// Percent-encode a trimmed patient name.
///
/// Injective: distinct trimmed names never share an encoding, so two
/// patients cannot land on the same document.
pub fn encode_name(name: &str) -> String {
    utf8_percent_encode(name.trim(), NAME_ESCAPES).to_string()
}
