//! JSON serialization of explanations.
//!
//! Reports are consumed by downstream presentation layers; the format is the
//! serde serialization of [`Explanation`] with stable rule identifiers
//! (`UNIT_BASE`, `TEN_FORMATION`, ...) and lowercase tier names.

use crate::explanation::Explanation;

/// Serializes an explanation as pretty-printed JSON.
///
/// # Errors
///
/// Returns the underlying `serde_json` error if serialization fails (not
/// expected for well-formed explanations).
pub fn to_json(explanation: &Explanation) -> serde_json::Result<String> {
    serde_json::to_string_pretty(explanation)
}
