//! Semicolon-CSV reference loading.
//!
//! Format: two columns `Nombre;Traduction_soussou`, one entry per line,
//! UTF-8, header row optional. Rows are parsed strictly: a malformed row is
//! an error with its line number, never a silently skipped entry - gaps in
//! curated data should be caught by tests, not papered over.

use std::fs;
use std::path::Path;

use tongo_foundation::{Error, ReferenceTable, Result};

/// Parses reference data from its textual form.
///
/// Blank lines are ignored. A non-numeric first field on the first line is
/// treated as the header row and skipped. Later rows for the same number
/// replace earlier ones.
///
/// # Errors
///
/// Returns [`Error::MalformedReferenceRow`] for a row without exactly two
/// semicolon-separated fields, a non-numeric number field, or an empty
/// phrase field.
pub fn parse_reference(input: &str) -> Result<ReferenceTable> {
    let mut table = ReferenceTable::new();

    for (index, line) in input.lines().enumerate() {
        let line_no = index + 1;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let mut fields = line.splitn(2, ';');
        let number_field = fields.next().unwrap_or_default().trim();
        let Some(phrase_field) = fields.next().map(str::trim) else {
            return Err(Error::malformed_row(line_no, "expected two fields"));
        };

        let number = match number_field.parse::<u64>() {
            Ok(number) => number,
            Err(_) if line_no == 1 => continue, // header row
            Err(_) => {
                return Err(Error::malformed_row(
                    line_no,
                    format!("non-numeric number field: {number_field:?}"),
                ));
            }
        };

        if phrase_field.is_empty() {
            return Err(Error::malformed_row(line_no, "empty phrase field"));
        }

        table.insert(number, phrase_field);
    }

    Ok(table)
}

/// Loads reference data from a file.
///
/// One scoped open-read-close at startup; the returned table is read-only
/// thereafter.
///
/// # Errors
///
/// Returns [`Error::ReferenceUnavailable`] if the file cannot be read or its
/// contents fail to parse. Callers report this once and proceed rule-only.
pub fn load_reference(path: &Path) -> Result<ReferenceTable> {
    let contents = fs::read_to_string(path)
        .map_err(|e| Error::reference_unavailable(path.display().to_string(), e.to_string()))?;
    parse_reference(&contents)
        .map_err(|e| Error::reference_unavailable(path.display().to_string(), e.to_string()))
}
