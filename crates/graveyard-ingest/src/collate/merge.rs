//! Merging and deterministic ordering of the full record set.

use std::path::PathBuf;

use graveyard_core::errors::CollateError;
use graveyard_core::types::DeprecationRecord;

use super::parser::parse_file;

/// Total-order sort over the merged set.
///
/// Sorting is the only normalization the collator performs: it makes every
/// artifact byte-for-byte reproducible independent of file-system
/// enumeration order, which keeps the outputs diff-friendly under version
/// control.
pub fn sort_records(records: &mut [DeprecationRecord]) {
    records.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));
}

/// Concatenate the records of every input file, then sort.
///
/// No merge-by-key, no deduplication: every row passes through.
pub fn merge(paths: &[PathBuf]) -> Result<Vec<DeprecationRecord>, CollateError> {
    let mut records = Vec::new();
    for path in paths {
        let parsed = parse_file(path)?;
        tracing::debug!(file = %path.display(), records = parsed.len(), "parsed source file");
        records.extend(parsed);
    }
    sort_records(&mut records);
    Ok(records)
}
