//! Record parsing for one source file.

use std::path::Path;

use graveyard_core::errors::CollateError;
use graveyard_core::types::{DeprecationRecord, SchemaVariant};

use crate::discover::source_key;

fn optional(cell: &str) -> Option<String> {
    if cell.is_empty() {
        None
    } else {
        Some(cell.to_string())
    }
}

/// Parse every record in one source file.
///
/// The header line fixes both the schema variant and the separator (comma
/// if the header contains one, tab otherwise — legacy comma-separated
/// sources carry comma headers). Blank data lines are skipped; a line with
/// the wrong column count is a hard error, since the collator cannot guess
/// which fields are missing.
pub fn parse_file(path: &Path) -> Result<Vec<DeprecationRecord>, CollateError> {
    let content = std::fs::read_to_string(path).map_err(|e| CollateError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    let key = source_key(path);

    let mut lines = content.lines();
    let header = lines.next().ok_or_else(|| CollateError::MissingHeader {
        path: path.display().to_string(),
    })?;
    let sep = if header.contains(',') { ',' } else { '\t' };
    let fields: Vec<&str> = header.trim_matches(' ').split(sep).collect();
    let variant =
        SchemaVariant::from_header(&fields).ok_or_else(|| CollateError::InvalidHeader {
            path: path.display().to_string(),
            header: header.trim().to_string(),
        })?;

    let mut records = Vec::new();
    for (i, raw) in lines.enumerate() {
        if raw.trim().is_empty() {
            continue;
        }
        // Strip stray spaces only: trailing tabs are empty cells, not noise.
        let line = raw.trim_matches(' ');
        let cells: Vec<&str> = line.split(sep).collect();
        if cells.len() != variant.expected_columns() {
            return Err(CollateError::MalformedRow {
                path: path.display().to_string(),
                line: i + 2,
                message: format!(
                    "expected {} columns, found {}",
                    variant.expected_columns(),
                    cells.len()
                ),
            });
        }
        records.push(DeprecationRecord {
            source_key: key.clone(),
            dead_id: cells[0].to_string(),
            retired_on: optional(cells[1]),
            successor_id: optional(cells[2]),
            contributor_orcid: match variant {
                SchemaVariant::FourColumn => optional(cells[3]),
                SchemaVariant::ThreeColumn => None,
            },
        });
    }
    Ok(records)
}
