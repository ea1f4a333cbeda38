//! In-place whitespace and column repair for the data files.
//!
//! Brings a file back to the shape the validator requires: canonical
//! header, no surrounding whitespace, and every row padded with explicit
//! empty trailing cells up to the variant's column count. Rows with *more*
//! cells than the variant allows are not repairable here and abort.

use std::path::Path;

use graveyard_core::errors::CollateError;
use graveyard_core::types::SchemaVariant;

use crate::discover::discover_sources;

/// Repair every source file under `data_dir` in place.
/// Returns the number of files that were rewritten.
pub fn fix_spacing(data_dir: &Path) -> Result<usize, CollateError> {
    let paths = discover_sources(data_dir).map_err(|e| CollateError::Io {
        path: data_dir.display().to_string(),
        source: e,
    })?;

    let mut rewritten = 0;
    for path in &paths {
        let content = std::fs::read_to_string(path).map_err(|e| CollateError::Io {
            path: path.display().to_string(),
            source: e,
        })?;
        let fixed = fix_content(&content, path)?;
        if fixed != content {
            std::fs::write(path, &fixed).map_err(|e| CollateError::Io {
                path: path.display().to_string(),
                source: e,
            })?;
            tracing::info!(file = %path.display(), "repaired spacing");
            rewritten += 1;
        }
    }
    Ok(rewritten)
}

/// Repair one file's content. Blank lines are dropped.
pub fn fix_content(content: &str, path: &Path) -> Result<String, CollateError> {
    let mut lines = content.lines();
    let header = lines.next().ok_or_else(|| CollateError::MissingHeader {
        path: path.display().to_string(),
    })?;
    let sep = if header.contains(',') { ',' } else { '\t' };
    let fields: Vec<&str> = header.trim().split(sep).collect();
    let variant =
        SchemaVariant::from_header(&fields).ok_or_else(|| CollateError::InvalidHeader {
            path: path.display().to_string(),
            header: header.trim().to_string(),
        })?;
    let expected = variant.expected_columns();
    let sep_str = sep.to_string();

    let mut output = String::new();
    output.push_str(&variant.header().join(&sep_str));
    output.push('\n');
    for (i, raw) in lines.enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        let mut cells: Vec<&str> = line.split(sep).map(str::trim).collect();
        if cells.len() > expected {
            return Err(CollateError::MalformedRow {
                path: path.display().to_string(),
                line: i + 2,
                message: format!("expected at most {expected} columns, found {}", cells.len()),
            });
        }
        cells.resize(expected, "");
        output.push_str(&cells.join(&sep_str));
        output.push('\n');
    }
    Ok(output)
}
