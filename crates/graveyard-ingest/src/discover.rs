//! Source file discovery.
//!
//! Inputs live in one flat directory, one file per source registry, named
//! `<prefix>.tsv` (or legacy `<prefix>.csv`). Deterministic ordering is
//! not required for correctness but keeps logs and reports stable.

use std::path::{Path, PathBuf};

/// Enumerate all per-source input files under `data_dir`, sorted by path.
pub fn discover_sources(data_dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for entry in std::fs::read_dir(data_dir)? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        match path.extension().and_then(|e| e.to_str()) {
            Some("tsv") | Some("csv") => paths.push(path),
            _ => {}
        }
    }
    paths.sort();
    Ok(paths)
}

/// The source key for an input file: its base name without extension.
pub fn source_key(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Field separator for a file, by extension: comma for legacy `.csv`
/// sources, tab otherwise.
pub fn separator_for(path: &Path) -> char {
    match path.extension().and_then(|e| e.to_str()) {
        Some("csv") => ',',
        _ => '\t',
    }
}
