//! Static registry snapshot loaded from a TOML file.
//!
//! Snapshot format:
//!
//! ```toml
//! [prefixes.doid]
//! pattern = "^DOID:\\d+$"
//! uri_prefix = "http://purl.obolibrary.org/obo/DOID_"
//! synonyms = ["DOID", "do"]
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::Registry;
use crate::errors::RegistryError;

/// One registry entry keyed by its canonical prefix.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PrefixEntry {
    pub pattern: Option<String>,
    pub uri_prefix: Option<String>,
    pub synonyms: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
struct SnapshotFile {
    prefixes: BTreeMap<String, PrefixEntry>,
}

/// An in-memory registry snapshot.
///
/// `BTreeMap` keeps iteration deterministic, which matters for any output
/// derived from enumerating the registry.
#[derive(Debug, Clone, Default)]
pub struct SnapshotRegistry {
    prefixes: BTreeMap<String, PrefixEntry>,
}

impl SnapshotRegistry {
    /// Load a snapshot from a TOML file.
    pub fn load(path: &Path) -> Result<Self, RegistryError> {
        let content =
            std::fs::read_to_string(path).map_err(|_| RegistryError::SnapshotNotFound {
                path: path.display().to_string(),
            })?;
        let file: SnapshotFile =
            toml::from_str(&content).map_err(|e| RegistryError::SnapshotParse {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;
        Ok(Self {
            prefixes: file.prefixes,
        })
    }

    /// Parse a snapshot from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, RegistryError> {
        let file: SnapshotFile =
            toml::from_str(toml_str).map_err(|e| RegistryError::SnapshotParse {
                path: "<string>".to_string(),
                message: e.to_string(),
            })?;
        Ok(Self {
            prefixes: file.prefixes,
        })
    }

    /// Build a snapshot from explicit entries (for testing).
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, PrefixEntry)>,
    {
        Self {
            prefixes: entries.into_iter().collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.prefixes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.prefixes.len()
    }
}

impl Registry for SnapshotRegistry {
    fn normalize_prefix(&self, name: &str) -> Option<String> {
        // Exact canonical hit first, then case-insensitive canonical and
        // synonym matches.
        if self.prefixes.contains_key(name) {
            return Some(name.to_string());
        }
        let folded = name.to_ascii_lowercase();
        for (canonical, entry) in &self.prefixes {
            if canonical.to_ascii_lowercase() == folded {
                return Some(canonical.clone());
            }
            if entry
                .synonyms
                .iter()
                .any(|s| s.to_ascii_lowercase() == folded)
            {
                return Some(canonical.clone());
            }
        }
        None
    }

    fn get_pattern(&self, prefix: &str) -> Option<&str> {
        self.prefixes.get(prefix)?.pattern.as_deref()
    }

    fn get_uri_prefix(&self, prefix: &str) -> Option<&str> {
        self.prefixes.get(prefix)?.uri_prefix.as_deref()
    }
}
