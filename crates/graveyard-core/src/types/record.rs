//! The canonical in-memory record and its two on-disk schema variants.

use serde::{Deserialize, Serialize};

/// Header of the original 3-column schema.
pub const HEADER_THREE: [&str; 3] = ["#did", "when", "nextofkin"];

/// Header of the 4-column schema that added the curating contributor.
pub const HEADER_FOUR: [&str; 4] = ["#did", "when", "nextofkin", "contributor"];

/// The on-disk schema variant of one source file.
///
/// Chosen once per file from its header line and carried explicitly from
/// there on; no later step re-derives it from column counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SchemaVariant {
    ThreeColumn,
    FourColumn,
}

impl SchemaVariant {
    /// Match a split header line against the two canonical headers.
    /// Field names and order are fixed; anything else is not a variant.
    pub fn from_header(fields: &[&str]) -> Option<Self> {
        if fields == HEADER_THREE {
            Some(Self::ThreeColumn)
        } else if fields == HEADER_FOUR {
            Some(Self::FourColumn)
        } else {
            None
        }
    }

    /// Number of columns every data line in the file must have.
    pub fn expected_columns(self) -> usize {
        match self {
            Self::ThreeColumn => 3,
            Self::FourColumn => 4,
        }
    }

    /// The canonical header fields for this variant.
    pub fn header(self) -> &'static [&'static str] {
        match self {
            Self::ThreeColumn => &HEADER_THREE,
            Self::FourColumn => &HEADER_FOUR,
        }
    }
}

/// One retired identifier, as curated in a per-source file.
///
/// `source_key` is derived from the file name and is the registry's
/// canonical normalized prefix. Only `dead_id` is required; each optional
/// field may independently be absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeprecationRecord {
    pub source_key: String,
    pub dead_id: String,
    pub retired_on: Option<String>,
    pub successor_id: Option<String>,
    pub contributor_orcid: Option<String>,
}

impl DeprecationRecord {
    /// Total ordering key for the merged artifact.
    ///
    /// Absent optionals compare as the empty string, so the merged output
    /// is byte-for-byte reproducible regardless of enumeration order.
    pub fn sort_key(&self) -> (&str, &str, &str, &str, &str) {
        (
            &self.source_key,
            &self.dead_id,
            self.retired_on.as_deref().unwrap_or(""),
            self.successor_id.as_deref().unwrap_or(""),
            self.contributor_orcid.as_deref().unwrap_or(""),
        )
    }

    /// The local part of `dead_id` (text after the CURIE colon).
    pub fn dead_local(&self) -> &str {
        local_part(&self.dead_id)
    }

    /// The local part of `successor_id`, when present and non-empty.
    pub fn successor_local(&self) -> Option<&str> {
        self.successor_id.as_deref().map(local_part)
    }
}

/// Strip the namespace prefix from a CURIE, e.g. `DOID:999` → `999`.
/// An identifier without a colon is returned whole.
pub fn local_part(curie: &str) -> &str {
    curie.split_once(':').map_or(curie, |(_, local)| local)
}

/// The namespace prefix of a CURIE as written, e.g. `DOID:999` → `DOID`.
pub fn curie_prefix(curie: &str) -> Option<&str> {
    curie.split_once(':').map(|(prefix, _)| prefix)
}
