//! The SSSOM mapping-table sink.
//!
//! A flat, spreadsheet-friendly projection of the replaced-by edge set:
//! one row per record with a known successor, preceded by a `#`-comment
//! metadata block whose `curie_map` lists every namespace prefix the rows
//! actually use.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use graveyard_core::errors::{CollateError, RegistryError};
use graveyard_core::registry::Registry;
use graveyard_core::types::{curie_prefix, DeprecationRecord};

use super::graph::vocab;

/// Predicate cell carried by every mapping row.
pub const PREDICATE: &str = "replaced-by";

/// Justification cell carried by every mapping row: these mappings exist
/// because a curator recorded them, never by inference.
pub const JUSTIFICATION: &str = "manual-curation";

/// Mapping-set metadata values.
pub const MAPPING_SET_ID: &str = "https://w3id.org/graveyard/graveyard.sssom.tsv";
pub const MAPPING_SET_DESCRIPTION: &str =
    "Replaced-by mappings between dead identifiers and their successors";
pub const LICENSE: &str = "https://creativecommons.org/publicdomain/zero/1.0/";

/// Column header of the mapping table.
pub const SSSOM_HEADER: [&str; 6] = [
    "subject_id",
    "predicate_id",
    "object_id",
    "mapping_justification",
    "mapping_date",
    "author_id",
];

/// One mapping row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingRow {
    pub subject_id: String,
    pub object_id: String,
    pub mapping_date: Option<String>,
    pub author_id: Option<String>,
}

/// Project the merged record set onto mapping rows.
///
/// Records without a successor contribute nothing; the input is already in
/// merge order, which is the same sort key this table requires.
pub fn build_mapping_rows(records: &[DeprecationRecord]) -> Vec<MappingRow> {
    records
        .iter()
        .filter_map(|record| {
            let successor = record.successor_id.as_ref()?;
            Some(MappingRow {
                subject_id: record.dead_id.clone(),
                object_id: successor.clone(),
                mapping_date: record.retired_on.clone(),
                author_id: record.contributor_orcid.clone(),
            })
        })
        .collect()
}

/// Render the full mapping table: metadata comment block, header, rows.
pub fn render_sssom<R: Registry + ?Sized>(
    rows: &[MappingRow],
    registry: &R,
) -> Result<String, CollateError> {
    // Collect every namespace prefix as written in the rows, resolved to a
    // URI prefix through the registry. Case-insensitive sort keyed on the
    // folded prefix, with the literal prefix as tiebreaker.
    let mut curie_map: BTreeMap<(String, String), String> = BTreeMap::new();
    let mut any_author = false;
    for row in rows {
        for curie in [row.subject_id.as_str(), row.object_id.as_str()] {
            let Some(prefix) = curie_prefix(curie) else {
                continue;
            };
            let key = (prefix.to_ascii_lowercase(), prefix.to_string());
            if curie_map.contains_key(&key) {
                continue;
            }
            let canonical = registry.normalize_prefix(prefix).ok_or_else(|| {
                RegistryError::UnknownSource {
                    name: prefix.to_string(),
                }
            })?;
            let uri_prefix = registry.get_uri_prefix(&canonical).ok_or_else(|| {
                RegistryError::MissingUriPrefix { prefix: canonical }
            })?;
            curie_map.insert(key, uri_prefix.to_string());
        }
        if row.author_id.is_some() {
            any_author = true;
        }
    }
    if any_author {
        curie_map.insert(
            ("orcid".to_string(), "orcid".to_string()),
            vocab::ORCID.to_string(),
        );
    }

    let mut output = String::new();
    output.push_str(&format!("#mapping_set_id: {MAPPING_SET_ID}\n"));
    output.push_str(&format!(
        "#mapping_set_description: {MAPPING_SET_DESCRIPTION}\n"
    ));
    output.push_str(&format!("#license: {LICENSE}\n"));
    output.push_str("#curie_map:\n");
    for ((_, prefix), uri) in &curie_map {
        output.push_str(&format!("#  {prefix}: {uri}\n"));
    }

    output.push_str(&SSSOM_HEADER.join("\t"));
    output.push('\n');
    for row in rows {
        output.push_str(&format!(
            "{}\t{PREDICATE}\t{}\t{JUSTIFICATION}\t{}\t{}\n",
            row.subject_id,
            row.object_id,
            row.mapping_date.as_deref().unwrap_or(""),
            row.author_id
                .as_deref()
                .map(|orcid| format!("orcid:{orcid}"))
                .unwrap_or_default(),
        ));
    }
    Ok(output)
}
