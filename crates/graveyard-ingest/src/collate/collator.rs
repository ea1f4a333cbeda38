//! Collation orchestration.
//!
//! Every artifact is built fully in memory before the first write: a run
//! either leaves a complete, consistent artifact set or fails with the
//! previous artifacts untouched.

use std::path::{Path, PathBuf};

use graveyard_core::config::GraveyardConfig;
use graveyard_core::errors::CollateError;
use graveyard_core::registry::Registry;

use crate::discover::discover_sources;

use super::graph::build_graph;
use super::merge::merge;
use super::sssom::{build_mapping_rows, render_sssom};
use super::summary::{render_histogram, summarize};
use super::table::render_table;

/// What a collation run produced.
#[derive(Debug)]
pub struct CollateSummary {
    pub sources: usize,
    pub records: usize,
    pub mappings: usize,
    pub triples: usize,
    pub artifacts_dir: PathBuf,
}

/// Single-pass collator over a data directory.
pub struct Collator<'r, R: Registry + ?Sized> {
    registry: &'r R,
}

impl<'r, R: Registry + ?Sized> Collator<'r, R> {
    pub fn new(registry: &'r R) -> Self {
        Self { registry }
    }

    /// Run the full collation: parse, merge, build all four artifacts,
    /// then write them under the configured artifacts directory.
    pub fn run(&self, config: &GraveyardConfig) -> Result<CollateSummary, CollateError> {
        let data_dir = config.paths.effective_data_dir();
        let paths = discover_sources(&data_dir).map_err(|e| CollateError::Io {
            path: data_dir.display().to_string(),
            source: e,
        })?;

        let records = merge(&paths)?;
        let table = render_table(&records);
        let graph = build_graph(&records, self.registry)?;
        let rows = build_mapping_rows(&records);
        let sssom = render_sssom(&rows, self.registry)?;
        let counts = summarize(&records);
        let svg = render_histogram(&counts);

        // Every sink is built; only now touch the filesystem.
        let artifacts_dir = config.paths.effective_artifacts_dir();
        std::fs::create_dir_all(&artifacts_dir).map_err(|e| CollateError::Io {
            path: artifacts_dir.display().to_string(),
            source: e,
        })?;
        write_artifact(&artifacts_dir.join(config.outputs.effective_table()), &table)?;
        let ontology_path = artifacts_dir.join(config.outputs.effective_ontology());
        graph.serialize(&ontology_path).map_err(|e| CollateError::Io {
            path: ontology_path.display().to_string(),
            source: e,
        })?;
        write_artifact(&artifacts_dir.join(config.outputs.effective_sssom()), &sssom)?;
        write_artifact(&artifacts_dir.join(config.outputs.effective_summary()), &svg)?;

        let summary = CollateSummary {
            sources: paths.len(),
            records: records.len(),
            mappings: rows.len(),
            triples: graph.len(),
            artifacts_dir,
        };
        tracing::info!(
            sources = summary.sources,
            records = summary.records,
            mappings = summary.mappings,
            triples = summary.triples,
            artifacts = %summary.artifacts_dir.display(),
            "collation complete"
        );
        Ok(summary)
    }
}

fn write_artifact(path: &Path, content: &str) -> Result<(), CollateError> {
    std::fs::write(path, content).map_err(|e| CollateError::Io {
        path: path.display().to_string(),
        source: e,
    })
}
