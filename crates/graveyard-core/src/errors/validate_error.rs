//! Fatal validation-run errors.
//!
//! Per-line and per-file problems with the data itself are `Violation`
//! records, not errors; this enum covers only conditions that make further
//! checking meaningless.

use super::RegistryError;

/// Errors that abort a validation run.
#[derive(Debug, thiserror::Error)]
pub enum ValidateError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Registry(#[from] RegistryError),
}
