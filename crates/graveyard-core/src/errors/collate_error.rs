//! Collation errors.
//!
//! The collator trusts that the validator's contract holds; when it does
//! not, the run aborts before any artifact is written rather than emitting
//! a partially consistent output set.

use super::RegistryError;

/// Errors that abort a collation run.
#[derive(Debug, thiserror::Error)]
pub enum CollateError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{path} has no header line")]
    MissingHeader { path: String },

    #[error("{path} header is not a recognized schema variant: {header}")]
    InvalidHeader { path: String, header: String },

    #[error("{path}:{line}: malformed row: {message}")]
    MalformedRow {
        path: String,
        line: usize,
        message: String,
    },

    #[error(transparent)]
    Registry(#[from] RegistryError),
}
