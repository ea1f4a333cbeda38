//! Registry resolution errors.
//!
//! All of these are fatal for the run that hits them: without a registry
//! entry, pattern, or URI prefix there is nothing meaningful to check or
//! namespace (missing data cannot be validated against a missing rule).

/// Errors raised by registry lookups and snapshot loading.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("Registry snapshot not found: {path}")]
    SnapshotNotFound { path: String },

    #[error("Failed to parse registry snapshot {path}: {message}")]
    SnapshotParse { path: String, message: String },

    #[error("Registry has no entry for source '{name}'")]
    UnknownSource { name: String },

    #[error("Registry defines no identifier pattern for prefix '{prefix}'")]
    MissingPattern { prefix: String },

    #[error("Registry defines no URI prefix for prefix '{prefix}'")]
    MissingUriPrefix { prefix: String },

    #[error("Identifier pattern for prefix '{prefix}' does not compile: {message}")]
    InvalidPattern { prefix: String, message: String },
}
