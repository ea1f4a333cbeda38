//! The identifier-registry capability.
//!
//! The pipeline needs exactly three lookups from whatever authority defines
//! identifier namespaces; everything behind them (a static snapshot, a
//! remote service, a test double) is interchangeable.

pub mod snapshot;

pub use snapshot::{PrefixEntry, SnapshotRegistry};

use crate::errors::RegistryError;

/// The three registry lookups the validator and collator depend on.
///
/// All three are pure functions of their argument for the duration of a
/// run; `None` from `get_pattern` or `get_uri_prefix` for a known prefix is
/// a fatal registry-resolution condition at the call sites, not here.
pub trait Registry {
    /// The canonical normalized form of a prefix, resolving case
    /// differences and registered synonyms. `None` when the registry has
    /// no entry at all for this name.
    fn normalize_prefix(&self, name: &str) -> Option<String>;

    /// The identifier-validation regex source for a canonical prefix.
    fn get_pattern(&self, prefix: &str) -> Option<&str>;

    /// The URI prefix that namespaces identifiers of a canonical prefix.
    fn get_uri_prefix(&self, prefix: &str) -> Option<&str>;
}

/// Resolve and compile the identifier pattern for a canonical prefix.
///
/// A missing or non-compiling pattern is fatal for any run touching this
/// source; no line-level validation can proceed without it.
pub fn compile_pattern<R: Registry + ?Sized>(
    registry: &R,
    prefix: &str,
) -> Result<regex::Regex, RegistryError> {
    let source = registry
        .get_pattern(prefix)
        .ok_or_else(|| RegistryError::MissingPattern {
            prefix: prefix.to_string(),
        })?;
    regex::Regex::new(source).map_err(|e| RegistryError::InvalidPattern {
        prefix: prefix.to_string(),
        message: e.to_string(),
    })
}
