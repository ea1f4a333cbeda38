//! graveyard-core: shared foundation for the graveyard collation pipeline.
//!
//! This crate provides the pieces both components share:
//! - Types: `DeprecationRecord`, the `SchemaVariant` sum type, `Violation`
//! - Errors: one `thiserror` enum per subsystem
//! - Config: layered TOML/env/CLI resolution
//! - Registry: the three-lookup capability trait plus a TOML snapshot

pub mod config;
pub mod errors;
pub mod registry;
pub mod types;

pub use config::{CliOverrides, GraveyardConfig};
pub use errors::{CollateError, ConfigError, RegistryError, ValidateError};
pub use registry::{Registry, SnapshotRegistry};
pub use types::{DeprecationRecord, SchemaVariant, Violation, ViolationKind};
