//! Error handling for the graveyard pipeline.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod collate_error;
pub mod config_error;
pub mod registry_error;
pub mod validate_error;

pub use collate_error::CollateError;
pub use config_error::ConfigError;
pub use registry_error::RegistryError;
pub use validate_error::ValidateError;
