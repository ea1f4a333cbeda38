//! Configuration with layered resolution.

pub mod graveyard_config;

pub use graveyard_config::{CliOverrides, GraveyardConfig, OutputConfig, PathsConfig};
