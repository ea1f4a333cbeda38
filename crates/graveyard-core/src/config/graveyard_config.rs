//! Top-level configuration with 3-layer resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Input/registry path settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    pub data_dir: Option<PathBuf>,
    pub artifacts_dir: Option<PathBuf>,
    pub registry_snapshot: Option<PathBuf>,
}

impl PathsConfig {
    pub fn effective_data_dir(&self) -> PathBuf {
        self.data_dir.clone().unwrap_or_else(|| PathBuf::from("data"))
    }

    pub fn effective_artifacts_dir(&self) -> PathBuf {
        self.artifacts_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("artifacts"))
    }

    pub fn effective_registry_snapshot(&self) -> PathBuf {
        self.registry_snapshot
            .clone()
            .unwrap_or_else(|| PathBuf::from("registry.toml"))
    }
}

/// Output artifact file names, resolved under the artifacts directory.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub table: Option<String>,
    pub ontology: Option<String>,
    pub sssom: Option<String>,
    pub summary: Option<String>,
}

impl OutputConfig {
    pub fn effective_table(&self) -> String {
        self.table.clone().unwrap_or_else(|| "collated.tsv".to_string())
    }

    pub fn effective_ontology(&self) -> String {
        self.ontology
            .clone()
            .unwrap_or_else(|| "graveyard.ttl".to_string())
    }

    pub fn effective_sssom(&self) -> String {
        self.sssom.clone().unwrap_or_else(|| "graveyard.sssom.tsv".to_string())
    }

    pub fn effective_summary(&self) -> String {
        self.summary.clone().unwrap_or_else(|| "summary.svg".to_string())
    }
}

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`GRAVEYARD_*`)
/// 3. Project config (`graveyard.toml` in project root)
/// 4. Compiled defaults
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GraveyardConfig {
    pub paths: PathsConfig,
    pub outputs: OutputConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub data_dir: Option<PathBuf>,
    pub artifacts_dir: Option<PathBuf>,
    pub registry_snapshot: Option<PathBuf>,
}

impl GraveyardConfig {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 3: project config
        let project_config_path = root.join("graveyard.toml");
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config);

        // Layer 1 (highest priority): CLI flags
        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the final configuration values.
    pub fn validate(config: &GraveyardConfig) -> Result<(), ConfigError> {
        for (field, name) in [
            ("outputs.table", config.outputs.effective_table()),
            ("outputs.ontology", config.outputs.effective_ontology()),
            ("outputs.sssom", config.outputs.effective_sssom()),
            ("outputs.summary", config.outputs.effective_summary()),
        ] {
            if name.is_empty() || name.contains(std::path::MAIN_SEPARATOR) {
                return Err(ConfigError::ValidationFailed {
                    field: field.to_string(),
                    message: "must be a bare file name".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut GraveyardConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: GraveyardConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`, where `other` values override `base`
    /// values only when `other` has a `Some` value.
    fn merge(base: &mut GraveyardConfig, other: &GraveyardConfig) {
        if other.paths.data_dir.is_some() {
            base.paths.data_dir = other.paths.data_dir.clone();
        }
        if other.paths.artifacts_dir.is_some() {
            base.paths.artifacts_dir = other.paths.artifacts_dir.clone();
        }
        if other.paths.registry_snapshot.is_some() {
            base.paths.registry_snapshot = other.paths.registry_snapshot.clone();
        }

        if other.outputs.table.is_some() {
            base.outputs.table = other.outputs.table.clone();
        }
        if other.outputs.ontology.is_some() {
            base.outputs.ontology = other.outputs.ontology.clone();
        }
        if other.outputs.sssom.is_some() {
            base.outputs.sssom = other.outputs.sssom.clone();
        }
        if other.outputs.summary.is_some() {
            base.outputs.summary = other.outputs.summary.clone();
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `GRAVEYARD_DATA_DIR`, `GRAVEYARD_ARTIFACTS_DIR`, etc.
    fn apply_env_overrides(config: &mut GraveyardConfig) {
        if let Ok(val) = std::env::var("GRAVEYARD_DATA_DIR") {
            config.paths.data_dir = Some(PathBuf::from(val));
        }
        if let Ok(val) = std::env::var("GRAVEYARD_ARTIFACTS_DIR") {
            config.paths.artifacts_dir = Some(PathBuf::from(val));
        }
        if let Ok(val) = std::env::var("GRAVEYARD_REGISTRY_SNAPSHOT") {
            config.paths.registry_snapshot = Some(PathBuf::from(val));
        }
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut GraveyardConfig, cli: &CliOverrides) {
        if let Some(ref v) = cli.data_dir {
            config.paths.data_dir = Some(v.clone());
        }
        if let Some(ref v) = cli.artifacts_dir {
            config.paths.artifacts_dir = Some(v.clone());
        }
        if let Some(ref v) = cli.registry_snapshot {
            config.paths.registry_snapshot = Some(v.clone());
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}
