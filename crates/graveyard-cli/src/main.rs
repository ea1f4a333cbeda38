//! Command-line entry points for the graveyard pipeline.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};

use graveyard_core::config::{CliOverrides, GraveyardConfig};
use graveyard_core::registry::SnapshotRegistry;
use graveyard_ingest::collate::Collator;
use graveyard_ingest::fix::fix_spacing;
use graveyard_ingest::validate::{render_report, Validator};

#[derive(Debug, Parser)]
#[command(name = "graveyard", version, about = "Collate and validate dead-identifier tables")]
struct Cli {
    /// Directory holding the per-source input files.
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Directory the collator writes artifacts into.
    #[arg(long, global = true)]
    artifacts_dir: Option<PathBuf>,

    /// Path to the registry snapshot TOML.
    #[arg(long, global = true)]
    registry: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ReportFormat {
    Console,
    Json,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Check every input file against the registry-derived integrity rules.
    Validate {
        #[arg(long, value_enum, default_value = "console")]
        format: ReportFormat,
    },
    /// Merge the input files and write all artifacts.
    Collate,
    /// Repair stray whitespace and missing trailing cells in place.
    Fix,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(message) => {
            tracing::error!("{message}");
            ExitCode::from(2)
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode, String> {
    let overrides = CliOverrides {
        data_dir: cli.data_dir,
        artifacts_dir: cli.artifacts_dir,
        registry_snapshot: cli.registry,
    };
    let root = std::env::current_dir().map_err(|e| e.to_string())?;
    let config = GraveyardConfig::load(&root, Some(&overrides)).map_err(|e| e.to_string())?;
    let registry = SnapshotRegistry::load(&config.paths.effective_registry_snapshot())
        .map_err(|e| e.to_string())?;

    match cli.command {
        Command::Validate { format } => {
            let validator = Validator::new(&registry);
            let report = validator
                .check_dir(&config.paths.effective_data_dir())
                .map_err(|e| e.to_string())?;
            match format {
                ReportFormat::Console => print!("{}", render_report(&report)),
                ReportFormat::Json => {
                    let json = serde_json::to_string_pretty(&report.violations)
                        .map_err(|e| e.to_string())?;
                    println!("{json}");
                }
            }
            if report.is_clean() {
                Ok(ExitCode::SUCCESS)
            } else {
                Ok(ExitCode::FAILURE)
            }
        }
        Command::Collate => {
            let collator = Collator::new(&registry);
            collator.run(&config).map_err(|e| e.to_string())?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Fix => {
            let rewritten =
                fix_spacing(&config.paths.effective_data_dir()).map_err(|e| e.to_string())?;
            tracing::info!(rewritten, "fix pass complete");
            Ok(ExitCode::SUCCESS)
        }
    }
}
