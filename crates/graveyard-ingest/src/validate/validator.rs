//! File-level validation orchestration.

use std::path::Path;

use graveyard_core::errors::{RegistryError, ValidateError};
use graveyard_core::registry::{compile_pattern, Registry};
use graveyard_core::types::{SchemaVariant, Violation, ViolationKind};

use crate::discover::{discover_sources, separator_for, source_key};

use super::line::check_line;

/// Everything one validation pass found.
#[derive(Debug, Default)]
pub struct ValidationReport {
    pub violations: Vec<Violation>,
    pub files_checked: usize,
    pub lines_checked: usize,
}

impl ValidationReport {
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Violation-accumulating integrity validator over a data directory.
pub struct Validator<'r, R: Registry + ?Sized> {
    registry: &'r R,
}

impl<'r, R: Registry + ?Sized> Validator<'r, R> {
    pub fn new(registry: &'r R) -> Self {
        Self { registry }
    }

    /// Check every source file under `data_dir`.
    ///
    /// Per-file and per-line problems accumulate in the report; only I/O
    /// failures and registry resolution failures abort the pass.
    pub fn check_dir(&self, data_dir: &Path) -> Result<ValidationReport, ValidateError> {
        let paths = discover_sources(data_dir).map_err(|e| ValidateError::Io {
            path: data_dir.display().to_string(),
            source: e,
        })?;

        let mut report = ValidationReport::default();
        for path in &paths {
            self.check_file(path, &mut report)?;
        }

        tracing::info!(
            files = report.files_checked,
            lines = report.lines_checked,
            violations = report.violations.len(),
            "validation pass complete"
        );
        Ok(report)
    }

    /// Check one source file, appending violations to `report`.
    pub fn check_file(
        &self,
        path: &Path,
        report: &mut ValidationReport,
    ) -> Result<(), ValidateError> {
        report.files_checked += 1;
        let file = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let stem = source_key(path);

        // File-name check: no registry entry at all is fatal (the registry
        // can say nothing about this file); a mismatched canonical form is
        // a violation, and the contents are never inspected further.
        match self.registry.normalize_prefix(&stem) {
            None => {
                return Err(RegistryError::UnknownSource { name: stem }.into());
            }
            Some(canonical) if canonical != stem => {
                report.violations.push(Violation::file_level(
                    ViolationKind::FileNameMismatch,
                    file,
                    format!("file name '{stem}' is not the canonical form '{canonical}'"),
                ));
                return Ok(());
            }
            Some(_) => {}
        }

        let pattern = compile_pattern(self.registry, &stem)?;

        let content = std::fs::read_to_string(path).map_err(|e| ValidateError::Io {
            path: path.display().to_string(),
            source: e,
        })?;
        let sep = separator_for(path);
        let mut lines = content.lines();

        let variant = match lines.next() {
            None => {
                report.violations.push(Violation::file_level(
                    ViolationKind::InvalidHeader,
                    file,
                    "file is empty, expected a header line",
                ));
                return Ok(());
            }
            Some(header) => {
                let fields: Vec<&str> = header.trim_matches(' ').split(sep).collect();
                match SchemaVariant::from_header(&fields) {
                    Some(variant) => variant,
                    None => {
                        report.violations.push(Violation::file_level(
                            ViolationKind::InvalidHeader,
                            file,
                            format!("unrecognized header '{}'", header.trim()),
                        ));
                        return Ok(());
                    }
                }
            }
        };

        for (i, raw) in lines.enumerate() {
            let line_number = i + 2;
            report.lines_checked += 1;
            report
                .violations
                .extend(check_line(&file, line_number, raw, variant, sep, &pattern));
        }

        tracing::debug!(file = %path.display(), "checked source file");
        Ok(())
    }
}
