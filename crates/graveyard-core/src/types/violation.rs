//! Structured integrity violations.
//!
//! The validator's primary mode is "collect everything wrong with this
//! dataset", so a violation is a data record attributable to a file and
//! line, never a raised error.

use serde::{Deserialize, Serialize};

/// The distinct failure categories the validator can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViolationKind {
    /// File base name differs from the registry's canonical form.
    FileNameMismatch,
    /// Header line is neither canonical schema variant.
    InvalidHeader,
    /// Line carries leading or trailing whitespace beyond the separator.
    TrailingWhitespace,
    /// Line does not split into the variant's expected column count.
    ColumnCount,
    /// Non-empty retirement date does not start with `YYYY-MM-DD`.
    InvalidDate,
    /// Identifier does not match the registry pattern for this source.
    InvalidIdentifier,
    /// Non-empty contributor is not a well-formed ORCID.
    InvalidContributor,
}

impl ViolationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::FileNameMismatch => "file-name-mismatch",
            Self::InvalidHeader => "invalid-header",
            Self::TrailingWhitespace => "trailing-whitespace",
            Self::ColumnCount => "column-count",
            Self::InvalidDate => "invalid-date",
            Self::InvalidIdentifier => "invalid-identifier",
            Self::InvalidContributor => "invalid-contributor",
        }
    }
}

/// One integrity failure, attributable to a file and (usually) a line.
///
/// `line` is 1-based; file-level violations (name, header) carry `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    pub kind: ViolationKind,
    pub file: String,
    pub line: Option<usize>,
    pub detail: String,
}

impl Violation {
    pub fn file_level(kind: ViolationKind, file: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            kind,
            file: file.into(),
            line: None,
            detail: detail.into(),
        }
    }

    pub fn line_level(
        kind: ViolationKind,
        file: impl Into<String>,
        line: usize,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            file: file.into(),
            line: Some(line),
            detail: detail.into(),
        }
    }
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.line {
            Some(line) => write!(
                f,
                "{}:{}: {}: {}",
                self.file,
                line,
                self.kind.as_str(),
                self.detail
            ),
            None => write!(f, "{}: {}: {}", self.file, self.kind.as_str(), self.detail),
        }
    }
}
