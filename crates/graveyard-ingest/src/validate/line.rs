//! Per-line integrity checks.
//!
//! Each check runs independently and accumulates; the only suppression is
//! that a wrong column count skips the field-level checks, since the
//! fields cannot be named at all.

use std::sync::LazyLock;

use regex::Regex;

use graveyard_core::types::{SchemaVariant, Violation, ViolationKind};

/// Retirement dates must start with an ISO calendar date. A time-of-day
/// suffix, if any, is not validated further.
pub static DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}").expect("static regex"));

/// The 19-character grouped-digit ORCID shape; the checksum character may
/// be `X` only in the terminal position.
pub static ORCID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{4}-\d{4}-\d{3}[\dX]$").expect("static regex"));

/// Check one data line, returning every violation found on it.
///
/// `line_number` is 1-based (the header is line 1, so data starts at 2).
/// `pattern` is the registry's identifier pattern for this source.
pub fn check_line(
    file: &str,
    line_number: usize,
    raw: &str,
    variant: SchemaVariant,
    sep: char,
    pattern: &Regex,
) -> Vec<Violation> {
    let mut violations = Vec::new();

    // (a) surrounding whitespace, distinct from the separator. Only spaces
    // count: a row whose trailing cells are empty legitimately ends in tab
    // separators, and stripping those would eat the cells themselves.
    let trimmed = raw.trim_matches(' ');
    if trimmed != raw {
        violations.push(Violation::line_level(
            ViolationKind::TrailingWhitespace,
            file,
            line_number,
            "line has leading or trailing whitespace",
        ));
    }

    // (b) column count; field checks are meaningless when this fails
    let fields: Vec<&str> = trimmed.split(sep).collect();
    let expected = variant.expected_columns();
    if fields.len() != expected {
        violations.push(Violation::line_level(
            ViolationKind::ColumnCount,
            file,
            line_number,
            format!("expected {expected} columns, found {}", fields.len()),
        ));
        return violations;
    }

    let dead_id = fields[0];
    let retired_on = fields[1];
    let successor_id = fields[2];

    // (c) date shape, optional field
    if !retired_on.is_empty() && !DATE_RE.is_match(retired_on) {
        violations.push(Violation::line_level(
            ViolationKind::InvalidDate,
            file,
            line_number,
            format!("'{retired_on}' does not start with YYYY-MM-DD"),
        ));
    }

    // (d) identifiers: dead_id is required, successor optional
    if !pattern.is_match(dead_id) {
        violations.push(Violation::line_level(
            ViolationKind::InvalidIdentifier,
            file,
            line_number,
            format!("dead identifier '{dead_id}' does not match the registry pattern"),
        ));
    }
    if !successor_id.is_empty() && !pattern.is_match(successor_id) {
        violations.push(Violation::line_level(
            ViolationKind::InvalidIdentifier,
            file,
            line_number,
            format!("successor identifier '{successor_id}' does not match the registry pattern"),
        ));
    }

    // (e) contributor, 4-column variant only
    if variant == SchemaVariant::FourColumn {
        let contributor = fields[3];
        if !contributor.is_empty() && !ORCID_RE.is_match(contributor) {
            violations.push(Violation::line_level(
                ViolationKind::InvalidContributor,
                file,
                line_number,
                format!("'{contributor}' is not a well-formed ORCID"),
            ));
        }
    }

    violations
}
