//! Human-readable rendering of a validation report.

use super::validator::ValidationReport;

/// Render a report as `file:line: kind: detail` lines with a summary
/// footer, suitable for terminals and CI logs.
pub fn render_report(report: &ValidationReport) -> String {
    let mut output = String::new();

    for violation in &report.violations {
        output.push_str(&format!("{violation}\n"));
    }

    output.push_str(&format!(
        "─── {} files, {} lines checked, {} violations ───\n",
        report.files_checked,
        report.lines_checked,
        report.violations.len()
    ));
    if report.is_clean() {
        output.push_str("Result: PASSED ✓\n");
    } else {
        output.push_str("Result: FAILED ✗\n");
    }

    output
}
