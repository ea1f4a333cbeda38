//! The flat merged table.

use graveyard_core::types::DeprecationRecord;

/// Fixed header of the merged artifact. The contributor column is always
/// present; 3-column sources emit an empty cell there.
pub const COLLATED_HEADER: [&str; 5] = ["#prefix", "did", "when", "nextofkin", "contributor"];

/// Render the merged table, one row per record in merge order.
pub fn render_table(records: &[DeprecationRecord]) -> String {
    let mut output = String::new();
    output.push_str(&COLLATED_HEADER.join("\t"));
    output.push('\n');
    for record in records {
        output.push_str(&format!(
            "{}\t{}\t{}\t{}\t{}\n",
            record.source_key,
            record.dead_id,
            record.retired_on.as_deref().unwrap_or(""),
            record.successor_id.as_deref().unwrap_or(""),
            record.contributor_orcid.as_deref().unwrap_or(""),
        ));
    }
    output
}
