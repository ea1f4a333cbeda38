//! The visualization sink: per-source record counts rendered as a
//! self-contained SVG histogram.
//!
//! Purely presentational; there is no machine-readable contract beyond
//! "exists and reflects current counts". Counts span several orders of
//! magnitude across registries, so the count axis is log-scaled.

use std::collections::BTreeMap;

use graveyard_core::types::DeprecationRecord;

const CHART_HEIGHT: u32 = 360;
const BAR_SLOT: u32 = 64;
const BAR_WIDTH: u32 = 40;
const MARGIN: u32 = 48;
const PLOT_HEIGHT: u32 = 260;

/// Group records by source and count them, sorted by source key.
pub fn summarize(records: &[DeprecationRecord]) -> Vec<(String, usize)> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for record in records {
        *counts.entry(&record.source_key).or_insert(0) += 1;
    }
    counts
        .into_iter()
        .map(|(key, count)| (key.to_string(), count))
        .collect()
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Bar height for a count on a log scale, normalized against the largest
/// count in the set.
fn bar_height(count: usize, max_count: usize) -> u32 {
    let scale = ((max_count as f64) + 1.0).log10();
    if scale == 0.0 {
        return 0;
    }
    let fraction = ((count as f64) + 1.0).log10() / scale;
    (fraction * PLOT_HEIGHT as f64).round() as u32
}

/// Render the histogram as a self-contained SVG document.
pub fn render_histogram(counts: &[(String, usize)]) -> String {
    let max_count = counts.iter().map(|(_, c)| *c).max().unwrap_or(0);
    let width = MARGIN * 2 + BAR_SLOT * counts.len().max(1) as u32;

    let mut output = String::new();
    output.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{CHART_HEIGHT}\" \
         viewBox=\"0 0 {width} {CHART_HEIGHT}\">\n"
    ));
    output.push_str(
        "  <style>text { font-family: sans-serif; font-size: 12px; } \
         .count { text-anchor: middle; } .label { text-anchor: middle; }</style>\n",
    );
    output.push_str(&format!(
        "  <text x=\"{}\" y=\"20\">Dead identifiers per source (log scale)</text>\n",
        MARGIN
    ));

    let baseline = MARGIN + PLOT_HEIGHT;
    for (i, (source, count)) in counts.iter().enumerate() {
        let x = MARGIN + BAR_SLOT * i as u32 + (BAR_SLOT - BAR_WIDTH) / 2;
        let height = bar_height(*count, max_count);
        let y = baseline - height;
        let center = x + BAR_WIDTH / 2;
        output.push_str(&format!(
            "  <rect x=\"{x}\" y=\"{y}\" width=\"{BAR_WIDTH}\" height=\"{height}\" fill=\"#4c72b0\"/>\n"
        ));
        output.push_str(&format!(
            "  <text class=\"count\" x=\"{center}\" y=\"{}\">{count}</text>\n",
            y.saturating_sub(6)
        ));
        output.push_str(&format!(
            "  <text class=\"label\" x=\"{center}\" y=\"{}\">{}</text>\n",
            baseline + 18,
            escape_xml(source)
        ));
    }

    output.push_str(&format!(
        "  <line x1=\"{MARGIN}\" y1=\"{baseline}\" x2=\"{}\" y2=\"{baseline}\" \
         stroke=\"#333\"/>\n",
        width - MARGIN
    ));
    output.push_str("</svg>\n");
    output
}
