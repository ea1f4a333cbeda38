//! Collator — parse, merge, and fan out to the four sinks.
//!
//! Reads the same per-source files as the validator but does not
//! re-validate; it trusts the validator's contract and aborts (rather than
//! emitting partial artifacts) when a file cannot be parsed at all.

pub mod collator;
pub mod graph;
pub mod merge;
pub mod parser;
pub mod sssom;
pub mod summary;
pub mod table;

pub use collator::{CollateSummary, Collator};
pub use graph::{build_graph, Term, TripleGraph};
pub use merge::{merge, sort_records};
pub use parser::parse_file;
pub use sssom::{build_mapping_rows, render_sssom, MappingRow};
pub use summary::{render_histogram, summarize};
pub use table::{render_table, COLLATED_HEADER};
