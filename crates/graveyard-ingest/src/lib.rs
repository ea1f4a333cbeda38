//! graveyard-ingest: the two components of the pipeline.
//!
//! - Validator: integrity checks over the per-source input files,
//!   accumulating structured violations.
//! - Collator: parse, merge/sort, and fan out to the merged TSV table, the
//!   Turtle ontology, the SSSOM mapping table, and the SVG summary.
//!
//! The two are independent entry points over the same data directory; the
//! collator trusts the validator's contract but never invokes it.

pub mod collate;
pub mod discover;
pub mod fix;
pub mod validate;

pub use collate::{CollateSummary, Collator};
pub use discover::discover_sources;
pub use fix::fix_spacing;
pub use validate::{ValidationReport, Validator};
