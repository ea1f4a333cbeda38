//! Integrity validator.
//!
//! Certifies every file, header, and data line against the registry-derived
//! rules, accumulating one `Violation` per distinct failure. Only registry
//! resolution problems abort the run; everything else is collected so a
//! single pass reports everything wrong with the dataset.

pub mod line;
pub mod report;
pub mod validator;

pub use line::check_line;
pub use report::render_report;
pub use validator::{ValidationReport, Validator};
