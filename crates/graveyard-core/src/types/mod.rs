//! Shared data types for the validator and collator.

pub mod record;
pub mod violation;

pub use record::{
    curie_prefix, local_part, DeprecationRecord, SchemaVariant, HEADER_FOUR, HEADER_THREE,
};
pub use violation::{Violation, ViolationKind};
