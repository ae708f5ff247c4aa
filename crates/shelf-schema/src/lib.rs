//! Star-schema assembly: one globally-ordered pass handing out dense
//! surrogate keys, relation projection with full-row dedup, and the
//! size-group coverage diagnostic.

pub mod assemble;
pub mod coverage;

pub use assemble::assemble;
pub use coverage::{SIZE_GROUP_ALLOWLIST, coverage_gaps};
