//! Catalog ingestion: JSON reading (array or NDJSON), full-row
//! deduplication, and the per-field null profile surfaced in diagnostics.

pub mod catalog;
pub mod error;
pub mod profile;

pub use catalog::{dedupe_catalog, parse_catalog, read_catalog};
pub use error::{IngestError, Result};
pub use profile::{FieldNulls, null_profile};
