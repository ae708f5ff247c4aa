//! Classification and normalization engine for raw catalog records.
//!
//! Ordered rule tables map free-text attributes (size tokens, product
//! names, descriptions, colors, brand strings) onto canonical categorical
//! values; the engine explodes each product's size list and derives
//! availability metrics and status codes per row. All tables are static
//! domain data built once; every stage is a pure per-record function.

pub mod brand;
pub mod category;
pub mod color;
pub mod engine;
pub mod filter;
pub mod metrics;
pub mod rules;
pub mod size;

pub use engine::{ClassifyOutcome, classify_batch, classify_product};
