//! Relation persistence: star-schema rows become polars DataFrames and
//! land as headered CSV files.

pub mod frames;
pub mod writer;

pub use frames::{dim_product_frame, dim_retailer_frame, dim_size_frame, fact_sales_frame};
pub use writer::{OutputPaths, write_star_schema};
