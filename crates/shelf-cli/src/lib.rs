//! CLI library components for the shelf catalog transpiler.

pub mod logging;
pub mod pipeline;
