//! CLI library components for the catalog pipeline.

pub mod logging;
pub mod pipeline;
pub mod types;
