//! Catalog standardization.
//!
//! - **prices**: GST-inclusive price derivation over canonical tables
//! - **pipeline**: detection, mapping and derivation per input sheet

pub mod pipeline;
pub mod prices;

pub use pipeline::{StandardizeOptions, standardize, standardize_sheet, standardize_table};
pub use prices::{derive_prices, with_gst};
