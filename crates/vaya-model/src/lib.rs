//! Catalog data model definitions.
//!
//! Types shared by every stage of the catalog normalization pipeline:
//! cell values, the 17-field canonical schema, raw and canonical tables,
//! supplier catalog types and processing options.

pub mod catalog;
pub mod cell;
pub mod error;
pub mod options;
pub mod schema;
pub mod table;

pub use catalog::CatalogType;
pub use cell::{CellValue, format_numeric};
pub use error::{Result, VayaError};
pub use options::{ExtractionMethod, ExtractionOptions, OutputFormat, WorkflowConfig};
pub use schema::{CANONICAL_FIELD_COUNT, CanonicalField};
pub use table::{
    CanonicalRow, CanonicalTable, RawRecord, RawTable, SINGLE_SHEET_NAME, StandardizedSheet,
};
