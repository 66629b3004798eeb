//! Catalog output generation.
//!
//! - **Standardized workbook**: one styled worksheet per sheet, 17 canonical
//!   columns, frozen header row
//! - **Raw workbook**: the intermediate table produced by PDF extraction
//! - **CSV**: standardized rows with a leading sheet column

mod common;
mod delimited;
mod error;
mod xlsx;

pub use common::{
    EXTRACTED_SUFFIX, FINAL_SUFFIX, MAX_SHEET_NAME_LEN, STANDARDIZED_SUFFIX, ensure_parent_dir,
    output_file_name, sanitize_sheet_name, unique_sheet_names,
};
pub use delimited::write_canonical_csv;
pub use error::{OutputError, Result};
pub use xlsx::{write_raw_workbook, write_standardized_workbook};

use std::path::Path;

use vaya_model::{OutputFormat, StandardizedSheet};

/// Writes standardized sheets in the requested format.
pub fn write_standardized(
    path: &Path,
    sheets: &[StandardizedSheet],
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Xlsx => write_standardized_workbook(path, sheets),
        OutputFormat::Csv => write_canonical_csv(path, sheets),
    }
}
