//! Catalog ingestion.
//!
//! Reads supplier catalogs into [`RawTable`](vaya_model::RawTable)s:
//!
//! - **Workbooks**: every sheet of xlsx, xlsm, xlsb, xls and ods files
//! - **CSV**: a single sheet named after the file
//! - **PDF**: one extracted table, best effort
//! - **Discovery**: supported catalog files in a directory, sorted by name

mod delimited;
mod discovery;
mod error;
mod format;
mod workbook;

use std::path::Path;

use tracing::info;
use vaya_model::{ExtractionOptions, RawTable, SINGLE_SHEET_NAME};

// === Error Types ===
pub use error::{IngestError, Result};

// === Readers ===
pub use delimited::read_csv_table;
pub use workbook::{cell_value, header_name, read_workbook};

// === Classification and Discovery ===
pub use discovery::{DiscoveredFile, discover_catalog_files, is_lock_file};
pub use format::CatalogFormat;

/// Reads every sheet of the catalog at `path`.
pub fn read_catalog(path: &Path) -> Result<Vec<(String, RawTable)>> {
    read_catalog_with(path, &ExtractionOptions::default())
}

/// Reads a catalog, extracting PDFs with `options`.
pub fn read_catalog_with(
    path: &Path,
    options: &ExtractionOptions,
) -> Result<Vec<(String, RawTable)>> {
    if !path.is_file() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let format = CatalogFormat::from_path(path).ok_or_else(|| IngestError::UnsupportedFileType {
        path: path.to_path_buf(),
    })?;
    let sheets = match format {
        CatalogFormat::Spreadsheet => read_workbook(path)?,
        CatalogFormat::Csv => vec![read_csv_table(path)?],
        CatalogFormat::Pdf => {
            let table = vaya_pdf::extract_pdf_file(path, options)?;
            vec![(SINGLE_SHEET_NAME.to_string(), table)]
        }
    };
    info!(
        path = %path.display(),
        format = %format,
        sheets = sheets.len(),
        "read catalog"
    );
    Ok(sheets)
}
