//! CSV output for standardized sheets.

use std::path::Path;

use csv::Writer;
use tracing::info;

use vaya_model::{CanonicalField, StandardizedSheet};

use crate::common::ensure_parent_dir;
use crate::error::{OutputError, Result};

const SHEET_COLUMN: &str = "Sheet";

/// Writes all sheets into one CSV, prefixing each row with its sheet name.
pub fn write_canonical_csv(path: &Path, sheets: &[StandardizedSheet]) -> Result<()> {
    if sheets.is_empty() {
        return Err(OutputError::NothingToWrite {
            path: path.to_path_buf(),
        });
    }
    ensure_parent_dir(path)?;
    let csv_error = |source| OutputError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = Writer::from_path(path).map_err(csv_error)?;
    let header = std::iter::once(SHEET_COLUMN).chain(CanonicalField::headers());
    writer.write_record(header).map_err(csv_error)?;

    let mut rows = 0usize;
    for sheet in sheets {
        for row in &sheet.table.rows {
            let record = std::iter::once(sheet.name.clone())
                .chain(row.cells().iter().map(ToString::to_string));
            writer.write_record(record).map_err(csv_error)?;
            rows += 1;
        }
    }
    writer
        .flush()
        .map_err(|source| csv_error(csv::Error::from(source)))?;

    info!(path = %path.display(), rows, "wrote standardized CSV");
    Ok(())
}
