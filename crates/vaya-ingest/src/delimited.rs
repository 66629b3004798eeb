//! CSV catalog reading.

use std::path::Path;

use csv::{ReaderBuilder, Trim};
use tracing::debug;

use vaya_model::{CellValue, RawTable};

use crate::error::{IngestError, Result};

/// Reads a CSV catalog as a single sheet named after the file stem.
///
/// Headers are kept verbatim (supplier headers can carry significant
/// whitespace). Data cells are trimmed; blank cells are empty. Short rows
/// are padded.
pub fn read_csv_table(path: &Path) -> Result<(String, RawTable)> {
    let parse_error = |source| IngestError::CsvParse {
        path: path.to_path_buf(),
        source,
    };
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::None)
        .from_path(path)
        .map_err(parse_error)?;

    let columns: Vec<String> = reader
        .headers()
        .map_err(parse_error)?
        .iter()
        .map(|header| header.trim_start_matches('\u{feff}').to_string())
        .collect();
    let mut table = RawTable::new(columns);
    for record in reader.records() {
        let record = record.map_err(parse_error)?;
        table.push_row(record.iter().map(|cell| CellValue::text(cell.trim())).collect());
    }

    let name = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    debug!(path = %path.display(), rows = table.row_count(), "read CSV catalog");
    Ok((name, table))
}
