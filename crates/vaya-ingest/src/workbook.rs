//! Workbook reading via calamine.

use std::path::Path;

use calamine::{Data, Reader, open_workbook_auto};
use tracing::{debug, warn};

use vaya_model::{CellValue, RawTable, format_numeric};

use crate::error::{IngestError, Result};

/// Converts a data cell. Numbers stay numeric; errors become empty.
pub fn cell_value(cell: &Data) -> CellValue {
    match cell {
        Data::Empty | Data::Error(_) => CellValue::Empty,
        Data::String(text) => CellValue::text(text.as_str()),
        Data::Float(value) => CellValue::Number(*value),
        Data::Int(value) => CellValue::Number(*value as f64),
        other => CellValue::text(other.to_string()),
    }
}

/// Converts a header cell to a column name, verbatim for strings.
pub fn header_name(cell: &Data) -> String {
    match cell {
        Data::Empty | Data::Error(_) => String::new(),
        Data::String(text) => text.clone(),
        Data::Float(value) => format_numeric(*value),
        other => other.to_string(),
    }
}

/// Reads every sheet of a workbook, first row as header, in sheet order.
///
/// Sheets with no cells come back as empty tables.
pub fn read_workbook(path: &Path) -> Result<Vec<(String, RawTable)>> {
    let workbook_error = |message: String| IngestError::Workbook {
        path: path.to_path_buf(),
        message,
    };
    let mut workbook = open_workbook_auto(path).map_err(|err| workbook_error(err.to_string()))?;
    let sheet_names = workbook.sheet_names().to_vec();

    let mut sheets = Vec::with_capacity(sheet_names.len());
    for name in sheet_names {
        let range = match workbook.worksheet_range(&name) {
            Ok(range) => range,
            Err(err) => {
                warn!(path = %path.display(), sheet = %name, error = %err, "skipping unreadable sheet");
                continue;
            }
        };
        let mut rows = range.rows();
        let table = match rows.next() {
            Some(header) => {
                let mut table = RawTable::new(header.iter().map(header_name).collect());
                for row in rows {
                    table.push_row(row.iter().map(cell_value).collect());
                }
                table
            }
            None => RawTable::default(),
        };
        debug!(sheet = %name, rows = table.row_count(), "read sheet");
        sheets.push((name, table));
    }
    Ok(sheets)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_conversion() {
        assert_eq!(cell_value(&Data::Int(350)), CellValue::Number(350.0));
        assert_eq!(cell_value(&Data::Float(0.05)), CellValue::Number(0.05));
        assert_eq!(cell_value(&Data::String("  ".into())), CellValue::Empty);
        assert_eq!(cell_value(&Data::Bool(true)), CellValue::text("true"));
        assert_eq!(cell_value(&Data::Empty), CellValue::Empty);
    }

    #[test]
    fn header_conversion() {
        assert_eq!(header_name(&Data::String(" Tax %".into())), " Tax %");
        assert_eq!(header_name(&Data::Float(2025.0)), "2025");
        assert_eq!(header_name(&Data::Int(7)), "7");
        assert_eq!(header_name(&Data::Empty), "");
    }
}
