//! Header-plus-rows extraction from detected page tables.

use tracing::debug;

use vaya_model::{CellValue, RawRecord};

use crate::page::{PageTable, PdfPage};

/// Cleans a header row; blank cells get a positional `Column_N` name.
pub fn header_names(row: &[Option<String>]) -> Vec<String> {
    row.iter()
        .enumerate()
        .map(|(index, cell)| match cell {
            Some(text) if !text.trim().is_empty() => text.replace('\n', " ").trim().to_string(),
            _ => format!("Column_{index}"),
        })
        .collect()
}

/// Turns one table into records keyed by its header row.
///
/// Rows whose width differs from the header, or whose cells are all blank,
/// are skipped. Blank cells are kept as empty values.
pub fn table_records(table: &[Vec<Option<String>>]) -> Vec<RawRecord> {
    let [header, rows @ ..] = table else {
        return Vec::new();
    };
    if rows.is_empty() {
        return Vec::new();
    }
    let headers = header_names(header);
    rows.iter()
        .filter(|row| row.len() == headers.len())
        .filter_map(|row| {
            let cells: Vec<String> = row
                .iter()
                .map(|cell| cell.as_deref().map(str::trim).unwrap_or_default().to_string())
                .collect();
            if cells.iter().all(String::is_empty) {
                return None;
            }
            Some(
                headers
                    .iter()
                    .cloned()
                    .zip(cells.into_iter().map(CellValue::text))
                    .collect(),
            )
        })
        .collect()
}

/// Runs table extraction over every page.
pub fn extract_generic<P: PdfPage>(pages: &[P]) -> Vec<RawRecord> {
    let tables: Vec<PageTable> = pages.iter().flat_map(PdfPage::tables).collect();
    let records: Vec<RawRecord> = tables.iter().flat_map(|table| table_records(table)).collect();
    debug!(
        tables = tables.len(),
        rows = records.len(),
        "generic strategy finished"
    );
    records
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(values: &[Option<&str>]) -> Vec<Option<String>> {
        values.iter().map(|v| v.map(str::to_string)).collect()
    }

    #[test]
    fn header_cleanup() {
        assert_eq!(
            header_names(&cells(&[None, Some("  "), Some("Rate\nper mtr ")])),
            vec!["Column_0", "Column_1", "Rate per mtr"]
        );
    }

    #[test]
    fn header_only_table_yields_nothing() {
        assert!(table_records(&[cells(&[Some("A"), Some("B")])]).is_empty());
        assert!(table_records(&[]).is_empty());
    }

    #[test]
    fn mismatched_rows_are_skipped() {
        let table = vec![
            cells(&[Some("Design"), Some("Price")]),
            cells(&[Some("Aurora")]),
            cells(&[Some(" Aurora "), None]),
        ];
        let records = table_records(&table);
        assert_eq!(records.len(), 1);
        assert_eq!(
            records[0],
            vec![
                ("Design".to_string(), CellValue::text("Aurora")),
                ("Price".to_string(), CellValue::Empty),
            ]
        );
    }
}
