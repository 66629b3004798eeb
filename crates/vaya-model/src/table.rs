#![deny(unsafe_code)]

use serde::{Deserialize, Serialize};

use crate::catalog::CatalogType;
use crate::cell::CellValue;
use crate::schema::{CANONICAL_FIELD_COUNT, CanonicalField};

/// One row as produced by a PDF strategy: column name to value, in capture order.
pub type RawRecord = Vec<(String, CellValue)>;

/// A table as read from a supplier sheet, before any remapping.
///
/// Rows are positional against `columns`. Column names may repeat; name
/// lookups resolve to the first occurrence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
}

impl RawTable {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Builds a table from row records.
    ///
    /// Columns are the union of record keys in first-seen order. Keys
    /// missing from a record become `Empty`; a key repeated within one
    /// record keeps its last value.
    pub fn from_records(records: Vec<RawRecord>) -> Self {
        let mut table = Self::default();
        for record in &records {
            for (key, _) in record {
                if !table.columns.iter().any(|column| column == key) {
                    table.columns.push(key.clone());
                }
            }
        }
        for record in records {
            let mut row = vec![CellValue::Empty; table.columns.len()];
            for (key, value) in record {
                if let Some(index) = table.column_index(&key) {
                    row[index] = value;
                }
            }
            table.rows.push(row);
        }
        table
    }

    /// Appends a row, padding or truncating it to the column count.
    pub fn push_row(&mut self, mut row: Vec<CellValue>) {
        row.resize(self.columns.len(), CellValue::Empty);
        self.rows.push(row);
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// Values of the named column, one per row.
    pub fn column_values(&self, name: &str) -> Option<impl Iterator<Item = &CellValue> + '_> {
        let index = self.column_index(name)?;
        Some(
            self.rows
                .iter()
                .map(move |row| row.get(index).unwrap_or(&CellValue::Empty)),
        )
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// True when there is nothing to standardize: no columns or no rows.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty() || self.rows.is_empty()
    }
}

/// A row in canonical field order. Always exactly 17 cells.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CanonicalRow {
    cells: [CellValue; CANONICAL_FIELD_COUNT],
}

impl CanonicalRow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: CanonicalField) -> &CellValue {
        &self.cells[field.index()]
    }

    pub fn set(&mut self, field: CanonicalField, value: CellValue) {
        self.cells[field.index()] = value;
    }

    #[must_use]
    pub fn with(mut self, field: CanonicalField, value: impl Into<CellValue>) -> Self {
        self.set(field, value.into());
        self
    }

    pub fn cells(&self) -> &[CellValue] {
        &self.cells
    }

    /// True when every field is empty.
    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(CellValue::is_empty)
    }
}

/// A standardized table: rows over the canonical schema.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CanonicalTable {
    pub rows: Vec<CanonicalRow>,
}

impl CanonicalTable {
    pub fn new(rows: Vec<CanonicalRow>) -> Self {
        Self { rows }
    }

    /// A table of `count` rows with every field empty.
    pub fn blank(count: usize) -> Self {
        Self {
            rows: vec![CanonicalRow::default(); count],
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Values of one field, one per row.
    pub fn column(&self, field: CanonicalField) -> impl Iterator<Item = &CellValue> + '_ {
        self.rows.iter().map(move |row| row.get(field))
    }

    /// Removes rows whose fields are all empty.
    pub fn drop_blank_rows(&mut self) {
        self.rows.retain(|row| !row.is_blank());
    }
}

/// Sheet name for tables that come from a single-table source, such as a
/// PDF extraction.
pub const SINGLE_SHEET_NAME: &str = "Sheet1";

/// A standardized sheet, ready for rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardizedSheet {
    pub name: String,
    pub catalog_type: CatalogType,
    pub table: CanonicalTable,
}
