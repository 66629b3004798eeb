//! Projection of raw tables onto the canonical schema.

use tracing::debug;

use vaya_model::{CanonicalField, CanonicalRow, CanonicalTable, CatalogType, RawTable};

use crate::profiles::lookup;

/// Which source column filled each canonical field, and which were absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MappingSummary {
    pub catalog_type: Option<CatalogType>,
    /// `(source column, canonical field)` pairs that were applied.
    pub mapped: Vec<(String, CanonicalField)>,
    /// Profile source columns that the table does not carry.
    pub missing_sources: Vec<String>,
    /// Canonical fields left empty for every row.
    pub empty_fields: Vec<CanonicalField>,
}

/// Works out the column assignments `map_columns` will make.
///
/// Profile entries apply in declaration order; when two present source
/// columns feed one field the later entry is the one kept. Tables without
/// a profile only fill fields whose header appears verbatim as a column.
pub fn summarize_mapping(table: &RawTable, catalog_type: CatalogType) -> MappingSummary {
    let mut assignments: Vec<(String, CanonicalField)> = Vec::new();
    let mut missing_sources = Vec::new();

    match lookup(catalog_type) {
        Some(profile) => {
            for (source, target) in profile.columns {
                if table.has_column(source) {
                    assignments.retain(|(_, field)| field != target);
                    assignments.push(((*source).to_string(), *target));
                } else {
                    missing_sources.push((*source).to_string());
                }
            }
        }
        None => {
            for field in CanonicalField::ALL {
                if table.has_column(field.header()) {
                    assignments.push((field.header().to_string(), field));
                }
            }
        }
    }

    let empty_fields = CanonicalField::ALL
        .into_iter()
        .filter(|field| !assignments.iter().any(|(_, target)| target == field))
        .collect();
    MappingSummary {
        catalog_type: catalog_type.is_known().then_some(catalog_type),
        mapped: assignments,
        missing_sources,
        empty_fields,
    }
}

/// Builds the canonical table for `table` under `catalog_type`.
///
/// The result has one row per input row and all 17 fields in schema
/// order; fields with no source column are empty.
pub fn map_columns(table: &RawTable, catalog_type: CatalogType) -> CanonicalTable {
    let summary = summarize_mapping(table, catalog_type);
    let sources: Vec<(usize, CanonicalField)> = summary
        .mapped
        .iter()
        .filter_map(|(source, field)| table.column_index(source).map(|index| (index, *field)))
        .collect();

    let rows = table
        .rows
        .iter()
        .map(|raw| {
            let mut row = CanonicalRow::new();
            for (index, field) in &sources {
                if let Some(value) = raw.get(*index) {
                    row.set(*field, value.clone());
                }
            }
            row
        })
        .collect();

    debug!(
        catalog_type = %catalog_type,
        mapped = summary.mapped.len(),
        missing_sources = summary.missing_sources.len(),
        empty_fields = summary.empty_fields.len(),
        "mapped columns"
    );
    CanonicalTable::new(rows)
}
