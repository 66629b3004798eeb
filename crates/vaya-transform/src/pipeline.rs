//! Sheet-level standardization: detect, map, derive, clean.

use tracing::{debug, info};

use vaya_map::{detect_catalog_type, map_columns};
use vaya_model::{CanonicalTable, CatalogType, RawTable, StandardizedSheet};

use crate::prices::derive_prices;

/// Controls how input sheets are classified.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StandardizeOptions {
    /// Skips detection and maps every sheet with this profile.
    pub catalog_type: Option<CatalogType>,
}

impl StandardizeOptions {
    pub fn with_catalog_type(mut self, catalog_type: CatalogType) -> Self {
        self.catalog_type = Some(catalog_type);
        self
    }
}

/// Maps one raw table onto the canonical schema and derives prices.
///
/// Rows where every canonical field is empty are dropped.
pub fn standardize_table(table: &RawTable, catalog_type: CatalogType) -> CanonicalTable {
    let mut canonical = derive_prices(map_columns(table, catalog_type));
    let before = canonical.len();
    canonical.drop_blank_rows();
    if canonical.len() < before {
        debug!(
            dropped = before - canonical.len(),
            "dropped rows with no canonical values"
        );
    }
    canonical
}

/// Standardizes a named sheet, or returns `None` when it holds no data.
pub fn standardize_sheet(
    name: &str,
    table: &RawTable,
    filename: &str,
    options: &StandardizeOptions,
) -> Option<StandardizedSheet> {
    if table.is_empty() {
        debug!(sheet = name, "skipping empty sheet");
        return None;
    }
    let catalog_type = options
        .catalog_type
        .unwrap_or_else(|| detect_catalog_type(&table.columns, filename));
    let canonical = standardize_table(table, catalog_type);
    info!(
        sheet = name,
        catalog_type = %catalog_type,
        rows = canonical.len(),
        "standardized sheet"
    );
    Some(StandardizedSheet {
        name: name.to_string(),
        catalog_type,
        table: canonical,
    })
}

/// Standardizes every non-empty sheet of a workbook, keeping sheet order.
///
/// Each sheet is classified on its own; `filename` is the source file's
/// name and takes precedence over column signatures.
pub fn standardize<I>(sheets: I, filename: &str, options: &StandardizeOptions) -> Vec<StandardizedSheet>
where
    I: IntoIterator<Item = (String, RawTable)>,
{
    sheets
        .into_iter()
        .filter_map(|(name, table)| standardize_sheet(&name, &table, filename, options))
        .collect()
}
