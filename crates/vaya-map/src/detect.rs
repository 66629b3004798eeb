//! Catalog type detection.
//!
//! Filename signals are checked first; column signatures are a fallback
//! for renamed files. Column checks run FF_A_dress before Fabrizio, whose
//! layouts share several columns.

use tracing::debug;

use vaya_model::CatalogType;

use crate::profiles::{ColumnSignature, lookup, profiles};

/// Order in which column signatures are tried.
const COLUMN_SIGNATURE_ORDER: [CatalogType; 3] = [
    CatalogType::FfADress,
    CatalogType::Fabrizio,
    CatalogType::Sansaar,
];

/// Classifies a table by its filename, then by its column names.
pub fn detect_catalog_type<S: AsRef<str>>(columns: &[S], filename: &str) -> CatalogType {
    if let Some(kind) = detect_from_filename(filename) {
        debug!(filename, catalog_type = %kind, "detected catalog type from filename");
        return kind;
    }
    let kind = detect_from_columns(columns);
    debug!(filename, catalog_type = %kind, "detected catalog type from columns");
    kind
}

/// Matches supplier filename fragments, case-insensitively.
pub fn detect_from_filename(filename: &str) -> Option<CatalogType> {
    let upper = filename.to_uppercase();
    profiles()
        .iter()
        .find(|profile| {
            profile
                .filename_signatures
                .iter()
                .any(|signature| upper.contains(signature))
        })
        .map(|profile| profile.catalog_type)
}

/// Matches column signatures against upper-cased column names.
///
/// Returns [`CatalogType::Unknown`] when no signature matches.
pub fn detect_from_columns<S: AsRef<str>>(columns: &[S]) -> CatalogType {
    let upper: Vec<String> = columns
        .iter()
        .map(|column| column.as_ref().to_uppercase())
        .collect();
    let present = |name: &str| upper.iter().any(|column| column.contains(name));
    COLUMN_SIGNATURE_ORDER
        .into_iter()
        .find(|kind| {
            lookup(*kind).is_some_and(|profile| match profile.column_signature {
                ColumnSignature::Any(names) => names.iter().copied().any(|name| present(name)),
                ColumnSignature::All(names) => names.iter().copied().all(|name| present(name)),
            })
        })
        .unwrap_or(CatalogType::Unknown)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filename_signatures() {
        assert_eq!(
            detect_from_filename("sansaar_new_price_list.xlsx"),
            Some(CatalogType::Sansaar)
        );
        assert_eq!(
            detect_from_filename("Divine Collection 2025.xlsx"),
            Some(CatalogType::FfADress)
        );
        assert_eq!(detect_from_filename("F&F Rates.xls"), Some(CatalogType::FfADress));
        assert_eq!(
            detect_from_filename("Fabrizio-Price.pdf"),
            Some(CatalogType::Fabrizio)
        );
        assert_eq!(detect_from_filename("catalog.xlsx"), None);
    }

    #[test]
    fn ff_columns_checked_before_fabrizio() {
        let columns = ["PRODUCT NAME", "HSNCODE", "NEW DP"];
        assert_eq!(detect_from_columns(&columns), CatalogType::FfADress);
    }

    #[test]
    fn fabrizio_needs_both_columns() {
        assert_eq!(
            detect_from_columns(&["PRODUCT NAME", "HSNCODE"]),
            CatalogType::Fabrizio
        );
        assert_eq!(detect_from_columns(&["PRODUCT NAME"]), CatalogType::Unknown);
    }

    #[test]
    fn column_names_are_compared_upper_cased() {
        assert_eq!(
            detect_from_columns(&["Collection", "SerialNo"]),
            CatalogType::Sansaar
        );
        assert_eq!(detect_from_columns(&["new mrp "]), CatalogType::FfADress);
    }

    #[test]
    fn no_signal_is_unknown() {
        let columns: [&str; 0] = [];
        assert_eq!(detect_catalog_type(&columns, "list.xlsx"), CatalogType::Unknown);
    }
}
