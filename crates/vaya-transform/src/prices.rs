//! GST-inclusive price derivation.
//!
//! Derivation only fills gaps: a price already present in the table is
//! never replaced.

use vaya_model::{CanonicalField, CanonicalTable, CellValue};
use vaya_normalization::{normalize_gst, normalize_numeric};

/// Applies a fractional tax rate to a price; a missing rate counts as zero.
pub fn with_gst(price: f64, gst: Option<f64>) -> f64 {
    price * (1.0 + gst.unwrap_or(0.0))
}

/// Normalizes the base price and GST columns and fills missing
/// after-GST prices.
///
/// - `Updated DP/Mtr (Cut Rate)` and `GST` are replaced by their cleaned
///   numeric values (empty when unparseable); GST is brought to a fraction.
/// - An empty `Dealer Price after GST (Cut Rate)` becomes base × (1 + GST)
///   when the row has a base price.
/// - An empty `RR Price after GST (Cut Rate)` becomes RR price × (1 + GST)
///   when the row has a numeric `RR Price (Cut Rate)`.
pub fn derive_prices(table: CanonicalTable) -> CanonicalTable {
    let rows = table
        .rows
        .into_iter()
        .map(|mut row| {
            let base = normalize_numeric(row.get(CanonicalField::DealerPriceCutRate));
            let gst = normalize_gst(row.get(CanonicalField::Gst));
            row.set(CanonicalField::DealerPriceCutRate, CellValue::from(base));
            row.set(CanonicalField::Gst, CellValue::from(gst));

            if row.get(CanonicalField::DealerPriceAfterGstCutRate).is_empty()
                && let Some(base) = base
            {
                row.set(
                    CanonicalField::DealerPriceAfterGstCutRate,
                    CellValue::Number(with_gst(base, gst)),
                );
            }

            if row.get(CanonicalField::RetailPriceAfterGstCutRate).is_empty()
                && let Some(retail) = normalize_numeric(row.get(CanonicalField::RetailPriceCutRate))
            {
                row.set(
                    CanonicalField::RetailPriceAfterGstCutRate,
                    CellValue::Number(with_gst(retail, gst)),
                );
            }
            row
        })
        .collect();
    CanonicalTable::new(rows)
}
