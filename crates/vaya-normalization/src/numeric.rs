//! Numeric cleaning of catalog cells.
//!
//! Supplier sheets write prices as `"₹1,250/-"` and tax as `"5%"`. Cleaning
//! never fails: anything unparseable becomes an empty value.

use vaya_model::CellValue;

/// Decorations removed from text before parsing, in removal order.
pub const DECORATIONS: &[&str] = &["₹", "/-", ",", "%"];

/// Parses a decorated numeric string.
///
/// Returns `None` for blank or non-numeric text.
pub fn parse_decorated(value: &str) -> Option<f64> {
    let mut cleaned = value.trim().to_string();
    for decoration in DECORATIONS {
        cleaned = cleaned.replace(decoration, "");
    }
    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok().filter(|parsed| !parsed.is_nan())
}

/// Cleans a cell into a number.
///
/// Empty cells stay empty, numbers pass through, text is parsed with
/// [`parse_decorated`].
pub fn normalize_numeric(value: &CellValue) -> Option<f64> {
    match value {
        CellValue::Empty => None,
        CellValue::Number(number) => Some(*number).filter(|n| !n.is_nan()),
        CellValue::Text(text) => parse_decorated(text),
    }
}

/// Brings a tax rate to a fraction.
///
/// Values above 1 are read as percentages (`5` means 5%); values at or
/// below 1 are taken as already fractional. A whole-number rate above
/// 100% cannot be expressed.
pub fn normalize_gst_value(rate: f64) -> f64 {
    if rate > 1.0 { rate / 100.0 } else { rate }
}

/// Cleans a tax-rate cell into a fractional rate.
pub fn normalize_gst(value: &CellValue) -> Option<f64> {
    normalize_numeric(value).map(normalize_gst_value)
}
