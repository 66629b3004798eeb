//! Cell values as read from supplier catalogs.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single cell: text, a number, or nothing.
///
/// Missing values stay `Empty`; they are never coerced to `0`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum CellValue {
    #[default]
    Empty,
    Text(String),
    Number(f64),
}

impl CellValue {
    /// Builds a text cell, mapping blank strings to `Empty`.
    pub fn text(value: impl Into<String>) -> Self {
        let value = value.into();
        if value.trim().is_empty() {
            Self::Empty
        } else {
            Self::Text(value)
        }
    }

    /// True for `Empty`, whitespace-only text and NaN numbers.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::Text(value) => value.trim().is_empty(),
            Self::Number(value) => value.is_nan(),
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(value) if !value.is_nan() => Some(*value),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value.as_str()),
            _ => None,
        }
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<Option<f64>> for CellValue {
    fn from(value: Option<f64>) -> Self {
        value.map_or(Self::Empty, Self::Number)
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        Self::text(value)
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        Self::text(value)
    }
}

/// Renders the cell the way it appears in text outputs; numbers drop a
/// trailing `.0`.
impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => Ok(()),
            Self::Text(value) => f.write_str(value),
            Self::Number(value) if value.is_nan() => Ok(()),
            Self::Number(value) => f.write_str(&format_numeric(*value)),
        }
    }
}

/// Formats a floating-point number without trailing zeros.
pub fn format_numeric(v: f64) -> String {
    let s = format!("{v}");
    if !s.contains('.') {
        return s;
    }
    let trimmed = s.trim_end_matches('0').trim_end_matches('.');
    if trimmed.is_empty() || trimmed == "-" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_text_is_empty() {
        assert_eq!(CellValue::text("   "), CellValue::Empty);
        assert!(CellValue::Text(" \t".to_string()).is_empty());
        assert!(CellValue::Number(f64::NAN).is_empty());
        assert!(!CellValue::Number(0.0).is_empty());
    }

    #[test]
    fn display_trims_float_zeros() {
        assert_eq!(CellValue::Number(350.0).to_string(), "350");
        assert_eq!(CellValue::Number(367.5).to_string(), "367.5");
        assert_eq!(CellValue::Number(100.0).to_string(), "100");
        assert_eq!(CellValue::Empty.to_string(), "");
        assert_eq!(CellValue::text("Linen").to_string(), "Linen");
    }

    #[test]
    fn format_numeric_keeps_integer_zeros() {
        assert_eq!(format_numeric(1500.0), "1500");
        assert_eq!(format_numeric(0.05), "0.05");
        assert_eq!(format_numeric(0.0), "0");
    }
}
