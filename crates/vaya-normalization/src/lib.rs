//! Normalization of raw catalog cell values.
//!
//! - **numeric**: strips currency, separator and percent decorations and
//!   parses the remainder as a float; tax rates are brought to fractions.

pub mod numeric;

pub use numeric::{
    DECORATIONS, normalize_gst, normalize_gst_value, normalize_numeric, parse_decorated,
};
