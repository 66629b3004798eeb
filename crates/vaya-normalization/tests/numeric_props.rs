//! Property tests for numeric cleaning.

use proptest::prelude::*;

use vaya_model::CellValue;
use vaya_normalization::{normalize_gst, normalize_gst_value, normalize_numeric, parse_decorated};

/// Inserts thousands separators into the integer part of a plain number.
fn with_separators(plain: &str) -> String {
    let (int_part, frac_part) = match plain.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (plain, None),
    };
    let digits: Vec<char> = int_part.chars().collect();
    let mut grouped = String::new();
    for (idx, ch) in digits.iter().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*ch);
    }
    match frac_part {
        Some(frac) => format!("{grouped}.{frac}"),
        None => grouped,
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn decorated_numbers_parse_like_plain(
        int_part in 0u64..10_000_000,
        cents in 0u32..100,
        currency in any::<bool>(),
        suffix in any::<bool>(),
        percent in any::<bool>(),
    ) {
        let plain = format!("{int_part}.{cents:02}");
        let mut decorated = with_separators(&plain);
        if currency {
            decorated.insert(0, '₹');
        }
        if suffix {
            decorated.push_str("/-");
        }
        if percent {
            decorated.push('%');
        }
        let decorated = format!("  {decorated} ");
        let expected: f64 = plain.parse().unwrap();
        prop_assert_eq!(parse_decorated(&decorated), Some(expected));
        prop_assert_eq!(normalize_numeric(&CellValue::Text(decorated)), Some(expected));
    }

    #[test]
    fn alphabetic_text_is_empty(text in "[A-Za-z][A-Za-z ]{0,20}") {
        prop_assume!(!["inf", "infinity", "nan"]
            .contains(&text.trim().to_ascii_lowercase().as_str()));
        prop_assert_eq!(parse_decorated(&text), None);
    }

    #[test]
    fn numbers_are_returned_unchanged(value in -1.0e9f64..1.0e9) {
        prop_assert_eq!(normalize_numeric(&CellValue::Number(value)), Some(value));
    }

    #[test]
    fn gst_heuristic_is_idempotent(rate in 0.0f64..100.0) {
        let once = normalize_gst_value(rate);
        prop_assert!(once <= 1.0);
        prop_assert_eq!(normalize_gst_value(once), once);
    }

    #[test]
    fn whole_percent_matches_fraction(percent in 2u32..=28) {
        let from_percent = normalize_gst(&CellValue::text(format!("{percent}%"))).unwrap();
        let from_fraction = normalize_gst(&CellValue::Number(f64::from(percent) / 100.0)).unwrap();
        prop_assert_eq!(from_percent, from_fraction);
    }
}
