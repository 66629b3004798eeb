//! Regex capture for Fabrizio-style price lists.
//!
//! Product rows in these lists are single text lines such as
//! `REVO REVO 100% POLYESTER 50000+ 54075200 140 5% 350/-`. Every field is
//! captured independently; a line that yields too few fields is dropped.

use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, trace};

use vaya_model::{CellValue, RawRecord};

use crate::page::PdfPage;

/// Fragments that mark a line as a product row.
const COMPOSITION_KEYWORDS: &[&str] = &["100%", "POLYESTER", "PES", "PVC", "NYL"];

/// Fragments that mark a line as a header.
const HEADER_KEYWORDS: &[&str] = &["COMPOSITION", "PRODUCT"];

static COMPOSITION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([A-Z0-9%,]+\s*[A-Z%]+)").expect("Invalid composition regex")
});

static MARTINDALE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d{4,6}\+)").expect("Invalid martindale regex"));

static HSN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d{8})").expect("Invalid HSN regex"));

static WIDTH_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(13[0-9]|14[0-9]|150|280|300)\b").expect("Invalid width regex")
});

static GST_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+%)").expect("Invalid GST regex"));

/// Three or four digits at the end of the line, optionally written `350/-`.
static DP_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d{3,4})/?-?\s*$").expect("Invalid DP regex"));

/// Number of characters before a GST match inspected for "POLY".
const GST_LOOKBEHIND: usize = 5;

/// True when `line` looks like a product row rather than a header.
pub fn is_candidate_line(line: &str) -> bool {
    let upper = line.to_uppercase();
    COMPOSITION_KEYWORDS.iter().any(|keyword| upper.contains(keyword))
        && !HEADER_KEYWORDS.iter().any(|keyword| upper.contains(keyword))
}

fn first_group(regex: &Regex, line: &str) -> Option<String> {
    regex
        .captures(line)
        .and_then(|captures| captures.get(1))
        .map(|group| group.as_str().trim().to_string())
}

fn composition(line: &str) -> Option<String> {
    COMPOSITION_REGEX
        .find(line)
        .map(|found| found.as_str())
        .filter(|text| text.contains('%'))
        .map(|text| text.trim().to_string())
}

fn width(line: &str, hsn: Option<&str>) -> Option<String> {
    first_group(&WIDTH_REGEX, line)
        .filter(|width| !hsn.is_some_and(|hsn| hsn.contains(width.as_str())))
}

/// A percentage that is not part of a "POLY..." composition.
fn gst(line: &str) -> Option<String> {
    let found = GST_REGEX.captures(line)?.get(1)?;
    let before = &line[..found.start()];
    let window_start = before
        .char_indices()
        .rev()
        .nth(GST_LOOKBEHIND - 1)
        .map_or(0, |(index, _)| index);
    if before[window_start..].contains("POLY") {
        return None;
    }
    Some(found.as_str().trim().to_string())
}

/// Captures every recognizable field of a product line.
///
/// Fields are keyed by the Fabrizio column names so the record maps
/// straight through the Fabrizio profile. Names are only taken from lines
/// with more than three tokens.
pub fn capture_fields(line: &str) -> RawRecord {
    let mut record: RawRecord = Vec::new();
    let mut push = |key: &str, value: String| record.push((key.to_string(), CellValue::text(value)));

    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() > 3 {
        push("COLLECTION NAME", tokens[0].to_string());
        push("PRODUCT NAME", tokens[1].to_string());
    }
    if let Some(value) = composition(line) {
        push("COMPOSITION", value);
    }
    if let Some(value) = first_group(&MARTINDALE_REGEX, line) {
        push("MARTINDALE", value);
    }
    let hsn = first_group(&HSN_REGEX, line);
    let fabric_width = width(line, hsn.as_deref());
    if let Some(value) = hsn {
        push("HSNCODE", value);
    }
    if let Some(value) = fabric_width {
        push("WIDTH(INCM)", value);
    }
    if let Some(value) = gst(line) {
        push("GST", value);
    }
    if let Some(value) = first_group(&DP_REGEX, line) {
        push("DP", value);
    }
    record
}

/// Extracts one product record from a line, or `None` when the line is not
/// a product row or yields fewer than `min_fields` fields.
pub fn extract_line(line: &str, min_fields: usize) -> Option<RawRecord> {
    if !is_candidate_line(line) {
        return None;
    }
    let record = capture_fields(line);
    if record.len() >= min_fields {
        Some(record)
    } else {
        trace!(fields = record.len(), min_fields, "discarding product line");
        None
    }
}

/// Runs line capture over the text of every page.
pub fn extract_profile<P: PdfPage>(pages: &[P], min_fields: usize) -> Vec<RawRecord> {
    let records: Vec<RawRecord> = pages
        .iter()
        .filter_map(PdfPage::text)
        .flat_map(|text| {
            text.lines()
                .filter_map(|line| extract_line(line, min_fields))
                .collect::<Vec<_>>()
        })
        .collect();
    debug!(rows = records.len(), "profile strategy finished");
    records
}
