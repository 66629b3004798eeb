//! Strategy selection and fallback.

use tracing::{debug, info};

use vaya_model::{ExtractionMethod, ExtractionOptions, RawRecord, RawTable};

use crate::error::{PdfError, Result};
use crate::generic::extract_generic;
use crate::page::PdfPage;
use crate::profile::extract_profile;

/// Filename fragments that select the profile strategy under `Auto`.
const PROFILE_FILENAME_HINTS: &[&str] = &["FABRIZIO", "PRICE LIST"];

/// Resolves `Auto` from the filename; explicit methods pass through.
pub fn resolve_method(filename: &str, method: ExtractionMethod) -> ExtractionMethod {
    match method {
        ExtractionMethod::Auto => {
            let upper = filename.to_uppercase();
            if PROFILE_FILENAME_HINTS.iter().any(|hint| upper.contains(hint)) {
                ExtractionMethod::Profile
            } else {
                ExtractionMethod::Generic
            }
        }
        explicit => explicit,
    }
}

/// Extracts row mappings from `pages`.
///
/// When the profile strategy runs and finds nothing, the generic strategy
/// is tried before giving up.
pub fn extract_records<P: PdfPage>(
    pages: &[P],
    filename: &str,
    options: &ExtractionOptions,
) -> Vec<RawRecord> {
    let method = resolve_method(filename, options.method);
    info!(filename, method = %method, pages = pages.len(), "extracting PDF tables");
    match method {
        ExtractionMethod::Profile => {
            let records = extract_profile(pages, options.min_fields);
            if records.is_empty() {
                debug!(filename, "profile strategy found no rows, falling back to generic");
                extract_generic(pages)
            } else {
                records
            }
        }
        _ => extract_generic(pages),
    }
}

/// Extracts a raw table from `pages`.
///
/// Columns are the union of record keys in first-seen order; an empty
/// result is an error.
pub fn extract_pdf_table<P: PdfPage>(
    pages: &[P],
    filename: &str,
    options: &ExtractionOptions,
) -> Result<RawTable> {
    let records = extract_records(pages, filename, options);
    if records.is_empty() {
        return Err(PdfError::NoRowsExtracted {
            name: filename.to_string(),
        });
    }
    let table = RawTable::from_records(records);
    info!(
        filename,
        rows = table.row_count(),
        columns = table.columns.len(),
        "extracted PDF table"
    );
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auto_resolves_by_filename() {
        assert_eq!(
            resolve_method("Fabrizio 2025.pdf", ExtractionMethod::Auto),
            ExtractionMethod::Profile
        );
        assert_eq!(
            resolve_method("new price list.pdf", ExtractionMethod::Auto),
            ExtractionMethod::Profile
        );
        assert_eq!(
            resolve_method("catalog.pdf", ExtractionMethod::Auto),
            ExtractionMethod::Generic
        );
        assert_eq!(
            resolve_method("fabrizio.pdf", ExtractionMethod::Generic),
            ExtractionMethod::Generic
        );
    }
}
