//! Shared helpers: output naming and sheet name rules.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use vaya_model::OutputFormat;

use crate::error::{OutputError, Result};

/// Suffix for single-file standardization output.
pub const STANDARDIZED_SUFFIX: &str = "STANDARDIZED";

/// Suffix for raw PDF extraction output.
pub const EXTRACTED_SUFFIX: &str = "EXTRACTED";

/// Suffix for workflow output.
pub const FINAL_SUFFIX: &str = "FINAL";

/// Excel's worksheet name limit, in characters.
pub const MAX_SHEET_NAME_LEN: usize = 31;

const FORBIDDEN_SHEET_CHARS: &[char] = &['[', ']', ':', '*', '?', '/', '\\'];

const FALLBACK_SHEET_NAME: &str = "Sheet";

/// Builds `<stem>_<suffix>.<ext>` for an input file.
pub fn output_file_name(input: &Path, suffix: &str, format: OutputFormat) -> String {
    let stem = input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    format!("{stem}_{suffix}.{}", format.extension())
}

/// Ensure a parent directory exists for a file path.
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|source| OutputError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    Ok(())
}

/// Makes a name acceptable to Excel as a worksheet name.
pub fn sanitize_sheet_name(name: &str) -> String {
    let replaced: String = name
        .chars()
        .map(|c| if FORBIDDEN_SHEET_CHARS.contains(&c) { '_' } else { c })
        .collect();
    let trimmed = replaced.trim().trim_matches('\'');
    let truncated: String = trimmed.chars().take(MAX_SHEET_NAME_LEN).collect();
    let truncated = truncated.trim_end_matches('\'');
    if truncated.is_empty() || truncated.eq_ignore_ascii_case("history") {
        FALLBACK_SHEET_NAME.to_string()
    } else {
        truncated.to_string()
    }
}

/// Sanitizes names and de-duplicates them case-insensitively with
/// `_2`, `_3`... suffixes.
pub fn unique_sheet_names<'a, I>(names: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut used: HashSet<String> = HashSet::new();
    names
        .into_iter()
        .map(|name| {
            let base = sanitize_sheet_name(name);
            let mut candidate = base.clone();
            let mut counter = 2;
            while used.contains(&candidate.to_lowercase()) {
                let suffix = format!("_{counter}");
                let keep = MAX_SHEET_NAME_LEN - suffix.chars().count();
                candidate = format!("{}{suffix}", base.chars().take(keep).collect::<String>());
                counter += 1;
            }
            used.insert(candidate.to_lowercase());
            candidate
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn output_names() {
        let input = PathBuf::from("in/SANSAAR 2024.xlsx");
        assert_eq!(
            output_file_name(&input, STANDARDIZED_SUFFIX, OutputFormat::Xlsx),
            "SANSAAR 2024_STANDARDIZED.xlsx"
        );
        assert_eq!(
            output_file_name(&input, FINAL_SUFFIX, OutputFormat::Csv),
            "SANSAAR 2024_FINAL.csv"
        );
    }

    #[test]
    fn sheet_name_rules() {
        assert_eq!(sanitize_sheet_name("Rates [2024/25]"), "Rates _2024_25_");
        assert_eq!(sanitize_sheet_name("   "), "Sheet");
        assert_eq!(sanitize_sheet_name("'quoted'"), "quoted");
        assert_eq!(
            sanitize_sheet_name("A very long supplier sheet name over the limit"),
            "A very long supplier sheet name"
        );
        assert_eq!(sanitize_sheet_name("History"), "Sheet");
    }

    #[test]
    fn duplicates_get_suffixes() {
        let long = "x".repeat(40);
        let names = unique_sheet_names(["Rates", "rates", "Rates", long.as_str(), long.as_str()]);
        assert_eq!(names[0], "Rates");
        assert_eq!(names[1], "rates_2");
        assert_eq!(names[2], "Rates_3");
        assert_eq!(names[3].chars().count(), 31);
        assert_eq!(names[4], format!("{}_2", "x".repeat(29)));
    }
}
