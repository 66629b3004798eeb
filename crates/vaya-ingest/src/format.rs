//! Classification of catalog files by extension.

use std::fmt;
use std::path::Path;

/// Catalog file formats the pipeline can read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CatalogFormat {
    /// PDF price list; ordered first so batches extract PDFs before
    /// spreadsheets.
    Pdf,
    Spreadsheet,
    Csv,
}

const SPREADSHEET_EXTENSIONS: &[&str] = &["xlsx", "xlsm", "xlsb", "xls", "ods"];

impl CatalogFormat {
    /// Classifies `path` by extension, case-insensitively.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        if SPREADSHEET_EXTENSIONS
            .iter()
            .any(|known| ext.eq_ignore_ascii_case(known))
        {
            Some(Self::Spreadsheet)
        } else if ext.eq_ignore_ascii_case("csv") {
            Some(Self::Csv)
        } else if ext.eq_ignore_ascii_case("pdf") {
            Some(Self::Pdf)
        } else {
            None
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Spreadsheet => "spreadsheet",
            Self::Csv => "csv",
        }
    }

    /// True for formats that hold tables directly (not PDF).
    pub const fn is_tabular(self) -> bool {
        !matches!(self, Self::Pdf)
    }
}

impl fmt::Display for CatalogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
