use std::fmt;
use std::path::{Path, PathBuf};

use vaya_model::{CatalogType, StandardizedSheet};

/// What was done to an input file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// PDF to raw workbook.
    Extract,
    /// Spreadsheet or PDF to standardized output.
    Standardize,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Extract => "extract",
            Self::Standardize => "standardize",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetSummary {
    pub name: String,
    pub catalog_type: CatalogType,
    pub rows: usize,
}

impl From<&StandardizedSheet> for SheetSummary {
    fn from(sheet: &StandardizedSheet) -> Self {
        Self {
            name: sheet.name.clone(),
            catalog_type: sheet.catalog_type,
            rows: sheet.table.len(),
        }
    }
}

/// Outcome for one input file.
#[derive(Debug, Clone)]
pub struct FileReport {
    pub input: PathBuf,
    pub stage: Stage,
    pub output: Option<PathBuf>,
    pub sheets: Vec<SheetSummary>,
    pub rows: usize,
    pub error: Option<String>,
}

impl FileReport {
    pub fn success(input: &Path, stage: Stage, output: &Path, rows: usize) -> Self {
        Self {
            input: input.to_path_buf(),
            stage,
            output: Some(output.to_path_buf()),
            sheets: Vec::new(),
            rows,
            error: None,
        }
    }

    pub fn failure(input: &Path, stage: Stage, error: &anyhow::Error) -> Self {
        Self {
            input: input.to_path_buf(),
            stage,
            output: None,
            sheets: Vec::new(),
            rows: 0,
            error: Some(format!("{error:#}")),
        }
    }

    #[must_use]
    pub fn with_sheets(mut self, sheets: &[StandardizedSheet]) -> Self {
        self.sheets = sheets.iter().map(SheetSummary::from).collect();
        self
    }

    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }

    pub fn file_name(&self) -> String {
        self.input
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

/// Outcome of a multi-file run.
#[derive(Debug, Clone, Default)]
pub struct RunReport {
    pub output_dir: PathBuf,
    pub files: Vec<FileReport>,
}

impl RunReport {
    pub fn new(output_dir: &Path) -> Self {
        Self {
            output_dir: output_dir.to_path_buf(),
            files: Vec::new(),
        }
    }

    pub fn succeeded(&self) -> usize {
        self.files.iter().filter(|file| file.is_success()).count()
    }

    pub fn failed(&self) -> usize {
        self.files.len() - self.succeeded()
    }

    pub fn has_errors(&self) -> bool {
        self.failed() > 0
    }
}

/// Workflow directories after merging the config file with CLI flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkflowDirs {
    pub source_dir: PathBuf,
    pub intermediate_dir: PathBuf,
    pub output_dir: PathBuf,
}
