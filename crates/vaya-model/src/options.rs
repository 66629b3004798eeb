//! Configuration options for catalog processing.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::VayaError;

/// Default number of captured fields a PDF text line needs to become a row.
pub const DEFAULT_MIN_FIELDS: usize = 3;

/// How rows are pulled out of a PDF.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtractionMethod {
    /// Pick by filename: supplier price lists use the profile strategy.
    #[default]
    Auto,
    /// Line-by-line pattern capture for the Fabrizio price-list layout.
    Profile,
    /// Page table detection.
    Generic,
}

impl ExtractionMethod {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Profile => "profile",
            Self::Generic => "generic",
        }
    }
}

impl fmt::Display for ExtractionMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExtractionMethod {
    type Err = VayaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "profile" | "fabrizio" => Ok(Self::Profile),
            "generic" => Ok(Self::Generic),
            other => Err(VayaError::UnknownExtractionMethod(other.to_string())),
        }
    }
}

/// Options for PDF extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionOptions {
    pub method: ExtractionMethod,
    /// Minimum captured fields for a profile-strategy row to be kept.
    pub min_fields: usize,
}

impl Default for ExtractionOptions {
    fn default() -> Self {
        Self {
            method: ExtractionMethod::Auto,
            min_fields: DEFAULT_MIN_FIELDS,
        }
    }
}

impl ExtractionOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_method(mut self, method: ExtractionMethod) -> Self {
        self.method = method;
        self
    }

    #[must_use]
    pub fn with_min_fields(mut self, min_fields: usize) -> Self {
        self.min_fields = min_fields;
        self
    }
}

/// File format for standardized output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Xlsx,
    Csv,
}

impl OutputFormat {
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Xlsx => "xlsx",
            Self::Csv => "csv",
        }
    }
}

/// Directories used by the two-stage workflow.
///
/// Source PDFs are extracted into the intermediate directory; every
/// spreadsheet found there is standardized into the output directory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowConfig {
    pub source_dir: Option<PathBuf>,
    pub intermediate_dir: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
}

impl WorkflowConfig {
    /// Fills unset directories from `other`; values already set win.
    #[must_use]
    pub fn merged_with(self, other: WorkflowConfig) -> Self {
        Self {
            source_dir: self.source_dir.or(other.source_dir),
            intermediate_dir: self.intermediate_dir.or(other.intermediate_dir),
            output_dir: self.output_dir.or(other.output_dir),
        }
    }

    /// Names of directories that are still unset.
    pub fn missing(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.source_dir.is_none() {
            missing.push("sourceDir");
        }
        if self.intermediate_dir.is_none() {
            missing.push("intermediateDir");
        }
        if self.output_dir.is_none() {
            missing.push("outputDir");
        }
        missing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extraction_defaults() {
        let options = ExtractionOptions::default();
        assert_eq!(options.method, ExtractionMethod::Auto);
        assert_eq!(options.min_fields, 3);
        let tuned = options
            .with_method(ExtractionMethod::Generic)
            .with_min_fields(4);
        assert_eq!(tuned.method, ExtractionMethod::Generic);
        assert_eq!(tuned.min_fields, 4);
    }

    #[test]
    fn method_parses_aliases() {
        assert_eq!("AUTO".parse::<ExtractionMethod>().unwrap(), ExtractionMethod::Auto);
        assert_eq!(
            "fabrizio".parse::<ExtractionMethod>().unwrap(),
            ExtractionMethod::Profile
        );
        assert!("ocr".parse::<ExtractionMethod>().is_err());
    }

    #[test]
    fn workflow_config_merge_prefers_self() {
        let flags = WorkflowConfig {
            source_dir: Some("flags/pdf".into()),
            ..WorkflowConfig::default()
        };
        let file = WorkflowConfig {
            source_dir: Some("file/pdf".into()),
            intermediate_dir: Some("file/raw".into()),
            output_dir: None,
        };
        let merged = flags.merged_with(file);
        assert_eq!(merged.source_dir, Some(PathBuf::from("flags/pdf")));
        assert_eq!(merged.intermediate_dir, Some(PathBuf::from("file/raw")));
        assert_eq!(merged.missing(), vec!["outputDir"]);
    }
}
