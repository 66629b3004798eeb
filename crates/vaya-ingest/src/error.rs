//! Error types for catalog ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading catalogs.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Directory not found or not readable.
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Catalog file not found.
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read directory entries.
    #[error("failed to read directory {path}: {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The extension is not a supported catalog format.
    #[error("unsupported file type: {path}")]
    UnsupportedFileType { path: PathBuf },

    // === Parsing Errors ===
    /// The workbook could not be opened or a sheet could not be read.
    #[error("failed to read workbook {path}: {message}")]
    Workbook { path: PathBuf, message: String },

    /// Failed to parse a CSV file.
    #[error("failed to parse CSV {path}: {source}")]
    CsvParse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// PDF extraction failed.
    #[error(transparent)]
    Pdf(#[from] vaya_pdf::PdfError),
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
