//! Error types for PDF extraction.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading or extracting a PDF.
#[derive(Debug, Error)]
pub enum PdfError {
    /// PDF file not found.
    #[error("PDF file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read the file from disk.
    #[error("failed to read PDF {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The PDF parser could not produce page text.
    #[error("failed to extract text from PDF {path}: {message}")]
    Read { path: PathBuf, message: String },

    /// Neither strategy produced a row.
    #[error("no rows extracted from {name}")]
    NoRowsExtracted { name: String },
}

/// Result type for PDF operations.
pub type Result<T> = std::result::Result<T, PdfError>;
