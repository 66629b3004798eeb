use thiserror::Error;

#[derive(Debug, Error)]
pub enum VayaError {
    #[error("unknown catalog type: {0}")]
    UnknownCatalogType(String),
    #[error("unknown extraction method: {0} (expected auto, profile or generic)")]
    UnknownExtractionMethod(String),
}

pub type Result<T> = std::result::Result<T, VayaError>;
