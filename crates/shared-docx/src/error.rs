//! Error types for document text extraction

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Only .docx files are supported")]
    UnsupportedFormat(String),

    #[error("Invalid document container: {0}")]
    Container(#[from] zip::result::ZipError),

    #[error("Missing document part: {0}")]
    MissingPart(&'static str),

    #[error("Document part exceeds {limit} bytes")]
    DocumentTooLarge { limit: u64 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ExtractResult<T> = Result<T, ExtractError>;
