//! Plain-text extraction for uploaded Word documents
//!
//! The analyzer only needs one capability from this crate: turn the raw bytes
//! of an upload into newline-separated paragraph text. Failures never escape
//! as errors from [`extract_text`]; they are encoded as a sentinel string that
//! starts with [`EXTRACTION_FAILED_PREFIX`].

pub mod docx;
pub mod error;
pub mod extractor;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use docx::DocxExtractor;
pub use error::{ExtractError, ExtractResult};
pub use extractor::{
    extract_text, is_extraction_failure, TextExtractor, EMPTY_DOCUMENT_TEXT,
    EXTRACTION_FAILED_PREFIX,
};
