use tracing::{debug, error};

use crate::error::{ExtractError, ExtractResult};

/// Every failure string returned by [`extract_text`] starts with this tag
pub const EXTRACTION_FAILED_PREFIX: &str = "Text extraction failed";

/// Returned when the container parsed but held no non-blank paragraph
pub const EMPTY_DOCUMENT_TEXT: &str = "Document appears to be empty";

/// A document format the analyzer can read text from.
pub trait TextExtractor: Send + Sync {
    /// Extract paragraph text from the raw document bytes.
    ///
    /// Blank paragraphs are dropped and the rest joined with `\n`. An empty
    /// string means the document held no text.
    fn extract(&self, content: &[u8]) -> ExtractResult<String>;

    /// Lower-case filename suffixes this extractor accepts, dot included.
    fn supported_extensions(&self) -> &[&str];

    /// Check the declared filename against the supported suffixes.
    fn supports(&self, filename: &str) -> bool {
        let filename = filename.to_lowercase();
        self.supported_extensions()
            .iter()
            .any(|ext| filename.ends_with(ext))
    }

    fn name(&self) -> &str;
}

/// Extract text from an upload, encoding any failure as a sentinel string.
///
/// Returns `"Text extraction failed: {reason}"` when the filename is not
/// supported or the bytes cannot be parsed, and [`EMPTY_DOCUMENT_TEXT`] when
/// nothing readable remains. The error itself is only logged.
pub fn extract_text(extractor: &dyn TextExtractor, filename: &str, content: &[u8]) -> String {
    match try_extract(extractor, filename, content) {
        Ok(text) if text.is_empty() => {
            debug!(filename, "Document has no text paragraphs");
            EMPTY_DOCUMENT_TEXT.to_string()
        }
        Ok(text) => text,
        Err(e) => {
            error!(filename, extractor = extractor.name(), "Text extraction error: {}", e);
            format!("{}: {}", EXTRACTION_FAILED_PREFIX, e)
        }
    }
}

fn try_extract(
    extractor: &dyn TextExtractor,
    filename: &str,
    content: &[u8],
) -> ExtractResult<String> {
    if !extractor.supports(filename) {
        return Err(ExtractError::UnsupportedFormat(filename.to_string()));
    }
    extractor.extract(content)
}

/// True for strings produced by the failure branch of [`extract_text`]
pub fn is_extraction_failure(text: &str) -> bool {
    text.starts_with(EXTRACTION_FAILED_PREFIX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::docx_from_paragraphs;
    use crate::DocxExtractor;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_rejects_unsupported_extension() {
        let text = extract_text(&DocxExtractor, "plan.pdf", b"%PDF-1.7");
        assert_eq!(text, "Text extraction failed: Only .docx files are supported");
        assert!(is_extraction_failure(&text));
    }

    #[test]
    fn test_extension_check_ignores_case() {
        let bytes = docx_from_paragraphs(&["Hello"]);
        assert_eq!(extract_text(&DocxExtractor, "PLAN.DOCX", &bytes), "Hello");
    }

    #[test]
    fn test_garbage_bytes_become_sentinel() {
        let text = extract_text(&DocxExtractor, "plan.docx", b"definitely not a zip");
        assert!(text.starts_with("Text extraction failed: "));
    }

    #[test]
    fn test_empty_document_is_not_a_failure() {
        let bytes = docx_from_paragraphs(&["", "   "]);
        let text = extract_text(&DocxExtractor, "plan.docx", &bytes);
        assert_eq!(text, EMPTY_DOCUMENT_TEXT);
        assert!(!is_extraction_failure(&text));
    }

    #[test]
    fn test_paragraphs_joined_by_newline() {
        let bytes = docx_from_paragraphs(&["  First paragraph ", "", "Second"]);
        let text = extract_text(&DocxExtractor, "plan.docx", &bytes);
        assert_eq!(text, "First paragraph\nSecond");
    }
}
