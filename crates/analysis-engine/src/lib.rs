pub mod error;
pub mod patterns;
pub mod report;
pub mod rules;
pub mod summary;
pub mod viability;

use std::sync::Arc;

use shared_docx::{extract_text, DocxExtractor, TextExtractor};
use shared_types::AnalysisReport;
use tracing::info;

pub use error::AnalysisError;
pub use rules::{evaluate, RuleEvaluation};

/// AnalysisEngine entry point
#[derive(Clone)]
pub struct AnalysisEngine {
    extractor: Arc<dyn TextExtractor>,
}

impl AnalysisEngine {
    /// Engine reading .docx uploads
    pub fn new() -> Self {
        Self::with_extractor(DocxExtractor::new())
    }

    pub fn with_extractor(extractor: impl TextExtractor + 'static) -> Self {
        Self {
            extractor: Arc::new(extractor),
        }
    }

    pub fn extractor_name(&self) -> &str {
        self.extractor.name()
    }

    /// Analyze an uploaded document. Never fails; see [`report::contain_failures`].
    pub fn analyze_document(&self, filename: &str, content: &[u8]) -> AnalysisReport {
        info!(filename, bytes = content.len(), "Analyzing document");
        report::contain_failures(filename, || {
            let text = extract_text(self.extractor.as_ref(), filename, content);
            report::assemble_report(filename, &text)
        })
    }

    /// Analyze text that was already extracted
    pub fn analyze_text(&self, filename: &str, text: &str) -> AnalysisReport {
        report::contain_failures(filename, || report::assemble_report(filename, text))
    }

    /// Run the rule families only (for testing)
    pub fn evaluate(&self, text: &str) -> RuleEvaluation {
        rules::evaluate(text)
    }
}

impl Default for AnalysisEngine {
    fn default() -> Self {
        Self::new()
    }
}
