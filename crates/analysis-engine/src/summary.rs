//! First-sentences synopsis of a document

use std::panic::{self, AssertUnwindSafe};

use shared_docx::is_extraction_failure;
use tracing::warn;

/// Sentences kept in the synopsis
pub const SUMMARY_SENTENCES: usize = 3;

pub const NO_CONTENT_SUMMARY: &str = "No content available for summary";
pub const SUMMARY_FAILED: &str = "Summary generation failed";

/// Join the first three sentence fragments of `text` with ". ".
///
/// Fragments are split on `.`, `!` and `?`, trimmed, and empty ones dropped.
/// A trailing period is added when at least one fragment exists.
pub fn summarize(text: &str) -> String {
    if text.is_empty() || is_extraction_failure(text) {
        return NO_CONTENT_SUMMARY.to_string();
    }

    summarize_with(text, first_sentences)
}

/// Run `synopsis` over `text`, replacing a panic with [`SUMMARY_FAILED`]
fn summarize_with(text: &str, synopsis: impl FnOnce(&str) -> String) -> String {
    panic::catch_unwind(AssertUnwindSafe(|| synopsis(text))).unwrap_or_else(|_| {
        warn!("Summary generation panicked");
        SUMMARY_FAILED.to_string()
    })
}

fn first_sentences(text: &str) -> String {
    let sentences: Vec<&str> = text
        .split(['.', '!', '?'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .take(SUMMARY_SENTENCES)
        .collect();

    if sentences.is_empty() {
        return String::new();
    }
    format!("{}.", sentences.join(". "))
}
