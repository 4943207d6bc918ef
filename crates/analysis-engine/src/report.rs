//! Report assembly and the failure-containment boundary
//!
//! Three report shapes leave this module:
//! - a full scorecard for readable text,
//! - the unprocessable report when extraction failed or produced nothing,
//! - the minimal failure report when anything in the pipeline panicked.

use std::panic::{self, AssertUnwindSafe};

use shared_docx::is_extraction_failure;
use shared_types::{AnalysisReport, MarketValidation, Rating, ScalabilityAnalysis, ViabilityStatus};
use tracing::{debug, error, info};

use crate::error::AnalysisError;
use crate::rules;
use crate::summary::summarize;
use crate::viability::compute_viability;

pub const UNPROCESSABLE_SUMMARY: &str = "No content available for analysis";
pub const UNPROCESSABLE_FINDING: &str = "Document could not be processed";
pub const UNPROCESSABLE_FEASIBILITY: &str = "Analysis unavailable";
pub const UNPROCESSABLE_RECOMMENDATION: &str = "Upload a valid document";

pub const FAILURE_FINDING: &str = "Complete analysis failure";
pub const FAILURE_FEASIBILITY: &str = "System error occurred";
pub const FAILURE_RECOMMENDATION: &str = "Contact support";

/// Build the scorecard for extracted text.
///
/// Sentinel or empty text short-circuits to [`unprocessable_report`] without
/// running any rule.
pub fn assemble_report(filename: &str, text: &str) -> AnalysisReport {
    if text.is_empty() || is_extraction_failure(text) {
        info!(filename, "Document could not be processed");
        return unprocessable_report(filename);
    }

    let evaluation = rules::evaluate(text);
    let (viability_score, viability_status) = compute_viability(
        &evaluation.scalability,
        &evaluation.market,
        &evaluation.feasibility_issues,
    );

    debug!(
        filename,
        scalability = evaluation.scalability.score,
        competitors = evaluation.competitors_found,
        "Rules evaluated"
    );

    AnalysisReport {
        filename: filename.to_string(),
        summary: summarize(text),
        key_findings: evaluation.key_findings(),
        scalability_analysis: evaluation.scalability,
        market_validation: evaluation.market,
        feasibility_issues: evaluation.feasibility_issues,
        recommendations: evaluation.recommendations,
        viability_score,
        viability_status,
    }
}

/// Report for a document whose text could not be read
pub fn unprocessable_report(filename: &str) -> AnalysisReport {
    AnalysisReport {
        summary: UNPROCESSABLE_SUMMARY.to_string(),
        key_findings: vec![UNPROCESSABLE_FINDING.to_string()],
        scalability_analysis: ScalabilityAnalysis {
            rating: Rating::NotAssessed,
            ..Default::default()
        },
        market_validation: MarketValidation::default(),
        feasibility_issues: vec![UNPROCESSABLE_FEASIBILITY.to_string()],
        recommendations: vec![UNPROCESSABLE_RECOMMENDATION.to_string()],
        viability_score: 0,
        viability_status: ViabilityStatus::NotAssessed,
        ..AnalysisReport::new(filename)
    }
}

/// Minimal report returned when the pipeline itself failed
pub fn failure_report(filename: &str, err: &AnalysisError) -> AnalysisReport {
    AnalysisReport {
        summary: format!("Analysis failed: {}", err),
        key_findings: vec![FAILURE_FINDING.to_string()],
        feasibility_issues: vec![FAILURE_FEASIBILITY.to_string()],
        recommendations: vec![FAILURE_RECOMMENDATION.to_string()],
        ..AnalysisReport::new(filename)
    }
}

/// Run `pipeline`, converting any panic into [`failure_report`].
///
/// This is the only place failures are caught; nothing propagates past it.
pub fn contain_failures<F>(filename: &str, pipeline: F) -> AnalysisReport
where
    F: FnOnce() -> AnalysisReport,
{
    match panic::catch_unwind(AssertUnwindSafe(pipeline)) {
        Ok(report) => report,
        Err(payload) => {
            let err = AnalysisError::from_panic(payload);
            error!(filename, "Analysis failed completely: {}", err);
            failure_report(filename, &err)
        }
    }
}
