//! API handlers for the analyzer server
//!
//! Provides REST endpoints for:
//! - Document upload analysis
//! - Analysis of already-extracted text
//! - Rule table listing

use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use analysis_engine::patterns::{
    GapRule, ScalabilityCategory, CASE_STUDY_PHRASES, COMPETITOR_PATTERN, DIFFERENTIATOR_PATTERN,
    EXISTING_USAGE_PHRASES, FEASIBILITY_RULES, MAX_REPORTED_COMPETITORS, NO_FEASIBILITY_ISSUES,
    NO_RECOMMENDATIONS, RECOMMENDATION_RULES, SCALABILITY_KEYWORDS,
};
use shared_types::AnalysisReport;

use crate::error::ServerError;
use crate::AppState;

/// Multipart field carrying the uploaded document
pub const UPLOAD_FIELD: &str = "file";

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
}

/// Handler: GET /health
pub async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: "analyzer-server",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Handler: POST /analyze
///
/// Expects a multipart form with a `file` part. Once the part is read the
/// response is always a report; unreadable documents produce the
/// "could not be processed" report rather than an HTTP error.
pub async fn handle_analyze(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalysisReport>, ServerError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(UPLOAD_FIELD) {
            debug!("Skipping multipart field {:?}", field.name());
            continue;
        }

        let filename = field.file_name().unwrap_or_default().to_string();
        let content = field.bytes().await?;

        info!("Analyze request: file={}, bytes={}", filename, content.len());
        let report = state.engine.analyze_document(&filename, &content);
        info!(
            "Analysis complete: file={}, rating={}, viability={}",
            report.filename,
            report.scalability_analysis.rating,
            report.viability_status
        );

        return Ok(Json(report));
    }

    Err(ServerError::InvalidRequest(format!(
        "Missing '{}' field in multipart form",
        UPLOAD_FIELD
    )))
}

/// Text analysis request body
#[derive(Deserialize)]
pub struct TextAnalysisRequest {
    /// Plain text of the business plan
    pub text: String,

    /// Name echoed back in the report
    #[serde(default = "default_text_filename")]
    pub filename: String,
}

fn default_text_filename() -> String {
    "text-input".to_string()
}

/// Handler: POST /api/analyze/text
pub async fn handle_analyze_text(
    State(state): State<AppState>,
    Json(req): Json<TextAnalysisRequest>,
) -> Json<AnalysisReport> {
    info!(
        "Text analysis request: filename={}, chars={}",
        req.filename,
        req.text.chars().count()
    );
    Json(state.engine.analyze_text(&req.filename, &req.text))
}

/// Rule table listing response
#[derive(Serialize)]
pub struct RulesResponse {
    pub success: bool,
    pub scalability: Vec<KeywordGroupInfo>,
    pub market: MarketRulesInfo,
    pub feasibility: GapRulesInfo,
    pub recommendations: GapRulesInfo,
}

/// Keywords counted toward one scalability category
#[derive(Serialize)]
pub struct KeywordGroupInfo {
    pub category: ScalabilityCategory,
    pub keywords: Vec<String>,
}

/// Market validation triggers
#[derive(Serialize)]
pub struct MarketRulesInfo {
    pub existing_usage_phrases: Vec<String>,
    pub case_study_phrases: Vec<String>,
    pub competitor_pattern: String,
    pub max_competitors: usize,
    pub differentiator_pattern: String,
}

/// A gap rule family and its fallback message
#[derive(Serialize)]
pub struct GapRulesInfo {
    pub rules: Vec<GapRuleInfo>,
    pub fallback: String,
}

/// One gap rule
#[derive(Serialize)]
pub struct GapRuleInfo {
    pub trigger: String,
    pub unless: String,
    pub message: String,
}

/// Handler: GET /api/rules
pub async fn handle_list_rules() -> Json<RulesResponse> {
    let scalability = SCALABILITY_KEYWORDS
        .iter()
        .map(|(category, keywords)| KeywordGroupInfo {
            category: *category,
            keywords: to_strings(keywords),
        })
        .collect();

    Json(RulesResponse {
        success: true,
        scalability,
        market: MarketRulesInfo {
            existing_usage_phrases: to_strings(EXISTING_USAGE_PHRASES),
            case_study_phrases: to_strings(CASE_STUDY_PHRASES),
            competitor_pattern: COMPETITOR_PATTERN.as_str().to_string(),
            max_competitors: MAX_REPORTED_COMPETITORS,
            differentiator_pattern: DIFFERENTIATOR_PATTERN.as_str().to_string(),
        },
        feasibility: gap_rules_info(FEASIBILITY_RULES, NO_FEASIBILITY_ISSUES),
        recommendations: gap_rules_info(RECOMMENDATION_RULES, NO_RECOMMENDATIONS),
    })
}

fn gap_rules_info(rules: &[GapRule], fallback: &str) -> GapRulesInfo {
    GapRulesInfo {
        rules: rules
            .iter()
            .map(|rule| GapRuleInfo {
                trigger: rule.trigger.to_string(),
                unless: rule.unless.describe(),
                message: rule.message.to_string(),
            })
            .collect(),
        fallback: fallback.to_string(),
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
