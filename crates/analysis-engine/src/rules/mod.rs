//! Business-plan rule families
//!
//! Each family is a pure function of the document text. All of them read the
//! same lower-cased copy held by [`DocumentText`]; only competitor capture
//! looks at the original casing.

pub mod feasibility;
pub mod market;
pub mod recommendations;
pub mod scalability;

use shared_types::{MarketValidation, ScalabilityAnalysis};

use crate::patterns::GapRule;

/// Document text plus its lower-cased copy, computed once per evaluation
#[derive(Debug, Clone)]
pub struct DocumentText<'a> {
    pub original: &'a str,
    pub lower: String,
}

impl<'a> DocumentText<'a> {
    pub fn new(original: &'a str) -> Self {
        Self {
            original,
            lower: original.to_lowercase(),
        }
    }
}

/// Output of every rule family for one document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleEvaluation {
    pub scalability: ScalabilityAnalysis,
    pub market: MarketValidation,
    /// Distinct competitor names found, before the reporting cap
    pub competitors_found: usize,
    pub feasibility_issues: Vec<String>,
    pub recommendations: Vec<String>,
}

impl RuleEvaluation {
    pub fn key_findings(&self) -> Vec<String> {
        vec![
            "Contains business content".to_string(),
            format!("Found {} competitors", self.competitors_found),
            format!("Found {} differentiators", self.market.differentiators),
        ]
    }
}

/// Run every rule family over `text`
pub fn evaluate(text: &str) -> RuleEvaluation {
    let doc = DocumentText::new(text);
    let market = market::check_market_validation(&doc);

    RuleEvaluation {
        scalability: scalability::score_scalability(&doc),
        market: market.validation,
        competitors_found: market.competitors_found,
        feasibility_issues: feasibility::check_feasibility(&doc),
        recommendations: recommendations::check_recommendations(&doc),
    }
}

/// Messages of every rule that fires, or `fallback` alone when none does
pub(crate) fn apply_gap_rules(rules: &[GapRule], doc: &DocumentText, fallback: &str) -> Vec<String> {
    let mut messages: Vec<String> = rules
        .iter()
        .filter(|rule| rule.fires(&doc.lower))
        .map(|rule| rule.message.to_string())
        .collect();

    if messages.is_empty() {
        messages.push(fallback.to_string());
    }
    messages
}
