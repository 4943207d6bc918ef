// Market validation signals
use shared_types::MarketValidation;

use super::DocumentText;
use crate::patterns::{
    contains_any, CASE_STUDY_PHRASES, COMPETITOR_PATTERN, DIFFERENTIATOR_PATTERN,
    EXISTING_USAGE_PHRASES, MAX_REPORTED_COMPETITORS,
};

/// Market validation plus the uncapped competitor count
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarketSignals {
    pub validation: MarketValidation,
    pub competitors_found: usize,
}

pub fn check_market_validation(doc: &DocumentText) -> MarketSignals {
    let competitors = extract_competitors(doc.original);
    let competitors_found = competitors.len();

    let validation = MarketValidation {
        existing_usage: contains_any(&doc.lower, EXISTING_USAGE_PHRASES),
        competitors: competitors
            .into_iter()
            .take(MAX_REPORTED_COMPETITORS)
            .collect(),
        differentiators: count_differentiators(&doc.lower),
        case_studies: contains_any(&doc.lower, CASE_STUDY_PHRASES),
    };

    MarketSignals {
        validation,
        competitors_found,
    }
}

/// Distinct capitalized words that follow a competitor trigger phrase.
///
/// Names are kept in first-seen order. Callers must not rely on that order.
pub fn extract_competitors(text: &str) -> Vec<String> {
    let mut competitors: Vec<String> = Vec::new();
    for cap in COMPETITOR_PATTERN.captures_iter(text) {
        if let Some(name) = cap.get(1) {
            if !competitors.iter().any(|c| c == name.as_str()) {
                competitors.push(name.as_str().to_string());
            }
        }
    }
    competitors
}

pub fn count_differentiators(text_lower: &str) -> u32 {
    DIFFERENTIATOR_PATTERN.find_iter(text_lower).count() as u32
}
