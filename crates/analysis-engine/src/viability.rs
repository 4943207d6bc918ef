//! Overall viability score
use shared_types::{MarketValidation, ScalabilityAnalysis, ViabilityStatus};

use crate::rules::feasibility::has_feasibility_issues;

/// Points per scalability keyword hit
pub const SCALABILITY_WEIGHT: u32 = 10;
/// Points per differentiator phrase
pub const DIFFERENTIATOR_WEIGHT: u32 = 5;
/// Bonus for evidence of existing usage
pub const EXISTING_USAGE_BONUS: u32 = 10;
/// Bonus when no feasibility issue was flagged
pub const FEASIBILITY_BONUS: u32 = 10;

pub fn compute_viability(
    scalability: &ScalabilityAnalysis,
    market: &MarketValidation,
    feasibility_issues: &[String],
) -> (u32, ViabilityStatus) {
    let mut score = scalability
        .score
        .saturating_mul(SCALABILITY_WEIGHT)
        .saturating_add(market.differentiators.saturating_mul(DIFFERENTIATOR_WEIGHT));

    if market.existing_usage {
        score = score.saturating_add(EXISTING_USAGE_BONUS);
    }
    if !has_feasibility_issues(feasibility_issues) {
        score = score.saturating_add(FEASIBILITY_BONUS);
    }

    (score, ViabilityStatus::from_score(score))
}
