// Documentation recommendations
use super::{apply_gap_rules, DocumentText};
use crate::patterns::{NO_RECOMMENDATIONS, RECOMMENDATION_RULES};

/// Never empty: holds [`NO_RECOMMENDATIONS`] when no rule fires
pub fn check_recommendations(doc: &DocumentText) -> Vec<String> {
    apply_gap_rules(RECOMMENDATION_RULES, doc, NO_RECOMMENDATIONS)
}
