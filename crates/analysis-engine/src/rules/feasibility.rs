// Feasibility gaps: topics raised without supporting detail
use super::{apply_gap_rules, DocumentText};
use crate::patterns::{FEASIBILITY_RULES, NO_FEASIBILITY_ISSUES};

/// Never empty: holds [`NO_FEASIBILITY_ISSUES`] when no rule fires
pub fn check_feasibility(doc: &DocumentText) -> Vec<String> {
    apply_gap_rules(FEASIBILITY_RULES, doc, NO_FEASIBILITY_ISSUES)
}

/// True when the list carries at least one real issue
pub fn has_feasibility_issues(issues: &[String]) -> bool {
    !issues.is_empty() && !issues.iter().any(|issue| issue == NO_FEASIBILITY_ISSUES)
}
