//! Property-based tests for analysis-engine
//!
//! Exercises the rule families with generated business-plan text using proptest.

use analysis_engine::patterns::{NO_FEASIBILITY_ISSUES, NO_RECOMMENDATIONS};
use analysis_engine::{evaluate, AnalysisEngine};
use proptest::prelude::*;
use shared_types::Rating;

// ============================================================
// Strategies
// ============================================================

/// Words that move the scores, mixed with neutral filler
fn plan_word() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("kubernetes".to_string()),
        Just("Serverless".to_string()),
        Just("expand".to_string()),
        Just("GLOBAL".to_string()),
        Just("scale".to_string()),
        Just("terraform".to_string()),
        Just("bottleneck".to_string()),
        Just("financial".to_string()),
        Just("market".to_string()),
        Just("research".to_string()),
        Just("$250".to_string()),
        Just("unique".to_string()),
        Just("like".to_string()),
        Just("similar to".to_string()),
        Just("competitors".to_string()),
        "[A-Z][a-z]{2,8}",
        "[a-z]{1,10}",
        Just(".".to_string()),
    ]
}

fn plan_text() -> impl Strategy<Value = String> {
    prop::collection::vec(plan_word(), 0..60).prop_map(|words| words.join(" "))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn rating_is_a_function_of_total(text in plan_text()) {
        let scalability = evaluate(&text).scalability;
        let total = scalability.architecture_score
            + scalability.growth_potential
            + scalability.automation_level
            + scalability.identified_limitations;

        prop_assert_eq!(scalability.score, total);
        let expected = if total > 5 {
            Rating::High
        } else if total > 2 {
            Rating::Medium
        } else {
            Rating::Low
        };
        prop_assert_eq!(scalability.rating, expected);
    }

    #[test]
    fn competitors_are_capped_and_distinct(text in plan_text()) {
        let competitors = evaluate(&text).market.competitors;
        prop_assert!(competitors.len() <= 3);

        let mut unique = competitors.clone();
        unique.sort();
        unique.dedup();
        prop_assert_eq!(unique.len(), competitors.len());
    }

    #[test]
    fn competitor_trigger_ignores_case(upper in any::<bool>(), name in "[A-Z][a-z]{2,8}") {
        let trigger = if upper { "SIMILAR TO" } else { "similar to" };
        let text = format!("{} {}", trigger, name);
        prop_assert_eq!(evaluate(&text).market.competitors, vec![name]);
    }

    #[test]
    fn feasibility_never_empty(text in plan_text()) {
        let issues = evaluate(&text).feasibility_issues;
        prop_assert!(!issues.is_empty());

        let lower = text.to_lowercase();
        let financial_gap = lower.contains("financial") && !text.contains("$2");
        let market_gap = lower.contains("market")
            && !(lower.contains("research") || lower.contains("analysis"));
        let has_default = issues.iter().any(|i| i == NO_FEASIBILITY_ISSUES);
        prop_assert_eq!(has_default, !financial_gap && !market_gap);
    }

    #[test]
    fn recommendations_never_empty(text in plan_text()) {
        let recommendations = evaluate(&text).recommendations;
        prop_assert!(!recommendations.is_empty());
        if recommendations.iter().any(|r| r == NO_RECOMMENDATIONS) {
            prop_assert_eq!(recommendations.len(), 1);
        }
    }

    #[test]
    fn evaluation_is_idempotent(text in plan_text()) {
        prop_assert_eq!(evaluate(&text), evaluate(&text));
    }

    #[test]
    fn unsupported_uploads_always_ask_for_valid_document(
        stem in "[a-z]{1,12}",
        ext in prop_oneof![Just("pdf"), Just("txt"), Just("doc"), Just("odt")],
        bytes in prop::collection::vec(any::<u8>(), 0..256),
    ) {
        let engine = AnalysisEngine::new();
        let report = engine.analyze_document(&format!("{}.{}", stem, ext), &bytes);

        prop_assert_eq!(report.recommendations, vec!["Upload a valid document".to_string()]);
        prop_assert_eq!(report.scalability_analysis.score, 0);
    }

    #[test]
    fn random_docx_bytes_never_escape_the_boundary(bytes in prop::collection::vec(any::<u8>(), 0..512)) {
        let engine = AnalysisEngine::new();
        let report = engine.analyze_document("upload.docx", &bytes);
        prop_assert!(!report.recommendations.is_empty());
        prop_assert!(!report.feasibility_issues.is_empty());
    }
}
