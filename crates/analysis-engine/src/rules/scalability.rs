// Scalability signal scoring
use shared_types::{Rating, ScalabilityAnalysis};

use super::DocumentText;
use crate::patterns::{count_keywords, ScalabilityCategory, SCALABILITY_KEYWORDS};

/// Counts keyword occurrences per category and rates the total.
///
/// Counting is by substring over the lower-cased text, so "limit" is also
/// found inside "unlimited". The rating uses strict thresholds: a total of
/// exactly 5 is Medium.
pub fn score_scalability(doc: &DocumentText) -> ScalabilityAnalysis {
    let mut analysis = ScalabilityAnalysis::default();

    for (category, keywords) in SCALABILITY_KEYWORDS {
        let count = count_keywords(&doc.lower, keywords);
        let slot = match category {
            ScalabilityCategory::Architecture => &mut analysis.architecture_score,
            ScalabilityCategory::Growth => &mut analysis.growth_potential,
            ScalabilityCategory::Automation => &mut analysis.automation_level,
            ScalabilityCategory::Limitations => &mut analysis.identified_limitations,
        };
        *slot = slot.saturating_add(count);
    }

    analysis.score = [
        analysis.architecture_score,
        analysis.growth_potential,
        analysis.automation_level,
        analysis.identified_limitations,
    ]
    .into_iter()
    .fold(0, u32::saturating_add);
    analysis.rating = Rating::from_total(analysis.score);

    analysis
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn score(text: &str) -> ScalabilityAnalysis {
        score_scalability(&DocumentText::new(text))
    }

    #[test]
    fn test_counts_each_category() {
        let result = score(
            "Microservices on Kubernetes. We will expand and scale. \
             Terraform and CI/CD pipelines. One bottleneck remains.",
        );
        assert_eq!(result.architecture_score, 2);
        assert_eq!(result.growth_potential, 2);
        assert_eq!(result.automation_level, 2);
        assert_eq!(result.identified_limitations, 1);
        assert_eq!(result.score, 7);
        assert_eq!(result.rating, Rating::High);
    }

    #[test]
    fn test_total_of_five_is_medium() {
        let result = score("scale scale scale scale scale");
        assert_eq!(result.score, 5);
        assert_eq!(result.rating, Rating::Medium);
    }

    #[test]
    fn test_total_of_two_is_low() {
        let result = score("Serverless functions with a global footprint");
        assert_eq!(result.score, 2);
        assert_eq!(result.rating, Rating::Low);
    }

    #[test]
    fn test_no_keywords_is_low() {
        let result = score("A bakery on Main Street.");
        assert_eq!(result.score, 0);
        assert_eq!(result.rating, Rating::Low);
    }

    #[test]
    fn test_substring_matches_count() {
        // "scaled" contains "scale", "unlimited" contains "limit"
        let result = score("Scaled to unlimited users");
        assert_eq!(result.growth_potential, 1);
        assert_eq!(result.identified_limitations, 1);
    }
}
