//! Keyword tables and regex patterns for the business-plan rules
//!
//! Every rule the engine applies is declared here as data, so the tables can
//! be listed and tested without going through the evaluator.

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

/// The four scalability signal groups
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScalabilityCategory {
    Architecture,
    Growth,
    Automation,
    Limitations,
}

/// Scalability keywords per category, matched as lower-case substrings
pub const SCALABILITY_KEYWORDS: &[(ScalabilityCategory, &[&str])] = &[
    (
        ScalabilityCategory::Architecture,
        &["microservices", "kubernetes", "serverless"],
    ),
    (ScalabilityCategory::Growth, &["expand", "global", "scale"]),
    (
        ScalabilityCategory::Automation,
        &["ci/cd", "terraform", "ansible"],
    ),
    (
        ScalabilityCategory::Limitations,
        &["bottleneck", "constraint", "limit"],
    ),
];

/// Phrases showing the product is already in use
pub const EXISTING_USAGE_PHRASES: &[&str] = &[
    "used by",
    "deployed at",
    "implemented with",
    "customers include",
];

/// Phrases showing published evidence of results
pub const CASE_STUDY_PHRASES: &[&str] = &["case study", "success story", "testimonial"];

/// Words counted as differentiator language when followed by whitespace
pub const DIFFERENTIATOR_WORDS: &[&str] = &["unique", "different", "only", "exclusive"];

/// Competitor names reported in the market section
pub const MAX_REPORTED_COMPETITORS: usize = 3;

lazy_static! {
    /// Trigger phrase (any case) followed by a capitalized word, captured.
    /// Multi-word names only yield their first word.
    pub static ref COMPETITOR_PATTERN: Regex =
        Regex::new(r"(?i:similar to|like|competitors?|alternatives?)\s([A-Z]\w+)").unwrap();

    /// Differentiator word followed by whitespace, run over lower-case text
    pub static ref DIFFERENTIATOR_PATTERN: Regex =
        Regex::new(&format!(r"({})\s", DIFFERENTIATOR_WORDS.join("|"))).unwrap();

    /// A dollar sign followed by digits
    pub static ref DOLLAR_AMOUNT_PATTERN: Regex = Regex::new(r"\$\d+").unwrap();
}

/// Evidence that suppresses a gap rule when present
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Evidence {
    /// Any of these lower-case substrings
    AnyKeyword(&'static [&'static str]),
    /// A `$` amount such as `$250000`
    DollarAmount,
}

impl Evidence {
    pub fn is_present(&self, text_lower: &str) -> bool {
        match self {
            Evidence::AnyKeyword(keywords) => contains_any(text_lower, keywords),
            Evidence::DollarAmount => DOLLAR_AMOUNT_PATTERN.is_match(text_lower),
        }
    }

    pub fn describe(&self) -> String {
        match self {
            Evidence::AnyKeyword(keywords) => keywords.join(" | "),
            Evidence::DollarAmount => "dollar amount ($ followed by digits)".to_string(),
        }
    }
}

/// A topic mentioned without its supporting evidence produces `message`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GapRule {
    pub trigger: &'static str,
    pub unless: Evidence,
    pub message: &'static str,
}

impl GapRule {
    pub fn fires(&self, text_lower: &str) -> bool {
        text_lower.contains(self.trigger) && !self.unless.is_present(text_lower)
    }
}

pub const FEASIBILITY_RULES: &[GapRule] = &[
    GapRule {
        trigger: "financial",
        unless: Evidence::DollarAmount,
        message: "Missing specific financial numbers",
    },
    GapRule {
        trigger: "market",
        unless: Evidence::AnyKeyword(&["research", "analysis"]),
        message: "Missing market research/analysis",
    },
];

/// Emitted when no feasibility rule fires
pub const NO_FEASIBILITY_ISSUES: &str = "No major feasibility issues detected";

pub const RECOMMENDATION_RULES: &[GapRule] = &[
    GapRule {
        trigger: "scale",
        unless: Evidence::AnyKeyword(&["test", "load"]),
        message: "Add load testing documentation",
    },
    GapRule {
        trigger: "competitor",
        unless: Evidence::AnyKeyword(&["compare", "differentiat"]),
        message: "Include competitor comparison",
    },
];

/// Emitted when no recommendation rule fires
pub const NO_RECOMMENDATIONS: &str = "Document appears comprehensive";

/// Total non-overlapping occurrences of every keyword.
/// Overlapping keywords are each counted.
pub fn count_keywords(text_lower: &str, keywords: &[&str]) -> u32 {
    keywords
        .iter()
        .map(|keyword| text_lower.matches(keyword).count() as u32)
        .fold(0, u32::saturating_add)
}

pub fn contains_any(text_lower: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| text_lower.contains(keyword))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_tables_are_lower_case() {
        let all = SCALABILITY_KEYWORDS
            .iter()
            .flat_map(|(_, keywords)| keywords.iter())
            .chain(EXISTING_USAGE_PHRASES)
            .chain(CASE_STUDY_PHRASES)
            .chain(DIFFERENTIATOR_WORDS);
        for keyword in all {
            assert_eq!(*keyword, keyword.to_lowercase(), "{} must be lower-case", keyword);
        }
        for rule in FEASIBILITY_RULES.iter().chain(RECOMMENDATION_RULES) {
            assert_eq!(rule.trigger, rule.trigger.to_lowercase());
        }
    }

    #[test]
    fn test_every_category_has_keywords() {
        assert_eq!(SCALABILITY_KEYWORDS.len(), 4);
        assert!(SCALABILITY_KEYWORDS.iter().all(|(_, k)| !k.is_empty()));
    }

    #[test]
    fn test_count_keywords_is_substring_based() {
        // "limit" also matches inside "limitations" and "limited"
        assert_eq!(count_keywords("limited limitations", &["limit"]), 2);
        assert_eq!(count_keywords("scale scaled", &["scale"]), 2);
        assert_eq!(count_keywords("nothing here", &["kubernetes"]), 0);
    }

    #[test]
    fn test_overlapping_keywords_are_not_deduplicated() {
        assert_eq!(count_keywords("microservices", &["microservices", "services"]), 2);
    }

    #[test]
    fn test_differentiator_requires_trailing_whitespace() {
        assert_eq!(DIFFERENTIATOR_PATTERN.find_iter("the only one").count(), 1);
        assert_eq!(DIFFERENTIATOR_PATTERN.find_iter("we are unique.").count(), 0);
    }

    #[test]
    fn test_dollar_pattern() {
        assert!(DOLLAR_AMOUNT_PATTERN.is_match("raise $500000 in seed"));
        assert!(!DOLLAR_AMOUNT_PATTERN.is_match("raise $ 500000"));
        assert!(!DOLLAR_AMOUNT_PATTERN.is_match("raise 500000 usd"));
    }

    #[test]
    fn test_competitor_trigger_ignores_case_but_name_must_be_capitalized() {
        let caps: Vec<&str> = COMPETITOR_PATTERN
            .captures_iter("SIMILAR TO Acme, like the others, Competitors Globex")
            .map(|c| c.get(1).unwrap().as_str())
            .collect();
        assert_eq!(caps, vec!["Acme", "Globex"]);
    }

    #[test]
    fn test_gap_rule_fires_only_without_evidence() {
        let rule = FEASIBILITY_RULES[0];
        assert!(rule.fires("financial plan pending"));
        assert!(!rule.fires("financial plan: $120 per seat"));
        assert!(!rule.fires("no numbers here"));
    }
}
