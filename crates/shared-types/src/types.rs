/// Coarse scalability classification derived from the keyword total
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub enum Rating {
    High,
    Medium,
    Low,
    #[default]
    #[serde(rename = "Not assessed")]
    NotAssessed,
}

impl Rating {
    /// High above 5, Medium above 2, Low otherwise
    pub fn from_total(total: u32) -> Self {
        if total > 5 {
            Rating::High
        } else if total > 2 {
            Rating::Medium
        } else {
            Rating::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Rating::High => "High",
            Rating::Medium => "Medium",
            Rating::Low => "Low",
            Rating::NotAssessed => "Not assessed",
        }
    }
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Overall verdict derived from the viability score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub enum ViabilityStatus {
    Strong,
    Promising,
    #[serde(rename = "Needs Improvement")]
    NeedsImprovement,
    #[default]
    #[serde(rename = "Not assessed")]
    NotAssessed,
}

impl ViabilityStatus {
    /// Strong at 80 and above, Promising at 60 and above
    pub fn from_score(score: u32) -> Self {
        if score >= 80 {
            ViabilityStatus::Strong
        } else if score >= 60 {
            ViabilityStatus::Promising
        } else {
            ViabilityStatus::NeedsImprovement
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ViabilityStatus::Strong => "Strong",
            ViabilityStatus::Promising => "Promising",
            ViabilityStatus::NeedsImprovement => "Needs Improvement",
            ViabilityStatus::NotAssessed => "Not assessed",
        }
    }
}

impl std::fmt::Display for ViabilityStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub struct ScalabilityAnalysis {
    pub score: u32, // Sum of the four category counts
    pub rating: Rating,
    pub architecture_score: u32,
    pub growth_potential: u32,
    pub automation_level: u32,
    pub identified_limitations: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub struct MarketValidation {
    pub existing_usage: bool,
    pub competitors: Vec<String>, // At most 3, order not significant
    pub differentiators: u32,
    pub case_studies: bool,
}

/// Scorecard returned for one uploaded document
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AnalysisReport {
    pub filename: String,
    pub summary: String,
    pub key_findings: Vec<String>,
    pub scalability_analysis: ScalabilityAnalysis,
    pub market_validation: MarketValidation,
    pub feasibility_issues: Vec<String>,
    pub recommendations: Vec<String>,
    pub viability_score: u32,
    pub viability_status: ViabilityStatus,
}

impl AnalysisReport {
    /// Report carrying only the placeholder values.
    ///
    /// Every list is allocated here, so reports never share default storage.
    pub fn new(filename: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            summary: "No summary available".to_string(),
            key_findings: vec!["No key findings identified".to_string()],
            scalability_analysis: ScalabilityAnalysis::default(),
            market_validation: MarketValidation::default(),
            feasibility_issues: vec!["No feasibility issues detected".to_string()],
            recommendations: vec!["No specific recommendations".to_string()],
            viability_score: 0,
            viability_status: ViabilityStatus::NotAssessed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_rating_thresholds_are_strict() {
        assert_eq!(Rating::from_total(0), Rating::Low);
        assert_eq!(Rating::from_total(2), Rating::Low);
        assert_eq!(Rating::from_total(3), Rating::Medium);
        assert_eq!(Rating::from_total(5), Rating::Medium);
        assert_eq!(Rating::from_total(6), Rating::High);
    }

    #[test]
    fn test_viability_thresholds_are_inclusive() {
        assert_eq!(ViabilityStatus::from_score(59), ViabilityStatus::NeedsImprovement);
        assert_eq!(ViabilityStatus::from_score(60), ViabilityStatus::Promising);
        assert_eq!(ViabilityStatus::from_score(79), ViabilityStatus::Promising);
        assert_eq!(ViabilityStatus::from_score(80), ViabilityStatus::Strong);
    }

    #[test]
    fn test_default_report_serializes_with_display_names() {
        let report = AnalysisReport::new("plan.docx");
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["filename"], "plan.docx");
        assert_eq!(json["summary"], "No summary available");
        assert_eq!(json["scalability_analysis"]["rating"], "Not assessed");
        assert_eq!(json["scalability_analysis"]["architecture_score"], 0);
        assert_eq!(json["market_validation"]["competitors"], serde_json::json!([]));
        assert_eq!(json["viability_status"], "Not assessed");
    }

    #[test]
    fn test_status_names_round_trip_through_serde() {
        let json = serde_json::to_string(&ViabilityStatus::NeedsImprovement).unwrap();
        assert_eq!(json, "\"Needs Improvement\"");
        let back: ViabilityStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ViabilityStatus::NeedsImprovement);
    }

    #[test]
    fn test_default_lists_are_not_shared_between_reports() {
        let mut first = AnalysisReport::new("a.docx");
        let second = AnalysisReport::new("b.docx");
        first.recommendations.push("Extra".to_string());

        assert_eq!(first.recommendations.len(), 2);
        assert_eq!(second.recommendations, vec!["No specific recommendations".to_string()]);
    }
}
