//! Aggregate statistics and verdicts for a comparison.

use serde::Serialize;
use strum::{Display, EnumIter};

use super::models::{MatchRecord, SequentialBlock};
use super::select::MatchSelection;

/// Document-level plagiarism tier derived from the plagiarism percentage.
///
/// Lower bounds are inclusive: 50% is `High`, 25% is `Moderate`, 10% is `Low`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Display, EnumIter)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    #[strum(serialize = "minimal risk")]
    Minimal,
    #[strum(serialize = "low risk")]
    Low,
    #[strum(serialize = "moderate risk")]
    Moderate,
    #[strum(serialize = "high risk")]
    High,
}

impl RiskLevel {
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= 50.0 {
            Self::High
        } else if percentage >= 25.0 {
            Self::Moderate
        } else if percentage >= 10.0 {
            Self::Low
        } else {
            Self::Minimal
        }
    }

    /// One-line verdict shown in reports.
    pub fn message(&self) -> &'static str {
        match self {
            Self::High => "Significant plagiarism detected!",
            Self::Moderate => "Substantial similarity found",
            Self::Low => "Some matching content detected",
            Self::Minimal => "Little to no plagiarism detected",
        }
    }
}

/// Severity label for a single accepted match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Display, EnumIter)]
#[serde(rename_all = "snake_case")]
pub enum MatchSeverity {
    #[strum(serialize = "moderate")]
    Moderate,
    #[strum(serialize = "high")]
    High,
    #[strum(serialize = "very high")]
    VeryHigh,
}

impl MatchSeverity {
    pub fn from_score(score: f32) -> Self {
        if score >= 0.90 {
            Self::VeryHigh
        } else if score >= 0.80 {
            Self::High
        } else {
            Self::Moderate
        }
    }
}

/// Summary numbers for one reference/suspect pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonStats {
    /// Whole-document cosine similarity
    pub document_similarity: f32,
    pub matched_reference_count: usize,
    pub total_reference_count: usize,
    pub total_suspect_count: usize,
    /// Share of reference sentences with an accepted match, 0-100
    pub plagiarism_percentage: f64,
    /// Mean accepted match score; `None` when nothing matched
    pub average_match_score: Option<f64>,
    pub sequential_block_count: usize,
}

impl ComparisonStats {
    pub fn compute(
        document_similarity: f32,
        total_reference_count: usize,
        total_suspect_count: usize,
        selection: &MatchSelection,
        blocks: &[SequentialBlock],
    ) -> Self {
        let matched_reference_count = selection.matched_reference_indices.len();

        Self {
            document_similarity,
            matched_reference_count,
            total_reference_count,
            total_suspect_count,
            plagiarism_percentage: plagiarism_percentage(
                matched_reference_count,
                total_reference_count,
            ),
            average_match_score: average_score(&selection.matches),
            sequential_block_count: blocks.len(),
        }
    }

    pub fn risk_level(&self) -> RiskLevel {
        RiskLevel::from_percentage(self.plagiarism_percentage)
    }
}

/// Matched share of the reference document as a percentage; 0 for an empty
/// reference.
pub fn plagiarism_percentage(matched: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    matched as f64 / total as f64 * 100.0
}

/// Mean score over the given matches, or `None` when there are none.
pub fn average_score(matches: &[MatchRecord]) -> Option<f64> {
    if matches.is_empty() {
        return None;
    }
    let total: f64 = matches.iter().map(|m| m.score as f64).sum();
    Some(total / matches.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    fn selection(scores: &[f32]) -> MatchSelection {
        let mut selection = MatchSelection::default();
        for (i, &score) in scores.iter().enumerate() {
            selection
                .matches
                .push(MatchRecord::new(score, "a", "b", i, i));
            selection.matched_reference_indices.insert(i);
        }
        selection
    }

    #[test]
    fn test_risk_level_breakpoints() {
        assert_eq!(RiskLevel::from_percentage(100.0), RiskLevel::High);
        assert_eq!(RiskLevel::from_percentage(50.0), RiskLevel::High);
        assert_eq!(RiskLevel::from_percentage(49.99), RiskLevel::Moderate);
        assert_eq!(RiskLevel::from_percentage(25.0), RiskLevel::Moderate);
        assert_eq!(RiskLevel::from_percentage(24.9), RiskLevel::Low);
        assert_eq!(RiskLevel::from_percentage(10.0), RiskLevel::Low);
        assert_eq!(RiskLevel::from_percentage(9.99), RiskLevel::Minimal);
        assert_eq!(RiskLevel::from_percentage(0.0), RiskLevel::Minimal);
    }

    #[test]
    fn test_risk_level_is_monotonic() {
        let mut previous = RiskLevel::Minimal;
        for step in 0..=1000 {
            let level = RiskLevel::from_percentage(step as f64 / 10.0);
            assert!(level >= previous);
            previous = level;
        }
        assert_eq!(previous, RiskLevel::High);
    }

    #[test]
    fn test_risk_level_labels() {
        let labels: Vec<String> = RiskLevel::iter().map(|r| r.to_string()).collect();
        assert_eq!(
            labels,
            vec!["minimal risk", "low risk", "moderate risk", "high risk"]
        );
        assert_eq!(
            serde_json::to_value(RiskLevel::Moderate).unwrap(),
            serde_json::json!("moderate")
        );
    }

    #[test]
    fn test_match_severity() {
        assert_eq!(MatchSeverity::from_score(0.95), MatchSeverity::VeryHigh);
        assert_eq!(MatchSeverity::from_score(0.90), MatchSeverity::VeryHigh);
        assert_eq!(MatchSeverity::from_score(0.85), MatchSeverity::High);
        assert_eq!(MatchSeverity::from_score(0.80), MatchSeverity::High);
        assert_eq!(MatchSeverity::from_score(0.75), MatchSeverity::Moderate);
        let labels: Vec<String> = MatchSeverity::iter().map(|s| s.to_string()).collect();
        assert_eq!(labels, vec!["moderate", "high", "very high"]);
    }

    #[test]
    fn test_stats_compute() {
        let selection = selection(&[0.9, 0.8, 0.7]);
        let stats = ComparisonStats::compute(0.88, 6, 4, &selection, &[]);

        assert_eq!(stats.matched_reference_count, 3);
        assert_eq!(stats.total_reference_count, 6);
        assert_eq!(stats.total_suspect_count, 4);
        assert!((stats.plagiarism_percentage - 50.0).abs() < 1e-9);
        assert!((stats.average_match_score.unwrap() - 0.8).abs() < 1e-6);
        assert_eq!(stats.sequential_block_count, 0);
        assert_eq!(stats.risk_level(), RiskLevel::High);
    }

    #[test]
    fn test_stats_empty_reference() {
        let stats = ComparisonStats::compute(0.0, 0, 3, &MatchSelection::default(), &[]);

        assert_eq!(stats.plagiarism_percentage, 0.0);
        assert_eq!(stats.matched_reference_count, 0);
        assert_eq!(stats.average_match_score, None);
        assert_eq!(stats.risk_level(), RiskLevel::Minimal);
    }

    #[test]
    fn test_average_score_absent_without_matches() {
        assert_eq!(average_score(&[]), None);
        let json = serde_json::to_value(ComparisonStats::compute(
            0.1,
            2,
            2,
            &MatchSelection::default(),
            &[],
        ))
        .unwrap();
        assert!(json["average_match_score"].is_null());
    }
}
