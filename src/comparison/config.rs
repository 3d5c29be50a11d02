//! Tunable parameters for the comparison pipeline.

use serde::Serialize;

use super::error::ComparisonError;
use super::sequence::{DEFAULT_MAX_INDEX_GAP, DEFAULT_MIN_RUN_LENGTH};

/// Default minimum similarity for accepting a sentence match.
pub const DEFAULT_MATCH_THRESHOLD: f32 = 0.70;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonConfig {
    /// Minimum score for a sentence pair to count as a match (inclusive)
    pub match_threshold: f32,

    /// Runs with fewer matches are not reported as sequential blocks
    pub min_run_length: usize,

    /// Largest step in either document between consecutive block members
    pub max_index_gap: usize,

    /// Reject NaN or out-of-range scores instead of treating them as no-match
    pub strict_scores: bool,
}

impl Default for ComparisonConfig {
    fn default() -> Self {
        Self {
            match_threshold: DEFAULT_MATCH_THRESHOLD,
            min_run_length: DEFAULT_MIN_RUN_LENGTH,
            max_index_gap: DEFAULT_MAX_INDEX_GAP,
            strict_scores: false,
        }
    }
}

impl ComparisonConfig {
    pub fn validate(&self) -> Result<(), ComparisonError> {
        if !self.match_threshold.is_finite() {
            return Err(ComparisonError::InvalidConfig(format!(
                "match threshold must be finite, got {}",
                self.match_threshold
            )));
        }
        if self.min_run_length == 0 {
            return Err(ComparisonError::InvalidConfig(
                "minimum run length must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// How much of a comparison the text report prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReportLimits {
    pub max_blocks: usize,
    pub max_block_sentences: usize,
    pub max_matches: usize,
}

impl Default for ReportLimits {
    fn default() -> Self {
        Self {
            max_blocks: 5,
            max_block_sentences: 3,
            max_matches: 20,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ComparisonConfig::default();
        assert_eq!(config.match_threshold, 0.70);
        assert_eq!(config.min_run_length, 3);
        assert_eq!(config.max_index_gap, 3);
        assert!(!config.strict_scores);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_nan_threshold() {
        let config = ComparisonConfig {
            match_threshold: f32::NAN,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ComparisonError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_validate_rejects_zero_run_length() {
        let config = ComparisonConfig {
            min_run_length: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_default_report_limits() {
        let limits = ReportLimits::default();
        assert_eq!((limits.max_blocks, limits.max_block_sentences, limits.max_matches), (5, 3, 20));
    }
}
