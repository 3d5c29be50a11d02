//! Core data structures for document comparison.

use serde::Serialize;
use std::ops::RangeInclusive;

/// One reference sentence's accepted best match in the suspect document.
///
/// Indices are 0-based positions in the sentence sequences; reports render
/// them 1-based.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchRecord {
    /// Similarity between the two sentences
    pub score: f32,

    /// Text of the reference sentence
    pub reference_text: String,

    /// Text of the best-matching suspect sentence
    pub suspect_text: String,

    /// Position of the sentence in the reference document
    pub reference_index: usize,

    /// Position of the sentence in the suspect document
    pub suspect_index: usize,
}

impl MatchRecord {
    pub fn new(
        score: f32,
        reference_text: impl Into<String>,
        suspect_text: impl Into<String>,
        reference_index: usize,
        suspect_index: usize,
    ) -> Self {
        Self {
            score,
            reference_text: reference_text.into(),
            suspect_text: suspect_text.into(),
            reference_index,
            suspect_index,
        }
    }
}

/// A run of matches that advance in the same order through both documents.
///
/// Members are sorted by `reference_index`, and `suspect_index` strictly
/// increases from one member to the next.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SequentialBlock {
    matches: Vec<MatchRecord>,
}

impl SequentialBlock {
    pub(crate) fn new(matches: Vec<MatchRecord>) -> Self {
        debug_assert!(!matches.is_empty());
        Self { matches }
    }

    pub fn matches(&self) -> &[MatchRecord] {
        &self.matches
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Mean score of the block members.
    pub fn average_score(&self) -> f64 {
        if self.matches.is_empty() {
            return 0.0;
        }
        let total: f64 = self.matches.iter().map(|m| m.score as f64).sum();
        total / self.matches.len() as f64
    }

    /// Reference positions covered by the block, first to last member.
    pub fn reference_span(&self) -> Option<RangeInclusive<usize>> {
        let first = self.matches.first()?;
        let last = self.matches.last()?;
        Some(first.reference_index..=last.reference_index)
    }

    /// Suspect positions covered by the block, first to last member.
    pub fn suspect_span(&self) -> Option<RangeInclusive<usize>> {
        let first = self.matches.first()?;
        let last = self.matches.last()?;
        Some(first.suspect_index..=last.suspect_index)
    }
}
