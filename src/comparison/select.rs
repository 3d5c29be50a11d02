//! Best-match selection from reference sentences into the suspect document.
//!
//! Each reference sentence is paired with its single highest-scoring suspect
//! sentence; the pair is kept only when the score clears the threshold.
//! Matching is one-directional: suspect sentences are never matched back.

use std::collections::BTreeSet;

use super::error::ComparisonError;
use super::matrix::SimilarityMatrix;
use super::models::MatchRecord;

/// Accepted matches and the reference positions they cover.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MatchSelection {
    /// Accepted matches in reference order
    pub matches: Vec<MatchRecord>,

    /// Reference positions that found an accepted match
    pub matched_reference_indices: BTreeSet<usize>,
}

/// Column of the highest score in a row.
///
/// Ties go to the lowest column. A row holding any NaN or infinite score has
/// no best column, so it never produces a match.
pub fn best_column(row: &[f32]) -> Option<(usize, f32)> {
    let mut best: Option<(usize, f32)> = None;
    for (j, &score) in row.iter().enumerate() {
        if !score.is_finite() {
            return None;
        }
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((j, score)),
        }
    }
    best
}

/// Select the best suspect match for every reference sentence.
///
/// # Arguments
/// * `matrix` - `reference.len() x suspect.len()` similarity scores
/// * `reference` - Reference document sentences
/// * `suspect` - Suspect document sentences
/// * `threshold` - Minimum score to accept a match (inclusive)
///
/// # Returns
/// The accepted matches, ordered by reference index, or `DimensionMismatch`
/// when the matrix shape disagrees with the sentence counts.
pub fn select_matches(
    matrix: &SimilarityMatrix,
    reference: &[String],
    suspect: &[String],
    threshold: f32,
) -> Result<MatchSelection, ComparisonError> {
    matrix.ensure_shape(reference.len(), suspect.len())?;

    let mut selection = MatchSelection::default();

    for (i, row) in matrix.iter_rows().enumerate() {
        let Some((j, score)) = best_column(row) else {
            continue;
        };

        if score >= threshold {
            selection.matches.push(MatchRecord::new(
                score,
                reference[i].as_str(),
                suspect[j].as_str(),
                i,
                j,
            ));
            selection.matched_reference_indices.insert(i);
        }
    }

    log::debug!(
        "Selected {} of {} reference sentences at threshold {}",
        selection.matches.len(),
        reference.len(),
        threshold
    );

    Ok(selection)
}
