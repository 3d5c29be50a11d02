//! Dense sentence-by-sentence similarity matrix.
//!
//! Row `i`, column `j` holds the similarity between reference sentence `i`
//! and suspect sentence `j`. Scores are stored row-major and never change
//! after construction.

use rayon::prelude::*;

use super::error::ComparisonError;

/// Slack allowed around [-1, 1] for floating point error in cosine scores.
const SCORE_TOLERANCE: f32 = 1e-4;

#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityMatrix {
    rows: usize,
    cols: usize,
    scores: Vec<f32>,
}

impl SimilarityMatrix {
    /// Build a matrix from one `Vec` per reference sentence.
    ///
    /// Every row must have the same length.
    pub fn from_rows(rows: Vec<Vec<f32>>) -> Result<Self, ComparisonError> {
        let row_count = rows.len();
        let cols = rows.first().map_or(0, Vec::len);
        let mut scores = Vec::with_capacity(row_count * cols);

        for row in rows {
            if row.len() != cols {
                return Err(ComparisonError::DimensionMismatch {
                    expected_rows: row_count,
                    expected_cols: cols,
                    rows: row_count,
                    cols: row.len(),
                });
            }
            scores.extend(row);
        }

        Ok(Self {
            rows: row_count,
            cols,
            scores,
        })
    }

    /// Build a matrix with explicit dimensions, useful for empty sides
    /// (e.g. 0 reference sentences against 4 suspect sentences).
    pub fn from_vec(rows: usize, cols: usize, scores: Vec<f32>) -> Result<Self, ComparisonError> {
        if scores.len() != rows * cols {
            return Err(ComparisonError::DimensionMismatch {
                expected_rows: rows,
                expected_cols: cols,
                rows: if cols == 0 { 0 } else { scores.len() / cols },
                cols,
            });
        }
        Ok(Self { rows, cols, scores })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> Option<f32> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.scores.get(row * self.cols + col).copied()
    }

    pub fn row(&self, row: usize) -> &[f32] {
        let start = row * self.cols;
        &self.scores[start..start + self.cols]
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[f32]> {
        (0..self.rows).map(move |i| self.row(i))
    }

    /// Fail with `DimensionMismatch` unless the matrix is `rows x cols`.
    pub fn ensure_shape(&self, rows: usize, cols: usize) -> Result<(), ComparisonError> {
        if self.rows != rows || self.cols != cols {
            return Err(ComparisonError::DimensionMismatch {
                expected_rows: rows,
                expected_cols: cols,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(())
    }

    /// Fail with `InvalidScore` on the first non-finite or out-of-range score.
    pub fn validate_scores(&self) -> Result<(), ComparisonError> {
        self.find_score(|value| !is_valid_score(value))
    }

    /// Fail with `InvalidScore` on the first finite score outside [-1, 1].
    ///
    /// NaN and infinite scores pass; the selector treats their rows as
    /// unmatched.
    pub fn validate_range(&self) -> Result<(), ComparisonError> {
        self.find_score(|value| value.is_finite() && !is_valid_score(value))
    }

    fn find_score(&self, invalid: impl Fn(f32) -> bool) -> Result<(), ComparisonError> {
        for (i, row) in self.iter_rows().enumerate() {
            if let Some((j, &value)) = row.iter().enumerate().find(|&(_, &v)| invalid(v)) {
                return Err(ComparisonError::InvalidScore { row: i, col: j, value });
            }
        }
        Ok(())
    }

    /// Number of cells holding NaN or infinite values.
    pub fn non_finite_count(&self) -> usize {
        self.scores.iter().filter(|s| !s.is_finite()).count()
    }
}

fn is_valid_score(value: f32) -> bool {
    value.is_finite() && (-1.0 - SCORE_TOLERANCE..=1.0 + SCORE_TOLERANCE).contains(&value)
}

/// Cosine similarity of two vectors.
///
/// Returns 0.0 when either vector has zero norm.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> Result<f32, ComparisonError> {
    if a.len() != b.len() {
        return Err(ComparisonError::DimensionMismatch {
            expected_rows: 1,
            expected_cols: a.len(),
            rows: 1,
            cols: b.len(),
        });
    }
    Ok(cosine_with_norms(a, norm(a), b, norm(b)))
}

/// Pairwise cosine similarity of two vector batches.
///
/// Rows are computed in parallel. All vectors across both batches must share
/// one dimension.
pub fn cosine_similarity_matrix(
    vectors_a: &[Vec<f32>],
    vectors_b: &[Vec<f32>],
) -> Result<SimilarityMatrix, ComparisonError> {
    let dim = vectors_a
        .first()
        .or_else(|| vectors_b.first())
        .map_or(0, Vec::len);

    for (batch, vectors) in [vectors_a, vectors_b].into_iter().enumerate() {
        if let Some(bad) = vectors.iter().find(|v| v.len() != dim) {
            return Err(ComparisonError::DimensionMismatch {
                expected_rows: if batch == 0 { vectors_a.len() } else { vectors_b.len() },
                expected_cols: dim,
                rows: vectors.len(),
                cols: bad.len(),
            });
        }
    }

    let norms_b: Vec<f32> = vectors_b.iter().map(|v| norm(v)).collect();

    let scores: Vec<f32> = vectors_a
        .par_iter()
        .flat_map_iter(|a| {
            let norm_a = norm(a);
            vectors_b
                .iter()
                .zip(norms_b.iter())
                .map(move |(b, &norm_b)| cosine_with_norms(a, norm_a, b, norm_b))
        })
        .collect();

    SimilarityMatrix::from_vec(vectors_a.len(), vectors_b.len(), scores)
}

fn norm(v: &[f32]) -> f32 {
    v.iter().map(|x| x * x).sum::<f32>().sqrt()
}

fn cosine_with_norms(a: &[f32], norm_a: f32, b: &[f32], norm_b: f32) -> f32 {
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    let dot: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    dot / (norm_a * norm_b)
}
