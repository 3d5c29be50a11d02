//! Error type for the comparison core.

/// Errors raised by the alignment core.
///
/// These are caller-programming errors or invalid input data; nothing here is
/// transient, so the core never retries.
#[derive(Debug, Clone, PartialEq)]
pub enum ComparisonError {
    /// Similarity matrix or vector batch shape disagrees with its inputs
    DimensionMismatch {
        expected_rows: usize,
        expected_cols: usize,
        rows: usize,
        cols: usize,
    },

    /// Non-finite or out-of-range similarity score
    InvalidScore { row: usize, col: usize, value: f32 },

    /// Rejected configuration value
    InvalidConfig(String),
}

impl std::fmt::Display for ComparisonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DimensionMismatch {
                expected_rows,
                expected_cols,
                rows,
                cols,
            } => write!(
                f,
                "Dimension mismatch: expected {}x{}, got {}x{}",
                expected_rows, expected_cols, rows, cols
            ),
            Self::InvalidScore { row, col, value } => {
                write!(f, "Invalid similarity score {} at ({}, {})", value, row, col)
            }
            Self::InvalidConfig(msg) => write!(f, "Invalid configuration: {}", msg),
        }
    }
}

impl std::error::Error for ComparisonError {}
