//! Document Comparison Engine
//!
//! This module compares a reference document with a suspect document sentence
//! by sentence. It finds the best suspect match for each reference sentence,
//! measures how much of the reference is covered, and detects sequential
//! blocks: runs of matches that appear in the same order in both documents.

pub mod config;
pub mod embedding;
mod error;
pub mod matrix;
mod models;
pub mod segment;
pub mod select;
pub mod sequence;
pub mod stats;

use std::sync::Arc;

use anyhow::{Context, Result};

pub use config::{ComparisonConfig, ReportLimits};
pub use embedding::{Embedder, HashingEmbedder};
pub use error::ComparisonError;
pub use matrix::{SimilarityMatrix, cosine_similarity, cosine_similarity_matrix};
pub use models::{MatchRecord, SequentialBlock};
pub use segment::split_sentences;
pub use select::{MatchSelection, select_matches};
pub use sequence::detect_sequential_blocks;
pub use stats::{ComparisonStats, MatchSeverity, RiskLevel};

/// Result of comparing one reference document with one suspect document.
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    pub reference_sentences: Vec<String>,
    pub suspect_sentences: Vec<String>,

    /// Accepted matches, highest score first; equal scores keep reference order
    pub matches: Vec<MatchRecord>,

    pub sequential_blocks: Vec<SequentialBlock>,
    pub stats: ComparisonStats,
    pub risk_level: RiskLevel,
}

/// Run match selection, block detection and aggregation over a precomputed
/// similarity matrix.
///
/// # Arguments
/// * `matrix` - `reference.len() x suspect.len()` sentence similarities
/// * `reference` - Reference sentences
/// * `suspect` - Suspect sentences
/// * `document_similarity` - Whole-document similarity, passed through to the stats
/// * `config` - Threshold and block detection parameters
pub fn align_documents(
    matrix: &SimilarityMatrix,
    reference: Vec<String>,
    suspect: Vec<String>,
    document_similarity: f32,
    config: &ComparisonConfig,
) -> Result<Comparison, ComparisonError> {
    config.validate()?;
    matrix.ensure_shape(reference.len(), suspect.len())?;

    if config.strict_scores {
        matrix.validate_scores()?;
    } else {
        matrix.validate_range()?;
        let non_finite = matrix.non_finite_count();
        if non_finite > 0 {
            log::warn!(
                "Similarity matrix has {} non-finite scores; their rows are left unmatched",
                non_finite
            );
        }
    }

    let selection = select_matches(matrix, &reference, &suspect, config.match_threshold)?;
    let sequential_blocks = detect_sequential_blocks(
        &selection.matches,
        config.min_run_length,
        config.max_index_gap,
    );

    let stats = ComparisonStats::compute(
        document_similarity,
        reference.len(),
        suspect.len(),
        &selection,
        &sequential_blocks,
    );
    let risk_level = stats.risk_level();

    let mut matches = selection.matches;
    matches.sort_by(|a, b| b.score.total_cmp(&a.score));

    Ok(Comparison {
        reference_sentences: reference,
        suspect_sentences: suspect,
        matches,
        sequential_blocks,
        stats,
        risk_level,
    })
}

/// Comparison engine that owns the configuration and the embedding provider.
///
/// Each call is independent; the engine holds no per-comparison state and can
/// be shared across threads.
#[derive(Debug, Clone)]
pub struct ComparisonEngine {
    config: ComparisonConfig,
    embedder: Arc<dyn Embedder>,
}

impl ComparisonEngine {
    /// Create an engine, rejecting invalid configuration up front.
    pub fn new(config: ComparisonConfig, embedder: Arc<dyn Embedder>) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, embedder })
    }

    /// Engine with default configuration and the built-in hashing embedder.
    pub fn with_defaults() -> Self {
        Self {
            config: ComparisonConfig::default(),
            embedder: Arc::new(HashingEmbedder::default()),
        }
    }

    pub fn config(&self) -> &ComparisonConfig {
        &self.config
    }

    /// Compare two raw documents.
    ///
    /// This runs the full pipeline:
    /// 1. Split both documents into sentences
    /// 2. Embed the whole documents for the document-level similarity
    /// 3. Embed every sentence and build the similarity matrix
    /// 4. Select matches, detect sequential blocks and aggregate
    pub fn compare(&self, reference_text: &str, suspect_text: &str) -> Result<Comparison> {
        let reference = split_sentences(reference_text);
        let suspect = split_sentences(suspect_text);
        log::debug!(
            "Split documents into {} reference and {} suspect sentences",
            reference.len(),
            suspect.len()
        );

        let document_similarity = self.document_similarity(reference_text, suspect_text)?;
        self.compare_segmented(reference, suspect, document_similarity)
    }

    /// Compare two documents that are already split into sentences.
    pub fn compare_sentences(
        &self,
        reference: Vec<String>,
        suspect: Vec<String>,
    ) -> Result<Comparison> {
        let document_similarity =
            self.document_similarity(&reference.join("\n"), &suspect.join("\n"))?;
        self.compare_segmented(reference, suspect, document_similarity)
    }

    /// Cosine similarity of the two whole-document embeddings.
    pub fn document_similarity(&self, reference_text: &str, suspect_text: &str) -> Result<f32> {
        let reference = self.embedder.embed(reference_text);
        let suspect = self.embedder.embed(suspect_text);
        cosine_similarity(&reference, &suspect).context("Failed to compare document embeddings")
    }

    fn compare_segmented(
        &self,
        reference: Vec<String>,
        suspect: Vec<String>,
        document_similarity: f32,
    ) -> Result<Comparison> {
        let reference_vectors = self.embedder.embed_batch(&reference);
        let suspect_vectors = self.embedder.embed_batch(&suspect);

        let matrix = cosine_similarity_matrix(&reference_vectors, &suspect_vectors)
            .context("Failed to build sentence similarity matrix")?;

        let comparison =
            align_documents(&matrix, reference, suspect, document_similarity, &self.config)?;

        log::debug!(
            "Matched {}/{} reference sentences, {} sequential blocks",
            comparison.stats.matched_reference_count,
            comparison.stats.total_reference_count,
            comparison.stats.sequential_block_count
        );

        Ok(comparison)
    }
}
