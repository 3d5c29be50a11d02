use serde::Serialize;

use super::DocumentInfo;
use crate::comparison::{
    Comparison, ComparisonConfig, ComparisonStats, MatchRecord, MatchSeverity, RiskLevel,
    SequentialBlock,
};

pub const OUTPUT_FORMAT_VERSION: &str = "1.0.0";

#[derive(Serialize, Debug)]
pub struct Output {
    pub headers: Vec<Header>,
    pub comparisons: Vec<ComparisonReport>,
}

#[derive(Serialize, Debug)]
pub struct Header {
    pub tool_version: String,
    pub start_timestamp: String,
    pub end_timestamp: String,
    pub duration: f64,
    pub options: ComparisonConfig,
    pub errors: Vec<String>,
    pub output_format_version: String,
}

/// Everything reported about one reference/suspect pair.
#[derive(Serialize, Debug, Clone)]
pub struct ComparisonReport {
    pub reference: DocumentInfo,
    pub suspect: DocumentInfo,
    pub reference_sentence_count: usize,
    pub suspect_sentence_count: usize,
    pub summary: ComparisonStats,
    pub verdict: Verdict,
    pub sequential_blocks: Vec<BlockReport>,
    /// Accepted matches, highest score first
    pub matches: Vec<MatchReport>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Verdict {
    pub risk_level: RiskLevel,
    pub message: String,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct BlockReport {
    pub length: usize,
    pub average_score: f64,
    pub matches: Vec<MatchReport>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct MatchReport {
    #[serde(flatten)]
    pub record: MatchRecord,
    pub severity: MatchSeverity,
}

impl From<&MatchRecord> for MatchReport {
    fn from(record: &MatchRecord) -> Self {
        Self {
            record: record.clone(),
            severity: MatchSeverity::from_score(record.score),
        }
    }
}

impl From<&SequentialBlock> for BlockReport {
    fn from(block: &SequentialBlock) -> Self {
        Self {
            length: block.len(),
            average_score: block.average_score(),
            matches: block.matches().iter().map(MatchReport::from).collect(),
        }
    }
}

impl ComparisonReport {
    pub fn new(reference: DocumentInfo, suspect: DocumentInfo, comparison: &Comparison) -> Self {
        Self {
            reference,
            suspect,
            reference_sentence_count: comparison.reference_sentences.len(),
            suspect_sentence_count: comparison.suspect_sentences.len(),
            summary: comparison.stats.clone(),
            verdict: Verdict {
                risk_level: comparison.risk_level,
                message: comparison.risk_level.message().to_string(),
            },
            sequential_blocks: comparison
                .sequential_blocks
                .iter()
                .map(BlockReport::from)
                .collect(),
            matches: comparison.matches.iter().map(MatchReport::from).collect(),
        }
    }
}
