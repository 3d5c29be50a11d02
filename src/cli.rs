use clap::Parser;
use std::path::PathBuf;

use crate::comparison::embedding::DEFAULT_DIMENSIONS;
use crate::comparison::{ComparisonConfig, ReportLimits};
use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Reference (original) document
    pub reference: PathBuf,

    /// Suspect documents to check against the reference
    #[arg(required = true)]
    pub suspects: Vec<PathBuf>,

    /// Output file path (prints to stdout when omitted)
    #[arg(short, long)]
    pub output_file: Option<PathBuf>,

    /// Report format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Minimum sentence similarity to count as a match
    #[arg(short, long, default_value = "0.70")]
    pub threshold: f32,

    /// Minimum number of ordered matches that form a sequential block
    #[arg(long, default_value = "3")]
    pub min_run_length: usize,

    /// Largest sentence index step allowed inside a sequential block
    #[arg(long, default_value = "3")]
    pub max_index_gap: usize,

    /// Fail on NaN or out-of-range similarity scores instead of skipping them
    #[arg(long)]
    pub strict_scores: bool,

    /// Embedding dimensions
    #[arg(long, default_value_t = DEFAULT_DIMENSIONS)]
    pub dimensions: usize,

    /// Sequential blocks shown in the text report
    #[arg(long, default_value = "5")]
    pub max_blocks: usize,

    /// Sentence pairs shown per sequential block in the text report
    #[arg(long, default_value = "3")]
    pub max_block_sentences: usize,

    /// Individual matches shown in the text report
    #[arg(long, default_value = "20")]
    pub max_matches: usize,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn comparison_config(&self) -> ComparisonConfig {
        ComparisonConfig {
            match_threshold: self.threshold,
            min_run_length: self.min_run_length,
            max_index_gap: self.max_index_gap,
            strict_scores: self.strict_scores,
        }
    }

    pub fn report_limits(&self) -> ReportLimits {
        ReportLimits {
            max_blocks: self.max_blocks,
            max_block_sentences: self.max_block_sentences,
            max_matches: self.max_matches,
        }
    }

    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}
