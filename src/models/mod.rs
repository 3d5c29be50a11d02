mod document_info;
mod output;

pub use document_info::{DocumentInfo, DocumentInfoBuilder};
pub use output::{
    BlockReport, ComparisonReport, Header, MatchReport, OUTPUT_FORMAT_VERSION, Output, Verdict,
};
