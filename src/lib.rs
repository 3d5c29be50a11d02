pub mod cli;
pub mod comparison;
pub mod models;
pub mod output;
pub mod scanner;
pub mod utils;

pub use comparison::{Comparison, ComparisonConfig, ComparisonEngine, ComparisonError};
pub use models::{ComparisonReport, DocumentInfo, Header, Output};
pub use scanner::{ProcessResult, load_document, process};
