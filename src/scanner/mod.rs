mod load;
mod process;

use crate::models::ComparisonReport;

pub struct ProcessResult {
    pub comparisons: Vec<ComparisonReport>,
    pub errors: Vec<String>,
}

impl ProcessResult {
    /// True when suspects were given but none of them could be compared.
    pub fn all_failed(&self) -> bool {
        self.comparisons.is_empty() && !self.errors.is_empty()
    }
}

pub use self::load::{Document, load_document};
pub use self::process::process;
