use anyhow::{Context, Result};
use indicatif::ProgressBar;
use log::warn;
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::load::{Document, load_document};
use crate::comparison::ComparisonEngine;
use crate::models::ComparisonReport;
use crate::scanner::ProcessResult;

/// Compare one reference document against every suspect document.
///
/// Suspects are compared in parallel. A suspect that cannot be loaded or
/// compared is recorded in `errors` and skipped; a reference that cannot be
/// loaded fails the whole run.
pub fn process<P: AsRef<Path>>(
    reference_path: P,
    suspect_paths: &[PathBuf],
    engine: &ComparisonEngine,
    progress_bar: Arc<ProgressBar>,
) -> Result<ProcessResult> {
    let reference_path = reference_path.as_ref();
    let reference = load_document(reference_path).with_context(|| {
        format!(
            "Failed to load reference document {}",
            reference_path.display()
        )
    })?;

    let outcomes: Vec<Result<ComparisonReport, String>> = suspect_paths
        .par_iter()
        .map(|suspect_path| {
            let outcome = compare_with_reference(&reference, suspect_path, engine)
                .map_err(|e| format!("{}: {:#}", suspect_path.display(), e));
            progress_bar.inc(1);
            outcome
        })
        .collect();

    let mut result = ProcessResult {
        comparisons: Vec::new(),
        errors: Vec::new(),
    };

    for outcome in outcomes {
        match outcome {
            Ok(report) => result.comparisons.push(report),
            Err(error) => {
                warn!("Skipping suspect document: {}", error);
                result.errors.push(error);
            }
        }
    }

    Ok(result)
}

fn compare_with_reference(
    reference: &Document,
    suspect_path: &Path,
    engine: &ComparisonEngine,
) -> Result<ComparisonReport> {
    let suspect = load_document(suspect_path)?;
    let comparison = engine.compare(&reference.text, &suspect.text)?;

    Ok(ComparisonReport::new(
        reference.info.clone(),
        suspect.info,
        &comparison,
    ))
}
