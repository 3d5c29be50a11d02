use anyhow::{Context, Result};
use clap::Parser;
use copyscan::comparison::ComparisonEngine;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(about = "Regenerate expected.yml files for the comparison golden tests")]
struct Args {
    /// Directory holding one sub-directory per golden case
    #[arg(default_value = "testdata/compare-golden")]
    golden_dir: PathBuf,

    /// Only print what would change
    #[arg(long)]
    dry_run: bool,
}

#[derive(Serialize)]
struct ExpectedComparison {
    reference_sentences: usize,
    suspect_sentences: usize,
    matched_reference_count: usize,
    risk_level: copyscan::comparison::RiskLevel,
    matches: Vec<(usize, usize)>,
    sequential_blocks: Vec<Vec<(usize, usize)>>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let engine = ComparisonEngine::with_defaults();

    let mut case_dirs: Vec<PathBuf> = fs::read_dir(&args.golden_dir)
        .with_context(|| format!("Failed to read {}", args.golden_dir.display()))?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.join("reference.txt").exists() && p.join("suspect.txt").exists())
        .collect();
    case_dirs.sort();

    let mut updated = 0;
    for dir in &case_dirs {
        if update_case(&engine, dir, args.dry_run)? {
            updated += 1;
        }
    }

    println!(
        "{} of {} golden cases {}",
        updated,
        case_dirs.len(),
        if args.dry_run { "would change" } else { "updated" }
    );
    Ok(())
}

fn update_case(engine: &ComparisonEngine, dir: &Path, dry_run: bool) -> Result<bool> {
    let reference = fs::read_to_string(dir.join("reference.txt"))?;
    let suspect = fs::read_to_string(dir.join("suspect.txt"))?;
    let comparison = engine
        .compare(&reference, &suspect)
        .with_context(|| format!("Comparison failed for {}", dir.display()))?;

    let mut matches: Vec<(usize, usize)> = comparison
        .matches
        .iter()
        .map(|m| (m.reference_index, m.suspect_index))
        .collect();
    matches.sort();

    let expected = ExpectedComparison {
        reference_sentences: comparison.reference_sentences.len(),
        suspect_sentences: comparison.suspect_sentences.len(),
        matched_reference_count: comparison.stats.matched_reference_count,
        risk_level: comparison.risk_level,
        matches,
        sequential_blocks: comparison
            .sequential_blocks
            .iter()
            .map(|b| {
                b.matches()
                    .iter()
                    .map(|m| (m.reference_index, m.suspect_index))
                    .collect()
            })
            .collect(),
    };

    let yaml = serde_yaml::to_string(&expected)?;
    let expected_path = dir.join("expected.yml");
    let current: Option<serde_yaml::Value> = fs::read_to_string(&expected_path)
        .ok()
        .and_then(|s| serde_yaml::from_str(&s).ok());
    let changed = current != Some(serde_yaml::to_value(&expected)?);

    if changed {
        println!("{}: expectation changed", dir.display());
        if !dry_run {
            fs::write(&expected_path, yaml)?;
        }
    }
    Ok(changed)
}
