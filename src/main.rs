use anyhow::{Result, bail};
use chrono::Utc;
use clap::Parser;
use env_logger::Env;
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use std::sync::Arc;

use copyscan::cli::Cli;
use copyscan::comparison::{ComparisonConfig, ComparisonEngine, HashingEmbedder};
use copyscan::models::{Header, OUTPUT_FORMAT_VERSION, Output};
use copyscan::output::{OutputFormat, render_reports, to_json, write_output};
use copyscan::scanner::{ProcessResult, process};

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or(cli.log_level())).init();

    let start_time = Utc::now();

    let config = cli.comparison_config();
    let engine = ComparisonEngine::new(
        config.clone(),
        Arc::new(HashingEmbedder::new(cli.dimensions)),
    )?;
    info!(
        "Comparing {} against {} suspect document(s)",
        cli.reference.display(),
        cli.suspects.len()
    );

    let progress_bar = create_progress_bar(cli.suspects.len());
    let result = process(
        &cli.reference,
        &cli.suspects,
        &engine,
        Arc::clone(&progress_bar),
    )?;
    progress_bar.finish_and_clear();

    let end_time = Utc::now();
    let all_failed = result.all_failed();
    let failure_count = result.errors.len();

    let content = match cli.format {
        OutputFormat::Json => to_json(&create_output(start_time, end_time, config, result))?,
        OutputFormat::Text => render_reports(
            &result.comparisons,
            &result.errors,
            &cli.report_limits(),
            cli.threshold,
        ),
    };

    match &cli.output_file {
        Some(path) => {
            write_output(path, &content)?;
            println!("Report written to {}", path.display());
        }
        None => print!("{}", content),
    }

    if all_failed {
        bail!(
            "No suspect document could be compared ({} error(s))",
            failure_count
        );
    }

    Ok(())
}

fn create_progress_bar(total: usize) -> Arc<ProgressBar> {
    if total < 2 {
        return Arc::new(ProgressBar::hidden());
    }
    let progress_bar = ProgressBar::new(total as u64);
    match ProgressStyle::default_bar()
        .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} documents compared ({eta})")
    {
        Ok(style) => progress_bar.set_style(style.progress_chars("#>-")),
        Err(e) => log::warn!("Failed to create progress bar style: {}", e),
    }
    Arc::new(progress_bar)
}

fn create_output(
    start_time: chrono::DateTime<Utc>,
    end_time: chrono::DateTime<Utc>,
    config: ComparisonConfig,
    result: ProcessResult,
) -> Output {
    let duration = (end_time - start_time).num_nanoseconds().unwrap_or(0) as f64 / 1_000_000_000.0;

    Output {
        headers: vec![Header {
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
            start_timestamp: start_time.to_rfc3339(),
            end_timestamp: end_time.to_rfc3339(),
            duration,
            options: config,
            errors: result.errors,
            output_format_version: OUTPUT_FORMAT_VERSION.to_string(),
        }],
        comparisons: result.comparisons,
    }
}
