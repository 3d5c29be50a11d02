//! Report output: JSON for machines, plain text for terminals.

mod text;

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde_json::to_string_pretty;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::models::Output;

pub use text::{TextReport, TextReports, render_report, render_reports};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

pub fn to_json(output: &Output) -> Result<String> {
    to_string_pretty(output).context("Failed to serialize output")
}

pub fn write_output(output_file: &Path, content: &str) -> Result<()> {
    let mut file = File::create(output_file)
        .with_context(|| format!("Failed to create {}", output_file.display()))?;
    file.write_all(content.as_bytes())
        .with_context(|| format!("Failed to write {}", output_file.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comparison::ComparisonConfig;
    use crate::models::{Header, OUTPUT_FORMAT_VERSION};
    use std::fs;
    use tempfile::TempDir;

    fn empty_output() -> Output {
        Output {
            headers: vec![Header {
                tool_version: "0.1.0".to_string(),
                start_timestamp: "2026-01-01T00:00:00+00:00".to_string(),
                end_timestamp: "2026-01-01T00:00:01+00:00".to_string(),
                duration: 1.0,
                options: ComparisonConfig::default(),
                errors: Vec::new(),
                output_format_version: OUTPUT_FORMAT_VERSION.to_string(),
            }],
            comparisons: Vec::new(),
        }
    }

    #[test]
    fn test_to_json_contains_options() {
        let json = to_json(&empty_output()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["headers"][0]["options"]["min_run_length"], 3);
        assert_eq!(value["headers"][0]["output_format_version"], "1.0.0");
        assert!(value["comparisons"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_write_output_creates_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("report.json");

        write_output(&path, "{}").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "{}");
    }

    #[test]
    fn test_write_output_bad_directory() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("report.json");

        assert!(write_output(&path, "{}").is_err());
    }
}
