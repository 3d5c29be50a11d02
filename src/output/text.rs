//! Plain-text report rendering.

use std::fmt;

use crate::comparison::ReportLimits;
use crate::models::{ComparisonReport, MatchReport};

const RULE_WIDTH: usize = 80;

fn heavy_rule() -> String {
    "=".repeat(RULE_WIDTH)
}

fn section(f: &mut fmt::Formatter<'_>, title: &str) -> fmt::Result {
    writeln!(f, "\n{}\n{}\n{}", heavy_rule(), title, heavy_rule())
}

fn write_pair(f: &mut fmt::Formatter<'_>, m: &MatchReport) -> fmt::Result {
    writeln!(f, "[A-{}] {}", m.record.reference_index + 1, m.record.reference_text)?;
    writeln!(f, "[B-{}] {}", m.record.suspect_index + 1, m.record.suspect_text)
}

/// One comparison laid out the way the report prints it on a terminal.
///
/// Sentence labels are 1-based (`A-1` is the first reference sentence).
pub struct TextReport<'a> {
    pub report: &'a ComparisonReport,
    pub limits: &'a ReportLimits,
    pub threshold: f32,
}

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.report;
        let limits = self.limits;
        let summary = &report.summary;

        writeln!(f, "{}", heavy_rule())?;
        writeln!(f, "PLAGIARISM DETECTION REPORT")?;
        writeln!(f, "{}", heavy_rule())?;
        writeln!(
            f,
            "Reference (original): {} ({} sentences)",
            report.reference.path, report.reference_sentence_count
        )?;
        writeln!(
            f,
            "Suspect: {} ({} sentences)",
            report.suspect.path, report.suspect_sentence_count
        )?;

        section(f, "SUMMARY STATISTICS")?;
        writeln!(
            f,
            "Document-level similarity: {:.2}%",
            summary.document_similarity as f64 * 100.0
        )?;
        writeln!(
            f,
            "Sentences matched: {} / {} ({:.1}%)",
            summary.matched_reference_count,
            summary.total_reference_count,
            summary.plagiarism_percentage
        )?;
        match summary.average_match_score {
            Some(average) => writeln!(f, "Average match score: {:.3}", average)?,
            None => writeln!(f, "Average match score: N/A")?,
        }
        writeln!(f, "Sequential blocks found: {}", summary.sequential_block_count)?;

        section(f, "VERDICT")?;
        writeln!(
            f,
            "{}: {}",
            report.verdict.risk_level.to_string().to_uppercase(),
            report.verdict.message
        )?;

        if !report.sequential_blocks.is_empty() {
            section(
                f,
                "SEQUENTIAL BLOCKS (Sentences in same order - STRONG PLAGIARISM INDICATOR)",
            )?;
            for (idx, block) in report
                .sequential_blocks
                .iter()
                .take(limits.max_blocks)
                .enumerate()
            {
                writeln!(
                    f,
                    "\n--- Sequential Block #{} ({} consecutive sentences) ---",
                    idx + 1,
                    block.length
                )?;
                writeln!(f, "Average similarity: {:.3}", block.average_score)?;
                for m in block.matches.iter().take(limits.max_block_sentences) {
                    writeln!(f)?;
                    write_pair(f, m)?;
                    writeln!(f, "Score: {:.3}", m.record.score)?;
                }
                if block.length > limits.max_block_sentences {
                    writeln!(
                        f,
                        "\n... and {} more sentences in this block",
                        block.length - limits.max_block_sentences
                    )?;
                }
            }
        }

        section(
            f,
            &format!(
                "TOP {} INDIVIDUAL MATCHES (Threshold: {})",
                limits.max_matches, self.threshold
            ),
        )?;
        for (idx, m) in report.matches.iter().take(limits.max_matches).enumerate() {
            writeln!(
                f,
                "\n#{} - Similarity: {:.3} {}",
                idx + 1,
                m.record.score,
                m.severity.to_string().to_uppercase()
            )?;
            write_pair(f, m)?;
            writeln!(f, "{}", "-".repeat(RULE_WIDTH))?;
        }

        Ok(())
    }
}

/// Every comparison of a run followed by any per-suspect errors.
pub struct TextReports<'a> {
    pub reports: &'a [ComparisonReport],
    pub errors: &'a [String],
    pub limits: &'a ReportLimits,
    pub threshold: f32,
}

impl fmt::Display for TextReports<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for report in self.reports {
            let text = TextReport {
                report,
                limits: self.limits,
                threshold: self.threshold,
            };
            writeln!(f, "{}", text)?;
        }
        if !self.errors.is_empty() {
            section(f, "ERRORS")?;
            for error in self.errors {
                writeln!(f, "{}", error)?;
            }
        }
        section(f, "ANALYSIS COMPLETE")
    }
}

pub fn render_report(report: &ComparisonReport, limits: &ReportLimits, threshold: f32) -> String {
    TextReport {
        report,
        limits,
        threshold,
    }
    .to_string()
}

pub fn render_reports(
    reports: &[ComparisonReport],
    errors: &[String],
    limits: &ReportLimits,
    threshold: f32,
) -> String {
    TextReports {
        reports,
        errors,
        limits,
        threshold,
    }
    .to_string()
}
