//! Output formatting for the packager CLI.
//!
//! This module renders the human-facing summaries: the success banner with
//! the archive size, the package contents listing, verification results,
//! and dry-run information. Keeping the formatting here leaves the binary
//! small and focused on orchestration.

use crate::manifest::VerificationReport;
use crate::pipeline::{PackageConfig, PackageOutcome};
use std::fmt::Display;
use std::io::Write;

/// Write a single line to the supplied stderr sink.
///
/// Write failures are deliberately ignored; progress narration must never
/// abort the pipeline.
pub fn write_stderr_line(stderr: &mut dyn Write, message: impl Display) {
    let _ = writeln!(stderr, "{message}");
}

/// Render a byte count as mebibytes with two decimal places.
///
/// # Example
///
/// ```
/// use coursepack_packager::output::format_size;
///
/// assert_eq!(format_size(3 * 1024 * 1024), "3.00 MB");
/// ```
#[must_use]
pub fn format_size(size_bytes: u64) -> String {
    #[allow(clippy::cast_precision_loss)]
    let mib = size_bytes as f64 / (1024.0 * 1024.0);
    format!("{mib:.2} MB")
}

/// Format the success banner shown after a completed run.
#[must_use]
pub fn success_message(outcome: &PackageOutcome) -> String {
    format!(
        "Package creation successful: {} ({} entries, {})",
        outcome.archive_path,
        outcome.entry_count,
        format_size(outcome.size_bytes),
    )
}

/// Format the fixed package contents listing shown alongside the banner.
#[must_use]
pub fn contents_summary() -> String {
    concat!(
        "Package contents:\n",
        "  1. Lectures (6 modules)\n",
        "  2. Presentations (6 PowerPoint decks)\n",
        "  3. Infographics (4 visual aids)\n",
        "  4. Quiz System (60 questions)\n",
        "  5. Registration Form (automated)\n",
        "  6. Analytics Dashboard (comprehensive)\n",
        "  7. Documentation & Reports"
    )
    .to_owned()
}

/// Format a verification report for display.
///
/// A clean report produces a single confirmation line; otherwise each
/// missing path is listed in manifest order.
#[must_use]
pub fn verification_text(report: &VerificationReport) -> String {
    if report.ok() {
        return "Package integrity verified: all required files present".to_owned();
    }

    let mut lines = vec![format!(
        "Package verification failed: {} required file(s) missing",
        report.missing.len()
    )];
    for path in &report.missing {
        lines.push(format!("  - {path}"));
    }
    lines.join("\n")
}

/// Configuration information for dry-run output.
#[derive(Debug)]
pub struct DryRunInfo<'a> {
    /// The configuration the run would use.
    pub config: &'a PackageConfig,
}

impl DryRunInfo<'_> {
    /// Format the dry-run information for display.
    #[must_use]
    pub fn display_text(&self) -> String {
        let mut lines = vec![
            "Dry run - no files will be written".to_owned(),
            String::new(),
            format!("Source root: {}", self.config.source_root),
            format!("Archive: {}", self.config.archive_path),
            format!("Metadata: {}", self.config.metadata_path),
            format!("Report: {}", self.config.report_rel),
            format!("Workflow log: {}", self.config.log_rel),
            format!("Quiet: {}", self.config.quiet),
            String::new(),
            "Required files:".to_owned(),
        ];

        for entry in self.config.manifest.entries() {
            lines.push(format!("  - {entry}"));
        }

        lines.join("\n")
    }
}
