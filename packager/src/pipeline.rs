//! Package assembly pipeline orchestration.
//!
//! Sequences the whole build: write the workflow log and the final package
//! report into the source tree, archive the filtered tree, then verify the
//! archive against the required-file manifest. Steps run sequentially and
//! synchronously; the first failure aborts the run and surfaces its stage
//! as a human-readable cause. Nothing is retried, and a failed run leaves
//! no guarantee about the archive, so callers rerun from scratch.

use crate::archive::{ArchiveSummary, write_archive};
use crate::error::PackagerError;
use crate::manifest::{RequiredManifest, verify_archive};
use crate::output::write_stderr_line;
use crate::report::{render_package_report, render_workflow_log};
use crate::walker::{ArtifactWalker, ExclusionRules};
use camino::{Utf8Path, Utf8PathBuf};
use coursepack_common::{Timestamp, load_strict};
use std::fmt;
use std::fs;
use std::io::Write;
use thiserror::Error;

/// Name of the workshop source directory.
pub const SOURCE_DIR_NAME: &str = "HTA_Workshop_2025";

/// Name of the output archive written next to the source directory.
pub const ARCHIVE_FILE_NAME: &str = "HTA_Workshop_Package_2025.zip";

/// Metadata file location, relative to the source root.
pub const METADATA_REL_PATH: &str = "06_Reports/workshop_metadata.json";

/// Final package report location, relative to the source root.
pub const REPORT_REL_PATH: &str = "06_Reports/FINAL_PACKAGE_REPORT.md";

/// Workflow log location, relative to the source root.
pub const LOG_REL_PATH: &str = "06_Reports/workflow_log.txt";

/// Immutable configuration for one pipeline run.
///
/// The fixed workshop layout lives here rather than in compile-time
/// literals scattered through the steps, so tests can substitute smaller
/// trees and manifests.
#[derive(Debug, Clone)]
pub struct PackageConfig {
    /// Root of the source tree to package.
    pub source_root: Utf8PathBuf,
    /// Destination path for the output archive.
    pub archive_path: Utf8PathBuf,
    /// Location of `workshop_metadata.json`.
    pub metadata_path: Utf8PathBuf,
    /// Final package report path, relative to the source root.
    pub report_rel: Utf8PathBuf,
    /// Workflow log path, relative to the source root.
    pub log_rel: Utf8PathBuf,
    /// Substring patterns excluded from packaging.
    pub exclusions: ExclusionRules,
    /// Required-file checklist verified after archiving.
    pub manifest: RequiredManifest,
    /// Suppress progress narration (errors still shown).
    pub quiet: bool,
}

impl PackageConfig {
    /// The standard workshop configuration rooted at `base_dir`.
    ///
    /// Expects `base_dir/HTA_Workshop_2025` as the source tree and writes
    /// the archive to `base_dir/HTA_Workshop_Package_2025.zip`.
    #[must_use]
    pub fn workshop(base_dir: &Utf8Path) -> Self {
        let source_root = base_dir.join(SOURCE_DIR_NAME);
        Self {
            metadata_path: source_root.join(METADATA_REL_PATH),
            archive_path: base_dir.join(ARCHIVE_FILE_NAME),
            source_root,
            report_rel: Utf8PathBuf::from(REPORT_REL_PATH),
            log_rel: Utf8PathBuf::from(LOG_REL_PATH),
            exclusions: ExclusionRules::default(),
            manifest: RequiredManifest::default(),
            quiet: false,
        }
    }
}

/// Pipeline stages, named by the cause they contribute to failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Writing the workflow execution log into the source tree.
    LogGeneration,
    /// Loading metadata and writing the final package report.
    ReportGeneration,
    /// Walking the tree and writing the archive.
    ArchiveCreation,
    /// Checking the archive against the required-file manifest.
    IntegrityVerification,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::LogGeneration => "log generation",
            Self::ReportGeneration => "report generation",
            Self::ArchiveCreation => "archive creation",
            Self::IntegrityVerification => "integrity verification",
        };
        write!(f, "{name}")
    }
}

/// Observable pipeline states, advanced one transition per step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineState {
    /// Nothing has run yet.
    Start,
    /// The workflow log was persisted into the source tree.
    LogWritten,
    /// The final package report was persisted into the source tree.
    ReportWritten,
    /// The archive was written and passed its post-write check.
    Archived,
    /// The archive passed manifest verification.
    Verified,
    /// The run finished and produced a [`PackageOutcome`].
    Done,
    /// A step failed; remaining steps were skipped.
    Failed,
}

/// A pipeline failure, carrying the stage as a human-readable cause.
///
/// The underlying component error is preserved as the source and never
/// reinterpreted.
#[derive(Debug, Error)]
#[error("{stage} failed: {source}")]
pub struct PipelineError {
    /// The stage whose transition failed.
    pub stage: Stage,
    /// The component-level error that caused the failure.
    #[source]
    pub source: PackagerError,
}

/// Terminal result of a successful pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageOutcome {
    /// Path of the finished archive.
    pub archive_path: Utf8PathBuf,
    /// On-disk archive size in bytes.
    pub size_bytes: u64,
    /// Number of entries in the archive.
    pub entry_count: usize,
    /// Missing manifest entries; always empty on success.
    pub missing: Vec<String>,
}

/// One-shot orchestrator for the package assembly state machine.
#[derive(Debug)]
pub struct Pipeline {
    config: PackageConfig,
    state: PipelineState,
}

impl Pipeline {
    /// Create a pipeline in the [`PipelineState::Start`] state.
    #[must_use]
    pub fn new(config: PackageConfig) -> Self {
        Self {
            config,
            state: PipelineState::Start,
        }
    }

    /// The configuration this pipeline runs against.
    #[must_use]
    pub fn config(&self) -> &PackageConfig {
        &self.config
    }

    /// The current state of the state machine.
    #[must_use]
    pub fn state(&self) -> PipelineState {
        self.state
    }

    /// Run the full pipeline using the current clock.
    ///
    /// # Errors
    ///
    /// Returns a [`PipelineError`] naming the failed stage; see
    /// [`Pipeline::run_at`].
    pub fn run(&mut self, stderr: &mut dyn Write) -> Result<PackageOutcome, PipelineError> {
        let generated = Timestamp::now();
        self.run_at(&generated, stderr)
    }

    /// Run the full pipeline with an injected timestamp.
    ///
    /// Both generated documents are stamped with `generated`, so a frozen
    /// value makes the run reproducible byte for byte.
    ///
    /// # Errors
    ///
    /// Returns a [`PipelineError`] whose stage is the first transition
    /// that failed; no later step runs after a failure.
    pub fn run_at(
        &mut self,
        generated: &Timestamp,
        stderr: &mut dyn Write,
    ) -> Result<PackageOutcome, PipelineError> {
        self.narrate(stderr, "HTA workshop package generation started");
        self.narrate(stderr, format!("Timestamp: {generated}"));

        // The source tree must pre-exist; the pipeline only ever adds the
        // two generated documents to it.
        if !self.config.source_root.is_dir() {
            let missing_root = PackagerError::SourceRootNotFound {
                path: self.config.source_root.clone(),
            };
            return Err(self.fail(Stage::LogGeneration, missing_root));
        }

        match self.write_workflow_log(generated) {
            Ok(()) => {
                self.state = PipelineState::LogWritten;
                self.narrate(stderr, "Workflow log created");
            }
            Err(e) => return Err(self.fail(Stage::LogGeneration, e)),
        }

        match self.write_package_report(generated) {
            Ok(()) => {
                self.state = PipelineState::ReportWritten;
                self.narrate(stderr, "Final package report created");
            }
            Err(e) => return Err(self.fail(Stage::ReportGeneration, e)),
        }

        self.narrate(stderr, "Creating final package...");
        let summary = match self.write_package_archive() {
            Ok(summary) => {
                self.state = PipelineState::Archived;
                summary
            }
            Err(e) => return Err(self.fail(Stage::ArchiveCreation, e)),
        };

        self.narrate(stderr, "Verifying package integrity...");
        match self.verify_package() {
            Ok(()) => {
                self.state = PipelineState::Verified;
                self.narrate(stderr, "Package integrity verified");
            }
            Err(e) => return Err(self.fail(Stage::IntegrityVerification, e)),
        }

        self.state = PipelineState::Done;
        Ok(PackageOutcome {
            archive_path: summary.archive_path,
            size_bytes: summary.size_bytes,
            entry_count: summary.entry_count,
            missing: Vec::new(),
        })
    }

    /// Persist the workflow log into the source tree, overwriting any
    /// prior version.
    fn write_workflow_log(&self, generated: &Timestamp) -> Result<(), PackagerError> {
        let path = self.config.source_root.join(&self.config.log_rel);
        fs::write(&path, render_workflow_log(generated))?;
        Ok(())
    }

    /// Load metadata strictly and persist the final package report.
    fn write_package_report(&self, generated: &Timestamp) -> Result<(), PackagerError> {
        let metadata = load_strict(&self.config.metadata_path)?;
        let path = self.config.source_root.join(&self.config.report_rel);
        fs::write(&path, render_package_report(&metadata, generated))?;
        Ok(())
    }

    /// Walk the filtered tree and write the archive.
    fn write_package_archive(&self) -> Result<ArchiveSummary, PackagerError> {
        let walker = ArtifactWalker::new(&self.config.source_root, self.config.exclusions.clone())?;
        let summary = write_archive(&self.config.source_root, walker, &self.config.archive_path)?;
        Ok(summary)
    }

    /// Read the archive back and check it against the manifest.
    fn verify_package(&self) -> Result<(), PackagerError> {
        let report = verify_archive(&self.config.archive_path, &self.config.manifest)?;
        if report.ok() {
            Ok(())
        } else {
            Err(PackagerError::VerificationFailed {
                missing: report.missing,
            })
        }
    }

    /// Move to the terminal failed state and wrap the cause.
    fn fail(&mut self, stage: Stage, source: PackagerError) -> PipelineError {
        self.state = PipelineState::Failed;
        log::debug!("pipeline failed during {stage}: {source}");
        PipelineError { stage, source }
    }

    /// Write one progress line unless quiet mode is on.
    fn narrate(&self, stderr: &mut dyn Write, message: impl fmt::Display) {
        if !self.config.quiet {
            write_stderr_line(stderr, message);
        }
    }
}

#[cfg(test)]
#[path = "pipeline_tests.rs"]
mod tests;
