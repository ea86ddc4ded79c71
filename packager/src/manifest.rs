//! Required-file manifest and archive verification.
//!
//! The manifest is a fixed, ordered checklist of canonical relative paths
//! that must be representable inside the finished archive. Verification is
//! presence-only: an entry name merely has to contain the canonical path as
//! a substring, which tolerates the root-directory prefix the archive
//! writer introduces. Content, size, and checksums are deliberately not
//! inspected.

use crate::archive::PackagingError;
use camino::Utf8Path;
use serde::Serialize;
use std::fs::File;

/// The canonical required paths for the workshop package, in report order.
const REQUIRED_PATHS: [&str; 8] = [
    "HTA_Workshop_2025/README.md",
    "HTA_Workshop_2025/06_Reports/workshop_metadata.json",
    "HTA_Workshop_2025/01_Lectures/01_Foundations_of_HTA.md",
    "HTA_Workshop_2025/03_Presentations/01_Foundations_of_HTA_presentation.pptx",
    "HTA_Workshop_2025/04_Infographics/hta_concept_flow.png",
    "HTA_Workshop_2025/02_Quizzes/hta_questions.csv",
    "HTA_Workshop_2025/05_Admin_Forms/registration_form.gs",
    "HTA_Workshop_2025/06_Reports/hta_dashboard.py",
];

/// An ordered list of canonical relative paths the archive must contain.
///
/// The manifest is defined independently of the current source tree
/// contents; verification is existence-checking, not content-checking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequiredManifest {
    entries: Vec<String>,
}

impl RequiredManifest {
    /// Create a manifest from an explicit path list, preserving order.
    #[must_use]
    pub fn new(entries: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            entries: entries.into_iter().map(Into::into).collect(),
        }
    }

    /// The canonical paths, in declaration order.
    #[must_use]
    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}

impl Default for RequiredManifest {
    /// The eight canonical paths of the workshop deliverable.
    fn default() -> Self {
        Self::new(REQUIRED_PATHS)
    }
}

/// Outcome of checking an archive against a [`RequiredManifest`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerificationReport {
    /// Canonical paths for which no matching archive entry was found, in
    /// manifest order.
    pub missing: Vec<String>,
}

impl VerificationReport {
    /// True only when every manifest entry was matched.
    #[must_use]
    pub fn ok(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Check the archive at `path` against `manifest`.
///
/// A canonical path counts as present when any entry name contains it as a
/// substring. The tolerant matching mirrors the shipped behaviour and is
/// pinned by tests; see DESIGN notes before tightening it.
///
/// # Errors
///
/// Returns [`PackagingError::Io`] if the archive cannot be opened and
/// [`PackagingError::Zip`] if it is not a readable zip.
pub fn verify_archive(
    path: &Utf8Path,
    manifest: &RequiredManifest,
) -> Result<VerificationReport, PackagingError> {
    let file = File::open(path)?;
    let archive = zip::ZipArchive::new(file)?;
    let names: Vec<&str> = archive.file_names().collect();

    let missing = manifest
        .entries()
        .iter()
        .filter(|required| !names.iter().any(|name| name.contains(required.as_str())))
        .cloned()
        .collect();

    Ok(VerificationReport { missing })
}
