//! Workshop metadata record and its two load policies.
//!
//! The packager and the analytics dashboard both read
//! `workshop_metadata.json`, but under different contracts: the packager
//! requires every field to be present ([`load_strict`]), while the dashboard
//! substitutes a hard-coded default record when the source is missing or
//! unreadable ([`load_lenient`]). The policies are kept side by side under
//! their own names so that one contract never silently stands in for the
//! other.

use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};
use std::fs;
use thiserror::Error;

/// Errors raised by the strict metadata load.
#[derive(Debug, Error)]
pub enum MetadataError {
    /// The metadata file does not exist at the expected location.
    #[error("workshop metadata not found at {path}")]
    NotFound {
        /// Path where the metadata file was expected.
        path: Utf8PathBuf,
    },

    /// The metadata file could not be read.
    #[error("failed to read workshop metadata: {0}")]
    Io(#[from] std::io::Error),

    /// The metadata file is not valid JSON or omits a required field.
    #[error("invalid workshop metadata: {0}")]
    Invalid(#[from] serde_json::Error),
}

/// The structured workshop record interpolated into the final package
/// report.
///
/// All five fields are required by the strict policy; none carry serde
/// defaults, so a missing field surfaces as a deserialization error rather
/// than an empty string in the shipped report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkshopMetadata {
    /// Workshop title, e.g. "HTA Workshop 2025".
    pub title: String,
    /// Human-readable workshop dates.
    pub date: String,
    /// Venue name.
    pub venue: String,
    /// Organising institution.
    pub organizer: String,
    /// Intended audience description.
    pub target_audience: String,
}

impl WorkshopMetadata {
    /// The hard-coded record the dashboard falls back to when the metadata
    /// source is unavailable.
    ///
    /// # Examples
    ///
    /// ```
    /// use coursepack_common::WorkshopMetadata;
    ///
    /// let record = WorkshopMetadata::fallback();
    /// assert_eq!(record.title, "HTA Workshop 2025");
    /// ```
    #[must_use]
    pub fn fallback() -> Self {
        Self {
            title: "HTA Workshop 2025".to_owned(),
            date: "February 15-16, 2025".to_owned(),
            venue: "PGIMER Chandigarh".to_owned(),
            organizer: "PGIMER Chandigarh".to_owned(),
            target_audience: "PG Residents & Faculty".to_owned(),
        }
    }
}

/// Load workshop metadata, failing on any missing or invalid input.
///
/// This is the packager's policy: the final package report must never ship
/// with silently defaulted fields, so absence of the file or of any field
/// is an error.
///
/// # Errors
///
/// Returns [`MetadataError::NotFound`] if the file does not exist,
/// [`MetadataError::Io`] if it cannot be read, and
/// [`MetadataError::Invalid`] if the JSON is malformed or a field is
/// absent.
pub fn load_strict(path: &Utf8Path) -> Result<WorkshopMetadata, MetadataError> {
    if !path.is_file() {
        return Err(MetadataError::NotFound {
            path: path.to_owned(),
        });
    }
    let bytes = fs::read(path)?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// Load workshop metadata, substituting the fallback record on any failure.
///
/// This is the dashboard's policy: an operator opening the analytics view
/// before the metadata file exists still sees a populated sidebar. The
/// fallback is whole-record; a partially valid file is not merged.
#[must_use]
pub fn load_lenient(path: &Utf8Path) -> WorkshopMetadata {
    load_strict(path).unwrap_or_else(|_| WorkshopMetadata::fallback())
}
