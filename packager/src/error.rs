//! Error types for the Coursepack packager.
//!
//! Component-level failures are semantic variants so that the pipeline can
//! surface a human-readable cause without reinterpreting lower-level errors.

use crate::archive::PackagingError;
use camino::Utf8PathBuf;
use coursepack_common::MetadataError;
use thiserror::Error;

/// Errors that can occur while assembling or verifying a package.
#[derive(Debug, Error)]
pub enum PackagerError {
    /// The source tree root does not exist or is not a directory.
    #[error("source directory not found at {path}")]
    SourceRootNotFound {
        /// Path where the source tree was expected.
        path: Utf8PathBuf,
    },

    /// Workshop metadata was missing or invalid under the strict policy.
    #[error(transparent)]
    Metadata(#[from] MetadataError),

    /// Archive creation or readback failed.
    #[error(transparent)]
    Packaging(#[from] PackagingError),

    /// Required manifest entries were absent from the finished archive.
    #[error("missing required files: {}", .missing.join(", "))]
    VerificationFailed {
        /// Canonical manifest paths with no matching archive entry.
        missing: Vec<String>,
    },

    /// An I/O operation outside archive handling failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using [`PackagerError`].
pub type Result<T> = std::result::Result<T, PackagerError>;
