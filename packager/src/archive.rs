//! Archive writer for the workshop deliverable.
//!
//! Streams the walker's files into a single deflate-compressed zip. Entry
//! names are the file paths made relative to the source root's parent, so
//! the root directory name itself prefixes every entry. The write is
//! whole-or-nothing: any per-file failure aborts the run and the partial
//! archive is deleted, so a failed run never leaves a truncated
//! deliverable behind.

use camino::{Utf8Path, Utf8PathBuf};
use std::fs::{self, File};
use std::io;
use thiserror::Error;
use zip::CompressionMethod;
use zip::write::{SimpleFileOptions, ZipWriter};

/// Errors arising from archive creation or readback.
#[derive(Debug, Error)]
pub enum PackagingError {
    /// An I/O operation failed (reading a source file, writing the
    /// archive).
    #[error("I/O error during packaging: {0}")]
    Io(#[from] io::Error),

    /// The zip container could not be written or read.
    #[error("archive error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// A walked file is not beneath the source root's parent directory.
    #[error("file {path} is outside the source tree")]
    OutsideSourceTree {
        /// The offending file path.
        path: Utf8PathBuf,
    },

    /// The archive is absent or empty after writing.
    #[error("archive creation failed: {path}")]
    ArchiveCreationFailed {
        /// Destination path that failed the post-write check.
        path: Utf8PathBuf,
    },
}

/// Summary of a successfully written archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveSummary {
    /// Path of the written archive.
    pub archive_path: Utf8PathBuf,
    /// Number of entries stored.
    pub entry_count: usize,
    /// On-disk size of the finished archive in bytes.
    pub size_bytes: u64,
}

/// Compute the entry name for `path` inside an archive rooted at `root`.
///
/// The name is `path` relative to `root`'s parent, so the root directory
/// name becomes the leading component of every entry.
///
/// # Errors
///
/// Returns [`PackagingError::OutsideSourceTree`] if `path` does not start
/// with `root`'s parent.
pub fn entry_name(root: &Utf8Path, path: &Utf8Path) -> Result<Utf8PathBuf, PackagingError> {
    let prefix = root.parent().unwrap_or_else(|| Utf8Path::new(""));
    path.strip_prefix(prefix)
        .map(Utf8Path::to_owned)
        .map_err(|_| PackagingError::OutsideSourceTree {
            path: path.to_owned(),
        })
}

/// Write every file yielded by `files` into a deflated zip at `dest`.
///
/// Write order follows the iterator; each accepted path yields exactly one
/// entry. The archive is flushed and closed before this function returns.
/// On any failure the partially written archive is removed before the
/// error propagates.
///
/// # Errors
///
/// Returns [`PackagingError::Io`] or [`PackagingError::Zip`] on write
/// failures, [`PackagingError::OutsideSourceTree`] for a path that escapes
/// the mapping, and [`PackagingError::ArchiveCreationFailed`] if the
/// archive is missing or empty after the write.
pub fn write_archive(
    root: &Utf8Path,
    files: impl IntoIterator<Item = io::Result<Utf8PathBuf>>,
    dest: &Utf8Path,
) -> Result<ArchiveSummary, PackagingError> {
    let entry_count = match write_entries(root, files, dest) {
        Ok(count) => count,
        Err(e) => {
            // No partial-success mode: discard the truncated archive.
            let _ = fs::remove_file(dest);
            return Err(e);
        }
    };

    let size_bytes = match fs::metadata(dest) {
        Ok(meta) if meta.len() > 0 => meta.len(),
        _ => {
            let _ = fs::remove_file(dest);
            return Err(PackagingError::ArchiveCreationFailed {
                path: dest.to_owned(),
            });
        }
    };

    log::debug!("wrote {entry_count} entries ({size_bytes} bytes) to {dest}");
    Ok(ArchiveSummary {
        archive_path: dest.to_owned(),
        entry_count,
        size_bytes,
    })
}

/// Stream the files into `dest`, returning the entry count.
fn write_entries(
    root: &Utf8Path,
    files: impl IntoIterator<Item = io::Result<Utf8PathBuf>>,
    dest: &Utf8Path,
) -> Result<usize, PackagingError> {
    let output = File::create(dest)?;
    let mut writer = ZipWriter::new(output);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    let mut entry_count = 0;
    for file in files {
        let path = file?;
        let name = entry_name(root, &path)?;
        writer.start_file(name.as_str(), options)?;
        let mut source = File::open(&path)?;
        io::copy(&mut source, &mut writer)?;
        entry_count += 1;
    }

    writer.finish()?;
    Ok(entry_count)
}
