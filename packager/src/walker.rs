//! Artifact tree walker with substring exclusion rules.
//!
//! Enumerates every regular file under the source root, skipping any path
//! that contains one of the exclusion substrings. The walk is lazy and
//! one-shot; a fresh walker is needed for a second pass.

use crate::error::{PackagerError, Result};
use camino::{Utf8Path, Utf8PathBuf};
use std::collections::VecDeque;
use std::io;

/// Substring patterns that disqualify a file from packaging.
///
/// Matching is applied to the full path, independent of file type, so a
/// pattern excludes both directories and the files beneath them.
#[derive(Debug, Clone)]
pub struct ExclusionRules {
    patterns: Vec<String>,
}

impl ExclusionRules {
    /// Create rules from an explicit pattern list.
    #[must_use]
    pub fn new(patterns: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            patterns: patterns.into_iter().map(Into::into).collect(),
        }
    }

    /// Rules that exclude nothing.
    #[must_use]
    pub fn none() -> Self {
        Self {
            patterns: Vec::new(),
        }
    }

    /// The configured exclusion substrings, in declaration order.
    #[must_use]
    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    /// Return true when `path` contains any exclusion substring.
    ///
    /// # Examples
    ///
    /// ```
    /// use camino::Utf8Path;
    /// use coursepack_packager::walker::ExclusionRules;
    ///
    /// let rules = ExclusionRules::default();
    /// assert!(rules.excludes(Utf8Path::new("tree/__pycache__/mod.pyc")));
    /// assert!(!rules.excludes(Utf8Path::new("tree/01_Lectures/intro.md")));
    /// ```
    #[must_use]
    pub fn excludes(&self, path: &Utf8Path) -> bool {
        self.patterns.iter().any(|p| path.as_str().contains(p))
    }
}

impl Default for ExclusionRules {
    /// The transient-artifact patterns excluded from every workshop package.
    fn default() -> Self {
        Self::new(["__pycache__", ".DS_Store", "node_modules"])
    }
}

/// Lazy depth-first iterator over the regular files of a source tree.
///
/// Each file is visited exactly once. Entries are sorted per directory so
/// repeated walks of an unchanged tree produce the same order, though
/// callers must not rely on any particular ordering.
#[derive(Debug)]
pub struct ArtifactWalker {
    rules: ExclusionRules,
    pending_dirs: Vec<Utf8PathBuf>,
    queued_files: VecDeque<Utf8PathBuf>,
}

impl ArtifactWalker {
    /// Start a walk rooted at `root`.
    ///
    /// # Errors
    ///
    /// Returns [`PackagerError::SourceRootNotFound`] if `root` does not
    /// exist or is not a directory. The walker never creates the root.
    pub fn new(root: &Utf8Path, rules: ExclusionRules) -> Result<Self> {
        if !root.is_dir() {
            return Err(PackagerError::SourceRootNotFound {
                path: root.to_owned(),
            });
        }
        Ok(Self {
            rules,
            pending_dirs: vec![root.to_owned()],
            queued_files: VecDeque::new(),
        })
    }

    /// Read one directory, queueing its files and stacking its
    /// subdirectories.
    fn read_directory(&mut self, dir: &Utf8Path) -> io::Result<()> {
        let mut files = Vec::new();
        let mut dirs = Vec::new();

        for entry in dir.read_dir_utf8()? {
            let entry = entry?;
            let path = entry.path().to_owned();

            if self.rules.excludes(&path) {
                log::trace!("excluded from package: {path}");
                continue;
            }

            let file_type = entry.file_type()?;
            if file_type.is_dir() {
                dirs.push(path);
            } else if file_type.is_file() {
                files.push(path);
            }
            // Symlinks and other special entries are not packaged.
        }

        files.sort();
        dirs.sort();

        // Reverse before stacking so directories pop in sorted order.
        for sub_dir in dirs.into_iter().rev() {
            self.pending_dirs.push(sub_dir);
        }
        self.queued_files.extend(files);
        Ok(())
    }
}

impl Iterator for ArtifactWalker {
    type Item = io::Result<Utf8PathBuf>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(file) = self.queued_files.pop_front() {
                return Some(Ok(file));
            }
            let dir = self.pending_dirs.pop()?;
            if let Err(e) = self.read_directory(&dir) {
                return Some(Err(e));
            }
        }
    }
}
