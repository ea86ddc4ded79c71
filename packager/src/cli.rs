//! CLI argument definitions for the workshop packager.
//!
//! This module defines the command-line interface using clap. It is separated
//! from the main entrypoint to keep the binary small and focused on
//! orchestration.

use crate::pipeline::{ARCHIVE_FILE_NAME, PackageConfig};
use crate::walker::ExclusionRules;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand};

/// Assemble and verify the HTA workshop deliverable package.
#[derive(Parser, Debug)]
#[command(name = "coursepack")]
#[command(version, about)]
#[command(long_about = concat!(
    "Assemble and verify the HTA workshop deliverable package.\n\n",
    "The packager stamps a workflow log and a final package report into the ",
    "workshop source tree, archives the tree into a single zip (skipping ",
    "transient artefacts such as __pycache__ directories), and then checks ",
    "the archive against the required-file manifest.\n\n",
    "By default the tree HTA_Workshop_2025 under the current directory is ",
    "packaged into HTA_Workshop_Package_2025.zip alongside it.",
))]
#[command(after_help = concat!(
    "EXAMPLES:\n",
    "  Package the workshop tree in the current directory:\n",
    "    $ coursepack\n\n",
    "  Package a tree elsewhere:\n",
    "    $ coursepack --base-dir /srv/workshops/2025\n\n",
    "  Exclude additional substrings from packaging:\n",
    "    $ coursepack -x .git -x draft_\n\n",
    "  Preview the configuration without writing anything:\n",
    "    $ coursepack --dry-run\n\n",
    "  Re-verify an existing archive:\n",
    "    $ coursepack verify HTA_Workshop_Package_2025.zip\n",
))]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Packaging arguments (used when no subcommand is given).
    #[command(flatten)]
    pub pack: PackArgs,
}

/// Available subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Assemble the package (default when no subcommand given).
    Pack(PackArgs),

    /// Verify an existing archive against the required-file manifest.
    Verify(VerifyArgs),
}

/// Arguments for the pack command.
#[derive(Parser, Debug, Clone)]
pub struct PackArgs {
    /// Directory containing the workshop source tree [default: .].
    #[arg(short, long, value_name = "DIR")]
    pub base_dir: Option<Utf8PathBuf>,

    /// Override the archive destination path.
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<Utf8PathBuf>,

    /// Override the workshop metadata file location.
    #[arg(short, long, value_name = "FILE")]
    pub metadata: Option<Utf8PathBuf>,

    /// Exclude paths containing this substring (can be repeated).
    #[arg(short = 'x', long = "exclude", value_name = "PATTERN")]
    pub exclude: Vec<String>,

    /// Show configuration and exit without writing anything.
    #[arg(long)]
    pub dry_run: bool,

    /// Suppress progress output (errors still shown).
    #[arg(short, long)]
    pub quiet: bool,
}

/// Arguments for the verify command.
#[derive(Parser, Debug, Clone)]
pub struct VerifyArgs {
    /// Archive to verify [default: HTA_Workshop_Package_2025.zip].
    #[arg(value_name = "ARCHIVE")]
    pub archive: Option<Utf8PathBuf>,

    /// Output the verification report as JSON for scripting.
    #[arg(long)]
    pub json: bool,
}

impl PackArgs {
    /// Build the pipeline configuration these arguments describe.
    ///
    /// Extra exclusion patterns extend the defaults rather than replacing
    /// them, so the transient-artefact filtering always applies.
    ///
    /// # Examples
    ///
    /// ```
    /// use coursepack_packager::cli::PackArgs;
    ///
    /// let config = PackArgs::default().package_config();
    /// assert_eq!(config.source_root, "./HTA_Workshop_2025");
    /// assert!(!config.quiet);
    /// ```
    #[must_use]
    pub fn package_config(&self) -> PackageConfig {
        let base_dir = self
            .base_dir
            .clone()
            .unwrap_or_else(|| Utf8PathBuf::from("."));
        let mut config = PackageConfig::workshop(&base_dir);

        if let Some(output) = &self.output {
            config.archive_path = output.clone();
        }
        if let Some(metadata) = &self.metadata {
            config.metadata_path = metadata.clone();
        }
        if !self.exclude.is_empty() {
            let mut patterns: Vec<String> = ExclusionRules::default()
                .patterns()
                .to_vec();
            patterns.extend(self.exclude.iter().cloned());
            config.exclusions = ExclusionRules::new(patterns);
        }
        config.quiet = self.quiet;
        config
    }
}

impl VerifyArgs {
    /// The archive path to verify, defaulting to the canonical name in the
    /// current directory.
    #[must_use]
    pub fn archive_path(&self) -> Utf8PathBuf {
        self.archive
            .clone()
            .unwrap_or_else(|| Utf8Path::new(".").join(ARCHIVE_FILE_NAME))
    }
}

impl Default for PackArgs {
    /// Creates a `PackArgs` instance with no overrides set.
    ///
    /// # Examples
    ///
    /// ```
    /// use coursepack_packager::cli::PackArgs;
    ///
    /// let args = PackArgs::default();
    /// assert!(args.base_dir.is_none());
    /// assert!(args.exclude.is_empty());
    /// assert!(!args.dry_run);
    /// ```
    fn default() -> Self {
        Self {
            base_dir: None,
            output: None,
            metadata: None,
            exclude: Vec::new(),
            dry_run: false,
            quiet: false,
        }
    }
}

impl Default for VerifyArgs {
    /// Creates a `VerifyArgs` instance with default settings.
    ///
    /// # Examples
    ///
    /// ```
    /// use coursepack_packager::cli::VerifyArgs;
    ///
    /// let args = VerifyArgs::default();
    /// assert!(args.archive.is_none());
    /// assert!(!args.json);
    /// ```
    fn default() -> Self {
        Self {
            archive: None,
            json: false,
        }
    }
}

impl Cli {
    /// Returns the effective packaging arguments.
    ///
    /// If a `Pack` subcommand was provided, returns those arguments.
    /// Otherwise returns the flattened packaging arguments.
    ///
    /// # Note
    ///
    /// When `Command::Verify` is active, this returns the default flattened
    /// packaging arguments. Callers should check `self.command` before
    /// calling this method if the `Verify` case needs different handling.
    #[must_use]
    pub fn pack_args(&self) -> &PackArgs {
        match &self.command {
            Some(Command::Pack(args)) => args,
            Some(Command::Verify(_)) | None => &self.pack,
        }
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
