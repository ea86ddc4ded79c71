//! Workshop packager CLI entrypoint.
//!
//! This binary assembles the HTA workshop deliverable: it stamps the
//! workflow log and final package report into the source tree, archives the
//! tree, and verifies the archive against the required-file manifest. The
//! `verify` subcommand re-checks an existing archive.

use clap::Parser;
use coursepack_packager::cli::{Cli, Command, PackArgs, VerifyArgs};
use coursepack_packager::error::PackagerError;
use coursepack_packager::manifest::{RequiredManifest, verify_archive};
use coursepack_packager::output::{
    DryRunInfo, contents_summary, success_message, verification_text, write_stderr_line,
};
use coursepack_packager::pipeline::{Pipeline, PipelineError};
use std::io::Write;
use thiserror::Error;

/// Errors surfaced to the user by the CLI entrypoint.
#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Pipeline(#[from] PipelineError),

    #[error(transparent)]
    Packager(#[from] PackagerError),

    #[error("failed to render JSON report: {0}")]
    Render(#[from] serde_json::Error),
}

fn main() {
    let cli = Cli::parse();
    let mut stderr = std::io::stderr();
    let run_result = run(&cli, &mut stderr);
    let exit_code = exit_code_for_run_result(run_result, &mut stderr);
    if exit_code != 0 {
        std::process::exit(exit_code);
    }
}

fn run(cli: &Cli, stderr: &mut dyn Write) -> Result<(), CliError> {
    match &cli.command {
        Some(Command::Verify(args)) => run_verify(args),
        Some(Command::Pack(args)) => run_pack(args, stderr),
        None => run_pack(&cli.pack, stderr),
    }
}

/// Runs the full assembly pipeline, or shows the configuration in dry-run
/// mode.
fn run_pack(args: &PackArgs, stderr: &mut dyn Write) -> Result<(), CliError> {
    let config = args.package_config();

    if args.dry_run {
        let info = DryRunInfo { config: &config };
        write_stderr_line(stderr, info.display_text());
        return Ok(());
    }

    let quiet = config.quiet;
    let mut pipeline = Pipeline::new(config);
    let outcome = pipeline.run(stderr)?;

    if !quiet {
        write_stderr_line(stderr, "");
        write_stderr_line(stderr, success_message(&outcome));
        write_stderr_line(stderr, "");
        write_stderr_line(stderr, contents_summary());
    }

    Ok(())
}

/// Re-verifies an existing archive against the canonical manifest.
///
/// The report goes to stdout (as JSON when requested) so it can be piped;
/// a failed verification still exits non-zero.
fn run_verify(args: &VerifyArgs) -> Result<(), CliError> {
    let archive = args.archive_path();
    let report = verify_archive(&archive, &RequiredManifest::default())
        .map_err(PackagerError::from)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", verification_text(&report));
    }

    if report.ok() {
        Ok(())
    } else {
        Err(PackagerError::VerificationFailed {
            missing: report.missing,
        }
        .into())
    }
}

fn exit_code_for_run_result(result: Result<(), CliError>, stderr: &mut dyn Write) -> i32 {
    match result {
        Ok(()) => 0,
        Err(err) => {
            write_stderr_line(stderr, err);
            1
        }
    }
}
