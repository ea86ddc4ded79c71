//! Workshop package assembly library.
//!
//! This crate provides the core functionality for assembling and verifying
//! the HTA workshop deliverable: walking the source tree, writing the zip
//! archive, generating the report and workflow log, and checking the result
//! against the required-file manifest. It is used by the `coursepack` CLI
//! binary and can be consumed programmatically for testing or custom
//! packaging workflows.
//!
//! # Modules
//!
//! - [`archive`] - Zip archive writer with whole-or-nothing semantics
//! - [`cli`] - Command-line argument definitions
//! - [`error`] - Semantic error types for packaging failures
//! - [`manifest`] - Required-file manifest and archive verification
//! - [`output`] - Summary and dry-run formatting for the CLI
//! - [`pipeline`] - Package assembly pipeline orchestration
//! - [`report`] - Final report and workflow log generators
//! - [`walker`] - Artifact tree walker with substring exclusions

pub mod archive;
pub mod cli;
pub mod error;
pub mod manifest;
pub mod output;
pub mod pipeline;
pub mod report;
pub mod walker;
