//! Core library for the `secrecy` plaintext-secret scanner.
//!
//! This library scans file contents for unencrypted Ansible vaults,
//! unencrypted private keys, and quoted strings whose letter statistics
//! look more like passwords than like natural language. File enumeration
//! (directory walks, the git index, git history) lives in thin collaborator
//! modules around a pure, parallelizable detection core.

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

/// Module defining the command-line interface arguments and structs.
pub mod cli;

/// Module for handling CLI commands and their execution logic.
pub mod commands;

/// Module for loading configuration.
pub mod config;

/// Module containing shared constants and compiled regexes.
pub mod constants;

/// Module defining findings and the per-run report context.
pub mod context;

/// Module composing the ignore matcher and all detectors per file.
pub mod engine;

/// Module defining the entry point logic shared by all binaries.
pub mod entry_point;

/// Module defining typed errors for the detection core.
pub mod error;

/// Module wrapping the git subprocess layer (staged files, history).
pub mod git;

/// Module containing the letter transition probability model.
pub mod model;

/// Module for diagnostic output formatting and progress reporting.
pub mod output;

/// Module containing the individual secret detectors.
pub mod rules;

/// Module containing utility functions (paths, globs, line splitting).
pub mod utils;
