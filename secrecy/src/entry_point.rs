//! Shared entry point for all binaries.
//!
//! Parsing, configuration, scanning and reporting live behind one function
//! returning the process exit code, so integration tests can drive the
//! complete CLI in-process and capture its stdout-bound output.

use crate::cli::{Cli, Commands};
use crate::commands;
use crate::config::Config;
use crate::context::ReportContext;
use crate::engine::SecretScanner;
use crate::output;
use anyhow::{Context, Result};
use clap::Parser;
use std::io::Write;

/// Runs the CLI with the given arguments (binary name excluded) and
/// returns the exit code: 0 clean, 1 findings, 2 argument errors.
pub fn run_with_args(args: Vec<String>) -> Result<i32> {
    run_with_args_to(args, &mut std::io::stdout())
}

/// Like [`run_with_args`], with stdout-bound output redirected to `writer`.
pub fn run_with_args_to(args: Vec<String>, writer: &mut impl Write) -> Result<i32> {
    let argv = std::iter::once("secrecy".to_owned()).chain(args);
    let cli = match Cli::try_parse_from(argv) {
        Ok(cli) => cli,
        Err(err) => {
            err.print().context("failed to print argument error")?;
            return Ok(if err.use_stderr() { 2 } else { 0 });
        }
    };

    if let Commands::GenModel { corpus } = &cli.command {
        commands::gen_model(corpus, writer)?;
        return Ok(0);
    }

    let config = Config::load(cli.config.as_deref())?;
    let scanner = SecretScanner::new(&config)?;
    let ctx = ReportContext::new();

    match &cli.command {
        Commands::Path { path } => commands::check_path(&scanner, &ctx, path, &cli.output)?,
        Commands::Staged => commands::check_staged(&scanner, &ctx, &cli.output)?,
        Commands::Between { base, target } => {
            commands::check_between(&scanner, &ctx, base, target, &cli.output)?;
        }
        Commands::GenModel { .. } => {} // handled above
    }

    let findings = ctx.sorted_findings();
    if cli.output.json {
        serde_json::to_writer_pretty(&mut *writer, &findings)
            .context("failed to serialize findings")?;
        writeln!(writer)?;
    } else {
        output::print_findings(&findings);
    }
    output::print_summary(ctx.errored());

    Ok(i32::from(ctx.errored()))
}
