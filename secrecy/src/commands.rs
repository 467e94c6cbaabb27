//! CLI command execution logic.
//!
//! Each mode produces a file list, fans the scans out over a worker pool,
//! and lets the shared [`ReportContext`] collect whatever the detectors
//! find. A failed read or git call stops dispatching further scans and
//! aborts the run; findings recorded up to that point stay intact.

use crate::cli::OutputOptions;
use crate::context::ReportContext;
use crate::engine::SecretScanner;
use crate::git;
use crate::model::train;
use crate::output;
use crate::utils::{collect_files, normalize_display_path};
use anyhow::{bail, Context, Result};
use rayon::prelude::*;
use std::fs;
use std::io::Write;
use std::path::Path;

/// Checks a single file or every file under a directory, in its current
/// working-tree version (no git involved).
pub fn check_path(
    scanner: &SecretScanner,
    ctx: &ReportContext,
    path: &Path,
    opts: &OutputOptions,
) -> Result<()> {
    if path.is_file() {
        let display = normalize_display_path(path);
        if scanner.is_ignored(&display) {
            eprintln!("The file you specified ({display}) is ignored by the configuration");
            return Ok(());
        }
        return scan_worktree_file(scanner, ctx, path, opts);
    }
    if !path.is_dir() {
        bail!("path {} does not exist", path.display());
    }

    let files = collect_files(path);
    let progress = output::create_progress_bar(files.len() as u64);
    files.par_iter().try_for_each(|file| {
        let result = scan_worktree_file(scanner, ctx, file, opts);
        progress.inc(1);
        result
    })?;
    progress.finish_and_clear();
    Ok(())
}

/// Checks all files that are currently staged. Useful in a pre-commit hook.
pub fn check_staged(
    scanner: &SecretScanner,
    ctx: &ReportContext,
    opts: &OutputOptions,
) -> Result<()> {
    let files = git::staged_files()?;
    files
        .par_iter()
        .try_for_each(|path| scan_worktree_file(scanner, ctx, Path::new(path), opts))
}

/// Checks all files changed in all commits between the two given ones.
///
/// "Between" means: every commit reachable from `target` but not from
/// `base` — the intuitive notion of "new commits" in a pre-receive hook.
/// File contents are read from the commit, not from the working tree.
pub fn check_between(
    scanner: &SecretScanner,
    ctx: &ReportContext,
    base: &str,
    target: &str,
    opts: &OutputOptions,
) -> Result<()> {
    let commits = git::commits_between(base, target)?;
    for commit in commits {
        // Label findings with the commit they were found in.
        ctx.set_commit(Some(commit.clone()));

        let files = git::changed_files(&commit)?;
        files.par_iter().try_for_each(|path| {
            if opts.verbose {
                eprintln!("checking {path} at {commit}");
            }
            let content = git::file_at_commit(&commit, path)?;
            scanner.scan_file(ctx, &content, path);
            Ok::<_, anyhow::Error>(())
        })?;
    }
    ctx.set_commit(None);
    Ok(())
}

/// Regenerates the transition table source from a wordlist corpus.
pub fn gen_model(corpus: &Path, writer: &mut impl Write) -> Result<()> {
    let content = fs::read(corpus)
        .with_context(|| format!("failed to read corpus {}", corpus.display()))?;
    train::print_table(&content, writer)
}

fn scan_worktree_file(
    scanner: &SecretScanner,
    ctx: &ReportContext,
    file: &Path,
    opts: &OutputOptions,
) -> Result<()> {
    let display = normalize_display_path(file);
    if opts.verbose {
        eprintln!("checking {display}");
    }
    let content =
        fs::read(file).with_context(|| format!("failed to read {}", file.display()))?;
    scanner.scan_file(ctx, &content, &display);
    Ok(())
}
