//! Git subprocess layer.
//!
//! The scanner core never touches version control; these helpers feed it
//! file lists and historical blobs. Any git failure is fatal for the whole
//! run — a half-enumerated history is worse than no answer.

use anyhow::{bail, Context, Result};
use std::process::Command;

/// Runs git with `args` and returns its stdout, failing on non-zero exit.
fn git_output(args: &[&str]) -> Result<Vec<u8>> {
    let output = Command::new("git")
        .args(args)
        .output()
        .with_context(|| format!("failed to run `git {}`", args.join(" ")))?;
    if !output.status.success() {
        bail!(
            "`git {}` failed: {}",
            args.join(" "),
            String::from_utf8_lossy(&output.stderr).trim()
        );
    }
    Ok(output.stdout)
}

/// Splits subprocess output into non-empty UTF-8 lines.
fn output_lines(raw: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(raw)
        .lines()
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Paths of all files currently staged in the index.
pub fn staged_files() -> Result<Vec<String>> {
    Ok(output_lines(&git_output(&[
        "diff", "--staged", "--name-only",
    ])?))
}

/// Commits reachable from `target` but not from `base`, newest first —
/// the "new commits" a pre-receive hook sees.
pub fn commits_between(base: &str, target: &str) -> Result<Vec<String>> {
    let exclude = format!("^{base}");
    Ok(output_lines(&git_output(&["rev-list", &exclude, target])?))
}

/// Paths changed (and not deleted) by `commit` relative to its parent.
pub fn changed_files(commit: &str) -> Result<Vec<String>> {
    let parent = format!("{commit}^");
    Ok(output_lines(&git_output(&[
        "diff",
        "--diff-filter=d",
        "--name-only",
        &parent,
        commit,
    ])?))
}

/// Content of `path` as of `commit`.
pub fn file_at_commit(commit: &str, path: &str) -> Result<Vec<u8>> {
    let spec = format!("{commit}:{path}");
    git_output(&["show", &spec])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_lines_drops_empty_entries() {
        assert_eq!(
            output_lines(b"a.txt\nsub/b.txt\n\n"),
            vec!["a.txt".to_owned(), "sub/b.txt".to_owned()]
        );
        assert!(output_lines(b"").is_empty());
    }
}
