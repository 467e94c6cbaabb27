//! Diagnostic output formatting and progress reporting.

use crate::context::Finding;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::time::Duration;

/// Formats one finding as the canonical diagnostic line:
/// `ERROR in <path>[:<line>] (at <commit>) => <message>`.
#[must_use]
pub fn format_finding(finding: &Finding) -> String {
    let mut text = format!("ERROR in {}", finding.path);
    if let Some(line) = finding.line {
        text.push_str(&format!(":{line}"));
    }
    if let Some(commit) = &finding.commit {
        text.push_str(&format!(" (at {commit})"));
    }
    text.push_str(&format!(" => {}", finding.message));
    text
}

/// Prints all findings as diagnostics on stderr.
pub fn print_findings(findings: &[Finding]) {
    for finding in findings {
        eprintln!("{}", format_finding(finding).red());
    }
}

/// Prints the closing summary on stderr when the run found anything.
pub fn print_summary(errored: bool) {
    if errored {
        eprintln!();
        eprintln!("{}", "Potentially found unencrypted secrets!".red().bold());
    }
}

/// Create a progress bar for scanning a known number of files.
///
/// In test mode, returns a hidden progress bar to avoid polluting test output.
///
/// # Panics
///
/// Panics if the progress style template is invalid (should never happen
/// with the hardcoded template).
#[must_use]
pub fn create_progress_bar(total_files: u64) -> ProgressBar {
    if cfg!(test) {
        return ProgressBar::hidden();
    }

    let pb =
        ProgressBar::with_draw_target(Some(total_files), ProgressDrawTarget::stderr_with_hz(20));
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.cyan} [{bar:40.cyan/blue}] {pos}/{len} files ({percent}%) {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓░"),
    );
    pb.set_message("scanning...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

#[cfg(test)]
mod tests {
    use super::*;

    fn finding(line: Option<usize>, commit: Option<&str>) -> Finding {
        Finding {
            path: "group_vars/all.yml".to_owned(),
            line,
            message: "looks like a vault variable definition: vault_pw: x".to_owned(),
            commit: commit.map(str::to_owned),
        }
    }

    #[test]
    fn file_level_format() {
        assert_eq!(
            format_finding(&finding(None, None)),
            "ERROR in group_vars/all.yml => looks like a vault variable definition: vault_pw: x"
        );
    }

    #[test]
    fn line_level_format() {
        assert_eq!(
            format_finding(&finding(Some(7), None)),
            "ERROR in group_vars/all.yml:7 => looks like a vault variable definition: vault_pw: x"
        );
    }

    #[test]
    fn commit_label_format() {
        assert_eq!(
            format_finding(&finding(Some(7), Some("deadbeef"))),
            "ERROR in group_vars/all.yml:7 (at deadbeef) => \
             looks like a vault variable definition: vault_pw: x"
        );
    }
}
