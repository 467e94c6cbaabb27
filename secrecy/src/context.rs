//! Findings and the per-run report context.

use serde::Serialize;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, PoisonError, RwLock};

/// A single detected secret (or suspected secret).
///
/// Immutable once recorded. File-level findings (e.g. a mis-marked vault
/// file) carry no line number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    /// Repository-relative path of the offending file.
    pub path: String,
    /// 1-based line number, absent for file-level findings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
    /// Description of the finding.
    pub message: String,
    /// Commit the file content was read from, when scanning history.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commit: Option<String>,
}

/// Accumulates findings for one scanner invocation.
///
/// Exactly one context exists per run. Detectors append through shared
/// references, so the context can be handed to a parallel scan loop; the
/// error flag only ever moves from `false` to `true`.
#[derive(Debug, Default)]
pub struct ReportContext {
    findings: Mutex<Vec<Finding>>,
    errored: AtomicBool,
    commit: RwLock<Option<String>>,
}

impl ReportContext {
    /// Creates an empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a file-level finding.
    pub fn error(&self, path: &str, message: impl Into<String>) {
        self.record(path, None, message.into());
    }

    /// Records a finding on a specific line.
    pub fn line_error(&self, path: &str, line: usize, message: impl Into<String>) {
        self.record(path, Some(line), message.into());
    }

    /// Sets the commit label attached to findings recorded from now on.
    /// The history walker updates this before each commit's file batch.
    pub fn set_commit(&self, commit: Option<String>) {
        *self.commit.write().unwrap_or_else(PoisonError::into_inner) = commit;
    }

    /// Whether any finding has been recorded.
    #[must_use]
    pub fn errored(&self) -> bool {
        self.errored.load(Ordering::Relaxed)
    }

    /// Returns all findings, stably sorted by `(path, line)` so that
    /// parallel scans produce reproducible output.
    #[must_use]
    pub fn sorted_findings(&self) -> Vec<Finding> {
        let mut findings = self
            .findings
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        findings.sort_by(|a, b| (a.path.as_str(), a.line).cmp(&(b.path.as_str(), b.line)));
        findings
    }

    fn record(&self, path: &str, line: Option<usize>, message: String) {
        let commit = self
            .commit
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        self.errored.store(true, Ordering::Relaxed);
        self.findings
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Finding {
                path: path.to_owned(),
                line,
                message,
                commit,
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errored_is_monotonic() {
        let ctx = ReportContext::new();
        assert!(!ctx.errored());
        ctx.error("a", "file-level");
        assert!(ctx.errored());
        ctx.line_error("a", 3, "line-level");
        assert!(ctx.errored());
    }

    #[test]
    fn findings_sort_by_path_then_line() {
        let ctx = ReportContext::new();
        ctx.line_error("b.txt", 2, "late");
        ctx.line_error("a.txt", 9, "second");
        ctx.error("a.txt", "first");
        let sorted = ctx.sorted_findings();
        assert_eq!(sorted[0].path, "a.txt");
        assert_eq!(sorted[0].line, None);
        assert_eq!(sorted[1].line, Some(9));
        assert_eq!(sorted[2].path, "b.txt");
    }

    #[test]
    fn commit_label_is_attached_at_record_time() {
        let ctx = ReportContext::new();
        ctx.line_error("f", 1, "before");
        ctx.set_commit(Some("abc123".to_owned()));
        ctx.line_error("f", 2, "during");
        ctx.set_commit(None);
        ctx.line_error("f", 3, "after");
        let findings = ctx.sorted_findings();
        assert_eq!(findings[0].commit, None);
        assert_eq!(findings[1].commit, Some("abc123".to_owned()));
        assert_eq!(findings[2].commit, None);
    }
}
