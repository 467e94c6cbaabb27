//! Path utilities: display normalization, pattern matching against the
//! configured glob lists, and file discovery for directory scans.

use crate::error::SecrecyError;
use globset::{Glob, GlobSet, GlobSetBuilder};
use std::path::{Path, PathBuf};

/// Normalizes a path for matching and display.
///
/// - Converts backslashes to forward slashes (for cross-platform consistency)
/// - Strips a leading "./" prefix
#[must_use]
pub fn normalize_display_path(path: &Path) -> String {
    let s = path.to_string_lossy();
    let clean = s.trim_start_matches(r"\\?\");
    let normalized = clean.replace('\\', "/");
    normalized
        .strip_prefix("./")
        .unwrap_or(&normalized)
        .to_owned()
}

/// A compiled list of path patterns from the configuration.
///
/// Each source pattern uses the scanner's dialect: a pattern starting with
/// `/` is anchored at the repository root (the slash itself is stripped),
/// anything else matches as a suffix, i.e. as `*<pattern>`. Within a
/// pattern, `*`, `?` and bracket classes have shell-glob meaning and `*`
/// crosses directory separators.
#[derive(Debug)]
pub struct PathPatterns {
    set: GlobSet,
}

impl PathPatterns {
    /// Compiles a pattern list. An unparsable pattern is a fatal
    /// configuration error.
    pub fn compile(patterns: &[String]) -> Result<Self, SecrecyError> {
        let mut builder = GlobSetBuilder::new();
        for pattern in patterns {
            let adjusted = match pattern.strip_prefix('/') {
                Some(anchored) => anchored.to_owned(),
                None => format!("*{pattern}"),
            };
            let glob = Glob::new(&adjusted).map_err(|source| SecrecyError::InvalidPattern {
                pattern: pattern.clone(),
                source,
            })?;
            builder.add(glob);
        }
        let set = builder
            .build()
            .map_err(|source| SecrecyError::InvalidPattern {
                pattern: patterns.join(", "),
                source,
            })?;
        Ok(Self { set })
    }

    /// Whether `path` matches any pattern. A leading `./` on the path is
    /// ignored. An empty pattern list matches nothing.
    #[must_use]
    pub fn matches(&self, path: &str) -> bool {
        let path = path.strip_prefix("./").unwrap_or(path);
        self.set.is_match(path)
    }
}

/// Collects every regular file under `root`, sorted for deterministic
/// scan order.
///
/// Unlike the analyzer-style walkers this deliberately ignores gitignore
/// files: secrets hide in exactly the files people exclude from review.
/// Only `.git` directories are pruned.
#[must_use]
pub fn collect_files(root: &Path) -> Vec<PathBuf> {
    use ignore::WalkBuilder;

    let walker = WalkBuilder::new(root)
        .hidden(false)
        .ignore(false)
        .git_ignore(false)
        .git_global(false)
        .git_exclude(false)
        .filter_entry(|entry| entry.file_name() != ".git")
        .build();

    let mut files: Vec<PathBuf> = walker
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_some_and(|ft| ft.is_file()))
        .map(|entry| entry.into_path())
        .collect();
    files.sort();
    files
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn compiled(patterns: &[&str]) -> PathPatterns {
        let owned: Vec<String> = patterns.iter().map(|&p| p.to_owned()).collect();
        PathPatterns::compile(&owned).unwrap()
    }

    #[test]
    fn empty_pattern_list_matches_nothing() {
        let patterns = compiled(&[]);
        assert!(!patterns.matches("anything"));
        assert!(!patterns.matches("deep/path/file.txt"));
    }

    #[test]
    fn leading_slash_anchors_at_root() {
        let patterns = compiled(&["/secrets.txt"]);
        assert!(patterns.matches("secrets.txt"));
        assert!(!patterns.matches("sub/secrets.txt"));
    }

    #[test]
    fn unanchored_pattern_matches_as_suffix() {
        let patterns = compiled(&["secrets.txt"]);
        assert!(patterns.matches("secrets.txt"));
        assert!(patterns.matches("sub/secrets.txt"));
    }

    #[test]
    fn dot_slash_prefix_is_stripped_before_matching() {
        let patterns = compiled(&["/secrets.txt"]);
        assert!(patterns.matches("./secrets.txt"));
    }

    #[test]
    fn glob_metacharacters_work() {
        let patterns = compiled(&["/host_vars/*/vault", "*.pem", "/file?.txt"]);
        assert!(patterns.matches("host_vars/web01/vault"));
        assert!(patterns.matches("certs/server.pem"));
        assert!(patterns.matches("file1.txt"));
        assert!(!patterns.matches("file12.txt"));
    }

    #[test]
    fn invalid_pattern_is_rejected() {
        let result = PathPatterns::compile(&["[unclosed".to_owned()]);
        assert!(result.is_err());
    }

    #[test]
    fn normalize_strips_dot_slash_and_backslashes() {
        assert_eq!(
            normalize_display_path(Path::new("./sub/file.txt")),
            "sub/file.txt"
        );
        assert_eq!(
            normalize_display_path(Path::new(r"sub\file.txt")),
            "sub/file.txt"
        );
    }

    #[test]
    fn collect_files_skips_git_dir_and_sorts() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join(".git")).unwrap();
        fs::write(dir.path().join(".git/HEAD"), "ref: x").unwrap();
        fs::create_dir_all(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("sub/b.txt"), "b").unwrap();
        fs::write(dir.path().join("a.txt"), "a").unwrap();

        let files = collect_files(dir.path());
        let names: Vec<String> = files
            .iter()
            .map(|p| normalize_display_path(p.strip_prefix(dir.path()).unwrap()))
            .collect();
        assert_eq!(names, vec!["a.txt", "sub/b.txt"]);
    }
}
