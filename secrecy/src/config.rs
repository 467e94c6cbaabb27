//! Configuration loading.
//!
//! The configuration lives in an INI file (`secrecy.ini` by default):
//!
//! ```ini
//! [secrecy]
//! ignore =
//!     *.png
//!     /docs/examples
//! vaults =
//!     /host_vars/*/vault.yml
//! ```
//!
//! Values are newline-separated glob pattern lists; continuation lines are
//! indented, `#`/`;` lines are comments. This is the configparser dialect
//! the format was defined with, parsed here directly — the dialect is tiny
//! and no common INI crate reproduces its indentation-continued values.

use crate::constants::CONFIG_FILENAME;
use anyhow::{bail, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Pattern lists driving the scanner.
#[derive(Debug, Default, Clone)]
pub struct Config {
    /// Paths matching any of these globs are not scanned at all.
    pub ignore: Vec<String>,
    /// Paths matching any of these globs must hold encrypted vaults.
    pub vaults: Vec<String>,
}

impl Config {
    /// Loads configuration from `explicit` when given, from
    /// `secrecy.ini` in the working directory when that exists, and
    /// otherwise returns the empty default.
    ///
    /// # Errors
    ///
    /// Fails when the selected file cannot be read or parsed. A named but
    /// missing `--config` file is an error; the implicit default is not.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => Some(path.to_path_buf()),
            None => Path::new(CONFIG_FILENAME)
                .is_file()
                .then(|| PathBuf::from(CONFIG_FILENAME)),
        };
        match path {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::default()),
        }
    }

    /// Loads configuration from a specific file.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read configuration file {}", path.display()))?;
        let mut config = Self::default();
        for (key, value) in parse_section(&content, "secrecy")
            .with_context(|| format!("malformed configuration file {}", path.display()))?
        {
            match key.as_str() {
                "ignore" => config.ignore = split_patterns(&value),
                "vaults" => config.vaults = split_patterns(&value),
                other => bail!(
                    "unknown key `{other}` in [secrecy] section of {}",
                    path.display()
                ),
            }
        }
        Ok(config)
    }
}

/// Splits a (possibly multi-line) value into trimmed, non-empty patterns.
fn split_patterns(value: &str) -> Vec<String> {
    value
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Extracts `key = value` pairs from one INI section. Indented non-blank
/// lines continue the previous value.
fn parse_section(content: &str, section: &str) -> Result<Vec<(String, String)>> {
    let mut pairs: Vec<(String, String)> = Vec::new();
    let mut in_section = false;

    for (lineno, raw) in content.lines().enumerate() {
        let line = raw.trim_end();
        let trimmed = line.trim_start();
        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with(';') {
            continue;
        }

        if trimmed.starts_with('[') {
            let name = trimmed
                .strip_prefix('[')
                .and_then(|rest| rest.strip_suffix(']'))
                .with_context(|| format!("unterminated section header on line {}", lineno + 1))?;
            in_section = name.eq_ignore_ascii_case(section);
            continue;
        }
        if !in_section {
            continue;
        }

        if line.starts_with(char::is_whitespace) {
            // Continuation of the previous value.
            let Some((_, value)) = pairs.last_mut() else {
                bail!("continuation line {} without a key", lineno + 1);
            };
            value.push('\n');
            value.push_str(trimmed);
            continue;
        }

        let Some((key, value)) = line.split_once(['=', ':']) else {
            bail!("expected `key = value` on line {}", lineno + 1);
        };
        pairs.push((
            key.trim().to_ascii_lowercase(),
            value.trim().to_owned(),
        ));
    }

    Ok(pairs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_config(content: &str) -> (TempDir, PathBuf) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("secrecy.ini");
        let mut file = fs::File::create(&path).unwrap();
        write!(file, "{content}").unwrap();
        (dir, path)
    }

    #[test]
    fn parses_multiline_pattern_lists() {
        let (_dir, path) = write_config(
            "[secrecy]\n\
             ignore =\n    *.png\n    /docs\n\
             vaults =\n    /host_vars/*/vault\n",
        );
        let config = Config::load_from_path(&path).unwrap();
        assert_eq!(config.ignore, vec!["*.png", "/docs"]);
        assert_eq!(config.vaults, vec!["/host_vars/*/vault"]);
    }

    #[test]
    fn single_line_values_and_comments() {
        let (_dir, path) = write_config(
            "# scanner settings\n[secrecy]\n; more notes\nignore = *.lock\n",
        );
        let config = Config::load_from_path(&path).unwrap();
        assert_eq!(config.ignore, vec!["*.lock"]);
        assert!(config.vaults.is_empty());
    }

    #[test]
    fn missing_section_yields_defaults() {
        let (_dir, path) = write_config("[other]\nignore = *.png\n");
        let config = Config::load_from_path(&path).unwrap();
        assert!(config.ignore.is_empty());
        assert!(config.vaults.is_empty());
    }

    #[test]
    fn other_sections_are_not_read_into_ours() {
        let (_dir, path) = write_config(
            "[secrecy]\nignore = *.png\n[other]\nignore = *.jpg\n",
        );
        let config = Config::load_from_path(&path).unwrap();
        assert_eq!(config.ignore, vec!["*.png"]);
    }

    #[test]
    fn named_but_missing_file_is_fatal() {
        assert!(Config::load(Some(Path::new("/nonexistent/secrecy.ini"))).is_err());
    }

    #[test]
    fn unknown_key_is_fatal() {
        let (_dir, path) = write_config("[secrecy]\nignored = oops\n");
        assert!(Config::load_from_path(&path).is_err());
    }

    #[test]
    fn garbage_line_is_fatal() {
        let (_dir, path) = write_config("[secrecy]\njust some words\n");
        assert!(Config::load_from_path(&path).is_err());
    }
}
