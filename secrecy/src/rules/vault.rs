//! Detector for unencrypted Ansible vaults.

use crate::constants::VAULT_MARKER;
use crate::context::ReportContext;
use crate::utils::{lines, PathPatterns};
use std::path::Path;

/// Checks a file for plaintext vault content.
///
/// A file counts as a vault when its base filename is exactly `vault` or
/// its path matches a configured vault pattern. A vault that does not
/// start with the `$ANSIBLE_VAULT` marker is reported as a whole and not
/// inspected further. Every other file is scanned line by line for what
/// looks like a plaintext vault variable definition (`vault_…: …`).
pub fn check(ctx: &ReportContext, content: &[u8], path: &str, vault_patterns: &PathPatterns) {
    let named_vault = Path::new(path).file_name().is_some_and(|name| name == "vault");
    let is_vault_file = named_vault || vault_patterns.matches(path);

    if is_vault_file && !content.starts_with(VAULT_MARKER) {
        if named_vault {
            ctx.error(
                path,
                "has filename \"vault\" but does not start with \"$ANSIBLE_VAULT\"",
            );
        } else {
            ctx.error(
                path,
                "is a vault file (according to the configuration) \
                 but does not start with \"$ANSIBLE_VAULT\"",
            );
        }
        return;
    }

    for (lineno, line) in lines(content) {
        if line.starts_with(b"vault_") && line.contains(&b':') {
            ctx.line_error(
                path,
                lineno,
                format!(
                    "looks like a vault variable definition: {}",
                    String::from_utf8_lossy(line)
                ),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_patterns() -> PathPatterns {
        PathPatterns::compile(&[]).unwrap()
    }

    fn run(content: &[u8], path: &str) -> Vec<crate::context::Finding> {
        let ctx = ReportContext::new();
        check(&ctx, content, path, &no_patterns());
        ctx.sorted_findings()
    }

    #[test]
    fn encrypted_vault_is_clean() {
        assert!(run(b"$ANSIBLE_VAULT;1.1;AES256\n6138...", "group_vars/vault").is_empty());
    }

    #[test]
    fn plaintext_vault_file_is_reported_once() {
        let findings = run(b"plaintext data\n", "group_vars/vault");
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].line, None);
        assert!(findings[0].message.contains("has filename \"vault\""));
    }

    #[test]
    fn failed_marker_check_skips_line_scan() {
        // The early return means the vault_ line is never reported on its own.
        let findings = run(b"vault_password: hunter2\n", "vault");
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].line, None);
    }

    #[test]
    fn vault_variable_line_in_regular_file() {
        let findings = run(b"user: admin\nvault_password: hunter2\n", "group_vars/all.yml");
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].line, Some(2));
        assert!(findings[0]
            .message
            .contains("looks like a vault variable definition: vault_password: hunter2"));
    }

    #[test]
    fn vault_prefix_without_colon_is_clean() {
        assert!(run(b"vault_things are great\n", "notes.txt").is_empty());
    }

    #[test]
    fn configured_pattern_marks_vault_files() {
        let patterns = PathPatterns::compile(&["/host_vars/*/secrets.yml".to_owned()]).unwrap();
        let ctx = ReportContext::new();
        check(&ctx, b"not encrypted", "host_vars/web01/secrets.yml", &patterns);
        let findings = ctx.sorted_findings();
        assert_eq!(findings.len(), 1);
        assert!(findings[0]
            .message
            .contains("is a vault file (according to the configuration)"));
    }
}
