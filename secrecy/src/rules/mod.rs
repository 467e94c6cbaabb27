//! Secret detectors.
//!
//! Each detector is a pure function over `(content, path)` that appends
//! findings to the shared [`crate::context::ReportContext`]. The engine
//! runs them in a fixed order per file; none of them ever aborts a scan.

/// Detector for password-like strings, using the letter transition model.
pub mod entropy;
/// Detector for unencrypted private key material.
pub mod private_key;
/// Detector for unencrypted Ansible vaults and vault variable definitions.
pub mod vault;
