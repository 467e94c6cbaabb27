//! Typed errors for the detection core.
//!
//! Collaborator layers (file reads, git, configuration I/O) use `anyhow`
//! with context at the call site; these variants cover the I/O-free
//! failures the core itself can produce.

use thiserror::Error;

/// Errors produced while building the detection core.
#[derive(Debug, Error)]
pub enum SecrecyError {
    /// A configured glob pattern does not parse.
    #[error("invalid glob pattern `{pattern}` in configuration: {source}")]
    InvalidPattern {
        /// The offending pattern as written in the configuration.
        pattern: String,
        /// The underlying glob parse error.
        source: globset::Error,
    },

    /// A transition distribution would hand out a negative probability for
    /// prior letters it does not name explicitly.
    #[error(
        "malformed probability model: letter `{letter}` has negative smoothing mass \
         for unlisted prior letters"
    )]
    MalformedModel {
        /// The letter whose distribution is malformed.
        letter: char,
    },
}
