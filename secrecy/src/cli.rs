//! Command-line interface definition.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Usage examples shown at the bottom of --help.
const EXAMPLES_HELP: &str = "\
EXAMPLES:
  secrecy path <path>
      Check a single given file or all files in a given directory.

  secrecy staged
      Check all files that are currently staged by git (useful as a
      pre-commit hook).

  secrecy between <base-commit> <target-commit>
      Check all files that were changed somewhere between two commits.
      Useful as a pre-receive hook: only checking the final files does not
      tell you whether secrets are hiding somewhere in the git history.
      This checks the commits given by `git rev-list ^base target`.
";

/// Options for output formatting and verbosity.
#[derive(Args, Debug, Default, Clone)]
pub struct OutputOptions {
    /// Print findings as JSON on stdout instead of diagnostics on stderr.
    #[arg(long, global = true)]
    pub json: bool,

    /// Show every file as it is scanned.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Command line interface configuration using `clap`.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "secrecy - scans files, the git index, or git history for unencrypted secrets",
    long_about = None,
    after_help = EXAMPLES_HELP
)]
pub struct Cli {
    /// The subcommand selecting what to scan.
    #[command(subcommand)]
    pub command: Commands,

    /// Path to the configuration file (default: `secrecy.ini` when present).
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output formatting options.
    #[command(flatten)]
    pub output: OutputOptions,
}

/// Available scan modes.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check a single file or every file under a directory
    Path {
        /// The path to (recursively) check.
        path: PathBuf,
    },
    /// Check all files currently staged by git
    Staged,
    /// Check all files changed in commits between two given ones
    Between {
        /// Start of the commit range to be checked (exclusive).
        base: String,
        /// End of the commit range to be checked (inclusive).
        target: String,
    },
    /// Regenerate the letter transition table from a wordlist corpus
    #[command(name = "gen-model")]
    GenModel {
        /// Wordlist file, one token per line.
        corpus: PathBuf,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_between_subcommand() {
        let cli = Cli::try_parse_from(["secrecy", "between", "abc", "def"]).unwrap();
        match cli.command {
            Commands::Between { base, target } => {
                assert_eq!(base, "abc");
                assert_eq!(target, "def");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn config_flag_is_global() {
        let cli = Cli::try_parse_from(["secrecy", "staged", "--config", "custom.ini"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("custom.ini")));
    }

    #[test]
    fn subcommand_is_required() {
        assert!(Cli::try_parse_from(["secrecy"]).is_err());
    }
}
