//! Main binary entry point for the `secrecy` scanner.
//!
//! This binary simply delegates to the shared `entry_point::run_with_args()`
//! function to ensure consistent behavior across all entry points.

use anyhow::Result;

fn main() -> Result<()> {
    let code = secrecy::entry_point::run_with_args(std::env::args().skip(1).collect())?;
    std::process::exit(code);
}
