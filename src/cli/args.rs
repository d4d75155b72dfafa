//! Command-line definition for the `mpack` tool.

use std::path::PathBuf;

use clap::Parser;

/// Validate and pretty-print files of encoded values.
///
/// Each input is treated as a back-to-back sequence of encoded values; every
/// value is validated, and (unless `--test` is given) rendered as JSON-like
/// text, one value per line.
#[derive(Debug, Parser)]
#[command(name = "mpack", version, about)]
pub struct Args {
    /// Input files; reads standard input when none are given.
    pub files: Vec<PathBuf>,

    /// Validate only: report value and byte counts, print nothing.
    #[arg(short = 't', long = "test")]
    pub test: bool,

    /// Lower the display level (repeatable). At -qq even errors are silent.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub quiet: u8,

    /// Raise the display level (repeatable).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
