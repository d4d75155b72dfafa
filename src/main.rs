//! Binary entry point for the `mpack` command-line tool.
//!
//! Parses arguments, derives the display level from the `-q`/`-v` counts,
//! and dispatches to [`mpack::cli::run`], which returns the process exit
//! code.

use clap::Parser;

use mpack::cli::args::Args;
use mpack::cli::{run, set_display_level};

fn main() {
    let args = Args::parse();

    // Base level 2 (normal); each -v raises, each -q lowers.
    let level = (2 + args.verbose as i32 - args.quiet as i32).clamp(0, 4);
    set_display_level(level as u32);

    std::process::exit(run(args));
}
