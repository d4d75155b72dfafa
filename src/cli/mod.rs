//! Driver for the `mpack` command-line tool.
//!
//! The binary is a thin consumer of the library: it frames each input into
//! values with the validator, then hands every well-formed value to the
//! pretty-printer. Messages go to stderr, gated by a process-wide display
//! level; value output goes to stdout.

pub mod args;

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;
use std::sync::atomic::{AtomicU32, Ordering};

use anyhow::{anyhow, Context};

use crate::codec::skip::check;
use crate::print::fprint;

use args::Args;

// ─────────────────────────────────────────────────────────────────────────────
// Display level
// ─────────────────────────────────────────────────────────────────────────────

/// 0 = silent; 1 = errors only; 2 = normal; 3+ = verbose.
pub static DISPLAY_LEVEL: AtomicU32 = AtomicU32::new(2);

/// Returns the current display level.
#[inline]
pub fn display_level() -> u32 {
    DISPLAY_LEVEL.load(Ordering::Relaxed)
}

/// Sets the display level.
#[inline]
pub fn set_display_level(level: u32) {
    DISPLAY_LEVEL.store(level, Ordering::Relaxed);
}

// ─────────────────────────────────────────────────────────────────────────────
// Dispatch
// ─────────────────────────────────────────────────────────────────────────────

/// Per-input result summary.
struct Stats {
    values: u64,
    bytes: u64,
}

/// Execute the operation selected by argument parsing.
///
/// Returns the process exit code (0 = every input was well-formed,
/// 1 = at least one input failed).
pub fn run(args: Args) -> i32 {
    let mut failures = 0u32;

    if args.files.is_empty() {
        match process_reader("(stdin)", io::stdin().lock(), args.test) {
            Ok(stats) => report("(stdin)", &stats, args.test),
            Err(err) => {
                failures += 1;
                if display_level() >= 1 {
                    eprintln!("mpack: {err:#}");
                }
            }
        }
    } else {
        for path in &args.files {
            match process_file(path, args.test) {
                Ok(stats) => report(&path.display().to_string(), &stats, args.test),
                Err(err) => {
                    failures += 1;
                    if display_level() >= 1 {
                        eprintln!("mpack: {err:#}");
                    }
                }
            }
        }
    }

    if failures > 0 {
        1
    } else {
        0
    }
}

fn report(name: &str, stats: &Stats, test_only: bool) {
    if test_only && display_level() >= 2 {
        println!("{name}: {} values, {} bytes OK", stats.values, stats.bytes);
    } else if display_level() >= 3 {
        eprintln!(
            "mpack: {name}: {} values, {} bytes",
            stats.values, stats.bytes
        );
    }
}

fn process_file(path: &Path, test_only: bool) -> anyhow::Result<Stats> {
    let data = fs::read(path).with_context(|| format!("cannot read {}", path.display()))?;
    process_bytes(&path.display().to_string(), &data, test_only)
}

fn process_reader<R: Read>(name: &str, mut reader: R, test_only: bool) -> anyhow::Result<Stats> {
    let mut data = Vec::new();
    reader
        .read_to_end(&mut data)
        .with_context(|| format!("cannot read {name}"))?;
    process_bytes(name, &data, test_only)
}

/// Walk every value in `data`, validating each and printing it unless
/// `test_only` is set.
fn process_bytes(name: &str, data: &[u8], test_only: bool) -> anyhow::Result<Stats> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let mut cur: &[u8] = data;
    let mut values = 0u64;
    while !cur.is_empty() {
        let start = cur;
        let offset = data.len() - start.len();
        check(&mut cur)
            .map_err(|err| anyhow!("{name}: value {values} at offset {offset}: {err}"))?;
        if !test_only {
            let encoded = &start[..start.len() - cur.len()];
            fprint(&mut out, encoded).context("cannot write to stdout")?;
            out.write_all(b"\n").context("cannot write to stdout")?;
        }
        values += 1;
    }

    Ok(Stats {
        values,
        bytes: data.len() as u64,
    })
}
