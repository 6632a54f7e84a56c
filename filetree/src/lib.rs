// src/lib.rs
pub mod cli;
pub mod core;
pub mod models;

use anyhow::{Context as _, Result};
use std::env;
use std::io::{self, Write};
use std::path::Path;

pub use cli::Args;
pub use crate::core::blame::{BlameSource, GitBlame, parse_line_porcelain};
pub use crate::core::ignore::{Patterns, load_ignore_patterns, load_pattern_file};
pub use crate::core::tree::{PrintOptions, TreePrinter};
pub use models::{AuthorStat, ColorBand, Contributions, calculate_stats};

/// Prints the authorship tree of the current working directory to stdout.
///
/// A reader that closes stdout early (`filetree | head`) ends the run
/// quietly instead of failing it.
///
/// # Errors
///
/// Returns an error if the working directory cannot be determined, the ignore
/// files cannot be read, or the walk fails.
#[inline]
pub fn run(args: &Args) -> Result<()> {
    let dir = env::current_dir().context("Error getting current directory")?;
    let mut stdout = io::stdout().lock();
    match render(args, &dir, &GitBlame, &mut stdout) {
        Err(err) if is_broken_pipe(&err) => {
            tracing::debug!("stdout closed, stopping early");
            Ok(())
        }
        result => result,
    }
}

/// Whether anything in the error chain is a write to a closed pipe.
#[inline]
#[must_use]
pub fn is_broken_pipe(err: &anyhow::Error) -> bool {
    err.chain().any(|cause| {
        cause
            .downcast_ref::<io::Error>()
            .is_some_and(|io_err| io_err.kind() == io::ErrorKind::BrokenPipe)
    })
}

/// Loads the ignore patterns of `dir` and prints its tree to `out`.
///
/// # Errors
///
/// Returns an error if the ignore files cannot be read or the walk fails.
#[inline]
pub fn render<S: BlameSource, W: Write>(
    args: &Args,
    dir: &Path,
    source: &S,
    out: &mut W,
) -> Result<()> {
    let patterns = load_ignore_patterns(dir).context("Error loading ignore patterns")?;
    TreePrinter::new(&patterns, source, args.print_options())
        .print(dir, out)
        .context("Error printing directory tree")
}
