// src/cli.rs
use clap::{ArgAction, Parser};

use crate::core::tree::PrintOptions;

#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None, args_override_self = true)]
pub struct Args {
    /// Show files in directory tree instead of per-directory totals
    #[arg(
        short = 'f',
        long,
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value_t = false,
        default_missing_value = "true"
    )]
    pub files: bool,
}

impl Args {
    #[inline]
    #[must_use]
    pub const fn print_options(&self) -> PrintOptions {
        PrintOptions {
            show_files: self.files,
            color: true,
        }
    }
}

/// Sends `tracing` output to stderr, filtered by `RUST_LOG` (default `warn`).
#[inline]
pub fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
