// src/main.rs
use clap::Parser;
use filetree::Args;
use filetree::cli::init_logging;
use std::io::{self, Write as _};

fn main() {
    init_logging();
    let args = Args::parse();

    // Failures are reported on stdout and the exit status stays 0
    if let Err(err) = filetree::run(&args) {
        if !filetree::is_broken_pipe(&err) {
            let _ = writeln!(io::stdout(), "{err:#}");
        }
    }
}
