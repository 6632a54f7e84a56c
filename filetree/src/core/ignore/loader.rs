// src/core/ignore/loader.rs
use crate::core::ignore::Patterns;
use anyhow::{Context as _, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

pub const GITIGNORE_FILE: &str = ".gitignore";
pub const FILETREE_IGNORE_FILE: &str = ".filetree.toml";

/// Reads one ignore file into a list of pattern lines.
///
/// Lines are trimmed; blank lines and `#` comments are dropped. A file that
/// does not exist yields an empty list.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read.
#[inline]
pub fn load_pattern_file(path: &Path) -> Result<Vec<String>> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            tracing::trace!("no ignore file at {}", path.display());
            return Ok(Vec::new());
        }
        Err(err) => {
            return Err(err).with_context(|| format!("Failed to read {}", path.display()));
        }
    };

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_owned)
        .collect())
}

/// Loads ignore patterns from `.gitignore` and `.filetree.toml` in `dir`,
/// in that order.
///
/// # Errors
///
/// This function may return an error if either file exists but cannot be
/// read. Missing files are not an error.
#[inline]
pub fn load_ignore_patterns(dir: &Path) -> Result<Patterns> {
    let mut patterns = Patterns::new();

    for name in [GITIGNORE_FILE, FILETREE_IGNORE_FILE] {
        let lines = load_pattern_file(&dir.join(name))
            .with_context(|| format!("error loading {name}"))?;
        tracing::debug!("loaded {} patterns from {name}", lines.len());
        for line in &lines {
            patterns.add_pattern(line);
        }
    }

    Ok(patterns)
}
