// src/core/blame.rs
use crate::models::Contributions;
use anyhow::{Context as _, Result, bail};
use std::path::Path;
use std::process::Command;

/// Something that can attribute every line of a file to an author.
pub trait BlameSource {
    /// Returns the per-author line counts for the current content of `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be attributed.
    fn contributions(&self, path: &Path) -> Result<Contributions>;
}

/// Attributes lines with `git blame --line-porcelain`.
#[derive(Debug, Default, Clone, Copy)]
pub struct GitBlame;

impl BlameSource for GitBlame {
    fn contributions(&self, path: &Path) -> Result<Contributions> {
        let dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        let file_name = path
            .file_name()
            .with_context(|| format!("{} has no file name", path.display()))?;

        tracing::debug!("git blame {}", path.display());
        let out = Command::new("git")
            .arg("-C")
            .arg(dir)
            .args(["blame", "--line-porcelain", "--"])
            .arg(file_name)
            .output()
            .with_context(|| format!("failed to run git blame on {}", path.display()))?;

        if !out.status.success() {
            let stderr = String::from_utf8_lossy(&out.stderr);
            bail!("git blame {} failed: {}", path.display(), stderr.trim());
        }

        Ok(parse_line_porcelain(&String::from_utf8_lossy(&out.stdout)))
    }
}

/// Counts `author-mail` headers in `git blame --line-porcelain` output.
///
/// Porcelain repeats the full header for every line, so each header is one
/// line of the file. The identity is the text between `<` and `>`.
#[must_use]
pub fn parse_line_porcelain(output: &str) -> Contributions {
    output
        .lines()
        .filter_map(|line| line.strip_prefix("author-mail"))
        .map(author_identity)
        .filter(|identity| !identity.is_empty())
        .collect()
}

fn author_identity(value: &str) -> &str {
    let value = value.trim();
    let value = value.split_once('<').map_or(value, |(_, rest)| rest);
    value.split_once('>').map_or(value, |(identity, _)| identity)
}
