// src/core/tree.rs
use crate::core::blame::BlameSource;
use crate::core::ignore::Patterns;
use crate::models::{Contributions, calculate_stats};
use anyhow::{Context as _, Result};
use std::fs;
use std::io::Write;
use std::path::Path;
use walkdir::{DirEntry, WalkDir};

const BRANCH: &str = "├── ";
const CONTINUATION: &str = "│   ";
const TERMINAL: &str = "    ";
const VCS_DIR: &str = ".git";

#[derive(Debug, Default, Clone, Copy)]
pub struct PrintOptions {
    /// List every file with its own authors instead of rolling them up per directory
    pub show_files: bool,
    /// Wrap percentages in ANSI colour codes
    pub color: bool,
}

/// Renders a directory tree annotated with authorship percentages.
pub struct TreePrinter<'a, S: BlameSource> {
    patterns: &'a Patterns,
    source: &'a S,
    options: PrintOptions,
}

impl<'a, S: BlameSource> TreePrinter<'a, S> {
    #[inline]
    #[must_use]
    pub const fn new(patterns: &'a Patterns, source: &'a S, options: PrintOptions) -> Self {
        Self {
            patterns,
            source,
            options,
        }
    }

    /// Writes the tree rooted at `root` to `out`.
    ///
    /// Ignore patterns are matched against paths relative to `root`; the root
    /// itself is matched by its own path. A `.git` entry is always skipped,
    /// whether or not an ignore pattern names it.
    ///
    /// # Errors
    ///
    /// This function returns the first error it meets:
    /// * `root` or a child cannot be stat'ed or listed
    /// * a file cannot be attributed by the blame source
    /// * writing to `out` fails
    ///
    /// Output written before the error stays written.
    #[inline]
    pub fn print<W: Write>(&self, root: &Path, out: &mut W) -> Result<()> {
        self.print_directory(root, root, "", out)
    }

    fn print_directory<W: Write>(
        &self,
        root: &Path,
        path: &Path,
        prefix: &str,
        out: &mut W,
    ) -> Result<()> {
        let metadata =
            fs::metadata(path).with_context(|| format!("Failed to stat {}", path.display()))?;
        if !metadata.is_dir() || self.is_ignored(root, path) {
            return Ok(());
        }

        writeln!(out, "{prefix}{BRANCH}{}", display_name(path))?;

        let children = self.children(root, path)?;
        let mut directory_total = Contributions::new();

        for (index, entry) in children.iter().enumerate() {
            let child_prefix = if index.saturating_add(1) == children.len() {
                format!("{prefix}{TERMINAL}")
            } else {
                format!("{prefix}{CONTINUATION}")
            };

            if entry.file_type().is_dir() {
                self.print_directory(root, entry.path(), &child_prefix, out)?;
                continue;
            }

            let contributions = self.source.contributions(entry.path())?;
            if contributions.is_empty() {
                tracing::debug!("no attributable lines in {}", entry.path().display());
                continue;
            }

            if self.options.show_files {
                writeln!(out, "{child_prefix}{BRANCH}{}", display_name(entry.path()))?;
                self.print_stats(&child_prefix, &contributions, out)?;
            } else {
                directory_total.merge(&contributions);
            }
        }

        if !self.options.show_files {
            self.print_stats(prefix, &directory_total, out)?;
        }

        Ok(())
    }

    fn print_stats<W: Write>(
        &self,
        prefix: &str,
        contributions: &Contributions,
        out: &mut W,
    ) -> Result<()> {
        for stat in calculate_stats(contributions) {
            writeln!(
                out,
                "{prefix}{CONTINUATION}{BRANCH}{} ({})",
                stat.author,
                stat.band().paint(stat.percentage, self.options.color)
            )?;
        }
        Ok(())
    }

    /// Immediate children of `dir` that survive the ignore patterns, by name.
    fn children(&self, root: &Path, dir: &Path) -> Result<Vec<DirEntry>> {
        let mut children = Vec::new();
        for entry in WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            let entry = entry.with_context(|| format!("Failed to read {}", dir.display()))?;
            if entry.file_name() == VCS_DIR || self.is_ignored(root, entry.path()) {
                continue;
            }
            children.push(entry);
        }
        Ok(children)
    }

    fn is_ignored(&self, root: &Path, path: &Path) -> bool {
        let relative = path.strip_prefix(root).unwrap_or(path);
        let candidate = if relative.as_os_str().is_empty() {
            path
        } else {
            relative
        };

        let ignored = self.patterns.matches(candidate);
        if ignored {
            tracing::trace!("ignoring {}", candidate.display());
        }
        ignored
    }
}

fn display_name(path: &Path) -> String {
    path.file_name().map_or_else(
        || path.display().to_string(),
        |name| name.to_string_lossy().into_owned(),
    )
}
