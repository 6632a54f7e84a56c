// src/core/ignore/patterns.rs
use glob::{MatchOptions, Pattern};
use std::path::Path;

// Character classes negate with `[!...]`; `[^...]` is a class containing `^`.
const GLOB_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

#[derive(Debug, Default)]
pub struct Patterns {
    /// Collection of ignore patterns.
    /// Each tuple contains:
    /// - The pattern exactly as it appeared in the ignore file
    /// - The compiled glob, or `None` when the pattern is not valid glob syntax
    patterns: Vec<(String, Option<Pattern>)>,
}

impl Patterns {
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            patterns: Vec::new(),
        }
    }

    /// Adds a pattern to the ignore list.
    ///
    /// Blank lines and `#` comments are skipped. A pattern that fails to
    /// compile as a glob is still kept for the literal checks, it just never
    /// matches as a glob.
    #[inline]
    pub fn add_pattern(&mut self, pattern: &str) {
        let pattern = pattern.trim();
        if pattern.is_empty() || pattern.starts_with('#') {
            return;
        }

        let compiled = Pattern::new(pattern).ok();
        if compiled.is_none() {
            tracing::debug!("pattern {pattern:?} is not a valid glob, using literal matching only");
        }
        self.patterns.push((pattern.to_owned(), compiled));
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Iterates over the raw pattern strings in the order they were added.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.patterns.iter().map(|(raw, _)| raw.as_str())
    }

    /// Returns `true` if any pattern excludes `path`.
    ///
    /// A pattern matches when the final path segment glob-matches it, when
    /// the final segment equals it, or when it ends with `/` and the whole
    /// path starts with it minus the slash.
    #[inline]
    pub fn matches<P: AsRef<Path>>(&self, path: P) -> bool {
        let path = path.as_ref();
        let path_str = path.to_string_lossy();
        let filename = path
            .file_name()
            .map(|f| f.to_string_lossy())
            .unwrap_or_default();

        self.patterns.iter().any(|(raw, compiled)| {
            if compiled
                .as_ref()
                .is_some_and(|glob| glob.matches_with(&filename, GLOB_OPTIONS))
            {
                return true;
            }

            if let Some(prefix) = raw.strip_suffix('/') {
                // "/" alone would otherwise prune everything
                if !prefix.is_empty() && path_str.starts_with(prefix) {
                    return true;
                }
            }

            filename == raw.as_str()
        })
    }
}

impl<S: AsRef<str>> FromIterator<S> for Patterns {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut patterns = Self::new();
        for pattern in iter {
            patterns.add_pattern(pattern.as_ref());
        }
        patterns
    }
}
