// src/models/contributions.rs
use std::collections::BTreeMap;

/// Line counts per author identity for a file or an aggregated directory.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Contributions {
    counts: BTreeMap<String, u64>,
    total_lines: u64,
}

impl Contributions {
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            counts: BTreeMap::new(),
            total_lines: 0,
        }
    }

    /// Records `lines` lines attributed to `author`.
    #[inline]
    pub fn add_lines(&mut self, author: &str, lines: u64) {
        if lines == 0 {
            return;
        }
        let count = self.counts.entry(author.to_owned()).or_insert(0);
        *count = count.saturating_add(lines);
        self.total_lines = self.total_lines.saturating_add(lines);
    }

    #[inline]
    pub fn merge(&mut self, other: &Self) {
        for (author, lines) in other.iter() {
            self.add_lines(author, lines);
        }
    }

    /// Lines attributed to `author`, if any.
    #[inline]
    #[must_use]
    pub fn get(&self, author: &str) -> Option<u64> {
        self.counts.get(author).copied()
    }

    /// Authors and their line counts, ordered by identity.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts
            .iter()
            .map(|(author, &lines)| (author.as_str(), lines))
    }

    #[inline]
    #[must_use]
    pub const fn total_lines(&self) -> u64 {
        self.total_lines
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.total_lines == 0
    }
}

impl<'a> FromIterator<&'a str> for Contributions {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut contributions = Self::new();
        for author in iter {
            contributions.add_lines(author, 1);
        }
        contributions
    }
}
