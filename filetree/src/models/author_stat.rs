// src/models/author_stat.rs
use crate::models::{ColorBand, Contributions};

#[derive(Debug, Clone, PartialEq)]
pub struct AuthorStat {
    pub author: String,
    pub lines: u64,
    pub percentage: f64,
}

impl AuthorStat {
    #[inline]
    #[must_use]
    pub fn band(&self) -> ColorBand {
        ColorBand::for_percentage(self.percentage)
    }
}

/// Turns raw line counts into percentage records, largest share first.
///
/// Returns an empty list when there are no lines. Authors with the same
/// count keep the identity order of the underlying map.
#[inline]
#[must_use]
#[expect(clippy::as_conversions, reason = "Precision not critical")]
#[expect(clippy::cast_precision_loss, reason = "Precision not critical")]
pub fn calculate_stats(contributions: &Contributions) -> Vec<AuthorStat> {
    let total = contributions.total_lines();
    if total == 0 {
        return Vec::new();
    }

    let mut stats: Vec<AuthorStat> = contributions
        .iter()
        .map(|(author, lines)| AuthorStat {
            author: author.to_owned(),
            lines,
            percentage: (lines as f64 / total as f64) * 100.0,
        })
        .collect();

    stats.sort_by(|a, b| b.lines.cmp(&a.lines));
    stats
}
