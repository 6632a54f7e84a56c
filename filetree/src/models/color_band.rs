// src/models/color_band.rs
use console::{Color, Style};

/// Terminal colour used for an author's share of a report.
///
/// Ordered from the largest share to none at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ColorBand {
    Highest,
    High,
    Medium,
    Low,
    Lowest,
    None,
}

impl ColorBand {
    #[inline]
    #[must_use]
    pub fn for_percentage(percentage: f64) -> Self {
        match percentage {
            p if p > 75.0 => Self::Highest,
            p if p > 60.0 => Self::High,
            p if p > 50.0 => Self::Medium,
            p if p > 25.0 => Self::Low,
            p if p > 0.0 => Self::Lowest,
            _ => Self::None,
        }
    }

    #[inline]
    #[must_use]
    pub fn style(self) -> Style {
        let style = Style::new();
        match self {
            Self::Highest => style.fg(Color::Color256(205)),
            Self::High => style.green(),
            Self::Medium => style.fg(Color::Color256(118)),
            Self::Low => style.yellow(),
            Self::Lowest => style.fg(Color::Color256(51)),
            Self::None => style,
        }
    }

    /// Formats `percentage` to one decimal, coloured when `color` is set.
    #[inline]
    #[must_use]
    pub fn paint(self, percentage: f64, color: bool) -> String {
        let text = format!("{percentage:.1}%");
        if color && self != Self::None {
            self.style().force_styling(true).apply_to(text).to_string()
        } else {
            text
        }
    }
}
