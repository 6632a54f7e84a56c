// src/models.rs
pub mod author_stat;
pub mod color_band;
pub mod contributions;

pub use author_stat::{AuthorStat, calculate_stats};
pub use color_band::ColorBand;
pub use contributions::Contributions;
