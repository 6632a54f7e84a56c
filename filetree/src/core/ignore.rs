// src/core/ignore.rs
pub mod loader;
pub mod patterns;

pub use loader::{FILETREE_IGNORE_FILE, GITIGNORE_FILE, load_ignore_patterns, load_pattern_file};
pub use patterns::Patterns;
