// src/core.rs
pub mod blame;
pub mod ignore;
pub mod tree;
