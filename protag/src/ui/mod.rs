// protag/src/ui/mod.rs
//! Console presentation: colour theme, message helpers and result tables.

pub mod output_format;
pub mod summary;
pub mod theme;
