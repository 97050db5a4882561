//! Pattern handling for category rules.
//!
//! `compiler` turns a `CategoryConfig` into immutable, shareable
//! `CompiledCategories` used by the engines.

pub mod compiler;
