// protag-core/src/engine.rs
//! Defines the core `TaggingEngine` trait.
//!
//! The tagging pass is written against this trait rather than a concrete
//! matcher, so the classification method can be swapped without touching
//! the pipeline.
//!
//! License: MIT OR APACHE 2.0

use crate::category_match::MatchResult;
use crate::config::CategoryConfig;
use crate::patterns::compiler::CompiledCategories;

/// A classifier that maps text onto protected-attribute categories.
pub trait TaggingEngine: Send + Sync {
    /// Tests every pattern of every active category against `text`.
    ///
    /// The result holds one entry per active category, in declaration order,
    /// listing the patterns that matched. This never fails.
    fn classify(&self, text: &str) -> MatchResult;

    /// Returns the compiled category table used by the engine.
    fn compiled_categories(&self) -> &CompiledCategories;

    /// Returns the configuration the engine was built from.
    fn config(&self) -> &CategoryConfig;
}
