// protag-core/src/engines/regex_engine.rs
//! A `TaggingEngine` implementation that searches text with the compiled,
//! case-insensitive category patterns.
//! License: MIT OR APACHE 2.0

use anyhow::{Context, Result};
use std::sync::Arc;

use crate::category_match::{log_category_match_debug, CategoryMatches, MatchResult};
use crate::config::CategoryConfig;
use crate::engine::TaggingEngine;
use crate::patterns::compiler::{get_or_compile_categories, CompiledCategories};

#[derive(Debug)]
pub struct RegexEngine {
    compiled: Arc<CompiledCategories>,
    config: CategoryConfig,
}

impl RegexEngine {
    pub fn new(config: CategoryConfig) -> Result<Self> {
        let compiled = get_or_compile_categories(&config)
            .context("Failed to compile category patterns for RegexEngine")?;
        Ok(Self { compiled, config })
    }

    /// Builds an engine over the built-in category table.
    pub fn with_default_categories() -> Result<Self> {
        Self::new(CategoryConfig::load_default_categories()?)
    }
}

impl TaggingEngine for RegexEngine {
    fn classify(&self, text: &str) -> MatchResult {
        let categories = self
            .compiled
            .categories
            .iter()
            .map(|compiled| {
                let patterns = compiled
                    .patterns
                    .iter()
                    .filter(|p| p.regex.is_match(text))
                    .inspect(|p| log_category_match_debug(module_path!(), compiled.category, &p.source, text))
                    .map(|p| p.source.clone())
                    .collect();
                CategoryMatches {
                    category: compiled.category,
                    patterns,
                }
            })
            .collect();
        MatchResult { categories }
    }

    fn compiled_categories(&self) -> &CompiledCategories {
        &self.compiled
    }

    fn config(&self) -> &CategoryConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::ProtectedCategory;

    fn engine() -> RegexEngine {
        RegexEngine::with_default_categories().unwrap()
    }

    #[test]
    fn classify_reports_every_category() {
        let result = engine().classify("the sky is blue today");
        assert_eq!(result.categories.len(), 7);
        assert!(result.is_empty());
    }

    #[test]
    fn classify_collects_multiple_categories() {
        let result = engine().classify("she is christian");
        assert_eq!(
            result.matched_categories(),
            vec![ProtectedCategory::Gender, ProtectedCategory::Religion]
        );
        assert_eq!(result.first_match(), Some(ProtectedCategory::Gender));
    }

    #[test]
    fn classify_is_case_insensitive() {
        let e = engine();
        for text in ["BLACK", "black", "Black"] {
            assert_eq!(e.classify(text).first_match(), Some(ProtectedCategory::RaceEthnicity));
        }
    }

    #[test]
    fn classify_respects_word_boundaries() {
        // "other" contains "he", "blackboard" contains "black"
        let result = engine().classify("another blackboard");
        assert!(result.is_empty());
    }

    #[test]
    fn age_numeric_pattern() {
        let e = engine();
        let result = e.classify("my kid is 7 years old");
        assert_eq!(result.first_match(), Some(ProtectedCategory::Age));
        assert_eq!(result.patterns_for(ProtectedCategory::Age).len(), 1);
        assert_eq!(e.classify("turning 30yo soon").first_match(), Some(ProtectedCategory::Age));
    }

    #[test]
    fn indian_matches_race_and_nationality() {
        let result = engine().classify("an indian restaurant");
        assert_eq!(
            result.matched_categories(),
            vec![ProtectedCategory::RaceEthnicity, ProtectedCategory::Nationality]
        );
    }
}
