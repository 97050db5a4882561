//! Configuration management for `protag-core`.
//!
//! This module defines the data structures for protected-attribute category rules.
//! It handles deserialization of YAML configurations and provides utilities
//! for loading, merging, filtering and validating them.
//!
//! License: MIT OR Apache-2.0

use anyhow::{Context, Result};
use log::{debug, info, warn};
use regex::RegexBuilder;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use crate::category::ProtectedCategory;
use crate::errors::ProtagError;

/// Maximum allowed length for a regex pattern string.
pub const MAX_PATTERN_LENGTH: usize = 500;

/// The list of patterns that flag one protected-attribute category.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct CategoryRule {
    pub category: ProtectedCategory,
    /// Human-readable description of what the category covers.
    #[serde(default)]
    pub description: Option<String>,
    /// Case-insensitive regex patterns, searched (not fully matched) against text.
    #[serde(default)]
    pub patterns: Vec<String>,
    /// Explicit override for enabling/disabling the category.
    #[serde(default)]
    pub enabled: Option<bool>,
}

impl CategoryRule {
    pub fn is_enabled(&self) -> bool {
        self.enabled != Some(false)
    }
}

/// Top-level category configuration.
///
/// `categories` is kept sorted in declaration order of [`ProtectedCategory`]
/// by every constructor in this module.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct CategoryConfig {
    pub categories: Vec<CategoryRule>,
}

impl CategoryConfig {
    /// Loads category rules from a YAML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading custom categories from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let mut config: CategoryConfig = serde_yml::from_str(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        validate_rules(&config.categories)?;
        config.sort_categories();
        info!("Loaded {} categories from file {}.", config.categories.len(), path.display());

        Ok(config)
    }

    /// Loads the built-in protected-attribute table.
    pub fn load_default_categories() -> Result<Self> {
        debug!("Loading default categories from embedded string...");
        let default_yaml = include_str!("../config/default_categories.yaml");
        let mut config: CategoryConfig = serde_yml::from_str(default_yaml)
            .context("Failed to parse default categories")?;
        config.sort_categories();

        debug!("Loaded {} default categories.", config.categories.len());
        Ok(config)
    }

    /// Filters categories based on enable/disable lists provided via CLI.
    ///
    /// A non-empty `enable` list keeps only the named categories; `disable`
    /// always wins over `enable`. Fails when `enable` names nothing usable.
    pub fn set_active_categories(&mut self, enable: &[String], disable: &[String]) -> Result<()> {
        let requested: Vec<&String> = enable.iter().filter(|n| !n.trim().is_empty()).collect();
        let enable_set = parse_category_names(enable, "enable");
        let disable_set = parse_category_names(disable, "disable");

        if !requested.is_empty() && enable_set.is_empty() {
            let names: Vec<&str> = requested.iter().map(|n| n.as_str()).collect();
            return Err(ProtagError::InvalidConfig(format!(
                "no known category in `enable` list: {}",
                names.join(", ")
            ))
            .into());
        }

        let configured: HashSet<ProtectedCategory> =
            self.categories.iter().map(|r| r.category).collect();
        for category in enable_set.difference(&configured) {
            warn!("Category '{}' in `enable` list is not configured.", category);
        }

        debug!("Categories before filtering: {}", self.categories.len());
        self.categories.retain(|rule| {
            !disable_set.contains(&rule.category)
                && (enable_set.is_empty() || enable_set.contains(&rule.category))
        });
        debug!("Active categories after filtering: {}", self.categories.len());
        Ok(())
    }

    /// Iterates the categories that will take part in classification.
    pub fn active_rules(&self) -> impl Iterator<Item = &CategoryRule> {
        self.categories.iter().filter(|r| r.is_enabled())
    }

    fn sort_categories(&mut self) {
        self.categories.sort_by_key(|r| r.category);
    }
}

fn parse_category_names(names: &[String], list: &str) -> HashSet<ProtectedCategory> {
    names
        .iter()
        .filter(|n| !n.trim().is_empty())
        .filter_map(|name| match name.parse::<ProtectedCategory>() {
            Ok(category) => Some(category),
            Err(e) => {
                warn!("Ignoring entry in `{}` list: {}", list, e);
                None
            }
        })
        .collect()
}

/// Merges user-defined categories with defaults.
///
/// A user rule replaces the default rule for the same category wholesale.
/// The result is in declaration order regardless of the input order.
pub fn merge_categories(default_config: CategoryConfig, user_config: Option<CategoryConfig>) -> CategoryConfig {
    debug!("merge_categories called. Default categories: {}", default_config.categories.len());
    let mut merged = default_config.categories;

    if let Some(user_cfg) = user_config {
        debug!("User config provided. Merging {} user categories.", user_cfg.categories.len());
        for user_rule in user_cfg.categories {
            match merged.iter_mut().find(|r| r.category == user_rule.category) {
                Some(existing) => *existing = user_rule,
                None => merged.push(user_rule),
            }
        }
    }

    let mut config = CategoryConfig { categories: merged };
    config.sort_categories();
    debug!("Final categories after merge: {}", config.categories.len());
    config
}

/// Validates rule integrity (duplicates, empty or oversize patterns, regex compilation).
pub fn validate_rules(rules: &[CategoryRule]) -> Result<()> {
    let mut seen = HashSet::new();
    let mut errors = Vec::new();

    for rule in rules {
        if !seen.insert(rule.category) {
            errors.push(format!("Duplicate category found: '{}'.", rule.category));
        }
        if rule.patterns.is_empty() {
            errors.push(format!("Category '{}' has no patterns.", rule.category));
        }
        for pattern in &rule.patterns {
            if pattern.is_empty() {
                errors.push(format!("Category '{}' has an empty pattern.", rule.category));
                continue;
            }
            if pattern.len() > MAX_PATTERN_LENGTH {
                errors.push(format!(
                    "Category '{}': pattern length ({}) exceeds maximum allowed ({}).",
                    rule.category,
                    pattern.len(),
                    MAX_PATTERN_LENGTH
                ));
                continue;
            }
            if let Err(e) = RegexBuilder::new(pattern).case_insensitive(true).build() {
                errors.push(format!("Category '{}' has an invalid regex pattern: {}", rule.category, e));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ProtagError::InvalidConfig(format!("Category validation failed:\n{}", errors.join("\n"))).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(category: ProtectedCategory, pattern: &str) -> CategoryRule {
        CategoryRule {
            category,
            description: None,
            patterns: vec![pattern.to_string()],
            enabled: None,
        }
    }

    #[test]
    fn default_categories_cover_all_in_order() {
        let config = CategoryConfig::load_default_categories().unwrap();
        let order: Vec<_> = config.categories.iter().map(|r| r.category).collect();
        assert_eq!(order, ProtectedCategory::ALL.to_vec());
        validate_rules(&config.categories).unwrap();
    }

    #[test]
    fn age_has_numeric_pattern() {
        let config = CategoryConfig::load_default_categories().unwrap();
        let age = config
            .categories
            .iter()
            .find(|r| r.category == ProtectedCategory::Age)
            .unwrap();
        assert_eq!(age.patterns.len(), 2);
        assert!(age.patterns[1].contains("years old"));
    }

    #[test]
    fn merge_replaces_and_reorders() {
        let defaults = CategoryConfig {
            categories: vec![
                rule(ProtectedCategory::RaceEthnicity, r"\bold\b"),
                rule(ProtectedCategory::Religion, r"\bchurch\b"),
            ],
        };
        let user = CategoryConfig {
            categories: vec![
                rule(ProtectedCategory::Religion, r"\bmosque\b"),
                rule(ProtectedCategory::Gender, r"\bshe\b"),
            ],
        };
        let merged = merge_categories(defaults, Some(user));
        let order: Vec<_> = merged.categories.iter().map(|r| r.category).collect();
        assert_eq!(
            order,
            vec![
                ProtectedCategory::RaceEthnicity,
                ProtectedCategory::Gender,
                ProtectedCategory::Religion
            ]
        );
        assert_eq!(merged.categories[2].patterns, vec![r"\bmosque\b".to_string()]);
    }

    #[test]
    fn set_active_categories_enable_and_disable() {
        let mut config = CategoryConfig::load_default_categories().unwrap();
        config.set_active_categories(
            &["gender".to_string(), "religion".to_string(), "bogus".to_string()],
            &["religion".to_string()],
        )
        .unwrap();
        let order: Vec<_> = config.categories.iter().map(|r| r.category).collect();
        assert_eq!(order, vec![ProtectedCategory::Gender]);
    }

    #[test]
    fn enable_list_with_only_unknown_names_is_rejected() {
        let mut config = CategoryConfig::load_default_categories().unwrap();
        let err = config
            .set_active_categories(&["gendr".to_string()], &[])
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ProtagError>(),
            Some(ProtagError::InvalidConfig(msg)) if msg.contains("gendr")
        ));
        assert_eq!(config.categories.len(), ProtectedCategory::ALL.len());
    }

    #[test]
    fn blank_enable_entries_keep_everything() {
        let mut config = CategoryConfig::load_default_categories().unwrap();
        config.set_active_categories(&[" ".to_string()], &[]).unwrap();
        assert_eq!(config.categories.len(), ProtectedCategory::ALL.len());
    }

    #[test]
    fn validate_rejects_duplicates_and_bad_patterns() {
        let rules = vec![
            rule(ProtectedCategory::Age, r"\bteen\b"),
            rule(ProtectedCategory::Age, "("),
        ];
        let err = validate_rules(&rules).unwrap_err();
        assert!(matches!(err.downcast_ref::<ProtagError>(), Some(ProtagError::InvalidConfig(_))));
        let err = err.to_string();
        assert!(err.contains("Duplicate category found: 'age'"));
        assert!(err.contains("invalid regex pattern"));
    }

    #[test]
    fn validate_rejects_oversize_pattern() {
        let long = "a".repeat(MAX_PATTERN_LENGTH + 1);
        let err = validate_rules(&[rule(ProtectedCategory::Age, &long)]).unwrap_err();
        assert!(err.to_string().contains("exceeds maximum allowed"));
    }
}
