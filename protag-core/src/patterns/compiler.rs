//! compiler.rs - Manages the compilation and caching of category rules.
//!
//! This module provides a thread-safe, cached mechanism to convert a
//! `CategoryConfig` into `CompiledCategories`. Compiled tables are
//! immutable once built and shared through `Arc`, so the keyword tables are
//! compiled once per process and configuration.
//!
//! License: MIT OR APACHE 2.0

use anyhow::{anyhow, Result};
use lazy_static::lazy_static;
use log::debug;
use regex::{Regex, RegexBuilder};
use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, RwLock};

use crate::category::ProtectedCategory;
use crate::config::{CategoryConfig, CategoryRule, MAX_PATTERN_LENGTH};
use crate::errors::ProtagError;

/// A single compiled pattern, keeping its source text for match reporting.
#[derive(Debug)]
pub struct CompiledPattern {
    pub source: String,
    pub regex: Regex,
}

/// All compiled patterns of one category.
#[derive(Debug)]
pub struct CompiledCategory {
    pub category: ProtectedCategory,
    pub patterns: Vec<CompiledPattern>,
}

/// The ordered category table.
///
/// `categories` is in declaration order; this is what makes first-match
/// attribution deterministic.
#[derive(Debug)]
pub struct CompiledCategories {
    pub categories: Vec<CompiledCategory>,
}

impl CompiledCategories {
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn category_names(&self) -> Vec<ProtectedCategory> {
        self.categories.iter().map(|c| c.category).collect()
    }
}

lazy_static! {
    /// Process-wide cache keyed by a hash of the `CategoryConfig`.
    static ref COMPILED_CATEGORIES_CACHE: RwLock<HashMap<u64, Arc<CompiledCategories>>> =
        RwLock::new(HashMap::new());
}

fn hash_config(config: &CategoryConfig) -> u64 {
    let mut rules: Vec<&CategoryRule> = config.categories.iter().collect();
    rules.sort_by_key(|r| r.category);

    let mut hasher = DefaultHasher::new();
    rules.hash(&mut hasher);
    hasher.finish()
}

fn compile_pattern(category: ProtectedCategory, pattern: &str) -> Result<CompiledPattern, ProtagError> {
    if pattern.len() > MAX_PATTERN_LENGTH {
        return Err(ProtagError::PatternLengthExceeded(
            category.to_string(),
            pattern.len(),
            MAX_PATTERN_LENGTH,
        ));
    }

    let regex = RegexBuilder::new(pattern)
        .case_insensitive(true)
        .size_limit(10 * (1 << 20)) // 10 MB limit for compiled regex
        .build()
        .map_err(|e| ProtagError::PatternCompilation(category.to_string(), e))?;

    Ok(CompiledPattern {
        source: pattern.to_string(),
        regex,
    })
}

/// Compiles the enabled rules of `config` into an ordered category table.
///
/// Disabled rules are skipped. Every compilation error is collected and
/// reported together.
pub fn compile_categories(config: &CategoryConfig) -> Result<CompiledCategories, ProtagError> {
    debug!("Starting compilation of {} categories.", config.categories.len());

    let mut compiled = Vec::new();
    let mut errors = Vec::new();

    let mut rules: Vec<&CategoryRule> = config.active_rules().collect();
    rules.sort_by_key(|r| r.category);

    for rule in rules {
        let mut patterns = Vec::with_capacity(rule.patterns.len());
        for pattern in &rule.patterns {
            match compile_pattern(rule.category, pattern) {
                Ok(p) => patterns.push(p),
                Err(e) => errors.push(e),
            }
        }
        log::debug!(
            target: "protag_core::compiler",
            "Category '{}' compiled with {} pattern(s).",
            rule.category,
            patterns.len()
        );
        compiled.push(CompiledCategory {
            category: rule.category,
            patterns,
        });
    }

    if !errors.is_empty() {
        let message = errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<String>>()
            .join("\n");
        return Err(ProtagError::Fatal(format!(
            "Failed to compile {} pattern(s):\n{}",
            errors.len(),
            message
        )));
    }

    debug!("Finished compiling categories. Total compiled: {}.", compiled.len());
    Ok(CompiledCategories { categories: compiled })
}

/// Gets a `CompiledCategories` instance from the cache or compiles it if not found.
pub fn get_or_compile_categories(config: &CategoryConfig) -> Result<Arc<CompiledCategories>> {
    let cache_key = hash_config(config);

    {
        let cache = COMPILED_CATEGORIES_CACHE
            .read()
            .map_err(|_| anyhow!("Compiled category cache lock is poisoned"))?;
        if let Some(compiled) = cache.get(&cache_key) {
            debug!("Serving compiled categories from cache for key: {}", cache_key);
            return Ok(Arc::clone(compiled));
        }
    }

    debug!("Compiled categories not found in cache. Compiling now.");
    let compiled = Arc::new(compile_categories(config)?);

    COMPILED_CATEGORIES_CACHE
        .write()
        .map_err(|_| anyhow!("Compiled category cache lock is poisoned"))?
        .insert(cache_key, Arc::clone(&compiled));

    debug!("Compiled and cached categories for key: {}", cache_key);
    Ok(compiled)
}
