// protag-core/src/category_match.rs
//! Data structures describing which categories a text matched, plus the
//! debug-logging helpers that keep raw dataset text out of logs by default.

use lazy_static::lazy_static;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::category::ProtectedCategory;

lazy_static! {
    /// Whether raw text may appear in debug logs. Read once from the environment.
    static ref TEXT_DEBUG_ALLOWED: bool = {
        std::env::var("PROTAG_ALLOW_DEBUG_TEXT")
            .map(|s| s.eq_ignore_ascii_case("true"))
            .unwrap_or(false)
    };
}

/// The patterns of a single category that matched a text (possibly none).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryMatches {
    pub category: ProtectedCategory,
    pub patterns: Vec<String>,
}

/// Result of classifying one text: one entry per active category, in
/// declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub categories: Vec<CategoryMatches>,
}

impl MatchResult {
    /// True when no category had any matching pattern.
    pub fn is_empty(&self) -> bool {
        self.categories.iter().all(|c| c.patterns.is_empty())
    }

    /// The first category in declaration order with at least one match.
    pub fn first_match(&self) -> Option<ProtectedCategory> {
        self.categories
            .iter()
            .find(|c| !c.patterns.is_empty())
            .map(|c| c.category)
    }

    /// Every category with at least one match, in declaration order.
    pub fn matched_categories(&self) -> Vec<ProtectedCategory> {
        self.categories
            .iter()
            .filter(|c| !c.patterns.is_empty())
            .map(|c| c.category)
            .collect()
    }

    /// Matched patterns for `category`; empty if it is not active or did not match.
    pub fn patterns_for(&self, category: ProtectedCategory) -> &[String] {
        self.categories
            .iter()
            .find(|c| c.category == category)
            .map(|c| c.patterns.as_slice())
            .unwrap_or(&[])
    }
}

pub fn mask_text(s: &str) -> String {
    const MAX_LEN: usize = 8;
    let chars = s.chars().count();
    if chars <= MAX_LEN {
        "[TEXT]".to_string()
    } else {
        format!("[TEXT: {} chars]", chars)
    }
}

fn get_loggable_text(text: &str) -> String {
    if *TEXT_DEBUG_ALLOWED {
        text.to_string()
    } else {
        mask_text(text)
    }
}

pub fn log_category_match_debug(module_path: &str, category: ProtectedCategory, pattern: &str, text: &str) {
    debug!(
        "{} Category '{}' matched pattern '{}' in text '{}'",
        module_path,
        category,
        pattern,
        get_loggable_text(text)
    );
}

pub fn log_tagged_record_debug(module_path: &str, row_number: usize, category: ProtectedCategory, discarded: &[ProtectedCategory]) {
    if discarded.is_empty() {
        debug!("{} Row {} tagged as '{}'", module_path, row_number, category);
    } else {
        let names: Vec<&str> = discarded.iter().map(|c| c.as_str()).collect();
        debug!(
            "{} Row {} tagged as '{}' (also matched, not counted: {})",
            module_path,
            row_number,
            category,
            names.join(", ")
        );
    }
}
