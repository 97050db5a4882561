// protag-core/src/lib.rs
//! # protag Core Library
//!
//! `protag-core` flags rows of a text dataset that mention protected
//! demographic attributes (race/ethnicity, gender, sexual orientation,
//! religion, disability, age, nationality). It loads a CSV dataset, strips
//! noise tokens from the text column, classifies each text against an
//! ordered table of case-insensitive regex patterns and attributes every
//! matching row to the first matching category.
//!
//! The library performs no console output; the `protag` crate provides the
//! command line on top of it.
//!
//! ## Modules
//!
//! * `category`: The closed set of `ProtectedCategory` values and their order.
//! * `config`: `CategoryRule`s and `CategoryConfig` (loading, merging, filtering, validation).
//! * `patterns`: Compilation and process-wide caching of category patterns.
//! * `engine`: The `TaggingEngine` trait.
//! * `engines`: Concrete engines (`RegexEngine`).
//! * `category_match`: Classification results and log-safe match logging.
//! * `cleaner`: Mention/URL removal and whitespace normalization.
//! * `dataset`: CSV loading into `Record`s and tagged CSV output.
//! * `tagger`: The `tag_all` pass and its `TagReport`.
//! * `headless`: One-call convenience wrappers.
//! * `errors`: The `ProtagError` type.
//!
//! ## Usage Example
//!
//! ```rust
//! use protag_core::{clean_text, tag_all, CategoryConfig, Dataset, LoadOptions, ProtectedCategory, RegexEngine};
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!     let engine = RegexEngine::new(CategoryConfig::load_default_categories()?)?;
//!
//!     let csv = "text,label\n@ana: she is christian http://t.co/x,2\nthe sky is blue today,1\n";
//!     let mut dataset = Dataset::from_reader(csv.as_bytes(), &LoadOptions::default())?;
//!     dataset.clean_texts();
//!     assert_eq!(dataset.records[0].text(), clean_text("she is christian"));
//!
//!     let report = tag_all(&engine, &dataset.records);
//!     assert_eq!(report.tagged.len(), 1);
//!     assert_eq!(report.tagged[0].protected_category, ProtectedCategory::Gender);
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Loader failures are reported as `ProtagError::DataFormat` (missing column,
//! row without a text field) or `ProtagError::InputIo` (unreadable source).
//! Configuration loading uses `anyhow::Error` with context. Cleaning and
//! classification cannot fail.
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod category;
pub mod category_match;
pub mod cleaner;
pub mod config;
pub mod dataset;
pub mod engine;
pub mod engines;
pub mod errors;
pub mod headless;
pub mod patterns;
pub mod tagger;

pub use category::{ParseCategoryError, ProtectedCategory};

pub use config::{merge_categories, CategoryConfig, CategoryRule, MAX_PATTERN_LENGTH};

pub use errors::ProtagError;

pub use engine::TaggingEngine;
pub use engines::regex_engine::RegexEngine;

pub use category_match::{CategoryMatches, MatchResult};

pub use cleaner::clean_text;

pub use dataset::{
    write_tagged_csv, write_tagged_csv_file, Dataset, LoadOptions, Record, DEFAULT_TEXT_COLUMN,
    PROTECTED_CATEGORY_COLUMN,
};

pub use tagger::{tag_all, CategoryCount, TagReport, TagSummary, TaggedRecord};

pub use headless::{headless_classify_string, headless_tag_file, run_pipeline};

pub use patterns::compiler::{compile_categories, get_or_compile_categories, CompiledCategories, CompiledCategory, CompiledPattern};
