// protag-core/src/headless.rs

//! `headless.rs`
//! Convenience wrappers for running the full pipeline without any UI:
//! load → clean → tag, or clean → classify for a single string.

use anyhow::{Context, Result};
use std::path::Path;

use crate::category_match::MatchResult;
use crate::cleaner::clean_text;
use crate::config::CategoryConfig;
use crate::dataset::{Dataset, LoadOptions};
use crate::engine::TaggingEngine;
use crate::engines::regex_engine::RegexEngine;
use crate::tagger::{tag_all, TagReport};

/// Cleans every record of `dataset` in place, then tags it.
pub fn run_pipeline(engine: &dyn TaggingEngine, dataset: &mut Dataset) -> TagReport {
    dataset.clean_texts();
    tag_all(engine, &dataset.records)
}

/// Loads a CSV file, cleans and tags it with a `RegexEngine` built from `config`.
///
/// Returns the cleaned dataset alongside the report so callers can write
/// the tagged subset with the original headers.
pub fn headless_tag_file<P: AsRef<Path>>(
    config: CategoryConfig,
    input: P,
    options: &LoadOptions,
) -> Result<(Dataset, TagReport)> {
    let input = input.as_ref();
    let engine = RegexEngine::new(config)?;
    let mut dataset = Dataset::load_csv(input, options)
        .with_context(|| format!("Failed to load dataset {}", input.display()))?;
    let report = run_pipeline(&engine, &mut dataset);
    Ok((dataset, report))
}

/// Classifies a single string, cleaning it first when `clean` is set.
pub fn headless_classify_string(config: CategoryConfig, text: &str, clean: bool) -> Result<MatchResult> {
    let engine = RegexEngine::new(config)?;
    let text = if clean { clean_text(text) } else { text.to_string() };
    Ok(engine.classify(&text))
}
