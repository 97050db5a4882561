// protag/src/commands/mod.rs
//! Command implementations and the helpers they share.

pub mod categories;
pub mod classify;
pub mod tag;

use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use log::debug;
use std::io;

use protag_core::{merge_categories, CategoryConfig, RegexEngine};

use crate::cli::CategoryArgs;
use crate::ui::output_format;
use crate::ui::theme::ThemeMap;

/// Builds the category configuration: defaults, merged with an optional
/// user file, then filtered by the enable/disable lists.
pub fn load_category_config(args: &CategoryArgs) -> Result<CategoryConfig> {
    let defaults = CategoryConfig::load_default_categories()?;
    let user = match &args.config {
        Some(path) => Some(
            CategoryConfig::load_from_file(path)
                .with_context(|| format!("Failed to load category configuration {}", path.display()))?,
        ),
        None => None,
    };
    let mut config = merge_categories(defaults, user);
    config.set_active_categories(&args.enable, &args.disable)?;
    debug!("Active categories: {}", config.categories.len());
    Ok(config)
}

/// Builds the regex engine for the selected categories.
pub fn build_engine(args: &CategoryArgs) -> Result<RegexEngine> {
    let config = load_category_config(args)?;
    RegexEngine::new(config)
}

/// Helper for printing info messages to stderr.
pub fn info_msg(msg: impl AsRef<str>, theme: &ThemeMap) {
    let stderr_supports_color = io::stderr().is_terminal();
    let _ = output_format::print_info_message(&mut io::stderr(), msg.as_ref(), theme, stderr_supports_color);
}

/// Helper for printing success messages to stderr.
pub fn success_msg(msg: impl AsRef<str>, theme: &ThemeMap) {
    let stderr_supports_color = io::stderr().is_terminal();
    let _ = output_format::print_success_message(&mut io::stderr(), msg.as_ref(), theme, stderr_supports_color);
}

/// Helper for printing error messages to stderr.
pub fn error_msg(msg: impl AsRef<str>, theme: &ThemeMap) {
    let stderr_supports_color = io::stderr().is_terminal();
    let _ = output_format::print_error_message(&mut io::stderr(), msg.as_ref(), theme, stderr_supports_color);
}

/// Helper for printing warning messages to stderr.
pub fn warn_msg(msg: impl AsRef<str>, theme: &ThemeMap) {
    let stderr_supports_color = io::stderr().is_terminal();
    let _ = output_format::print_warn_message(&mut io::stderr(), msg.as_ref(), theme, stderr_supports_color);
}
