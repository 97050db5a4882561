//! `categories` command: list the active category table.

use anyhow::Result;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use is_terminal::IsTerminal;
use std::io::{self, Write};

use protag_core::TaggingEngine;

use crate::ui::output_format::styled;
use crate::ui::theme::{ThemeEntry, ThemeMap};

/// Prints the active categories in evaluation order.
pub fn run_categories<W: Write>(engine: &dyn TaggingEngine, writer: &mut W, theme_map: &ThemeMap, enable_colors: bool) -> Result<()> {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["#", "Category", "Patterns", "Description"]);

    for (position, compiled) in engine.compiled_categories().categories.iter().enumerate() {
        let description = engine
            .config()
            .categories
            .iter()
            .find(|r| r.category == compiled.category)
            .and_then(|r| r.description.clone())
            .unwrap_or_default();
        table.add_row(vec![
            (position + 1).to_string(),
            styled(compiled.category.as_str(), ThemeEntry::SummaryCategory, theme_map, enable_colors),
            compiled.patterns.len().to_string(),
            description,
        ]);
    }
    writeln!(writer, "{table}")?;
    Ok(())
}

/// Runs `run_categories` against stdout.
pub fn run_categories_stdout(engine: &dyn TaggingEngine, theme_map: &ThemeMap) -> Result<()> {
    let stdout = io::stdout();
    let supports_color = stdout.is_terminal();
    let mut writer = stdout.lock();
    run_categories(engine, &mut writer, theme_map, supports_color)
}
