// protag/src/ui/summary.rs
//! Console rendering of tagging results: the per-category count table and
//! the preview of tagged rows.

use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use std::io::{self, Write};

use protag_core::{Dataset, MatchResult, TagReport};

use crate::ui::output_format::{print_header, styled};
use crate::ui::theme::{ThemeEntry, ThemeMap};

/// Prints total rows and the per-category counts in declaration order.
pub fn print_summary<W: Write>(
    report: &TagReport,
    writer: &mut W,
    theme_map: &ThemeMap,
    enable_colors: bool,
) -> io::Result<()> {
    print_header(writer, "Protected Attribute Summary", theme_map, enable_colors)?;
    writeln!(writer, "Total rows: {}", report.total_records)?;

    if report.tagged.is_empty() {
        writeln!(writer, "No protected attributes detected.")?;
        return Ok(());
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Category", "Rows"]);
    for (category, count) in &report.counts {
        table.add_row(vec![
            styled(category.as_str(), ThemeEntry::SummaryCategory, theme_map, enable_colors),
            styled(&count.to_string(), ThemeEntry::SummaryCount, theme_map, enable_colors),
        ]);
    }
    writeln!(writer, "{table}")?;
    writeln!(writer, "Rows with protected attributes: {}", report.tagged.len())?;
    Ok(())
}

/// Prints the first `limit` tagged rows with all original columns.
pub fn print_preview<W: Write>(
    report: &TagReport,
    dataset: &Dataset,
    limit: usize,
    writer: &mut W,
    theme_map: &ThemeMap,
    enable_colors: bool,
) -> io::Result<()> {
    if limit == 0 || report.tagged.is_empty() {
        return Ok(());
    }
    print_header(
        writer,
        &format!("First {} tagged row(s)", limit.min(report.tagged.len())),
        theme_map,
        enable_colors,
    )?;

    let mut header: Vec<String> = vec!["row".to_string()];
    header.extend(dataset.headers.iter().cloned());
    header.push(protag_core::PROTECTED_CATEGORY_COLUMN.to_string());

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header);
    for tagged in report.tagged.iter().take(limit) {
        let mut row = vec![tagged.record.row_number.to_string()];
        row.extend(tagged.record.fields.iter().enumerate().map(|(i, field)| {
            if i == dataset.text_index {
                styled(field, ThemeEntry::PreviewText, theme_map, enable_colors)
            } else {
                field.clone()
            }
        }));
        row.push(styled(
            tagged.protected_category.as_str(),
            ThemeEntry::SummaryCategory,
            theme_map,
            enable_colors,
        ));
        table.add_row(row);
    }
    writeln!(writer, "{table}")
}

/// Prints the full category → matched patterns mapping of one text.
pub fn print_match_result<W: Write>(
    result: &MatchResult,
    writer: &mut W,
    theme_map: &ThemeMap,
    enable_colors: bool,
) -> io::Result<()> {
    for entry in &result.categories {
        let name = styled(entry.category.as_str(), ThemeEntry::SummaryCategory, theme_map, enable_colors);
        if entry.patterns.is_empty() {
            writeln!(writer, "{}: -", name)?;
        } else {
            writeln!(writer, "{}: {} pattern(s)", name, entry.patterns.len())?;
            for pattern in &entry.patterns {
                writeln!(writer, "  {}", styled(pattern, ThemeEntry::MatchedPattern, theme_map, enable_colors))?;
            }
        }
    }
    match result.first_match() {
        Some(category) => writeln!(writer, "protected_category: {}", category),
        None => writeln!(writer, "protected_category: (none)"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::ThemeStyle;
    use protag_core::{tag_all, CategoryConfig, LoadOptions, RegexEngine, TaggingEngine};

    fn engine() -> RegexEngine {
        RegexEngine::new(CategoryConfig::load_default_categories().unwrap()).unwrap()
    }

    #[test]
    fn summary_lists_counts() {
        let dataset = Dataset::from_reader("text\nshe is christian\nhello\n".as_bytes(), &LoadOptions::default()).unwrap();
        let report = tag_all(&engine(), &dataset.records);
        let mut out = Vec::new();
        print_summary(&report, &mut out, &ThemeStyle::default_theme_map(), false).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Total rows: 2"));
        assert!(text.contains("gender"));
        assert!(text.contains("Rows with protected attributes: 1"));
    }

    #[test]
    fn summary_without_matches() {
        let report = TagReport::default();
        let mut out = Vec::new();
        print_summary(&report, &mut out, &ThemeStyle::default_theme_map(), false).unwrap();
        assert!(String::from_utf8(out).unwrap().contains("No protected attributes detected."));
    }

    #[test]
    fn match_result_shows_first_category() {
        let result = engine().classify("she is christian");
        let mut out = Vec::new();
        print_match_result(&result, &mut out, &ThemeStyle::default_theme_map(), false).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("religion: 1 pattern(s)"));
        assert!(text.contains("age: -"));
        assert!(text.ends_with("protected_category: gender\n"));
    }
}
