// protag/src/ui/output_format.rs
//! Themed message helpers shared by every command.
//!
//! Colour is only applied when the caller says the destination supports it,
//! so redirected output stays plain.

use owo_colors::OwoColorize;
use std::io::{self, Write};

use crate::ui::theme::{ThemeEntry, ThemeMap};

/// Applies the theme colour for `entry` to `text` when `enable_colors` is set.
pub fn styled(text: &str, entry: ThemeEntry, theme_map: &ThemeMap, enable_colors: bool) -> String {
    if !enable_colors {
        return text.to_string();
    }
    match theme_map.get(&entry).and_then(|style| style.fg) {
        Some(color) => text.color(color.ansi()).to_string(),
        None => text.to_string(),
    }
}

fn print_prefixed<W: Write>(
    writer: &mut W,
    prefix: &str,
    msg: &str,
    entry: ThemeEntry,
    theme_map: &ThemeMap,
    enable_colors: bool,
) -> io::Result<()> {
    writeln!(writer, "{}", styled(&format!("{}{}", prefix, msg), entry, theme_map, enable_colors))
}

pub fn print_info_message<W: Write>(writer: &mut W, msg: &str, theme_map: &ThemeMap, enable_colors: bool) -> io::Result<()> {
    print_prefixed(writer, "", msg, ThemeEntry::Info, theme_map, enable_colors)
}

pub fn print_success_message<W: Write>(writer: &mut W, msg: &str, theme_map: &ThemeMap, enable_colors: bool) -> io::Result<()> {
    print_prefixed(writer, "", msg, ThemeEntry::Success, theme_map, enable_colors)
}

pub fn print_warn_message<W: Write>(writer: &mut W, msg: &str, theme_map: &ThemeMap, enable_colors: bool) -> io::Result<()> {
    print_prefixed(writer, "Warning: ", msg, ThemeEntry::Warn, theme_map, enable_colors)
}

pub fn print_error_message<W: Write>(writer: &mut W, msg: &str, theme_map: &ThemeMap, enable_colors: bool) -> io::Result<()> {
    print_prefixed(writer, "Error: ", msg, ThemeEntry::Error, theme_map, enable_colors)
}

pub fn print_header<W: Write>(writer: &mut W, title: &str, theme_map: &ThemeMap, enable_colors: bool) -> io::Result<()> {
    writeln!(writer)?;
    print_prefixed(writer, "", &format!("--- {} ---", title), ThemeEntry::Header, theme_map, enable_colors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::ThemeStyle;

    #[test]
    fn plain_output_without_colors() {
        let theme = ThemeStyle::default_theme_map();
        let mut out = Vec::new();
        print_error_message(&mut out, "boom", &theme, false).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Error: boom\n");
    }

    #[test]
    fn colored_output_contains_escape_codes() {
        let theme = ThemeStyle::default_theme_map();
        let s = styled("gender", ThemeEntry::SummaryCategory, &theme, true);
        assert!(s.contains("\u{1b}["));
        assert!(s.contains("gender"));
    }
}
