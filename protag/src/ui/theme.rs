//! Module for managing the console colour theme.
//!
//! Users may override the colour of any output element with a YAML file
//! mapping theme entries to 16-colour ANSI names; missing entries fall back
//! to the defaults.

use anyhow::{Context, Result};
use owo_colors::AnsiColors;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Type alias for the theme map, providing a consistent type definition.
pub type ThemeMap = HashMap<ThemeEntry, ThemeStyle>;

/// The different logical parts of the output that can be styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeEntry {
    /// Section titles.
    Header,
    Success,
    Info,
    Warn,
    Error,
    /// Category names in summaries and previews.
    SummaryCategory,
    /// Counts in summaries.
    SummaryCount,
    /// Row text in the tagged-row preview.
    PreviewText,
    /// Pattern sources printed by `classify`.
    MatchedPattern,
}

impl ThemeEntry {
    pub const ALL: [ThemeEntry; 9] = [
        ThemeEntry::Header,
        ThemeEntry::Success,
        ThemeEntry::Info,
        ThemeEntry::Warn,
        ThemeEntry::Error,
        ThemeEntry::SummaryCategory,
        ThemeEntry::SummaryCount,
        ThemeEntry::PreviewText,
        ThemeEntry::MatchedPattern,
    ];
}

/// Colour names accepted in theme files, in the order they are listed in errors.
const COLOR_NAMES: [(&str, AnsiColors); 16] = [
    ("black", AnsiColors::Black),
    ("red", AnsiColors::Red),
    ("green", AnsiColors::Green),
    ("yellow", AnsiColors::Yellow),
    ("blue", AnsiColors::Blue),
    ("magenta", AnsiColors::Magenta),
    ("cyan", AnsiColors::Cyan),
    ("white", AnsiColors::White),
    ("brightblack", AnsiColors::BrightBlack),
    ("brightred", AnsiColors::BrightRed),
    ("brightgreen", AnsiColors::BrightGreen),
    ("brightyellow", AnsiColors::BrightYellow),
    ("brightblue", AnsiColors::BrightBlue),
    ("brightmagenta", AnsiColors::BrightMagenta),
    ("brightcyan", AnsiColors::BrightCyan),
    ("brightwhite", AnsiColors::BrightWhite),
];

/// A validated 16-colour ANSI foreground colour.
///
/// Names are case-insensitive and may separate `bright` with `_` or `-`
/// (`bright_red`, `Bright-Red`). Unknown names are rejected when the theme
/// file is parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct ThemeColor(AnsiColors);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownColorError(String);

impl fmt::Display for UnknownColorError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let names: Vec<&str> = COLOR_NAMES.iter().map(|(name, _)| *name).collect();
        write!(f, "unknown colour '{}' (expected one of: {})", self.0, names.join(", "))
    }
}

impl std::error::Error for UnknownColorError {}

impl FromStr for ThemeColor {
    type Err = UnknownColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .flat_map(char::to_lowercase)
            .collect();
        COLOR_NAMES
            .iter()
            .find(|(name, _)| *name == key)
            .map(|(_, color)| ThemeColor(*color))
            .ok_or_else(|| UnknownColorError(s.to_string()))
    }
}

impl TryFrom<String> for ThemeColor {
    type Error = UnknownColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl ThemeColor {
    pub fn ansi(self) -> AnsiColors {
        self.0
    }
}

/// Represents the style configuration for a specific `ThemeEntry`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ThemeStyle {
    pub fg: Option<ThemeColor>,
}

/// Loads a theme configuration from a YAML file or returns the default theme.
pub fn build_theme_map(theme_path: Option<&PathBuf>) -> Result<ThemeMap> {
    if let Some(path) = theme_path {
        ThemeStyle::load_from_file(path)
    } else {
        Ok(ThemeStyle::default_theme_map())
    }
}

impl ThemeStyle {
    /// Loads a theme file and fills unspecified entries from the defaults.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<ThemeMap> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read theme file {}", path.display()))?;
        let mut custom: ThemeMap = serde_yaml::from_str(&text)
            .with_context(|| format!("Failed to parse theme file {}", path.display()))?;

        for (entry, style) in Self::default_theme_map() {
            custom.entry(entry).or_insert(style);
        }
        Ok(custom)
    }

    /// Returns a default theme map with predefined color mappings.
    pub fn default_theme_map() -> ThemeMap {
        let named = |color: AnsiColors| ThemeStyle { fg: Some(ThemeColor(color)) };
        let mut default_theme = HashMap::new();
        default_theme.insert(ThemeEntry::Header, named(AnsiColors::Cyan));
        default_theme.insert(ThemeEntry::Success, named(AnsiColors::Green));
        default_theme.insert(ThemeEntry::Info, named(AnsiColors::White));
        default_theme.insert(ThemeEntry::Warn, named(AnsiColors::Yellow));
        default_theme.insert(ThemeEntry::Error, named(AnsiColors::Red));
        default_theme.insert(ThemeEntry::SummaryCategory, named(AnsiColors::BrightMagenta));
        default_theme.insert(ThemeEntry::SummaryCount, named(AnsiColors::BrightWhite));
        default_theme.insert(ThemeEntry::PreviewText, named(AnsiColors::White));
        default_theme.insert(ThemeEntry::MatchedPattern, named(AnsiColors::BrightBlack));
        default_theme
    }
}
