//! `classify` command: show the full category mapping for one text.

use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use log::debug;
use std::io::{self, Read};

use protag_core::{clean_text, MatchResult, TaggingEngine};

use crate::ui::summary;
use crate::ui::theme::ThemeMap;

/// Classifies `text` (cleaned first unless `no_clean`) and prints the result to stdout.
pub fn run_classify(engine: &dyn TaggingEngine, text: &str, no_clean: bool, theme_map: &ThemeMap) -> Result<MatchResult> {
    let text = if no_clean { text.trim_end_matches(['\r', '\n']).to_string() } else { clean_text(text) };
    debug!("Classifying {} byte(s) of text.", text.len());
    let result = engine.classify(&text);

    let stdout = io::stdout();
    let supports_color = stdout.is_terminal();
    let mut writer = stdout.lock();
    summary::print_match_result(&result, &mut writer, theme_map, supports_color)?;
    Ok(result)
}

/// Returns the positional text, or everything on stdin.
pub fn read_text(arg: Option<&str>) -> Result<String> {
    match arg {
        Some(text) => Ok(text.to_string()),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read text from stdin")?;
            Ok(buf)
        }
    }
}
