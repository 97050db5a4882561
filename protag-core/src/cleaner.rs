//! Noise-token removal for dataset text.
//!
//! Strips `@mention` tokens (with an optional trailing colon) and
//! `http...` URL tokens, collapses runs of spaces and trims the result.
//! `clean_text` is total and idempotent.

use lazy_static::lazy_static;
use log::trace;
use regex::Regex;

lazy_static! {
    static ref NOISE_TOKEN_RE: Regex = Regex::new(r"@\w+:?|http\S+").expect("valid noise token regex");
    static ref MULTI_SPACE_RE: Regex = Regex::new(r" {2,}").expect("valid space regex");
}

fn clean_once(text: &str) -> String {
    let stripped = NOISE_TOKEN_RE.replace_all(text, "");
    let collapsed = MULTI_SPACE_RE.replace_all(&stripped, " ");
    collapsed.trim().to_string()
}

/// Removes mention and URL tokens and normalizes spacing.
///
/// Removing a token can splice its neighbours into a new token
/// (`htt@x:p://y` becomes `http://y`), so the pass is repeated until the text
/// no longer changes. Each pass either shortens the text or is a no-op.
pub fn clean_text(text: &str) -> String {
    let mut current = clean_once(text);
    loop {
        let next = clean_once(&current);
        if next == current {
            return current;
        }
        trace!("Cleaner pass changed text again ({} -> {} bytes)", current.len(), next.len());
        current = next;
    }
}
