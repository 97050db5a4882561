//! errors.rs - Custom error types for the protag-core library.
//!
//! This module defines a structured error enum for the library, providing
//! specific, actionable error types that can be handled programmatically.
//! Loader failures (`DataFormat`, `InputIo`) are fatal for a run; the cleaner
//! and the tagger never produce errors.
//!
//! License: MIT OR APACHE 2.0

use std::path::PathBuf;
use thiserror::Error;

/// This enum represents all possible error types in the `protag-core` library.
///
/// By using `#[non_exhaustive]`, we signal to consumers of this library that
/// new variants may be added in future versions.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ProtagError {
    /// The dataset does not have the expected shape (missing column, short row).
    #[error("Data format error: {0}")]
    DataFormat(String),

    /// The dataset source could not be opened or read.
    #[error("Failed to read input '{}': {source}", path.display())]
    InputIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed CSV input: {0}")]
    Csv(#[from] csv::Error),

    #[error("Failed to compile pattern for category '{0}': {1}")]
    PatternCompilation(String, regex::Error),

    #[error("Category '{0}': pattern length ({1}) exceeds maximum allowed ({2})")]
    PatternLengthExceeded(String, usize, usize),

    #[error("Invalid category configuration: {0}")]
    InvalidConfig(String),

    #[error("An unexpected I/O error occurred: {0}")]
    Io(#[from] std::io::Error),

    #[error("A fatal error occurred: {0}")]
    Fatal(String),
}

impl ProtagError {
    /// Returns true for the two loader-boundary failures.
    pub fn is_input_error(&self) -> bool {
        matches!(self, ProtagError::DataFormat(_) | ProtagError::InputIo { .. })
    }
}
