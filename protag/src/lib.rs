// protag/src/lib.rs
//! # protag CLI Application
//!
//! Command-line front end for `protag-core`: argument parsing, logging
//! setup, themed console output and the `tag`, `classify` and `categories`
//! commands.

pub mod cli;
pub mod commands;
pub mod logger;
pub mod ui;

pub use commands::tag::{run_tag, TagOptions};
