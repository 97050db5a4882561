// protag/src/cli.rs
//! This file defines the command-line interface (CLI) for the protag application,
//! including all available commands and their arguments.
//! License: MIT OR Apache-2.0

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "protag",
    author = "Relay",
    version = env!("CARGO_PKG_VERSION"),
    about = "Flag dataset rows that mention protected demographic attributes",
    long_about = "protag reads a sentiment-labeled CSV dataset, strips @mentions and URLs from its text column, and tags every row whose text mentions a protected attribute (race/ethnicity, gender, sexual orientation, religion, disability, age, nationality). Each tagged row is attributed to the first matching category in that order.",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Disable informational messages
    #[arg(long, short = 'q', global = true, help = "Suppress all informational and debug messages.")]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short = 'd', global = true, help = "Enable debug logging.")]
    pub debug: bool,

    /// Explicitly disable debug logging, even if RUST_LOG is set to DEBUG
    #[arg(long = "disable-debug", global = true, help = "Disable debug logging, overriding RUST_LOG.")]
    pub disable_debug: bool,

    /// Specify the path to a custom YAML theme file.
    #[arg(long = "theme", value_name = "FILE", global = true, help = "Specify the path to a custom YAML theme file.")]
    pub theme: Option<PathBuf>,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// All available commands for the `protag` CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Cleans and tags a CSV dataset.
    #[command(about = "Clean and tag a CSV dataset, reporting per-category counts.")]
    Tag(TagCommand),

    /// Classifies a single text and shows every matching category.
    #[command(about = "Classify a single text and show every matching category.")]
    Classify(ClassifyCommand),

    /// Lists the active categories.
    #[command(about = "List the active protected-attribute categories.")]
    Categories(CategoriesCommand),
}

/// Category selection shared by all commands.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct CategoryArgs {
    /// Path to a custom category configuration file (YAML).
    #[arg(long = "config", value_name = "FILE", help = "Path to a custom category configuration file (YAML).")]
    pub config: Option<PathBuf>,

    /// Only use these categories (comma-separated).
    #[arg(long, short = 'e', value_delimiter = ',', help = "Only use these categories (comma-separated).")]
    pub enable: Vec<String>,

    /// Do not use these categories (comma-separated).
    #[arg(long, short = 'x', value_delimiter = ',', help = "Do not use these categories (comma-separated).")]
    pub disable: Vec<String>,
}

/// Arguments for the `tag` command.
#[derive(Parser, Debug)]
pub struct TagCommand {
    /// Path to the input CSV file.
    #[arg(long, short = 'i', value_name = "FILE", help = "Input CSV file.")]
    pub input_file: PathBuf,

    /// Name of the text column.
    #[arg(long = "text-column", value_name = "NAME", default_value = protag_core::DEFAULT_TEXT_COLUMN, help = "Name of the column holding the text.")]
    pub text_column: String,

    /// Write the tagged rows to this CSV file instead of stdout.
    #[arg(long, short = 'o', value_name = "FILE", help = "Write tagged rows to a CSV file instead of stdout.")]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub categories: CategoryArgs,

    /// Number of tagged rows to preview.
    #[arg(long = "preview", value_name = "N", default_value_t = 10, help = "Preview the first N tagged rows (0 disables the preview).")]
    pub preview: usize,

    /// Skip rows without a text field instead of failing.
    #[arg(long = "skip-malformed", help = "Skip rows that lack the text field instead of failing.")]
    pub skip_malformed: bool,

    /// Export the tagging summary to a JSON file.
    #[arg(long = "json-file", value_name = "FILE", help = "Export the tagging summary to a JSON file.")]
    pub json_file: Option<PathBuf>,

    /// Print the tagging summary as JSON to stdout (conflicts with --json-file).
    #[arg(long = "json-stdout", conflicts_with = "json_file", help = "Print the tagging summary as JSON to stdout.")]
    pub json_stdout: bool,

    /// Suppress the console summary and preview.
    #[arg(long = "no-summary", help = "Suppress the console summary and preview.")]
    pub no_summary: bool,
}

/// Arguments for the `classify` command.
#[derive(Parser, Debug)]
pub struct ClassifyCommand {
    /// Text to classify (reads stdin if not provided).
    #[arg(value_name = "TEXT", help = "Text to classify; read from stdin when omitted.")]
    pub text: Option<String>,

    #[command(flatten)]
    pub categories: CategoryArgs,

    /// Classify the text as given, without removing mentions and URLs.
    #[arg(long = "no-clean", help = "Classify the raw text without cleaning it first.")]
    pub no_clean: bool,
}

/// Arguments for the `categories` command.
#[derive(Parser, Debug)]
pub struct CategoriesCommand {
    #[command(flatten)]
    pub categories: CategoryArgs,
}
