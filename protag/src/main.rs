// protag/src/main.rs
//! protag entry point.
//!
//! Parses arguments, initializes logging and the theme, builds the engine
//! for the selected categories and dispatches to the chosen command.

use anyhow::{Context, Result};
use clap::Parser;
use std::process::ExitCode;

use protag::cli::{Cli, Commands};
use protag::commands::{self, categories, classify, tag};
use protag::logger;
use protag::ui::theme::{build_theme_map, ThemeMap, ThemeStyle};

fn run(args: &Cli, theme_map: &ThemeMap) -> Result<()> {
    match &args.command {
        Commands::Tag(cmd) => {
            let engine = commands::build_engine(&cmd.categories)?;
            let opts = tag::TagOptions::from_command(cmd, args.quiet);
            tag::run_tag(&engine, &opts, theme_map)?;
        }
        Commands::Classify(cmd) => {
            let engine = commands::build_engine(&cmd.categories)?;
            let text = classify::read_text(cmd.text.as_deref())?;
            classify::run_classify(&engine, &text, cmd.no_clean, theme_map)?;
        }
        Commands::Categories(cmd) => {
            let engine = commands::build_engine(&cmd.categories)?;
            categories::run_categories_stdout(&engine, theme_map)?;
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = Cli::parse();
    logger::init_logger(logger::level_from_flags(args.quiet, args.debug, args.disable_debug));

    let theme_map = match build_theme_map(args.theme.as_ref()).context("Theme error") {
        Ok(theme_map) => theme_map,
        Err(e) => {
            commands::error_msg(format!("{:#}", e), &ThemeStyle::default_theme_map());
            return ExitCode::FAILURE;
        }
    };

    match run(&args, &theme_map) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            commands::error_msg(format!("{:#}", e), &theme_map);
            ExitCode::FAILURE
        }
    }
}
