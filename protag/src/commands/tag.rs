//! `tag` command: load, clean and tag a CSV dataset.

use anyhow::{Context, Result};
use chrono::Utc;
use is_terminal::IsTerminal;
use log::{debug, info};
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use protag_core::{
    run_pipeline, write_tagged_csv, write_tagged_csv_file, Dataset, LoadOptions, TagReport, TagSummary,
    TaggingEngine,
};

use crate::cli::TagCommand;
use crate::commands::{info_msg, success_msg, warn_msg};
use crate::ui::summary;
use crate::ui::theme::ThemeMap;

/// Options for the `run_tag` API.
#[derive(Debug, Clone)]
pub struct TagOptions {
    pub input: PathBuf,
    pub load: LoadOptions,
    pub output_path: Option<PathBuf>,
    pub preview: usize,
    pub json_file: Option<PathBuf>,
    pub json_stdout: bool,
    pub no_summary: bool,
    pub quiet: bool,
}

impl TagOptions {
    pub fn from_command(cmd: &TagCommand, quiet: bool) -> Self {
        Self {
            input: cmd.input_file.clone(),
            load: LoadOptions {
                text_column: cmd.text_column.clone(),
                skip_malformed: cmd.skip_malformed,
            },
            output_path: cmd.output.clone(),
            preview: cmd.preview,
            json_file: cmd.json_file.clone(),
            json_stdout: cmd.json_stdout,
            no_summary: cmd.no_summary,
            quiet,
        }
    }
}

/// Machine-readable summary of one `tag` run.
#[derive(Debug, Serialize)]
pub struct TagJsonReport {
    pub input: String,
    pub input_sha256: String,
    pub generated_at: String,
    pub text_column: String,
    #[serde(flatten)]
    pub summary: TagSummary,
}

/// The main operation runner for the `tag` command.
pub fn run_tag(engine: &dyn TaggingEngine, opts: &TagOptions, theme_map: &ThemeMap) -> Result<TagReport> {
    info!("Starting tag operation on {}.", opts.input.display());

    let mut dataset = Dataset::load_csv(&opts.input, &opts.load)
        .with_context(|| format!("Failed to load dataset {}", opts.input.display()))?;
    let report = run_pipeline(engine, &mut dataset);
    debug!(
        "Pipeline finished: {} of {} record(s) tagged.",
        report.tagged.len(),
        report.total_records
    );

    handle_summary(&report, &dataset, opts, theme_map)?;
    handle_primary_output(&report, &dataset, opts, theme_map)?;
    handle_json_output(&report, &dataset, opts, theme_map)?;

    info!("Tag operation completed.");
    Ok(report)
}

fn handle_summary(report: &TagReport, dataset: &Dataset, opts: &TagOptions, theme_map: &ThemeMap) -> Result<()> {
    if opts.no_summary || opts.quiet {
        return Ok(());
    }
    let stderr = io::stderr();
    let supports_color = stderr.is_terminal();
    let mut writer = stderr.lock();
    summary::print_summary(report, &mut writer, theme_map, supports_color)?;
    summary::print_preview(report, dataset, opts.preview, &mut writer, theme_map, supports_color)?;
    Ok(())
}

fn handle_primary_output(report: &TagReport, dataset: &Dataset, opts: &TagOptions, theme_map: &ThemeMap) -> Result<()> {
    if let Some(path) = &opts.output_path {
        write_tagged_csv_file(path, &dataset.headers, &report.tagged)
            .with_context(|| format!("Failed to write tagged rows to {}", path.display()))?;
        if !opts.quiet {
            success_msg(
                format!("Wrote {} tagged row(s) to {}", report.tagged.len(), path.display()),
                theme_map,
            );
        }
    } else if !opts.json_stdout {
        let stdout = io::stdout();
        let mut writer = stdout.lock();
        write_tagged_csv(&mut writer, &dataset.headers, &report.tagged)
            .context("Failed to write tagged rows to stdout")?;
        writer.flush()?;
    }

    if report.tagged.is_empty() && !opts.quiet {
        warn_msg("No rows were tagged; the output contains only the header.", theme_map);
    }
    Ok(())
}

fn handle_json_output(report: &TagReport, dataset: &Dataset, opts: &TagOptions, theme_map: &ThemeMap) -> Result<()> {
    if opts.json_file.is_none() && !opts.json_stdout {
        return Ok(());
    }
    let json_report = TagJsonReport {
        input: opts.input.display().to_string(),
        input_sha256: sha256_file(&opts.input)?,
        generated_at: Utc::now().to_rfc3339(),
        text_column: dataset.text_column().to_string(),
        summary: report.summary(),
    };
    let json = serde_json::to_string_pretty(&json_report).context("Failed to serialize JSON summary")?;

    if let Some(path) = &opts.json_file {
        fs::write(path, format!("{}\n", json))
            .with_context(|| format!("Failed to write JSON summary to {}", path.display()))?;
        if !opts.quiet {
            info_msg(format!("JSON summary written to {}", path.display()), theme_map);
        }
    } else {
        let stdout = io::stdout();
        let mut writer = stdout.lock();
        writeln!(writer, "{}", json)?;
    }
    Ok(())
}

fn sha256_file(path: &Path) -> Result<String> {
    let bytes = fs::read(path).with_context(|| format!("Failed to read {} for hashing", path.display()))?;
    Ok(hex::encode(Sha256::digest(&bytes)))
}
