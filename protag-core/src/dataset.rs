//! dataset.rs - Loading and writing tabular text datasets.
//!
//! A `Dataset` is the header row, the index of the text column and the rows
//! in file order. Rows are kept as plain string fields so every original
//! column survives untouched into the tagged output.
//!
//! License: MIT OR APACHE 2.0

use csv::{ByteRecord, ReaderBuilder, StringRecord, WriterBuilder};
use log::{debug, info, warn};
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use crate::cleaner::clean_text;
use crate::errors::ProtagError;
use crate::tagger::TaggedRecord;

/// Name of the column appended to tagged output.
pub const PROTECTED_CATEGORY_COLUMN: &str = "protected_category";

/// Default name of the text column.
pub const DEFAULT_TEXT_COLUMN: &str = "text";

/// One input row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// 1-based data row number (the header is not counted).
    pub row_number: usize,
    /// All fields in column order.
    pub fields: Vec<String>,
    text_index: usize,
}

impl Record {
    pub fn new(row_number: usize, fields: Vec<String>, text_index: usize) -> Result<Self, ProtagError> {
        if text_index >= fields.len() {
            return Err(ProtagError::DataFormat(format!(
                "row {} has {} field(s) and no text field at column {}",
                row_number,
                fields.len(),
                text_index + 1
            )));
        }
        Ok(Self {
            row_number,
            fields,
            text_index,
        })
    }

    pub fn text(&self) -> &str {
        &self.fields[self.text_index]
    }

    pub fn set_text(&mut self, text: String) {
        self.fields[self.text_index] = text;
    }
}

/// Options controlling how strictly rows are read.
#[derive(Debug, Clone)]
pub struct LoadOptions {
    /// Name of the column holding the text to clean and tag.
    pub text_column: String,
    /// Skip rows that lack the text field instead of failing the load.
    pub skip_malformed: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            text_column: DEFAULT_TEXT_COLUMN.to_string(),
            skip_malformed: false,
        }
    }
}

/// An in-memory table of records.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub headers: Vec<String>,
    pub text_index: usize,
    pub records: Vec<Record>,
}

impl Dataset {
    /// Loads a CSV file.
    ///
    /// Fails with `InputIo` when the file cannot be opened and with
    /// `DataFormat` when the text column is missing.
    pub fn load_csv<P: AsRef<Path>>(path: P, options: &LoadOptions) -> Result<Self, ProtagError> {
        let path = path.as_ref();
        info!("Loading dataset from: {}", path.display());
        let file = File::open(path).map_err(|source| ProtagError::InputIo {
            path: path.to_path_buf(),
            source,
        })?;
        let dataset = Self::from_reader(file, options).map_err(|e| match e {
            ProtagError::Csv(err) if err.is_io_error() => match err.into_kind() {
                csv::ErrorKind::Io(source) => ProtagError::InputIo {
                    path: path.to_path_buf(),
                    source,
                },
                other => ProtagError::Fatal(format!("{:?}", other)),
            },
            other => other,
        })?;
        info!(
            "Loaded {} record(s) from {}.",
            dataset.records.len(),
            path.display()
        );
        Ok(dataset)
    }

    /// Reads CSV from any source.
    pub fn from_reader<R: Read>(reader: R, options: &LoadOptions) -> Result<Self, ProtagError> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let headers: Vec<String> = rdr
            .headers()?
            .iter()
            .enumerate()
            .map(|(i, h)| {
                if i == 0 {
                    h.trim_start_matches('\u{feff}').to_string()
                } else {
                    h.to_string()
                }
            })
            .collect();

        let text_index = headers
            .iter()
            .position(|h| h == &options.text_column)
            .ok_or_else(|| {
                ProtagError::DataFormat(format!(
                    "required column '{}' not found (columns: {})",
                    options.text_column,
                    headers.join(", ")
                ))
            })?;
        debug!("Text column '{}' found at index {}.", options.text_column, text_index);

        let mut records = Vec::new();
        let mut skipped = 0usize;
        let mut raw = ByteRecord::new();
        let mut row_number = 0usize;
        while rdr.read_byte_record(&mut raw)? {
            row_number += 1;
            match row_to_record(&raw, row_number, headers.len(), text_index) {
                Ok(record) => records.push(record),
                Err(e) if options.skip_malformed => {
                    warn!("Skipping malformed row: {}", e);
                    skipped += 1;
                }
                Err(e) => return Err(e),
            }
        }
        if skipped > 0 {
            warn!("Skipped {} malformed row(s).", skipped);
        }

        Ok(Self {
            headers,
            text_index,
            records,
        })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn text_column(&self) -> &str {
        &self.headers[self.text_index]
    }

    /// Cleans every record's text in place, preserving record order.
    pub fn clean_texts(&mut self) {
        for record in &mut self.records {
            let cleaned = clean_text(record.text());
            record.set_text(cleaned);
        }
        debug!("Cleaned text of {} record(s).", self.records.len());
    }
}

/// Decodes one raw row and aligns it with the header.
///
/// Short rows that still reach the text column are padded with empty
/// fields; rows wider than the header and rows with invalid UTF-8 are
/// rejected.
fn row_to_record(raw: &ByteRecord, row_number: usize, width: usize, text_index: usize) -> Result<Record, ProtagError> {
    let row = StringRecord::from_byte_record(raw.clone()).map_err(|e| {
        ProtagError::DataFormat(format!(
            "row {} is not valid UTF-8 (field {}): {}",
            row_number,
            e.utf8_error().field() + 1,
            e.utf8_error()
        ))
    })?;
    if row.len() > width {
        return Err(ProtagError::DataFormat(format!(
            "row {} has {} field(s) but the header has {}",
            row_number,
            row.len(),
            width
        )));
    }
    let mut record = Record::new(row_number, row.iter().map(str::to_string).collect(), text_index)?;
    if record.fields.len() < width {
        debug!("Padding row {} from {} to {} field(s).", row_number, record.fields.len(), width);
        record.fields.resize(width, String::new());
    }
    Ok(record)
}

/// Writes tagged rows with an extra `protected_category` column.
pub fn write_tagged_csv<W: Write>(writer: W, headers: &[String], tagged: &[TaggedRecord]) -> Result<(), ProtagError> {
    let mut wtr = WriterBuilder::new().flexible(true).from_writer(writer);

    let mut header_row: Vec<&str> = headers.iter().map(String::as_str).collect();
    header_row.push(PROTECTED_CATEGORY_COLUMN);
    wtr.write_record(&header_row)?;

    for t in tagged {
        let mut row: Vec<&str> = t.record.fields.iter().map(String::as_str).collect();
        row.push(t.protected_category.as_str());
        wtr.write_record(&row)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Writes tagged rows to a file at `path`.
pub fn write_tagged_csv_file<P: AsRef<Path>>(path: P, headers: &[String], tagged: &[TaggedRecord]) -> Result<(), ProtagError> {
    let path = path.as_ref();
    info!("Writing {} tagged record(s) to: {}", tagged.len(), path.display());
    let file = File::create(path)?;
    write_tagged_csv(file, headers, tagged)
}
