//! # vocab2sql - Word Book to SQL Converter
//!
//! Converts a newline-delimited JSON vocabulary export into a SQL script that
//! loads one book into `vocabulary_books` and its words into
//! `vocabulary_words`.
//!
//! ## Modules
//!
//! - **vocab**: loading, normalizing and emitting word records
//! - **sample**: a small illustrative input file
//! - **logger**: stderr logging for the binaries
//!
//! ## Quick Start
//!
//! ```rust
//! use vocab2sql::{convert, Book};
//!
//! # fn main() -> anyhow::Result<()> {
//! let input = r#"{"headWord": "access", "content": {"word": {"content": {"usphone": "'æksɛs", "trans": [{"pos": "v", "tranCn": "获取"}]}}}}"#;
//!
//! let book = Book::classify("CET-4 Core", "核心词汇");
//! let mut sql = Vec::new();
//! let summary = convert(input.as_bytes(), &mut sql, &book)?;
//!
//! assert_eq!(summary.written, 1);
//! let sql = String::from_utf8(sql)?;
//! assert!(sql.contains("'access'"));
//! assert!(sql.contains("\"us\": \"/''æksɛs/\""));
//! # Ok(())
//! # }
//! ```

use log::{error, info};
use std::fs::File;
use std::io::{BufWriter, ErrorKind, Read, Write};
use std::path::Path;

pub mod error;
pub mod logger;
pub mod sample;
pub mod vocab;

// Re-export commonly used types for convenience
pub use error::{ConvertError, Result};
pub use vocab::{Book, ConvertConfig, ConvertSummary, LoadReport, Normalizer, NormalizedRecord, SqlWriter, WordRow};

/// Name given to the input of [`convert`] in error messages
pub const STREAM_INPUT: &str = "<input>";

/// Convert a word list read from `input` into a SQL script written to `output`
///
/// Fails with [`ConvertError::NoValidData`] before anything is written when no
/// line of the input parses. Errors name the input as [`STREAM_INPUT`].
pub fn convert<R: Read, W: Write>(input: R, output: W, book: &Book) -> Result<ConvertSummary> {
    let source = Path::new(STREAM_INPUT);
    let report = vocab::read_records(input, source)?;
    ensure_records(&report, source)?;

    let mut writer = SqlWriter::new(output);
    let summary = write_report(report, &mut writer, book)?;
    writer.flush()?;
    Ok(summary)
}

/// Main entry point: convert the configured input file into the output script
///
/// A missing input yields [`ConvertError::InputNotFound`]; in that case, and
/// when no record parses, the output file is never created.
pub fn convert_file(config: &ConvertConfig) -> Result<ConvertSummary> {
    let input = File::open(&config.input).map_err(|e| match e.kind() {
        ErrorKind::NotFound => ConvertError::InputNotFound(config.input.clone()),
        _ => ConvertError::Io {
            path: config.input.clone(),
            source: e,
        },
    })?;

    let report = vocab::read_records(input, &config.input)?;
    ensure_records(&report, &config.input)?;

    let book = Book::classify(config.book_name.as_str(), config.book_description.as_str());
    let output = File::create(&config.output).map_err(ConvertError::Write)?;
    let mut writer = SqlWriter::new(BufWriter::new(output));

    let summary = write_report(report, &mut writer, &book)?;
    writer.flush()?;

    info!(
        "wrote {} words to {}",
        summary.written,
        config.output.display()
    );
    Ok(summary)
}

fn ensure_records(report: &LoadReport, source: &Path) -> Result<()> {
    if report.records.is_empty() {
        error!("no valid vocabulary data found in {}", source.display());
        return Err(ConvertError::NoValidData(source.to_path_buf()));
    }
    Ok(())
}

fn write_report<W: Write>(
    report: LoadReport,
    writer: &mut SqlWriter<W>,
    book: &Book,
) -> Result<ConvertSummary> {
    let rows = Normalizer::new().normalize_all(&report.records);
    writer.write_script(book, &rows)?;

    let summary = ConvertSummary {
        parsed: report.records.len(),
        skipped_lines: report.skipped,
        written: rows.len(),
        dropped: report.records.len() - rows.len(),
    };
    info!(
        "{} records parsed, {} lines skipped, {} words written, {} dropped",
        summary.parsed, summary.skipped_lines, summary.written, summary.dropped
    );
    Ok(summary)
}
