//! vocab2sql-convert: Turn a word-book JSON export into a SQL load script
//!
//! With no arguments the compiled-in defaults are used (the IELTS Basic book).
//!
//! Usage:
//!   # Convert with the built-in configuration
//!   vocab2sql-convert
//!
//!   # Convert another book
//!   vocab2sql-convert --input CET6_1.json --output 011_add_cet6.sql \
//!       --book-name "CET-6 Core" --book-description "六级核心词汇"
//!
//!   # Regenerate the sample input first, then convert it
//!   vocab2sql-convert --with-sample --input CET4_sample_full.json

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use anyhow::{Context, Result};
use clap::Parser;
use log::{error, info};
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use vocab2sql::logger::{init_logger, LogLevel};
use vocab2sql::{convert_file, sample, ConvertConfig};

#[derive(Parser, Debug)]
#[command(name = "vocab2sql-convert")]
#[command(about = "Convert a vocabulary JSON export into SQL inserts", long_about = None)]
struct Args {
    /// Newline-delimited JSON input (default: IELTSluan_2.json)
    #[arg(long, short = 'i')]
    input: Option<PathBuf>,

    /// SQL file to write (default: 010_add_ielts_vocabulary.sql)
    #[arg(long, short = 'o')]
    output: Option<PathBuf>,

    /// Name of the vocabulary book
    #[arg(long)]
    book_name: Option<String>,

    /// Description of the vocabulary book
    #[arg(long)]
    book_description: Option<String>,

    /// Write the five-word sample input before converting
    #[arg(long)]
    with_sample: bool,

    /// Log verbosity
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    log_level: LogLevel,
}

fn main() {
    let args = Args::parse();
    init_logger(args.log_level);

    if let Err(e) = run(args) {
        error!("conversion failed: {:#}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    if args.with_sample {
        let file = File::create(sample::SAMPLE_FILE)
            .with_context(|| format!("Failed to create {}", sample::SAMPLE_FILE))?;
        let count = sample::write_sample(BufWriter::new(file))?;
        info!("wrote {} sample records to {}", count, sample::SAMPLE_FILE);
    }

    // Build config
    let mut config = ConvertConfig::default();
    if let Some(input) = args.input {
        config.input = input;
    }
    if let Some(output) = args.output {
        config.output = output;
    }
    if let Some(name) = args.book_name {
        config.book_name = name;
    }
    if let Some(description) = args.book_description {
        config.book_description = description;
    }

    convert_file(&config).with_context(|| {
        format!(
            "Failed to convert {} into {}",
            config.input.display(),
            config.output.display()
        )
    })?;

    Ok(())
}
