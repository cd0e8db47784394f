//! vocab2sql-sample: Write the five-word sample input
//!
//! Usage:
//!   vocab2sql-sample
//!   vocab2sql-sample --output words.json

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use vocab2sql::logger::{init_logger, LogLevel};
use vocab2sql::sample;

#[derive(Parser, Debug)]
#[command(name = "vocab2sql-sample")]
#[command(about = "Write an illustrative vocabulary JSON file", long_about = None)]
struct Args {
    /// Output file (default: CET4_sample_full.json)
    #[arg(long, short = 'o')]
    output: Option<PathBuf>,

    /// Log verbosity
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    log_level: LogLevel,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logger(args.log_level);

    let path = args
        .output
        .unwrap_or_else(|| PathBuf::from(sample::SAMPLE_FILE));
    let file = File::create(&path)
        .with_context(|| format!("Failed to create {}", path.display()))?;

    let count = sample::write_sample(BufWriter::new(file))?;
    info!("wrote {} sample records to {}", count, path.display());

    Ok(())
}
