//! Vocabulary conversion - turn word-book JSON into SQL inserts
//!
//! The pipeline has three stages:
//!
//! - **loader**: parse newline-delimited JSON, skipping malformed lines
//! - **extractor**: map each record through a [`SourceAdapter`] and build a
//!   [`NormalizedRecord`] of pronunciations and meanings
//! - **writer**: emit the book upsert, the word inserts and the
//!   `total_words` refresh as one SQL script

pub mod book;
pub mod extractor;
pub mod loader;
pub mod source;
pub mod text;
pub mod types;
pub mod writer;

pub use book::{Book, Difficulty};
pub use extractor::{Normalizer, MAX_EXAMPLES};
pub use loader::{parse_records, read_records, LoadReport};
pub use source::{NestedWordAdapter, SourceAdapter, SourceEntry, WordContent};
pub use text::{clean_text, escape_literal};
pub use types::{ConvertConfig, ConvertSummary, Example, Meaning, NormalizedRecord, Pronunciation, WordRow};
pub use writer::{render_script, word_tuple, SqlWriter};
