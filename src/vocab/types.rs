use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// US/UK phonetic transcriptions, each wrapped in slashes
///
/// Absent keys are omitted from the serialized form rather than written as null.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pronunciation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub us: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uk: Option<String>,
}

/// An example sentence with its translation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Example {
    pub sentence: String,
    pub translation: String,
}

/// One sense of a headword
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meaning {
    /// Grammatical category, e.g. "v" or "n"; may be empty
    pub part_of_speech: String,

    pub definition: String,

    pub examples: Vec<Example>,
}

/// The JSON payload stored in `vocabulary_words.content`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedRecord {
    pub pronunciation: Pronunciation,
    pub meanings: Vec<Meaning>,
}

/// One row of `vocabulary_words`, ready to be emitted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordRow {
    /// Cleaned headword
    pub word: String,

    pub record: NormalizedRecord,

    /// 1-based position of the record in the parsed input
    pub word_order: usize,
}

/// Configuration for one conversion run
#[derive(Debug, Clone)]
pub struct ConvertConfig {
    /// Newline-delimited JSON word list
    pub input: PathBuf,

    /// SQL script to write
    pub output: PathBuf,

    pub book_name: String,

    pub book_description: String,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        ConvertConfig {
            input: PathBuf::from("IELTSluan_2.json"),
            output: PathBuf::from("010_add_ielts_vocabulary.sql"),
            book_name: String::from("IELTS Basic"),
            book_description: String::from(
                "雅思基础词汇，涵盖雅思考试必备单词，适合出国留学的英语水平证明。",
            ),
        }
    }
}

/// Counts reported at the end of a conversion
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConvertSummary {
    /// Lines that parsed as JSON
    pub parsed: usize,

    /// Non-empty lines that failed to parse
    pub skipped_lines: usize,

    /// Word rows written to the script
    pub written: usize,

    /// Parsed records dropped by the extractor
    pub dropped: usize,
}
