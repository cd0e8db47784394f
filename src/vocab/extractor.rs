use crate::vocab::source::{NestedWordAdapter, SourceAdapter, WordContent};
use crate::vocab::text::{clean_optional, clean_text};
use crate::vocab::types::{Example, Meaning, NormalizedRecord, Pronunciation, WordRow};
use log::{debug, info, warn};
use serde_json::Value;

/// Maximum number of example sentences kept per word
pub const MAX_EXAMPLES: usize = 3;

/// Turns parsed input records into word rows
pub struct Normalizer<A: SourceAdapter = NestedWordAdapter> {
    adapter: A,
}

impl Normalizer<NestedWordAdapter> {
    pub fn new() -> Self {
        Normalizer {
            adapter: NestedWordAdapter,
        }
    }
}

impl Default for Normalizer<NestedWordAdapter> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: SourceAdapter> Normalizer<A> {
    pub fn with_adapter(adapter: A) -> Self {
        Normalizer { adapter }
    }

    /// Normalize one record, or `None` if it is not eligible for output
    ///
    /// `word_order` is the record's 1-based position in the parsed input.
    pub fn normalize(&self, record: &Value, word_order: usize) -> Option<WordRow> {
        let entry = self.adapter.adapt(record);

        let word = clean_text(&entry.head_word);
        if word.is_empty() {
            warn!("record {} has no headWord, skipping", word_order);
            return None;
        }

        info!("processing word: {}", word);

        let Some(content) = entry.content else {
            warn!("word {} has no content data, skipping", word);
            return None;
        };

        let pronunciation = extract_pronunciation(&content);
        debug!("  pronunciation: {:?}", pronunciation);

        let meanings = extract_meanings(&content);
        debug!("  meanings: {}", meanings.len());

        if meanings.is_empty() {
            warn!("word {} has no meanings, skipping", word);
            return None;
        }

        Some(WordRow {
            word,
            record: NormalizedRecord {
                pronunciation,
                meanings,
            },
            word_order,
        })
    }

    /// Normalize every record, numbering them from 1 in input order
    ///
    /// Numbers are assigned before ineligible records are dropped, so the
    /// surviving rows keep their input position and may have gaps.
    pub fn normalize_all(&self, records: &[Value]) -> Vec<WordRow> {
        records
            .iter()
            .enumerate()
            .filter_map(|(idx, record)| self.normalize(record, idx + 1))
            .collect()
    }
}

/// Wrap a phonetic transcription in slashes
///
/// Blank input yields `None`. Only the leading slash is checked, so `"/abc"`
/// is returned unchanged.
pub fn wrap_phonetic(phone: &str) -> Option<String> {
    let phone = phone.trim();
    if phone.is_empty() {
        return None;
    }

    if phone.starts_with('/') {
        Some(phone.to_string())
    } else {
        Some(format!("/{}/", phone))
    }
}

pub fn extract_pronunciation(content: &WordContent) -> Pronunciation {
    Pronunciation {
        us: content.us_phone.as_deref().and_then(wrap_phonetic),
        uk: content.uk_phone.as_deref().and_then(wrap_phonetic),
    }
}

/// Up to [`MAX_EXAMPLES`] examples, taken from the first sentences in order
///
/// Sentences missing either key are skipped without pulling in later ones.
pub fn extract_examples(content: &WordContent) -> Vec<Example> {
    content
        .sentences
        .iter()
        .take(MAX_EXAMPLES)
        .filter_map(|s| match (&s.content, &s.translation) {
            (Some(sentence), Some(translation)) => Some(Example {
                sentence: clean_text(sentence),
                translation: clean_text(translation),
            }),
            _ => None,
        })
        .collect()
}

/// Build the meaning list, attaching all examples to the first meaning
///
/// A record with examples but no translations gets a single meaning with an
/// empty part of speech and definition to carry them.
pub fn extract_meanings(content: &WordContent) -> Vec<Meaning> {
    let mut meanings: Vec<Meaning> = content
        .translations
        .iter()
        .map(|t| Meaning {
            part_of_speech: t.pos.as_deref().map(str::trim).unwrap_or_default().to_string(),
            definition: clean_optional(t.definition.as_deref()),
            examples: Vec::new(),
        })
        .collect();

    let examples = extract_examples(content);
    if examples.is_empty() {
        return meanings;
    }

    match meanings.first_mut() {
        Some(first) => first.examples = examples,
        None => meanings.push(Meaning {
            examples,
            ..Meaning::default()
        }),
    }

    meanings
}
