//! Source adapters: map one upstream JSON shape onto the extractor's view
//!
//! The extractor never walks raw JSON itself. An adapter turns each input
//! record into a [`SourceEntry`], so a word list exported in another shape
//! only needs a new [`SourceAdapter`] implementation.

use serde_json::Value;

/// A translation entry as found in the source, before cleaning
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTranslation {
    pub pos: Option<String>,
    pub definition: Option<String>,
}

/// An example sentence as found in the source, before cleaning
///
/// A field is `None` only when its key is missing; a key holding `null` or
/// another non-string value reads as an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawSentence {
    pub content: Option<String>,
    pub translation: Option<String>,
}

/// The per-word content block of a record
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordContent {
    pub us_phone: Option<String>,
    pub uk_phone: Option<String>,

    pub translations: Vec<RawTranslation>,

    /// Every sentence in source order; capping happens in the extractor
    pub sentences: Vec<RawSentence>,
}

/// Typed view of one input record
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceEntry {
    /// Raw headword, empty when missing or not a string
    pub head_word: String,

    /// `None` when the content block is missing or empty
    pub content: Option<WordContent>,
}

/// Maps a parsed JSON record onto a [`SourceEntry`]
pub trait SourceAdapter {
    fn adapt(&self, record: &Value) -> SourceEntry;
}

/// Adapter for the nested word-book export shape:
///
/// ```json
/// {
///   "headWord": "access",
///   "content": {"word": {"content": {
///     "usphone": "'æksɛs",
///     "ukphone": "'ækses",
///     "trans": [{"pos": "v", "tranCn": "获取"}],
///     "sentence": {"sentences": [{"sContent": "...", "sCn": "..."}]}
///   }}}
/// }
/// ```
///
/// Non-string scalars and non-array lists are read as absent, except for the
/// sentence texts described on [`RawSentence`].
#[derive(Debug, Clone, Copy, Default)]
pub struct NestedWordAdapter;

impl SourceAdapter for NestedWordAdapter {
    fn adapt(&self, record: &Value) -> SourceEntry {
        let head_word = string_field(record, "headWord").unwrap_or_default();

        let content = record
            .get("content")
            .and_then(|c| c.get("word"))
            .and_then(|w| w.get("content"))
            .filter(|c| c.as_object().is_some_and(|obj| !obj.is_empty()))
            .map(Self::word_content);

        SourceEntry { head_word, content }
    }
}

impl NestedWordAdapter {
    fn word_content(content: &Value) -> WordContent {
        let translations = content
            .get("trans")
            .and_then(|t| t.as_array())
            .map(|items| {
                items
                    .iter()
                    .map(|item| RawTranslation {
                        pos: string_field(item, "pos"),
                        definition: string_field(item, "tranCn"),
                    })
                    .collect()
            })
            .unwrap_or_default();

        let sentences = content
            .get("sentence")
            .and_then(|s| s.get("sentences"))
            .and_then(|s| s.as_array())
            .map(|items| {
                items
                    .iter()
                    .map(|item| RawSentence {
                        content: present_field(item, "sContent"),
                        translation: present_field(item, "sCn"),
                    })
                    .collect()
            })
            .unwrap_or_default();

        WordContent {
            us_phone: string_field(content, "usphone"),
            uk_phone: string_field(content, "ukphone"),
            translations,
            sentences,
        }
    }
}

fn string_field(value: &Value, key: &str) -> Option<String> {
    value.get(key).and_then(|v| v.as_str()).map(str::to_string)
}

fn present_field(value: &Value, key: &str) -> Option<String> {
    value
        .get(key)
        .map(|v| v.as_str().unwrap_or_default().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_reads_nested_shape() {
        let record = json!({
            "headWord": "access",
            "content": {"word": {"content": {
                "usphone": "'æksɛs",
                "trans": [{"pos": "v", "tranCn": "获取"}],
                "sentence": {"sentences": [{"sContent": "a", "sCn": "b"}]}
            }}}
        });

        let entry = NestedWordAdapter.adapt(&record);
        assert_eq!(entry.head_word, "access");

        let content = entry.content.unwrap();
        assert_eq!(content.us_phone.as_deref(), Some("'æksɛs"));
        assert_eq!(content.uk_phone, None);
        assert_eq!(content.translations.len(), 1);
        assert_eq!(content.sentences[0].translation.as_deref(), Some("b"));
    }

    #[test]
    fn test_missing_or_empty_content() {
        let missing = NestedWordAdapter.adapt(&json!({"headWord": "x"}));
        assert!(missing.content.is_none());

        let empty = NestedWordAdapter.adapt(&json!({
            "headWord": "x",
            "content": {"word": {"content": {}}}
        }));
        assert!(empty.content.is_none());
    }

    #[test]
    fn test_non_string_fields_are_absent() {
        let entry = NestedWordAdapter.adapt(&json!({
            "headWord": 42,
            "content": {"word": {"content": {"usphone": null, "trans": "oops"}}}
        }));

        assert_eq!(entry.head_word, "");
        let content = entry.content.unwrap();
        assert_eq!(content.us_phone, None);
        assert!(content.translations.is_empty());
        assert!(content.sentences.is_empty());
    }

    #[test]
    fn test_sentence_key_presence() {
        let entry = NestedWordAdapter.adapt(&json!({
            "headWord": "x",
            "content": {"word": {"content": {
                "sentence": {"sentences": [
                    {"sContent": null, "sCn": "译文"},
                    {"sContent": "only the sentence"}
                ]}
            }}}
        }));

        let sentences = entry.content.unwrap().sentences;
        assert_eq!(sentences[0].content.as_deref(), Some(""));
        assert_eq!(sentences[0].translation.as_deref(), Some("译文"));
        assert_eq!(sentences[1].translation, None);
    }
}
