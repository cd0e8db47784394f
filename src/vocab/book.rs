//! Vocabulary book metadata and its classification from the book name

use crate::vocab::text::escape_literal;
use std::fmt;

const CET4_TAGS: &[&str] = &["CET4", "大学英语", "考试"];
const CET6_TAGS: &[&str] = &["CET6", "大学英语", "考试"];
const GENERAL_TAGS: &[&str] = &["词汇", "学习"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A row of `vocabulary_books`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub name: String,
    pub description: String,
    pub difficulty: Difficulty,
    pub tags: Vec<String>,
}

impl Book {
    /// Build a book, deriving difficulty and tags from its name
    ///
    /// "CET-4"/"CET4" and "CET-6"/"CET6" names get exam tags; any other name
    /// gets the general vocabulary tags. CET-4 is checked first.
    pub fn classify(name: impl Into<String>, description: impl Into<String>) -> Self {
        let name = name.into();

        let (tags, difficulty) = if name.contains("CET-4") || name.contains("CET4") {
            (CET4_TAGS, Difficulty::Intermediate)
        } else if name.contains("CET-6") || name.contains("CET6") {
            (CET6_TAGS, Difficulty::Advanced)
        } else {
            (GENERAL_TAGS, Difficulty::Intermediate)
        };

        Book {
            name,
            description: description.into(),
            difficulty,
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    /// Tags as a Postgres array literal, e.g. `ARRAY['CET4', '考试']`
    pub fn tags_sql(&self) -> String {
        let items: Vec<String> = self
            .tags
            .iter()
            .map(|t| format!("'{}'", escape_literal(t)))
            .collect();
        format!("ARRAY[{}]", items.join(", "))
    }
}
