use crate::error::{ConvertError, Result};
use crate::vocab::book::Book;
use crate::vocab::text::escape_literal;
use crate::vocab::types::WordRow;
use std::io::{self, Write};

/// Writes a complete vocabulary SQL script: book upsert, word inserts and
/// the trailing `total_words` refresh
pub struct SqlWriter<W: Write> {
    writer: W,
}

impl<W: Write> SqlWriter<W> {
    pub fn new(writer: W) -> Self {
        SqlWriter { writer }
    }

    /// Write the whole script for one book
    pub fn write_script(&mut self, book: &Book, rows: &[WordRow]) -> Result<()> {
        self.write_raw("-- Auto-generated vocabulary SQL from JSON\n\n")?;
        self.write_book(book)?;
        self.write_words(book, rows)?;
        self.write_total_update()
    }

    fn write_book(&mut self, book: &Book) -> Result<()> {
        let sql = format!(
            "-- Insert vocabulary book\n\
             INSERT INTO vocabulary_books (name, description, difficulty, tags) VALUES\n\
             ('{}', '{}', '{}', {})\n\
             ON CONFLICT DO NOTHING;\n\n",
            escape_literal(&book.name),
            escape_literal(&book.description),
            book.difficulty,
            book.tags_sql(),
        );
        self.write_raw(&sql)
    }

    fn write_words(&mut self, book: &Book, rows: &[WordRow]) -> Result<()> {
        self.write_raw("-- Insert vocabulary words\n")?;
        self.write_raw("INSERT INTO vocabulary_words (book_id, word, content, word_order) VALUES\n")?;

        if rows.is_empty() {
            return self.write_raw("-- No valid words found;\n\n");
        }

        let tuples = rows
            .iter()
            .map(|row| word_tuple(&book.name, row))
            .collect::<Result<Vec<_>>>()?;

        self.write_raw(&tuples.join(",\n"))?;
        self.write_raw(";\n\n")
    }

    fn write_total_update(&mut self) -> Result<()> {
        self.write_raw(
            "-- Update total_words count\n\
             UPDATE vocabulary_books \n\
             SET total_words = (\n  \
             SELECT COUNT(*) \n  \
             FROM vocabulary_words \n  \
             WHERE vocabulary_words.book_id = vocabulary_books.id\n\
             );\n",
        )
    }

    fn write_raw(&mut self, text: &str) -> Result<()> {
        self.writer
            .write_all(text.as_bytes())
            .map_err(ConvertError::Write)
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush().map_err(ConvertError::Write)
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

/// One `VALUES` tuple for `vocabulary_words`
///
/// The book is referenced through a subquery on its name. The content JSON is
/// pretty-printed and its quotes doubled once more, on top of the escaping
/// already applied to each cleaned field.
pub fn word_tuple(book_name: &str, row: &WordRow) -> Result<String> {
    let content = serde_json::to_string_pretty(&row.record)?;

    Ok(format!(
        "((SELECT id FROM vocabulary_books WHERE name = '{}'), '{}', '{}', {})",
        escape_literal(book_name),
        row.word,
        escape_literal(&content),
        row.word_order,
    ))
}

/// Render a script to a string
pub fn render_script(book: &Book, rows: &[WordRow]) -> Result<String> {
    let mut writer = SqlWriter::new(Vec::new());
    writer.write_script(book, rows)?;
    String::from_utf8(writer.into_inner())
        .map_err(|e| ConvertError::Write(io::Error::new(io::ErrorKind::InvalidData, e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocab::types::{Example, Meaning, NormalizedRecord, Pronunciation};

    fn row(word: &str, order: usize) -> WordRow {
        WordRow {
            word: word.to_string(),
            record: NormalizedRecord {
                pronunciation: Pronunciation {
                    us: Some("/test/".to_string()),
                    uk: None,
                },
                meanings: vec![Meaning {
                    part_of_speech: "n".to_string(),
                    definition: "测试".to_string(),
                    examples: vec![Example {
                        sentence: "It''s a test.".to_string(),
                        translation: "这是一个测试。".to_string(),
                    }],
                }],
            },
            word_order: order,
        }
    }

    #[test]
    fn test_script_layout() {
        let book = Book::classify("CET-4 Core", "核心词汇");
        let sql = render_script(&book, &[row("test", 1), row("exam", 2)]).unwrap();

        assert!(sql.starts_with("-- Auto-generated vocabulary SQL from JSON\n\n"));
        assert!(sql.contains(
            "('CET-4 Core', '核心词汇', 'intermediate', ARRAY['CET4', '大学英语', '考试'])\nON CONFLICT DO NOTHING;\n\n"
        ));
        assert_eq!(sql.matches("(SELECT id FROM vocabulary_books WHERE name = 'CET-4 Core')").count(), 2);
        assert!(sql.contains("', 1),\n((SELECT"));
        assert!(sql.contains("', 2);\n\n-- Update total_words count\n"));
        assert!(sql.ends_with("  WHERE vocabulary_words.book_id = vocabulary_books.id\n);\n"));
    }

    #[test]
    fn test_empty_rows_placeholder() {
        let book = Book::classify("Random List", "");
        let sql = render_script(&book, &[]).unwrap();

        assert!(sql.contains(
            "INSERT INTO vocabulary_words (book_id, word, content, word_order) VALUES\n-- No valid words found;\n\n"
        ));
        assert!(sql.contains("INSERT INTO vocabulary_books"));
        assert!(sql.contains("UPDATE vocabulary_books"));
    }

    #[test]
    fn test_content_quotes_doubled_again() {
        let tuple = word_tuple("Book", &row("test", 1)).unwrap();
        assert!(tuple.contains("It''''s a test."));
        assert!(tuple.contains("\"partOfSpeech\": \"n\""));
        assert!(tuple.contains("这是一个测试。"));
    }

    #[test]
    fn test_book_name_is_escaped() {
        let book = Book::classify("Tom's List", "it's mine");
        let sql = render_script(&book, &[row("test", 1)]).unwrap();

        assert!(sql.contains("('Tom''s List', 'it''s mine', "));
        assert!(sql.contains("WHERE name = 'Tom''s List')"));
    }

    #[test]
    fn test_content_round_trips() {
        let original = row("test", 3);
        let tuple = word_tuple("Book", &original).unwrap();

        let start = tuple.find(", '{").unwrap() + 3;
        let end = tuple.rfind("', 3)").unwrap();
        let content = tuple[start..end].replace("''", "'");

        let parsed: NormalizedRecord = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed, original.record);
    }
}
