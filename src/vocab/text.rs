//! Text cleaning and SQL literal escaping
//!
//! Every string that ends up inside a single-quoted SQL literal goes through
//! [`escape_literal`], either directly or via [`clean_text`].

use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\s+").unwrap()
});

/// Double every single quote so the text can sit inside a `'...'` literal
pub fn escape_literal(text: &str) -> String {
    text.replace('\'', "''")
}

/// Collapse whitespace runs to one space, trim, then escape single quotes
///
/// Empty input yields an empty string.
pub fn clean_text(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let collapsed = WHITESPACE_RUN.replace_all(text.trim(), " ");
    escape_literal(&collapsed)
}

/// [`clean_text`] for optional fields; `None` cleans to an empty string
pub fn clean_optional(text: Option<&str>) -> String {
    text.map(clean_text).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapses_whitespace() {
        assert_eq!(clean_text("  to   get\n\tinto  "), "to get into");
    }

    #[test]
    fn test_escapes_single_quotes() {
        assert_eq!(clean_text("children's"), "children''s");
        assert_eq!(clean_text("'æksɛs"), "''æksɛs");
    }

    #[test]
    fn test_empty_and_missing() {
        assert_eq!(clean_text(""), "");
        assert_eq!(clean_text("   \n "), "");
        assert_eq!(clean_optional(None), "");
    }

    #[test]
    fn test_escape_literal_keeps_whitespace() {
        assert_eq!(escape_literal(" it's  here "), " it''s  here ");
    }

    #[test]
    fn test_non_ascii_passes_through() {
        assert_eq!(clean_text("接近，入口"), "接近，入口");
    }
}
