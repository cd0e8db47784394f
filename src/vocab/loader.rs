use crate::error::{ConvertError, Result};
use log::{debug, info, warn};
use serde_json::Value;
use std::io::Read;
use std::path::Path;

/// Characters of a malformed line echoed back in its warning
const PREVIEW_CHARS: usize = 100;

/// Records parsed from a newline-delimited JSON source
#[derive(Debug, Clone, Default)]
pub struct LoadReport {
    /// Successfully parsed records in line order
    pub records: Vec<Value>,

    /// Non-empty lines that failed to parse
    pub skipped: usize,

    /// Lines seen after trimming the whole input
    pub total_lines: usize,
}

/// Parse newline-delimited JSON text, skipping lines that fail to parse
pub fn parse_records(content: &str) -> LoadReport {
    let mut report = LoadReport::default();

    for (idx, line) in content.trim().split('\n').enumerate() {
        let line_no = idx + 1;
        report.total_lines = line_no;

        if line.trim().is_empty() {
            continue;
        }

        match serde_json::from_str::<Value>(line) {
            Ok(value) => {
                debug!("parsed line {}", line_no);
                report.records.push(value);
            }
            Err(e) => {
                warn!(
                    "skipping invalid JSON on line {}: {} (content: {}...)",
                    line_no,
                    e,
                    preview(line)
                );
                report.skipped += 1;
            }
        }
    }

    info!("parsed {} word records", report.records.len());
    report
}

/// Read a whole source and parse it with [`parse_records`]
///
/// `path` names the source in errors.
pub fn read_records<R: Read>(mut reader: R, path: &Path) -> Result<LoadReport> {
    let mut content = String::new();
    reader
        .read_to_string(&mut content)
        .map_err(|source| ConvertError::Io {
            path: path.to_path_buf(),
            source,
        })?;

    debug!("input length: {} bytes", content.len());
    Ok(parse_records(&content))
}

fn preview(line: &str) -> String {
    line.chars().take(PREVIEW_CHARS).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logger::capture::{capture_logs, warnings};

    #[test]
    fn test_parses_each_line() {
        let report = parse_records("{\"headWord\": \"a\"}\n{\"headWord\": \"b\"}\n");
        assert_eq!(report.records.len(), 2);
        assert_eq!(report.records[1]["headWord"], "b");
        assert_eq!(report.skipped, 0);
    }

    #[test]
    fn test_skips_malformed_and_blank_lines() {
        let input = "\n{\"headWord\": \"a\"}\n\n{not json\n   \n{\"headWord\": \"c\"}\n\n";
        let (report, logs) = capture_logs(|| parse_records(input));

        assert_eq!(report.records.len(), 2);
        assert_eq!(report.records[1]["headWord"], "c");
        assert_eq!(report.skipped, 1);
        assert_eq!(report.total_lines, 5);

        let warned = warnings(&logs);
        assert_eq!(warned.len(), 1);
        assert!(warned[0].contains("line 3"));
        assert!(warned[0].contains("{not json..."));
    }

    #[test]
    fn test_empty_input() {
        let report = parse_records("   \n\n ");
        assert!(report.records.is_empty());
        assert_eq!(report.skipped, 0);
    }

    #[test]
    fn test_crlf_lines() {
        let report = parse_records("{\"headWord\": \"a\"}\r\n{\"headWord\": \"b\"}\r\n");
        assert_eq!(report.records.len(), 2);
    }

    #[test]
    fn test_preview_is_char_bounded() {
        let line = "词".repeat(150);
        assert_eq!(preview(&line).chars().count(), PREVIEW_CHARS);
    }

    #[test]
    fn test_read_records_rejects_invalid_utf8() {
        let bytes: &[u8] = &[0xff, 0xfe, b'\n'];
        match read_records(bytes, Path::new("words.json")) {
            Err(ConvertError::Io { path, .. }) => assert_eq!(path, Path::new("words.json")),
            other => panic!("expected Io error, got {:?}", other),
        }
    }
}
