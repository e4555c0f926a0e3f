//! "Key | Value" table extraction from pull request descriptions
//!
//! Authors can override or add template variables by putting a two-column
//! markdown table in the description:
//!
//! ```text
//! Key | Value
//! --- | ---
//! Area | Core
//! Summary | Fix crash when the cache is empty
//! ```
//!
//! Only the first table introduced by a `Key | Value` header is read, and it
//! ends at the first line that is not a two-column row.

use regex::Regex;
use std::sync::LazyLock;
use tracing::{debug, trace};

use crate::variables::VariableMap;

/// Any newline convention
static LINE_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\r\n|\r|\n").expect("Invalid regex"));

/// `Key | Value` with optional outer pipes
static HEADER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*\|?\s*key\s*\|\s*value\s*\|?\s*$").expect("Invalid regex")
});

/// `---|---`, alignment colons allowed
static DIVIDER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*\|?\s*:?-{3,}:?\s*\|\s*:?-{3,}:?\s*\|?\s*$").expect("Invalid regex")
});

/// Two cells; a cell may contain `\|`, any other backslash is literal
static ROW_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*\|?(?P<key>(?:\\\||[^|])*)\|(?P<value>(?:\\\||[^|])*)\|?\s*$")
        .expect("Invalid regex")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    SeekingHeader,
    HeaderCandidate,
    InTable,
}

/// Extract the rows of the description's `Key | Value` table
pub fn extract_table(description: &str) -> VariableMap {
    let mut vars = VariableMap::new();
    if description.is_empty() {
        return vars;
    }

    let mut state = ScanState::SeekingHeader;
    for (index, line) in LINE_BREAK.split(description).enumerate() {
        state = match state {
            ScanState::SeekingHeader => seek_header(line),
            // A rejected header does not consume this line; it may be a header itself.
            ScanState::HeaderCandidate if DIVIDER_REGEX.is_match(line) => ScanState::InTable,
            ScanState::HeaderCandidate => seek_header(line),
            ScanState::InTable => match parse_row(line) {
                Some((key, value)) => {
                    if !key.is_empty() {
                        vars.insert(key, value);
                    }
                    ScanState::InTable
                }
                None => {
                    trace!(line = index, "table ended");
                    break;
                }
            },
        };
    }

    debug!(rows = vars.len(), "description table extracted");
    vars
}

fn seek_header(line: &str) -> ScanState {
    if HEADER_REGEX.is_match(line) {
        ScanState::HeaderCandidate
    } else {
        ScanState::SeekingHeader
    }
}

fn parse_row(line: &str) -> Option<(&str, String)> {
    let caps = ROW_REGEX.captures(line)?;
    let key = caps.name("key")?.as_str().trim();
    let value = caps.name("value")?.as_str().trim().replace("\\|", "|");
    Some((key, value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_description() {
        assert!(extract_table("").is_empty());
    }

    #[test]
    fn test_no_table() {
        let body = "This fixes the crash.\n\n- one\n- two\n";
        assert!(extract_table(body).is_empty());
    }

    #[test]
    fn test_simple_table() {
        let vars = extract_table("\nKey | Value\n---|---\nfoo | bar\n");
        assert_eq!(vars.len(), 1);
        assert_eq!(vars.get("FOO"), Some("bar"));
    }

    #[test]
    fn test_table_with_outer_pipes_and_alignment() {
        let body = "| Key | Value |\n|:---|:---:|\n| Area | Core |\n| Summary | Faster startup |";
        let vars = extract_table(body);
        assert_eq!(vars.get("area"), Some("Core"));
        assert_eq!(vars.get("summary"), Some("Faster startup"));
    }

    #[test]
    fn test_header_is_case_insensitive() {
        let vars = extract_table("KEY | VALUE\n--- | ---\na | b");
        assert_eq!(vars.get("a"), Some("b"));
    }

    #[test]
    fn test_crlf_and_cr_line_endings() {
        let vars = extract_table("Key | Value\r\n---|---\r\na | 1\rb | 2");
        assert_eq!(vars.get("a"), Some("1"));
        assert_eq!(vars.get("b"), Some("2"));
    }

    #[test]
    fn test_escaped_pipe_in_value() {
        let vars = extract_table("Key | Value\n---|---\nusage | a \\| b");
        assert_eq!(vars.get("usage"), Some("a | b"));
    }

    #[test]
    fn test_trailing_backslash_is_literal() {
        let vars = extract_table("Key | Value\n---|---\npath | C:\\dir\\\narea | core");
        assert_eq!(vars.get("path"), Some("C:\\dir\\"));
        assert_eq!(vars.get("area"), Some("core"));
    }

    #[test]
    fn test_backslash_before_text_is_literal() {
        let vars = extract_table("Key | Value\n---|---\npattern | \\d+ \\| \\w");
        assert_eq!(vars.get("pattern"), Some("\\d+ | \\w"));
    }

    #[test]
    fn test_stops_at_first_non_row() {
        let body = "Key | Value\n---|---\na | 1\nnot a row\nb | 2";
        let vars = extract_table(body);
        assert_eq!(vars.get("a"), Some("1"));
        assert!(!vars.contains("b"));
    }

    #[test]
    fn test_three_columns_end_the_table() {
        let body = "Key | Value\n---|---\na | 1\nb | 2 | 3\nc | 4";
        let vars = extract_table(body);
        assert_eq!(vars.len(), 1);
    }

    #[test]
    fn test_later_table_ignored_after_first_ends() {
        let body = "Key | Value\n---|---\na | 1\n\nKey | Value\n---|---\nb | 2";
        let vars = extract_table(body);
        assert!(vars.contains("a"));
        assert!(!vars.contains("b"));
    }

    #[test]
    fn test_missing_divider_rejects_header() {
        assert!(extract_table("Key | Value\nfoo | bar\n").is_empty());
    }

    #[test]
    fn test_malformed_divider() {
        assert!(extract_table("Key | Value\n--|--\nfoo | bar").is_empty());
    }

    #[test]
    fn test_rejected_header_resumes_scanning() {
        let body = "Key | Value\nKey | Value\n---|---\nfoo | bar";
        assert_eq!(extract_table(body).get("foo"), Some("bar"));

        let body = "Key | Value\nsome text\n\nKey | Value\n---|---\nfoo | bar";
        assert_eq!(extract_table(body).get("foo"), Some("bar"));
    }

    #[test]
    fn test_header_without_rows() {
        assert!(extract_table("Key | Value\n---|---\n").is_empty());
        assert!(extract_table("Key | Value\n---|---").is_empty());
    }

    #[test]
    fn test_empty_key_skipped() {
        let vars = extract_table("Key | Value\n---|---\n | orphan\nb | 2");
        assert_eq!(vars.len(), 1);
        assert_eq!(vars.get("b"), Some("2"));
    }

    #[test]
    fn test_empty_value_kept() {
        let vars = extract_table("Key | Value\n---|---\nnote | ");
        assert_eq!(vars.get("note"), Some(""));
    }

    #[test]
    fn test_duplicate_key_last_wins() {
        let vars = extract_table("Key | Value\n---|---\na | 1\nA | 2");
        assert_eq!(vars.get("a"), Some("2"));
    }

    #[test]
    fn test_table_after_prose() {
        let body = "## Summary\n\nMakes things better.\n\nKey | Value\n---|---\nArea | Core\n\nThanks!";
        let vars = extract_table(body);
        assert_eq!(vars.len(), 1);
        assert_eq!(vars.get("area"), Some("Core"));
    }
}
