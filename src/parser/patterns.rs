// file: src/parser/patterns.rs
// description: compiled regex patterns for listing text fields
// reference: https://docs.rs/regex

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    pub static ref KEYWORD_SEPARATOR: Regex = Regex::new(
        r"[,\r\n]+"
    ).expect("KEYWORD_SEPARATOR regex is valid");

    pub static ref HASHTAG: Regex = Regex::new(
        r"#[\p{L}\p{N}_]+"
    ).expect("HASHTAG regex is valid");

    pub static ref FAQ_MARKER: Regex = Regex::new(
        r"(?i)^\s*(Q|A)\s*[:.]\s*(.*)$"
    ).expect("FAQ_MARKER regex is valid");

    pub static ref HTML_TAG: Regex = Regex::new(
        r"<[^>]*>"
    ).expect("HTML_TAG regex is valid");

    pub static ref WHITESPACE_RUN: Regex = Regex::new(
        r"\s+"
    ).expect("WHITESPACE_RUN regex is valid");
}

/// Removes markup and collapses whitespace.
pub fn strip_html(text: &str) -> String {
    let without_tags = HTML_TAG.replace_all(text, " ");
    WHITESPACE_RUN
        .replace_all(&without_tags, " ")
        .trim()
        .to_string()
}
