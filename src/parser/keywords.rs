// file: src/parser/keywords.rs
// description: keyword, tag and hashtag list splitting
// reference: marketplace keyword field conventions

use crate::models::KeywordSet;
use crate::parser::patterns::{HASHTAG, KEYWORD_SEPARATOR};
use crate::schema::TagStyle;
use serde_json::Value;

/// Splits a comma or newline separated string into trimmed, non-empty terms.
pub fn split_keywords(raw: &str) -> Vec<String> {
    KEYWORD_SEPARATOR
        .split(raw)
        .map(str::trim)
        .filter(|term| !term.is_empty())
        .map(str::to_string)
        .collect()
}

/// Normalizes a keyword field that may be absent, a string, or a list.
pub fn split_keyword_value(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::String(raw)) => split_keywords(raw),
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(Value::as_str)
            .map(str::trim)
            .filter(|term| !term.is_empty())
            .map(str::to_string)
            .collect(),
        _ => Vec::new(),
    }
}

pub fn classify_keywords(value: Option<&Value>) -> KeywordSet {
    KeywordSet::classify(split_keyword_value(value))
}

/// Splits a platform tag field according to its style.
///
/// List-style strings may hold a serialized JSON array, which is decoded
/// first; anything else is treated as a comma separated list.
pub fn split_tags(value: Option<&Value>, style: TagStyle) -> Vec<String> {
    match (style, value) {
        (TagStyle::List, Some(Value::String(raw))) => {
            match serde_json::from_str::<Value>(raw.trim()) {
                Ok(decoded @ Value::Array(_)) => split_keyword_value(Some(&decoded)),
                _ => split_keywords(raw),
            }
        }
        (TagStyle::Hashtags, Some(Value::String(raw))) => split_hashtags(raw),
        (_, other) => split_keyword_value(other),
    }
}

pub fn split_hashtags(raw: &str) -> Vec<String> {
    let tags: Vec<String> = HASHTAG
        .find_iter(raw)
        .map(|m| m.as_str().to_string())
        .collect();

    if tags.is_empty() {
        raw.split(|c: char| c.is_whitespace() || c == ',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(|t| format!("#{}", t.trim_start_matches('#')))
            .collect()
    } else {
        tags
    }
}
