// file: src/parser/text.rs
// description: FAQ and video script block parsing
// reference: generated listing text conventions

use crate::models::FaqEntry;
use crate::parser::patterns::FAQ_MARKER;
use serde_json::Value;

const SCRIPT_SEPARATOR: &str = "\n\n---\n\n";

enum FaqPart {
    Question,
    Answer,
}

/// Parses `Q:` / `A:` blocks into question and answer pairs.
///
/// Lines without a marker continue the current part. Questions with no
/// answer are kept with an empty answer; text before the first `Q:` is ignored.
pub fn parse_faqs(raw: &str) -> Vec<FaqEntry> {
    let mut entries: Vec<FaqEntry> = Vec::new();
    let mut part: Option<FaqPart> = None;

    for line in raw.lines() {
        if let Some(caps) = FAQ_MARKER.captures(line) {
            let text = caps[2].trim().to_string();
            if caps[1].eq_ignore_ascii_case("q") {
                entries.push(FaqEntry {
                    question: text,
                    answer: String::new(),
                });
                part = Some(FaqPart::Question);
            } else if let Some(entry) = entries.last_mut() {
                append_line(&mut entry.answer, &text);
                part = Some(FaqPart::Answer);
            }
            continue;
        }

        let text = line.trim();
        if text.is_empty() {
            continue;
        }

        match (part.as_ref(), entries.last_mut()) {
            (Some(FaqPart::Question), Some(entry)) => append_line(&mut entry.question, text),
            (Some(FaqPart::Answer), Some(entry)) => append_line(&mut entry.answer, text),
            _ => {}
        }
    }

    entries
}

fn append_line(target: &mut String, text: &str) {
    if text.is_empty() {
        return;
    }
    if !target.is_empty() {
        target.push(' ');
    }
    target.push_str(text);
}

/// Splits video scripts stored either as one separated string or as a list.
pub fn split_video_scripts(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::String(raw)) => raw
            .replace("\r\n", "\n")
            .split(SCRIPT_SEPARATOR)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect(),
        Some(Value::Array(items)) => items.iter().filter_map(script_item).collect(),
        _ => Vec::new(),
    }
}

fn script_item(item: &Value) -> Option<String> {
    match item {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Object(obj) => {
            let script = obj.get("script").and_then(Value::as_str)?.trim();
            if script.is_empty() {
                return None;
            }
            match obj.get("title").and_then(Value::as_str).map(str::trim) {
                Some(title) if !title.is_empty() => Some(format!("{}\n{}", title, script)),
                _ => Some(script.to_string()),
            }
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_faqs() {
        let raw = "Q: How long does the battery last?\nA: Up to 8 hours.\nPlus 16 from the case.\n\nQ: Waterproof?\nA: IPX7.";
        let faqs = parse_faqs(raw);

        assert_eq!(faqs.len(), 2);
        assert_eq!(faqs[0].question, "How long does the battery last?");
        assert_eq!(faqs[0].answer, "Up to 8 hours. Plus 16 from the case.");
        assert_eq!(faqs[1].answer, "IPX7.");
    }

    #[test]
    fn test_faqs_without_markers() {
        assert!(parse_faqs("Just some prose about the product").is_empty());
        assert!(parse_faqs("").is_empty());
    }

    #[test]
    fn test_question_without_answer() {
        let faqs = parse_faqs("Q: Anyone?");
        assert_eq!(faqs.len(), 1);
        assert!(faqs[0].answer.is_empty());
    }

    #[test]
    fn test_split_scripts_string() {
        let scripts = split_video_scripts(Some(&json!("Hook one\n\n---\n\nHook two\n\n---\n\n  ")));
        assert_eq!(scripts, vec!["Hook one", "Hook two"]);
    }

    #[test]
    fn test_split_scripts_list() {
        let scripts = split_video_scripts(Some(&json!([
            {"title": "Unboxing Hook", "script": "POV: you got the earbuds"},
            {"script": "Tired of dead batteries?"},
            {"title": "Empty"},
            "Plain script"
        ])));
        assert_eq!(
            scripts,
            vec![
                "Unboxing Hook\nPOV: you got the earbuds",
                "Tired of dead batteries?",
                "Plain script"
            ]
        );
    }
}
