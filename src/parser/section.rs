// file: src/parser/section.rs
// description: JSON section decoding with raw-text fallback
// reference: https://docs.rs/serde_json

use crate::models::Section;
use crate::schema::SectionSchema;
use serde_json::Value;
use tracing::debug;

/// Decodes an embedded JSON section.
///
/// Absent input yields `None`. Valid JSON is returned as-is for callers to
/// read by the keys they recognize. Anything else becomes
/// `Section::RawFallback` carrying the original text.
pub fn parse_section(raw: Option<&str>, schema: &SectionSchema) -> Option<Section> {
    let raw = raw?;

    match serde_json::from_str::<Value>(raw) {
        Ok(value) => {
            log_missing_keys(&value, schema);
            Some(Section::Parsed(value))
        }
        Err(e) => {
            debug!(
                "Section {} ({}) is not valid JSON, keeping raw text: {}",
                schema.name, schema.field, e
            );
            Some(Section::RawFallback {
                raw_fallback: raw.to_string(),
            })
        }
    }
}

/// Same contract as [`parse_section`], for a record value that may already
/// be structured JSON rather than an encoded string.
pub fn section_from_value(value: Option<&Value>, schema: &SectionSchema) -> Option<Section> {
    match value? {
        Value::String(raw) => parse_section(Some(raw), schema),
        Value::Null => None,
        structured => {
            log_missing_keys(structured, schema);
            Some(Section::Parsed(structured.clone()))
        }
    }
}

fn log_missing_keys(value: &Value, schema: &SectionSchema) {
    if schema.keys.is_empty() {
        return;
    }

    let Some(object) = value.as_object() else {
        debug!("Section {} decoded to a non-object value", schema.name);
        return;
    };

    let missing: Vec<&str> = schema
        .keys
        .iter()
        .copied()
        .filter(|key| !object.contains_key(*key))
        .collect();

    if !missing.is_empty() {
        debug!("Section {} missing keys: {}", schema.name, missing.join(", "));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const COMPLIANCE: SectionSchema = SectionSchema {
        name: "compliance",
        field: "walmart_compliance_certifications",
        keys: &["required_certifications", "certification_guidance"],
    };

    #[test]
    fn test_valid_json_returned_as_is() {
        let section = parse_section(Some(r#"{"required_certifications":["CPSC"]}"#), &COMPLIANCE);
        assert_eq!(
            section,
            Some(Section::Parsed(json!({"required_certifications": ["CPSC"]})))
        );
    }

    #[test]
    fn test_invalid_json_falls_back() {
        let section = parse_section(Some("not json"), &COMPLIANCE);
        assert_eq!(
            section,
            Some(Section::RawFallback {
                raw_fallback: "not json".to_string()
            })
        );
    }

    #[test]
    fn test_absent_is_none() {
        assert_eq!(parse_section(None, &COMPLIANCE), None);
    }

    #[test]
    fn test_never_panics_on_awkward_input() {
        for raw in ["{", "", "   ", "[1,", "null", "\"str\"", "{\"a\":}", "42"] {
            let section = parse_section(Some(raw), &COMPLIANCE);
            assert!(section.is_some(), "input {:?}", raw);
        }
        assert!(parse_section(Some("{"), &COMPLIANCE).unwrap().raw_fallback().is_some());
        assert!(parse_section(Some("42"), &COMPLIANCE).unwrap().is_parsed());
    }

    #[test]
    fn test_structured_value_passes_through() {
        let value = json!({"certification_guidance": "x"});
        let section = section_from_value(Some(&value), &COMPLIANCE);
        assert_eq!(section, Some(Section::Parsed(value)));
        assert_eq!(section_from_value(Some(&json!(null)), &COMPLIANCE), None);
        assert_eq!(section_from_value(None, &COMPLIANCE), None);
    }
}
