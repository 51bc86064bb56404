// file: src/models/section.rs
// description: embedded JSON sections and their typed optional-key views
// reference: https://docs.rs/serde_json

use serde::de::{DeserializeOwned, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// A JSON-encoded sub-document embedded in a listing record.
///
/// Decoding never fails outward: text that is not valid JSON is kept as
/// `RawFallback` so it can still be shown to the user.
///
/// Serialized adjacently tagged (`{"kind": ..., "value": ...}`) so a parsed
/// object that happens to carry a `raw_fallback` key reads back as parsed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Section {
    RawFallback { raw_fallback: String },
    Parsed(Value),
}

impl Section {
    pub fn is_parsed(&self) -> bool {
        matches!(self, Section::Parsed(_))
    }

    pub fn parsed(&self) -> Option<&Value> {
        match self {
            Section::Parsed(value) => Some(value),
            Section::RawFallback { .. } => None,
        }
    }

    pub fn raw_fallback(&self) -> Option<&str> {
        match self {
            Section::RawFallback { raw_fallback } => Some(raw_fallback),
            Section::Parsed(_) => None,
        }
    }

    /// Reads the parsed value through a typed view.
    ///
    /// Views declare every key optional, so unknown keys are ignored and
    /// missing keys take their defaults. Only JSON objects are read: serde
    /// would otherwise fill struct fields from an array by position.
    /// Returns `None` for a raw fallback, a non-object, or a value whose
    /// shape the view cannot accept.
    pub fn view<T: DeserializeOwned>(&self) -> Option<T> {
        self.parsed()
            .filter(|value| value.is_object())
            .and_then(|value| serde_json::from_value(value.clone()).ok())
    }

    /// Plain-text rendering for display surfaces.
    pub fn display_text(&self) -> String {
        match self {
            Section::RawFallback { raw_fallback } => raw_fallback.clone(),
            Section::Parsed(value) => value_to_text(value),
        }
    }
}

/// Flattens a JSON value into display text: strings as-is, arrays joined by
/// `", "`, everything else in compact JSON.
pub fn value_to_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(value_to_text)
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(", "),
        other => other.to_string(),
    }
}

fn lenient_strings<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items
            .iter()
            .map(value_to_text)
            .filter(|s| !s.is_empty())
            .collect(),
        Some(other) => {
            let text = value_to_text(&other);
            if text.is_empty() { Vec::new() } else { vec![text] }
        }
    })
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.map(|v| value_to_text(&v)).filter(|s| !s.is_empty()))
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComplianceInfo {
    #[serde(deserialize_with = "lenient_strings")]
    pub required_certifications: Vec<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub certification_guidance: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub regulatory_requirements: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub labeling_requirements: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub walmart_specific_compliance: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompetitorLandscape {
    #[serde(deserialize_with = "lenient_text")]
    pub market_position: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub price_positioning: Option<String>,
    #[serde(deserialize_with = "lenient_strings")]
    pub top_3_competitors: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfitStrategy {
    #[serde(deserialize_with = "lenient_strings")]
    pub q1_action_plan: Vec<String>,
    #[serde(deserialize_with = "lenient_strings")]
    pub q2_growth_tactics: Vec<String>,
    #[serde(deserialize_with = "lenient_strings")]
    pub q3_optimization: Vec<String>,
    #[serde(deserialize_with = "lenient_strings")]
    pub q4_maximization: Vec<String>,
    pub competitor_landscape: Option<CompetitorLandscape>,
    pub revenue_projections: Option<Value>,
}

impl ProfitStrategy {
    /// Quarter plans in calendar order, skipping empty quarters.
    pub fn quarters(&self) -> Vec<(&'static str, &[String])> {
        [
            ("Q1 Action Plan", self.q1_action_plan.as_slice()),
            ("Q2 Growth Tactics", self.q2_growth_tactics.as_slice()),
            ("Q3 Optimization", self.q3_optimization.as_slice()),
            ("Q4 Maximization", self.q4_maximization.as_slice()),
        ]
        .into_iter()
        .filter(|(_, items)| !items.is_empty())
        .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RichMedia {
    #[serde(deserialize_with = "lenient_strings")]
    pub main_images: Vec<String>,
    #[serde(deserialize_with = "lenient_strings")]
    pub video_content: Vec<String>,
    #[serde(deserialize_with = "lenient_strings")]
    pub infographics: Vec<String>,
    #[serde(rename = "360_view")]
    pub view_360: Option<Value>,
}

/// Free-form warranty terms keyed by name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WarrantyInfo {
    #[serde(flatten)]
    pub terms: BTreeMap<String, Value>,
}

impl WarrantyInfo {
    /// Terms as `(label, text)` pairs with underscores turned into spaces.
    pub fn entries(&self) -> Vec<(String, String)> {
        self.terms
            .iter()
            .map(|(key, value)| (key.replace('_', " "), value_to_text(value)))
            .collect()
    }
}
