// file: src/models/record.rs
// description: raw listing record as returned by the generation backend
// reference: generated listing REST payloads

use crate::error::{LensError, Result};
use crate::models::Platform;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};
use std::fs;
use std::path::Path;

/// One generated listing exactly as the backend returned it.
///
/// Field names and shapes differ per platform. Every accessor tolerates a
/// missing field or an unexpected type by returning `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListingRecord {
    fields: Map<String, Value>,
}

impl ListingRecord {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(fields) => Ok(Self { fields }),
            other => Err(LensError::Validation(format!(
                "Listing record must be a JSON object, got {}",
                json_kind(&other)
            ))),
        }
    }

    pub fn from_json(content: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(content)?;
        Self::from_value(value)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| LensError::FileOperation {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content)
    }

    /// Non-null value stored under `field`.
    pub fn value(&self, field: &str) -> Option<&Value> {
        self.fields.get(field).filter(|v| !v.is_null())
    }

    /// String value under `field`, or `None` when absent, blank, or not a string.
    pub fn text(&self, field: &str) -> Option<&str> {
        match self.fields.get(field) {
            Some(Value::String(s)) if !s.trim().is_empty() => Some(s.as_str()),
            _ => None,
        }
    }

    /// First non-blank string among `fields`, in order.
    pub fn first_text(&self, fields: &[&str]) -> Option<&str> {
        fields.iter().find_map(|field| self.text(field))
    }

    pub fn flag(&self, field: &str) -> bool {
        match self.fields.get(field) {
            Some(Value::Bool(b)) => *b,
            Some(Value::Number(n)) => n.as_i64().is_some_and(|n| n != 0),
            Some(Value::String(s)) => {
                matches!(s.trim().to_ascii_lowercase().as_str(), "true" | "yes" | "1")
            }
            _ => false,
        }
    }

    /// The platform the record declares for itself, if recognizable.
    pub fn platform(&self) -> Option<Platform> {
        self.text("platform").and_then(|p| p.parse().ok())
    }

    pub fn contains(&self, field: &str) -> bool {
        self.value(field).is_some()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Stable serialization used for fingerprinting.
    pub fn canonical_json(&self) -> String {
        // serde_json::Map is key-ordered without the preserve_order feature.
        Value::Object(self.fields.clone()).to_string()
    }

    /// Static record rendered when the backend cannot be reached.
    pub fn placeholder() -> Self {
        let value = json!({
            "platform": "amazon",
            "title": "Wireless Bluetooth Earbuds with Premium Sound Quality - Noise Cancelling Headphones with 24H Battery Life",
            "short_description": "Experience premium audio with our advanced wireless earbuds featuring active noise cancellation and crystal-clear sound.",
            "long_description": "<h2>Transform Your Audio Experience</h2>\n<p>Discover the perfect blend of comfort, style, and superior sound quality with our premium wireless earbuds.</p>\n<h3>Key Features:</h3>\n<ul>\n<li>Premium Hi-Fi Sound Quality</li>\n<li>Active Noise Cancellation</li>\n<li>24-Hour Battery Life</li>\n</ul>",
            "bullet_points": "🎵 PREMIUM SOUND QUALITY - Experience rich, detailed audio with deep bass and crystal-clear highs\n🔇 ACTIVE NOISE CANCELLATION - Block out distractions with intelligent noise reduction\n🔋 ALL-DAY BATTERY LIFE - Up to 8 hours of playback plus 16 more from the charging case\n💧 SWEAT & WATER RESISTANT - IPX7 rating protects against sweat, rain, and splashes\n📱 UNIVERSAL COMPATIBILITY - Connects to iPhone, Android, tablets, and all Bluetooth devices",
            "keywords": "wireless earbuds, bluetooth headphones, noise cancelling, waterproof earbuds, long battery life, premium sound quality, workout headphones, wireless charging",
            "whats_in_box": "• 1x Wireless Bluetooth Earbuds (Left & Right)\n• 1x Charging Case\n• 3x Sets of Ear Tips (S, M, L)\n• 1x USB-C Charging Cable\n• 1x User Manual",
            "faqs": "Q: How long does the battery last on a single charge?\nA: Up to 8 hours, with an additional 16 hours from the charging case.\n\nQ: Are these earbuds compatible with iPhone and Android?\nA: Yes, they work with all Bluetooth-enabled devices.",
            "amazon_aplus_content": "<h2>Why Choose Our Earbuds?</h2>\n<h3>Premium Sound</h3><p>Advanced drivers deliver audiophile-grade sound</p>\n<h3>24H Battery</h3><p>All-day listening with quick charge technology</p>"
        });

        match value {
            Value::Object(fields) => Self { fields },
            _ => Self::default(),
        }
    }
}

impl From<Map<String, Value>> for ListingRecord {
    fn from(fields: Map<String, Value>) -> Self {
        Self::new(fields)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_tolerates_absence_and_types() {
        let record = ListingRecord::from_json(
            r#"{"title": "Earbuds", "blank": "   ", "count": 3, "missing": null}"#,
        )
        .unwrap();

        assert_eq!(record.text("title"), Some("Earbuds"));
        assert_eq!(record.text("blank"), None);
        assert_eq!(record.text("count"), None);
        assert_eq!(record.text("missing"), None);
        assert_eq!(record.text("nope"), None);
        assert!(!record.contains("missing"));
    }

    #[test]
    fn test_first_text_falls_through() {
        let record =
            ListingRecord::from_json(r#"{"walmart_product_title": "", "title": "Fallback"}"#)
                .unwrap();
        assert_eq!(
            record.first_text(&["walmart_product_title", "title"]),
            Some("Fallback")
        );
    }

    #[test]
    fn test_flag_variants() {
        let record = ListingRecord::from_json(
            r#"{"a": true, "b": "yes", "c": 0, "d": "no", "e": 1}"#,
        )
        .unwrap();
        assert!(record.flag("a"));
        assert!(record.flag("b"));
        assert!(!record.flag("c"));
        assert!(!record.flag("d"));
        assert!(record.flag("e"));
        assert!(!record.flag("absent"));
    }

    #[test]
    fn test_rejects_non_object() {
        assert!(ListingRecord::from_json("[1, 2]").is_err());
        assert!(ListingRecord::from_json("not json").is_err());
    }

    #[test]
    fn test_platform_field() {
        let record = ListingRecord::from_json(r#"{"platform": "Etsy"}"#).unwrap();
        assert_eq!(record.platform(), Some(Platform::Etsy));
        assert_eq!(ListingRecord::default().platform(), None);
    }

    #[test]
    fn test_canonical_json_is_key_ordered() {
        let a = ListingRecord::from_json(r#"{"b": "2", "a": "1"}"#).unwrap();
        let b = ListingRecord::from_json(r#"{"a": "1", "b": "2"}"#).unwrap();
        assert_eq!(a.canonical_json(), b.canonical_json());
    }

    #[test]
    fn test_placeholder_is_renderable() {
        let record = ListingRecord::placeholder();
        assert_eq!(record.platform(), Some(Platform::Amazon));
        assert!(record.text("title").is_some());
        assert!(record.text("keywords").is_some());
    }
}
