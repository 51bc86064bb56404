// file: src/pipeline/normalizer.rs
// description: record to view-model normalization for a target platform
// reference: platform schema lookup table

use crate::models::{ListingRecord, NormalizedListing, Platform};
use crate::parser::{
    classify_keywords, parse_faqs, section_from_value, split_bullets, split_keyword_value,
    split_tags, split_video_scripts,
};
use crate::pipeline::validator::{check_limits, first_value, resolve_text, score, validate};
use crate::schema::PlatformSchema;
use std::collections::BTreeMap;
use tracing::debug;

/// Converts raw listing records into [`NormalizedListing`] view models.
///
/// Stateless and side-effect free: the same record and platform always
/// produce an equal result, and no input can make it fail.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContentNormalizer;

impl ContentNormalizer {
    pub fn new() -> Self {
        Self
    }

    pub fn normalize(&self, record: &ListingRecord, platform: Platform) -> NormalizedListing {
        let schema = PlatformSchema::for_platform(platform);

        let title = owned_text(record, schema.title_fields);

        let bullets = resolve_text(record, schema.bullet_fields)
            .map(split_bullets)
            .unwrap_or_default();

        let keywords = classify_keywords(first_value(record, schema.keyword_fields));
        let backend_keywords =
            split_keyword_value(first_value(record, schema.backend_keyword_fields));

        let tags = schema
            .tag_field
            .map(|tag| split_tags(record.value(tag.field), tag.style))
            .unwrap_or_default();

        let description = owned_text(record, schema.description_fields);
        let short_description = owned_text(record, schema.short_description_fields);

        let mut text_blocks = BTreeMap::new();
        for (name, field) in schema.text_blocks {
            if let Some(text) = record.text(field) {
                text_blocks.insert(name.to_string(), text.trim().to_string());
            }
        }
        if let Some(field) = schema.assembly_field
            && record.contains(field)
        {
            let label = if record.flag(field) {
                "Assembly Required"
            } else {
                "No Assembly Required"
            };
            text_blocks.insert("assembly".to_string(), label.to_string());
        }

        let faqs = schema
            .faq_field
            .and_then(|field| record.text(field))
            .map(parse_faqs)
            .unwrap_or_default();

        let video_scripts = schema
            .video_script_field
            .map(|field| split_video_scripts(record.value(field)))
            .unwrap_or_default();

        let mut sections = BTreeMap::new();
        for section_schema in schema.sections {
            if let Some(section) =
                section_from_value(first_value(record, &[section_schema.field]), section_schema)
            {
                sections.insert(section_schema.name.to_string(), section);
            }
        }

        let validation = validate(record, platform);
        let limit_findings = check_limits(record, platform);
        let score = score(&validation);

        debug!(
            "Normalized {} listing: {} bullets, {} keywords, {} sections, score {}",
            platform,
            bullets.len(),
            keywords.len(),
            sections.len(),
            score
        );

        NormalizedListing {
            platform,
            title,
            bullets,
            keywords,
            backend_keywords,
            tags,
            description,
            short_description,
            text_blocks,
            faqs,
            video_scripts,
            sections,
            validation,
            limit_findings,
            score,
        }
    }

    /// Normalizes for the platform the record declares, or `fallback` when it
    /// declares none.
    pub fn normalize_auto(&self, record: &ListingRecord, fallback: Platform) -> NormalizedListing {
        let platform = record.platform().unwrap_or(fallback);
        self.normalize(record, platform)
    }
}

fn owned_text(record: &ListingRecord, fields: &[&str]) -> String {
    resolve_text(record, fields)
        .map(str::to_string)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BulletEntry, CheckStatus, ComplianceInfo, ProfitStrategy, Section};
    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};

    fn record(value: Value) -> ListingRecord {
        ListingRecord::from_value(value).unwrap()
    }

    fn walmart_record() -> ListingRecord {
        record(json!({
            "platform": "walmart",
            "title": "Generic title",
            "walmart_product_title": "Acme Wireless Earbuds, 24H Battery",
            "walmart_key_features": "• Long battery - 24 hours\n• Waterproof",
            "walmart_description": "Plain text description",
            "keywords": "earbuds, wireless bluetooth earbuds",
            "walmart_gtin_upc": "012345678905",
            "walmart_assembly_required": false,
            "walmart_compliance_certifications": "{\"required_certifications\":[\"CPSC\"]}",
            "walmart_profit_maximizer": "{not valid json",
            "walmart_specifications": {"weight": "50g"},
            "walmart_rich_media": ""
        }))
    }

    #[test]
    fn test_walmart_fields_resolved() {
        let listing = ContentNormalizer::new().normalize(&walmart_record(), Platform::Walmart);

        assert_eq!(listing.title, "Acme Wireless Earbuds, 24H Battery");
        assert_eq!(
            listing.bullets,
            vec![
                BulletEntry::new(Some("Long battery".to_string()), "24 hours"),
                BulletEntry::new(None, "Waterproof"),
            ]
        );
        assert_eq!(listing.description, "Plain text description");
        assert_eq!(listing.text_block("gtin_upc"), Some("012345678905"));
        assert_eq!(listing.text_block("assembly"), Some("No Assembly Required"));
    }

    #[test]
    fn test_sections_degrade_independently() {
        let listing = ContentNormalizer::new().normalize(&walmart_record(), Platform::Walmart);

        let compliance: ComplianceInfo = listing.section("compliance").unwrap().view().unwrap();
        assert_eq!(compliance.required_certifications, vec!["CPSC"]);

        let profit = listing.section("profit_maximizer").unwrap();
        assert_eq!(profit.raw_fallback(), Some("{not valid json"));
        assert!(profit.view::<ProfitStrategy>().is_none());

        assert_eq!(
            listing.section("specifications"),
            Some(&Section::Parsed(json!({"weight": "50g"})))
        );
        assert!(listing.section("rich_media").is_none());
        assert!(listing.section("warranty").is_none());
    }

    #[test]
    fn test_empty_record_is_total() {
        for platform in Platform::ALL {
            let listing = ContentNormalizer::new().normalize(&ListingRecord::default(), platform);
            assert_eq!(listing.title, "");
            assert!(listing.bullets.is_empty());
            assert!(listing.keywords.is_empty());
            assert!(listing.sections.is_empty());
            assert!(listing.limit_findings.is_empty());
            assert_eq!(listing.validation.len(), 6);
            assert_eq!(listing.score, 0);
        }
    }

    #[test]
    fn test_wrong_types_tolerated() {
        let listing = ContentNormalizer::new().normalize(
            &record(json!({
                "title": 42,
                "bullet_points": ["not", "a", "string"],
                "keywords": {"nested": true},
                "faqs": null
            })),
            Platform::Amazon,
        );
        assert_eq!(listing.title, "");
        assert!(listing.bullets.is_empty());
        assert!(listing.keywords.is_empty());
        assert!(listing.faqs.is_empty());
    }

    #[test]
    fn test_deterministic() {
        let normalizer = ContentNormalizer::new();
        let record = walmart_record();
        assert_eq!(
            normalizer.normalize(&record, Platform::Walmart),
            normalizer.normalize(&record, Platform::Walmart)
        );
    }

    #[test]
    fn test_title_and_checks_measure_same_text() {
        let listing = ContentNormalizer::new().normalize(
            &record(json!({"title": format!("  {}  ", "x".repeat(149))})),
            Platform::Amazon,
        );
        assert_eq!(listing.title.chars().count(), 149);
        let check = listing
            .validation
            .iter()
            .find(|r| r.check_name == "Title Length")
            .unwrap();
        assert_eq!(check.message, "149/150 characters");
        assert_eq!(check.status, CheckStatus::Good);
    }

    #[test]
    fn test_listing_round_trips_through_json() {
        let listing = ContentNormalizer::new().normalize(
            &record(json!({
                "walmart_specifications": "{\"raw_fallback\":\"10 inch\"}",
                "walmart_profit_maximizer": "{not valid json"
            })),
            Platform::Walmart,
        );
        assert!(listing.section("specifications").unwrap().is_parsed());

        let encoded = serde_json::to_string(&listing).unwrap();
        let decoded: NormalizedListing = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, listing);
    }

    #[test]
    fn test_etsy_and_tiktok_tags() {
        let normalizer = ContentNormalizer::new();

        let etsy = normalizer.normalize(
            &record(json!({"etsy_tags": "[\"boho ring\", \"silver\"]", "etsy_seo_report": "Plain advice"})),
            Platform::Etsy,
        );
        assert_eq!(etsy.tags, vec!["boho ring", "silver"]);
        assert_eq!(etsy.section("seo").unwrap().raw_fallback(), Some("Plain advice"));

        let tiktok = normalizer.normalize(
            &record(json!({
                "tiktok_hashtags": "#earbuds #fyp",
                "tiktok_video_script": "One\n\n---\n\nTwo"
            })),
            Platform::Tiktok,
        );
        assert_eq!(tiktok.tags, vec!["#earbuds", "#fyp"]);
        assert_eq!(tiktok.video_scripts, vec!["One", "Two"]);
    }

    #[test]
    fn test_placeholder_normalizes() {
        let normalizer = ContentNormalizer::new();
        let listing = normalizer.normalize_auto(&ListingRecord::placeholder(), Platform::Shopify);

        assert_eq!(listing.platform, Platform::Amazon);
        assert_eq!(listing.bullets.len(), 5);
        assert_eq!(listing.faqs.len(), 2);
        assert!(listing.keywords.long_tail.contains(&"long battery life".to_string()));
        assert!(listing.text_block("aplus_content").is_some());
        assert_eq!(
            listing
                .validation
                .iter()
                .find(|r| r.check_name == "Description Structure")
                .map(|r| r.status),
            Some(CheckStatus::Good)
        );
    }
}
