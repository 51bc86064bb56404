// file: src/pipeline/validator.rs
// description: structural listing checks, optimization score and platform limit findings
// reference: marketplace listing requirements

use crate::models::{CheckStatus, ListingRecord, Platform, ValidationResult};
use crate::parser::{split_keyword_value, split_tags, strip_bullet_prefix};
use crate::schema::{FieldLimit, ItemSplit, PlatformSchema, TagStyle};
use serde_json::Value;

pub const TITLE_LENGTH_LIMIT: usize = 150;
pub const MIN_KEYWORD_COUNT: usize = 5;

/// Runs the structural checks against a record.
///
/// Always returns the same six checks in the same order; each check reads
/// only its own field and never blocks the others. Fields are resolved
/// through the platform's schema, so Walmart's title check reads
/// `walmart_product_title` before `title`.
pub fn validate(record: &ListingRecord, platform: Platform) -> Vec<ValidationResult> {
    let schema = PlatformSchema::for_platform(platform);
    let keywords = split_keyword_value(first_value(record, schema.keyword_fields));

    vec![
        check_title(resolve_text(record, schema.title_fields)),
        check_bullets(resolve_text(record, schema.bullet_fields)),
        check_description(resolve_text(record, schema.description_fields)),
        check_aplus(resolve_text(record, schema.aplus_fields)),
        check_keywords(keywords.len()),
        check_conversion(resolve_text(record, schema.short_description_fields)),
    ]
}

/// `round(100 * good / total)`, or 0 when there are no results.
pub fn score(results: &[ValidationResult]) -> u8 {
    if results.is_empty() {
        return 0;
    }
    let good = results.iter().filter(|r| r.is_good()).count();
    ((good as f64 / results.len() as f64) * 100.0).round() as u8
}

fn check_title(title: Option<&str>) -> ValidationResult {
    let detail = format!(
        "Keep under {} characters for mobile display",
        TITLE_LENGTH_LIMIT
    );
    match title {
        Some(title) => {
            let length = title.chars().count();
            let status = if length <= TITLE_LENGTH_LIMIT {
                CheckStatus::Good
            } else {
                CheckStatus::Warning
            };
            ValidationResult::new(
                "Title Length",
                status,
                format!("{}/{} characters", length, TITLE_LENGTH_LIMIT),
                detail,
            )
        }
        None => ValidationResult::new("Title Length", CheckStatus::Warning, "No title", detail),
    }
}

fn check_bullets(bullets: Option<&str>) -> ValidationResult {
    let detail = "Emojis + **Bold Feature**: Transformation benefit format";
    match bullets {
        Some(text) => {
            let emotional = text.contains('🔥') && text.contains("**");
            ValidationResult::new(
                "Bullet Points",
                status_for(emotional),
                if emotional {
                    "Emotional format detected"
                } else {
                    "Emotional format missing"
                },
                detail,
            )
        }
        None => ValidationResult::new(
            "Bullet Points",
            CheckStatus::Warning,
            "No bullet points",
            detail,
        ),
    }
}

fn check_description(description: Option<&str>) -> ValidationResult {
    let detail = "Should have emotional hooks and structured content";
    match description {
        Some(text) => {
            let structured = text.contains("<h3>");
            ValidationResult::new(
                "Description Structure",
                status_for(structured),
                if structured {
                    "HTML structure found"
                } else {
                    "No HTML section headings"
                },
                detail,
            )
        }
        None => ValidationResult::new(
            "Description Structure",
            CheckStatus::Warning,
            "No description",
            detail,
        ),
    }
}

fn check_aplus(aplus: Option<&str>) -> ValidationResult {
    let detail = "Specific module headlines with actionable suggestions";
    match aplus {
        Some(text) => {
            let modular = text.contains("Module");
            ValidationResult::new(
                "A+ Content",
                status_for(modular),
                if modular {
                    "Module suggestions provided"
                } else {
                    "No module suggestions"
                },
                detail,
            )
        }
        None => ValidationResult::new("A+ Content", CheckStatus::Warning, "No A+ content", detail),
    }
}

fn check_keywords(count: usize) -> ValidationResult {
    let message = if count > 0 {
        format!("{} keywords", count)
    } else {
        "No keywords".to_string()
    };
    ValidationResult::new(
        "Keyword Optimization",
        status_for(count >= MIN_KEYWORD_COUNT),
        message,
        "Mix of short and long-tail keywords for better coverage",
    )
}

fn check_conversion(short_description: Option<&str>) -> ValidationResult {
    let detail = "Should include: What's in box, FAQs, trust builders, social proof";
    match short_description {
        Some(text) => {
            let boosted = text.contains('📦') && text.contains('❓');
            ValidationResult::new(
                "Conversion Boosters",
                status_for(boosted),
                if boosted {
                    "Sales tools included"
                } else {
                    "Sales tools missing"
                },
                detail,
            )
        }
        None => ValidationResult::new(
            "Conversion Boosters",
            CheckStatus::Warning,
            "No conversion tools",
            detail,
        ),
    }
}

fn status_for(passed: bool) -> CheckStatus {
    if passed {
        CheckStatus::Good
    } else {
        CheckStatus::Warning
    }
}

/// Checks every limited field of the platform that is present in the record.
///
/// Exceeding a hard maximum (characters, item count, or a bullet's own
/// length) is an `error`; exceeding the optimal length or a tag's length is
/// a `warning`.
/// Absent fields produce no finding.
pub fn check_limits(record: &ListingRecord, platform: Platform) -> Vec<ValidationResult> {
    let schema = PlatformSchema::for_platform(platform);
    let tag_style = schema
        .tag_field
        .map(|t| t.style)
        .unwrap_or(TagStyle::List);

    schema
        .limits
        .iter()
        .filter_map(|limit| check_limit(record, limit, tag_style))
        .collect()
}

fn check_limit(
    record: &ListingRecord,
    limit: &FieldLimit,
    tag_style: TagStyle,
) -> Option<ValidationResult> {
    let mut status = CheckStatus::Good;
    let mut issues: Vec<String> = Vec::new();

    let (length, items): (Option<usize>, Vec<String>) = match limit.split {
        ItemSplit::Tags => {
            let tags = split_tags(first_value(record, limit.fields), tag_style);
            if tags.is_empty() {
                return None;
            }
            (None, tags)
        }
        ItemSplit::Lines => {
            let text = resolve_text(record, limit.fields)?;
            let lines = text
                .lines()
                .map(strip_bullet_prefix)
                .filter(|line| !line.is_empty())
                .map(str::to_string)
                .collect();
            (Some(text.chars().count()), lines)
        }
        ItemSplit::None => {
            let text = resolve_text(record, limit.fields)?;
            (Some(text.chars().count()), Vec::new())
        }
    };

    if let Some(length) = length {
        if let Some(max) = limit.max_chars
            && length > max
        {
            status = worst(status, CheckStatus::Error);
            issues.push(format!(
                "Exceeds maximum length ({}/{} characters)",
                length, max
            ));
        }
        if let Some(optimal) = limit.optimal_chars
            && length > optimal
        {
            status = worst(status, CheckStatus::Warning);
            issues.push(format!(
                "Consider shortening for optimal performance ({}/{} characters)",
                length, optimal
            ));
        }
    }

    if let Some(max_items) = limit.max_items
        && items.len() > max_items
    {
        status = worst(status, CheckStatus::Error);
        issues.push(format!(
            "Too many items ({}/{} maximum)",
            items.len(),
            max_items
        ));
    }

    if let Some(item_max) = limit.item_max_chars {
        let oversized = items
            .iter()
            .filter(|item| item.chars().count() > item_max)
            .count();
        if oversized > 0 {
            let severity = match limit.split {
                ItemSplit::Lines => CheckStatus::Error,
                ItemSplit::Tags | ItemSplit::None => CheckStatus::Warning,
            };
            status = worst(status, severity);
            issues.push(format!(
                "{} item(s) exceed {} characters",
                oversized, item_max
            ));
        }
    }

    let message = if issues.is_empty() {
        match length {
            Some(length) => format!("{} characters", length),
            None => format!("{} items", items.len()),
        }
    } else {
        issues.join("; ")
    };

    Some(ValidationResult::new(
        format!("{} Limit", limit.label),
        status,
        message,
        describe_limit(limit),
    ))
}

pub fn describe_limit(limit: &FieldLimit) -> String {
    let mut parts = Vec::new();
    if let Some(max) = limit.max_chars {
        parts.push(format!("max {} characters", max));
    }
    if let Some(optimal) = limit.optimal_chars {
        parts.push(format!("optimal {} characters", optimal));
    }
    if let Some(items) = limit.max_items {
        parts.push(format!("up to {} items", items));
    }
    if let Some(item_max) = limit.item_max_chars {
        parts.push(format!("each under {} characters", item_max));
    }
    parts.join(", ")
}

fn worst(a: CheckStatus, b: CheckStatus) -> CheckStatus {
    fn rank(s: CheckStatus) -> u8 {
        match s {
            CheckStatus::Good => 0,
            CheckStatus::Warning => 1,
            CheckStatus::Error => 2,
        }
    }
    if rank(b) > rank(a) { b } else { a }
}

/// Guidance text for each field of a platform.
pub fn requirements(platform: Platform) -> &'static [(&'static str, &'static str)] {
    PlatformSchema::for_platform(platform).requirements
}

/// First non-blank text among `fields`, trimmed. Every length the listing
/// reports is measured on this value, so the view and its checks agree.
pub(crate) fn resolve_text<'a>(record: &'a ListingRecord, fields: &[&str]) -> Option<&'a str> {
    record.first_text(fields).map(str::trim)
}

pub(crate) fn first_value<'a>(record: &'a ListingRecord, fields: &[&str]) -> Option<&'a Value> {
    fields.iter().find_map(|field| match record.value(field) {
        Some(Value::String(s)) if s.trim().is_empty() => None,
        other => other,
    })
}
