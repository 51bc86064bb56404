// file: src/schema/mod.rs
// description: per-platform field schema, section table and content limits
// reference: marketplace listing requirements

//! Static lookup table describing where each platform keeps its content.
//!
//! Field lists are ordered by preference: the first non-blank field wins,
//! which absorbs naming drift such as `walmart_description` versus
//! `long_description` across backend versions.

use crate::models::Platform;

/// A JSON-bearing record field and the keys its consumers recognize.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionSchema {
    pub name: &'static str,
    pub field: &'static str,
    pub keys: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagStyle {
    /// JSON array string, or a comma separated list.
    List,
    /// Whitespace separated `#hashtags`.
    Hashtags,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagField {
    pub field: &'static str,
    pub style: TagStyle,
}

/// How a limited field is split into countable items.
///
/// An item over `item_max_chars` is an `error` for `Lines` (each bullet has a
/// hard maximum) and a `warning` for `Tags` (the marketplace truncates).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemSplit {
    None,
    Lines,
    Tags,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldLimit {
    pub label: &'static str,
    pub fields: &'static [&'static str],
    pub max_chars: Option<usize>,
    pub optimal_chars: Option<usize>,
    pub max_items: Option<usize>,
    pub item_max_chars: Option<usize>,
    pub split: ItemSplit,
}

impl FieldLimit {
    const fn chars(label: &'static str, fields: &'static [&'static str], max: usize, optimal: usize) -> Self {
        Self {
            label,
            fields,
            max_chars: Some(max),
            optimal_chars: Some(optimal),
            max_items: None,
            item_max_chars: None,
            split: ItemSplit::None,
        }
    }
}

#[derive(Debug)]
pub struct PlatformSchema {
    pub platform: Platform,
    pub title_fields: &'static [&'static str],
    pub bullet_fields: &'static [&'static str],
    pub description_fields: &'static [&'static str],
    pub short_description_fields: &'static [&'static str],
    pub keyword_fields: &'static [&'static str],
    pub backend_keyword_fields: &'static [&'static str],
    pub aplus_fields: &'static [&'static str],
    pub tag_field: Option<TagField>,
    pub faq_field: Option<&'static str>,
    pub video_script_field: Option<&'static str>,
    pub assembly_field: Option<&'static str>,
    /// `(block name, record field)` pairs rendered as plain text.
    pub text_blocks: &'static [(&'static str, &'static str)],
    pub sections: &'static [SectionSchema],
    pub limits: &'static [FieldLimit],
    /// `(field, guidance)` pairs shown next to the editor.
    pub requirements: &'static [(&'static str, &'static str)],
}

impl PlatformSchema {
    pub fn for_platform(platform: Platform) -> &'static PlatformSchema {
        match platform {
            Platform::Amazon => &AMAZON,
            Platform::Walmart => &WALMART,
            Platform::Etsy => &ETSY,
            Platform::Tiktok => &TIKTOK,
            Platform::Shopify => &SHOPIFY,
        }
    }

    pub fn section(&self, name: &str) -> Option<&SectionSchema> {
        self.sections.iter().find(|s| s.name == name)
    }
}

const COMPLIANCE_KEYS: &[&str] = &[
    "required_certifications",
    "certification_guidance",
    "regulatory_requirements",
    "labeling_requirements",
    "walmart_specific_compliance",
];

const PROFIT_KEYS: &[&str] = &[
    "q1_action_plan",
    "q2_growth_tactics",
    "q3_optimization",
    "q4_maximization",
    "competitor_landscape",
    "revenue_projections",
];

const RICH_MEDIA_KEYS: &[&str] = &["main_images", "video_content", "infographics", "360_view"];

static AMAZON: PlatformSchema = PlatformSchema {
    platform: Platform::Amazon,
    title_fields: &["title"],
    bullet_fields: &["bullet_points"],
    description_fields: &["long_description"],
    short_description_fields: &["short_description"],
    keyword_fields: &["keywords"],
    backend_keyword_fields: &["amazon_backend_keywords"],
    aplus_fields: &["amazon_aplus_content"],
    tag_field: None,
    faq_field: Some("faqs"),
    video_script_field: None,
    assembly_field: None,
    text_blocks: &[
        ("whats_in_box", "whats_in_box"),
        ("hero_title", "hero_title"),
        ("hero_content", "hero_content"),
        ("features", "features"),
        ("trust_builders", "trust_builders"),
        ("social_proof", "social_proof"),
        ("guarantee", "guarantee"),
        ("aplus_content", "amazon_aplus_content"),
    ],
    sections: &[],
    limits: &[
        FieldLimit::chars("Title", &["title"], 200, 150),
        FieldLimit {
            label: "Bullet Points",
            fields: &["bullet_points"],
            max_chars: None,
            optimal_chars: None,
            max_items: Some(5),
            item_max_chars: Some(255),
            split: ItemSplit::Lines,
        },
        FieldLimit::chars("Description", &["long_description"], 2000, 1500),
        FieldLimit {
            label: "Backend Keywords",
            fields: &["amazon_backend_keywords"],
            max_chars: Some(250),
            optimal_chars: None,
            max_items: None,
            item_max_chars: None,
            split: ItemSplit::None,
        },
    ],
    requirements: &[
        ("title", "Include main keyword at beginning, stay under 200 characters"),
        ("bullet_points", "5 benefit-focused bullets, each under 255 characters"),
        ("description", "Story-driven content with HTML formatting, 1500-2000 characters"),
        ("keywords", "Backend keywords under 250 bytes, no repetition"),
    ],
};

static WALMART: PlatformSchema = PlatformSchema {
    platform: Platform::Walmart,
    title_fields: &["walmart_product_title", "title"],
    bullet_fields: &["walmart_key_features", "bullet_points"],
    description_fields: &["walmart_description", "long_description"],
    short_description_fields: &["short_description"],
    keyword_fields: &["keywords"],
    backend_keyword_fields: &[],
    aplus_fields: &[],
    tag_field: None,
    faq_field: Some("faqs"),
    video_script_field: None,
    assembly_field: Some("walmart_assembly_required"),
    text_blocks: &[
        ("whats_in_box", "whats_in_box"),
        ("gtin_upc", "walmart_gtin_upc"),
        ("manufacturer_part", "walmart_manufacturer_part"),
        ("sku_id", "walmart_sku_id"),
        ("product_type", "walmart_product_type"),
        ("category_path", "walmart_category_path"),
        ("shipping_weight", "walmart_shipping_weight"),
        ("shipping_dimensions", "walmart_shipping_dimensions"),
    ],
    sections: &[
        SectionSchema { name: "specifications", field: "walmart_specifications", keys: &[] },
        SectionSchema { name: "attributes", field: "walmart_attributes", keys: &[] },
        SectionSchema { name: "warranty", field: "walmart_warranty_info", keys: &[] },
        SectionSchema {
            name: "compliance",
            field: "walmart_compliance_certifications",
            keys: COMPLIANCE_KEYS,
        },
        SectionSchema { name: "video_urls", field: "walmart_video_urls", keys: &[] },
        SectionSchema { name: "rich_media", field: "walmart_rich_media", keys: RICH_MEDIA_KEYS },
        SectionSchema { name: "swatch_images", field: "walmart_swatch_images", keys: &[] },
        SectionSchema {
            name: "profit_maximizer",
            field: "walmart_profit_maximizer",
            keys: PROFIT_KEYS,
        },
    ],
    limits: &[
        FieldLimit::chars("Title", &["walmart_product_title", "title"], 75, 65),
        FieldLimit::chars("Short Description", &["short_description"], 4000, 3000),
        FieldLimit {
            label: "Key Features",
            fields: &["walmart_key_features", "bullet_points"],
            max_chars: Some(1000),
            optimal_chars: None,
            max_items: Some(10),
            item_max_chars: None,
            split: ItemSplit::Lines,
        },
    ],
    requirements: &[
        ("title", "Brand + product + key feature, under 75 characters"),
        ("description", "Rich HTML content highlighting key features and benefits"),
        ("specifications", "Detailed product specs with measurements and materials"),
    ],
};

static ETSY: PlatformSchema = PlatformSchema {
    platform: Platform::Etsy,
    title_fields: &["etsy_title", "title"],
    bullet_fields: &["bullet_points"],
    description_fields: &["etsy_description", "long_description"],
    short_description_fields: &["short_description"],
    keyword_fields: &["keywords"],
    backend_keyword_fields: &[],
    aplus_fields: &[],
    tag_field: Some(TagField { field: "etsy_tags", style: TagStyle::List }),
    faq_field: Some("faqs"),
    video_script_field: None,
    assembly_field: None,
    text_blocks: &[
        ("whats_in_box", "whats_in_box"),
        ("materials", "etsy_materials"),
        ("processing_time", "etsy_processing_time"),
    ],
    sections: &[
        SectionSchema { name: "shop_setup", field: "etsy_shop_setup_guide", keys: &[] },
        SectionSchema { name: "social_media", field: "etsy_social_media_package", keys: &[] },
        SectionSchema { name: "photography", field: "etsy_photography_guide", keys: &[] },
        SectionSchema { name: "pricing", field: "etsy_pricing_analysis", keys: &[] },
        SectionSchema { name: "seo", field: "etsy_seo_report", keys: &[] },
        SectionSchema {
            name: "customer_service",
            field: "etsy_customer_service_templates",
            keys: &[],
        },
        SectionSchema { name: "policies", field: "etsy_policies_templates", keys: &[] },
        SectionSchema { name: "variations", field: "etsy_variations_guide", keys: &[] },
        SectionSchema { name: "competitor", field: "etsy_competitor_insights", keys: &[] },
        SectionSchema { name: "seasonal", field: "etsy_seasonal_calendar", keys: &[] },
    ],
    limits: &[
        FieldLimit::chars("Title", &["etsy_title", "title"], 140, 120),
        FieldLimit::chars("Description", &["etsy_description", "long_description"], 13000, 8000),
        FieldLimit {
            label: "Tags",
            fields: &["etsy_tags"],
            max_chars: None,
            optimal_chars: None,
            max_items: Some(13),
            item_max_chars: Some(20),
            split: ItemSplit::Tags,
        },
    ],
    requirements: &[
        ("title", "13 keywords naturally integrated, under 140 characters"),
        ("description", "Personal story-driven content mentioning materials and process"),
        ("tags", "Exactly 13 relevant tags, each under 20 characters"),
    ],
};

static TIKTOK: PlatformSchema = PlatformSchema {
    platform: Platform::Tiktok,
    title_fields: &["title"],
    bullet_fields: &["bullet_points"],
    description_fields: &["long_description"],
    short_description_fields: &["short_description"],
    keyword_fields: &["keywords"],
    backend_keyword_fields: &[],
    aplus_fields: &[],
    tag_field: Some(TagField { field: "tiktok_hashtags", style: TagStyle::Hashtags }),
    faq_field: Some("faqs"),
    video_script_field: Some("tiktok_video_script"),
    assembly_field: None,
    text_blocks: &[("whats_in_box", "whats_in_box"), ("hooks", "tiktok_hooks")],
    sections: &[],
    limits: &[
        FieldLimit::chars("Title", &["title"], 60, 50),
        FieldLimit::chars("Description", &["long_description"], 3000, 2000),
        FieldLimit {
            label: "Hashtags",
            fields: &["tiktok_hashtags"],
            max_chars: None,
            optimal_chars: None,
            max_items: Some(30),
            item_max_chars: Some(100),
            split: ItemSplit::Tags,
        },
    ],
    requirements: &[
        ("title", "Catchy and trending language, under 60 characters"),
        ("description", "Casual, emoji-rich content that speaks to Gen Z"),
        ("hashtags", "Mix of trending and niche hashtags, up to 30 tags"),
    ],
};

static SHOPIFY: PlatformSchema = PlatformSchema {
    platform: Platform::Shopify,
    title_fields: &["title", "shopify_seo_title"],
    bullet_fields: &["bullet_points"],
    description_fields: &["long_description"],
    short_description_fields: &["short_description"],
    keyword_fields: &["keywords"],
    backend_keyword_fields: &[],
    aplus_fields: &[],
    tag_field: None,
    faq_field: Some("faqs"),
    video_script_field: None,
    assembly_field: None,
    text_blocks: &[
        ("seo_title", "shopify_seo_title"),
        ("meta_description", "shopify_meta_description"),
        ("whats_in_box", "whats_in_box"),
        ("guarantee", "guarantee"),
    ],
    sections: &[],
    limits: &[
        FieldLimit::chars("SEO Title", &["shopify_seo_title"], 60, 55),
        FieldLimit::chars("Meta Description", &["shopify_meta_description"], 160, 150),
        FieldLimit::chars("Product Description", &["long_description"], 5000, 3000),
    ],
    requirements: &[
        ("seo_title", "Keyword-optimized for Google, under 60 characters"),
        ("meta_description", "Compelling with CTA, under 160 characters"),
        ("description", "HTML-formatted, conversion-focused content"),
    ],
};
