// file: src/models/mod.rs
// description: data models module exports
// reference: internal module structure

pub mod image;
pub mod listing;
pub mod platform;
pub mod record;
pub mod section;

pub use image::{GeneratedImage, ImageState, ImageStatusReport, ImageSummary};
pub use listing::{
    BulletEntry, CheckStatus, FaqEntry, KeywordSet, NormalizedListing, ValidationResult,
};
pub use platform::Platform;
pub use record::ListingRecord;
pub use section::{
    CompetitorLandscape, ComplianceInfo, ProfitStrategy, RichMedia, Section, WarrantyInfo,
};
