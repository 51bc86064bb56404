// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod client;
pub mod config;
pub mod error;
pub mod exporter;
pub mod models;
pub mod parser;
pub mod pipeline;
pub mod schema;
pub mod utils;

pub use client::{ListingClient, RequestObserver, TracingObserver};
pub use config::{BatchConfig, ClientConfig, Config, OutputConfig};
pub use error::{LensError, Result};
pub use exporter::{ExportManifest, ExportedListing, JsonExporter};
pub use models::{
    BulletEntry, CheckStatus, FaqEntry, ImageStatusReport, KeywordSet, ListingRecord,
    NormalizedListing, Platform, Section, ValidationResult,
};
pub use parser::{parse_section, split_bullets, split_keywords};
pub use pipeline::{
    BatchOutcome, BatchProcessor, BatchStats, ContentNormalizer, NormalizationCache,
    ProgressTracker, check_limits, score, validate,
};
pub use schema::PlatformSchema;
pub use utils::{OperationTimer, PerformanceMetrics, Validator};
