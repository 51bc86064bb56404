// file: src/pipeline/mod.rs
// description: pipeline module exports and public api
// reference: normalization, validation and batch processing

mod batch;
mod cache;
mod normalizer;
mod progress;
pub mod validator;

pub use batch::{BatchItem, BatchOutcome, BatchProcessor, EXPORT_SUFFIX, MANIFEST_FILE};
pub use cache::NormalizationCache;
pub use normalizer::ContentNormalizer;
pub use progress::{BatchStats, ProgressTracker};
pub use validator::{check_limits, describe_limit, requirements, score, validate};
