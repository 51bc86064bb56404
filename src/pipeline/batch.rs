// file: src/pipeline/batch.rs
// description: directory discovery and concurrent normalization of record files
// reference: https://docs.rs/walkdir

use crate::config::BatchConfig;
use crate::error::{LensError, Result};
use crate::models::{ListingRecord, NormalizedListing, Platform};
use crate::pipeline::{BatchStats, NormalizationCache, ProgressTracker};
use crate::utils::Validator;
use futures::stream::{self, StreamExt};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

pub const EXPORT_SUFFIX: &str = ".normalized.json";
pub const MANIFEST_FILE: &str = "manifest.json";

#[derive(Debug, Clone)]
pub struct BatchItem {
    pub path: PathBuf,
    pub listing: NormalizedListing,
}

#[derive(Debug, Default)]
pub struct BatchOutcome {
    pub items: Vec<BatchItem>,
    pub failures: Vec<(PathBuf, String)>,
    pub stats: BatchStats,
}

pub struct BatchProcessor {
    config: BatchConfig,
    cache: Arc<NormalizationCache>,
}

impl BatchProcessor {
    pub fn new(config: BatchConfig) -> Self {
        Self {
            config,
            cache: Arc::new(NormalizationCache::default()),
        }
    }

    /// Finds record files (`*.json`) under `root`, skipping earlier exports
    /// and files above the configured size limit. Sorted by path.
    pub fn scan(&self, root: &Path) -> Result<Vec<PathBuf>> {
        Validator::validate_directory(root)?;
        info!("Scanning directory: {}", root.display());

        let max_size = (self.config.max_file_size_mb as u64) * 1024 * 1024;
        let mut files = Vec::new();

        for entry in WalkDir::new(root)
            .follow_links(false)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            if !entry.file_type().is_file() {
                continue;
            }

            let path = entry.path();
            let name = entry.file_name().to_string_lossy();

            if name.ends_with(EXPORT_SUFFIX) || name == MANIFEST_FILE {
                debug!("Skipping export artifact: {}", path.display());
                continue;
            }

            if path.extension().is_none_or(|ext| ext != "json") {
                continue;
            }

            if let Ok(metadata) = entry.metadata()
                && max_size > 0
                && metadata.len() > max_size
            {
                debug!(
                    "Skipping large file ({} bytes): {}",
                    metadata.len(),
                    path.display()
                );
                continue;
            }

            files.push(path.to_path_buf());
        }

        files.sort();
        info!("Found {} record files", files.len());
        Ok(files)
    }

    /// Normalizes every file concurrently. A file that cannot be read or
    /// parsed is recorded as a failure and does not stop the batch.
    pub async fn run(
        &self,
        files: Vec<PathBuf>,
        fallback: Platform,
        progress: &ProgressTracker,
    ) -> BatchOutcome {
        let workers = self.config.parallel_workers.max(1);

        let results = stream::iter(files.into_iter().map(|path| {
            let cache = Arc::clone(&self.cache);
            async move {
                let result = normalize_file(&cache, &path, fallback).await;
                (path, result)
            }
        }))
        .buffer_unordered(workers)
        .collect::<Vec<_>>()
        .await;

        let mut outcome = BatchOutcome::default();

        for (path, result) in results {
            match result {
                Ok((listing, bytes)) => {
                    progress.add_bytes_processed(bytes);
                    progress.inc_normalized(listing.issue_count());
                    outcome.items.push(BatchItem { path, listing });
                }
                Err(e) => {
                    warn!("Failed to normalize {}: {}", path.display(), e);
                    progress.inc_failed();
                    outcome.failures.push((path, e.to_string()));
                }
            }
        }

        outcome.items.sort_by(|a, b| a.path.cmp(&b.path));
        outcome.failures.sort_by(|a, b| a.0.cmp(&b.0));
        outcome.stats = progress.get_stats();
        outcome
    }
}

async fn normalize_file(
    cache: &NormalizationCache,
    path: &Path,
    fallback: Platform,
) -> Result<(NormalizedListing, u64)> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| LensError::FileOperation {
            path: path.to_path_buf(),
            source,
        })?;

    let record = ListingRecord::from_json(&content)?;
    let platform = record.platform().unwrap_or(fallback);
    Ok((cache.normalize(&record, platform), content.len() as u64))
}
