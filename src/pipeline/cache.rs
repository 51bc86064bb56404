// file: src/pipeline/cache.rs
// description: memoized normalization keyed by record fingerprint
// reference: content hashing with sha2

use crate::models::{ListingRecord, NormalizedListing, Platform};
use crate::pipeline::ContentNormalizer;
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::sync::Mutex;
use tracing::debug;

/// Caches normalized listings by `(record, platform)` fingerprint.
///
/// Normalization is pure, so a hit is always equal to a fresh computation.
/// Once `capacity` entries are stored the cache is cleared before inserting.
pub struct NormalizationCache {
    normalizer: ContentNormalizer,
    entries: Mutex<HashMap<String, NormalizedListing>>,
    capacity: usize,
}

impl NormalizationCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            normalizer: ContentNormalizer::new(),
            entries: Mutex::new(HashMap::new()),
            capacity: capacity.max(1),
        }
    }

    pub fn fingerprint(record: &ListingRecord, platform: Platform) -> String {
        let mut hasher = Sha256::new();
        hasher.update(platform.as_str().as_bytes());
        hasher.update([0u8]);
        hasher.update(record.canonical_json().as_bytes());
        format!("{:x}", hasher.finalize())
    }

    pub fn normalize(&self, record: &ListingRecord, platform: Platform) -> NormalizedListing {
        let key = Self::fingerprint(record, platform);

        if let Some(hit) = self.lock().get(&key) {
            debug!("Normalization cache hit: {}", &key[..12]);
            return hit.clone();
        }

        let listing = self.normalizer.normalize(record, platform);

        let mut entries = self.lock();
        if entries.len() >= self.capacity {
            debug!("Normalization cache full ({} entries), clearing", entries.len());
            entries.clear();
        }
        entries.insert(key, listing.clone());
        listing
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, NormalizedListing>> {
        // Entries are only ever whole values, so a poisoned map is still consistent.
        self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for NormalizationCache {
    fn default() -> Self {
        Self::new(256)
    }
}
