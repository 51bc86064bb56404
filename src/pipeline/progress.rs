// file: src/pipeline/progress.rs
// description: batch progress bar and per-run record counters
// reference: https://docs.rs/indicatif

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use serde::Serialize;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchStats {
    pub records_normalized: usize,
    pub records_failed: usize,
    pub issues_found: usize,
    pub total_bytes_processed: u64,
}

impl BatchStats {
    pub fn success_rate(&self) -> f64 {
        let total = self.records_normalized + self.records_failed;
        if total == 0 {
            return 0.0;
        }
        (self.records_normalized as f64 / total as f64) * 100.0
    }
}

/// One bar over the batch, with issue and failure counts in its message.
///
/// Counters are plain atomics: the tracker is borrowed by the batch run and
/// updated from whichever future finishes a record.
pub struct ProgressTracker {
    bar: ProgressBar,
    normalized: AtomicUsize,
    failed: AtomicUsize,
    issues: AtomicUsize,
    bytes: AtomicU64,
}

impl ProgressTracker {
    pub fn with_color(total_records: usize, colored: bool) -> Self {
        let bar = ProgressBar::new(total_records as u64);
        apply_style(&bar, colored);
        Self::from_bar(bar)
    }

    /// Counts without drawing, for tests and piped output.
    pub fn hidden(total_records: usize) -> Self {
        Self::from_bar(ProgressBar::with_draw_target(
            Some(total_records as u64),
            ProgressDrawTarget::hidden(),
        ))
    }

    fn from_bar(bar: ProgressBar) -> Self {
        Self {
            bar,
            normalized: AtomicUsize::new(0),
            failed: AtomicUsize::new(0),
            issues: AtomicUsize::new(0),
            bytes: AtomicU64::new(0),
        }
    }

    pub fn inc_normalized(&self, issues: usize) {
        self.normalized.fetch_add(1, Ordering::Relaxed);
        self.issues.fetch_add(issues, Ordering::Relaxed);
        self.advance();
    }

    pub fn inc_failed(&self) {
        self.failed.fetch_add(1, Ordering::Relaxed);
        self.advance();
    }

    pub fn add_bytes_processed(&self, bytes: u64) {
        self.bytes.fetch_add(bytes, Ordering::Relaxed);
    }

    pub fn finish(&self) {
        self.bar.finish_with_message(self.summary());
    }

    pub fn get_stats(&self) -> BatchStats {
        BatchStats {
            records_normalized: self.normalized.load(Ordering::Relaxed),
            records_failed: self.failed.load(Ordering::Relaxed),
            issues_found: self.issues.load(Ordering::Relaxed),
            total_bytes_processed: self.bytes.load(Ordering::Relaxed),
        }
    }

    fn advance(&self) {
        self.bar.inc(1);
        self.bar.set_message(self.summary());
    }

    fn summary(&self) -> String {
        format!(
            "issues: {} | failed: {}",
            self.issues.load(Ordering::Relaxed),
            self.failed.load(Ordering::Relaxed)
        )
    }
}

impl Drop for ProgressTracker {
    fn drop(&mut self) {
        if !self.bar.is_finished() {
            self.bar.abandon();
        }
    }
}

fn apply_style(bar: &ProgressBar, colored: bool) {
    let (template, chars) = if colored {
        (
            "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}",
            "█▓▒░",
        )
    } else {
        ("{spinner} [{elapsed_precise}] [{bar:40}] {pos}/{len} {msg}", "=>-")
    };

    match ProgressStyle::default_bar().template(template) {
        Ok(style) => bar.set_style(style.progress_chars(chars)),
        Err(e) => tracing::warn!("Invalid progress template, using default: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_rate() {
        let stats = BatchStats {
            records_normalized: 90,
            records_failed: 10,
            ..Default::default()
        };
        assert!((stats.success_rate() - 90.0).abs() < 0.01);
        assert_eq!(BatchStats::default().success_rate(), 0.0);
    }

    #[test]
    fn test_progress_tracker_counts() {
        let tracker = ProgressTracker::hidden(10);

        tracker.inc_normalized(3);
        tracker.inc_normalized(1);
        tracker.inc_failed();
        tracker.add_bytes_processed(2048);

        let stats = tracker.get_stats();
        assert_eq!(stats.records_normalized, 2);
        assert_eq!(stats.records_failed, 1);
        assert_eq!(stats.issues_found, 4);
        assert_eq!(stats.total_bytes_processed, 2048);
        assert_eq!(tracker.summary(), "issues: 4 | failed: 1");
    }
}
