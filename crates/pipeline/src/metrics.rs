//! Pipeline counters
//!
//! Monotonic processed/error counters plus the last-error descriptor.
//! Counters use relaxed ordering; the pipeline itself runs a single
//! synchronous pass, so these are cheap bookkeeping, not contended state.

use parking_lot::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

/// Counters owned by one pipeline
///
/// `processed` counts fully successful runs; `errors` counts failures
/// explicitly recorded by the pipeline's caller. The two never move
/// together for a single run.
#[derive(Debug, Default)]
pub struct PipelineMetrics {
    /// Runs that completed all three stages
    processed: AtomicU64,

    /// Failures recorded via `record_error`
    errors: AtomicU64,

    /// Rendered `"{kind}: {message}"` descriptor of the latest failure
    last_error: Mutex<Option<String>>,
}

impl PipelineMetrics {
    /// Create new metrics with all counters at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a fully successful run
    #[inline]
    pub fn record_processed(&self) {
        self.processed.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a failure and keep its rendered descriptor
    pub fn record_error(&self, descriptor: impl Into<String>) {
        self.errors.fetch_add(1, Ordering::Relaxed);
        *self.last_error.lock() = Some(descriptor.into());
    }

    /// Get a point-in-time snapshot of all counters
    pub fn snapshot(&self) -> PipelineStats {
        PipelineStats {
            processed: self.processed.load(Ordering::Relaxed),
            errors: self.errors.load(Ordering::Relaxed),
            last_error: self.last_error.lock().clone(),
        }
    }

    /// Reset all counters to zero and clear the last-error descriptor
    pub fn reset(&self) {
        self.processed.store(0, Ordering::Relaxed);
        self.errors.store(0, Ordering::Relaxed);
        *self.last_error.lock() = None;
    }
}

/// Point-in-time snapshot of a pipeline's counters
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PipelineStats {
    /// Runs that completed all three stages
    pub processed: u64,

    /// Failures recorded on the pipeline
    pub errors: u64,

    /// Descriptor of the latest failure, if any
    pub last_error: Option<String>,
}

impl PipelineStats {
    /// Fraction of attempts that failed (0.0 - 1.0)
    ///
    /// Returns None if the pipeline has not been driven yet.
    #[inline]
    pub fn error_rate(&self) -> Option<f64> {
        let attempts = self.processed + self.errors;
        if attempts == 0 {
            None
        } else {
            Some(self.errors as f64 / attempts as f64)
        }
    }

    /// The last-error descriptor, or the empty string when none is recorded
    #[inline]
    pub fn last_error_or_empty(&self) -> &str {
        self.last_error.as_deref().unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_new() {
        let metrics = PipelineMetrics::new();
        let stats = metrics.snapshot();

        assert_eq!(stats.processed, 0);
        assert_eq!(stats.errors, 0);
        assert_eq!(stats.last_error, None);
    }

    #[test]
    fn test_record_processed() {
        let metrics = PipelineMetrics::new();

        metrics.record_processed();
        metrics.record_processed();

        assert_eq!(metrics.snapshot().processed, 2);
        assert_eq!(metrics.snapshot().errors, 0);
    }

    #[test]
    fn test_record_error_keeps_latest_descriptor() {
        let metrics = PipelineMetrics::new();

        metrics.record_error("InvalidInputError: empty input value");
        metrics.record_error("InvalidFormatError: invalid data format");

        let stats = metrics.snapshot();
        assert_eq!(stats.errors, 2);
        assert_eq!(
            stats.last_error.as_deref(),
            Some("InvalidFormatError: invalid data format")
        );
    }

    #[test]
    fn test_snapshot_is_stable_between_runs() {
        let metrics = PipelineMetrics::new();
        metrics.record_processed();

        let first = metrics.snapshot();
        let second = metrics.snapshot();
        assert_eq!(first, second);
    }

    #[test]
    fn test_reset() {
        let metrics = PipelineMetrics::new();
        metrics.record_processed();
        metrics.record_error("InvalidInputError: empty input value");

        metrics.reset();

        assert_eq!(metrics.snapshot(), PipelineStats::default());
    }

    #[test]
    fn test_stats_error_rate() {
        let stats = PipelineStats {
            processed: 3,
            errors: 1,
            last_error: None,
        };
        assert_eq!(stats.error_rate(), Some(0.25));
    }

    #[test]
    fn test_stats_error_rate_empty() {
        assert_eq!(PipelineStats::default().error_rate(), None);
    }

    #[test]
    fn test_stats_last_error_or_empty() {
        let mut stats = PipelineStats::default();
        assert_eq!(stats.last_error_or_empty(), "");

        stats.last_error = Some("InvalidFormatError: invalid data format".to_string());
        assert_eq!(
            stats.last_error_or_empty(),
            "InvalidFormatError: invalid data format"
        );
    }
}
