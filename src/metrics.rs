// Conversion metrics module
//
// Lightweight counters describing how the converter has been used this session

use crate::services::{ConversionResult, ErrorKind};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// Session metrics
///
/// Plain atomic counters, so recording never needs `&mut` or a lock. Nothing is
/// persisted; [`log_summary`](Self::log_summary) writes the totals to the log
/// when the window closes.
#[derive(Debug)]
pub struct Metrics {
    /// Conversions that produced a result
    pub conversions_succeeded: AtomicU64,

    /// Attempts rejected because the input was empty
    pub empty_input_errors: AtomicU64,

    /// Attempts rejected because the input was not a finite number
    pub invalid_number_errors: AtomicU64,

    /// Attempts naming a unit outside the unit table
    pub unknown_unit_errors: AtomicU64,

    /// Application start time
    start_time: Instant,
}

impl Metrics {
    pub fn new() -> Self {
        Self {
            conversions_succeeded: AtomicU64::new(0),
            empty_input_errors: AtomicU64::new(0),
            invalid_number_errors: AtomicU64::new(0),
            unknown_unit_errors: AtomicU64::new(0),
            start_time: Instant::now(),
        }
    }

    /// Record the outcome of one conversion attempt
    pub fn record(&self, outcome: &ConversionResult) {
        match outcome {
            Ok(_) => self.record_success(),
            Err(e) => self.record_failure(e.kind()),
        }
    }

    pub fn record_success(&self) {
        self.conversions_succeeded.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_failure(&self, kind: ErrorKind) {
        let counter = match kind {
            ErrorKind::EmptyInput => &self.empty_input_errors,
            ErrorKind::InvalidNumber => &self.invalid_number_errors,
            ErrorKind::UnknownUnit => &self.unknown_unit_errors,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    /// Number of failed attempts of any kind
    pub fn failures(&self) -> u64 {
        self.empty_input_errors.load(Ordering::Relaxed)
            + self.invalid_number_errors.load(Ordering::Relaxed)
            + self.unknown_unit_errors.load(Ordering::Relaxed)
    }

    /// Number of attempts, successful or not
    pub fn total(&self) -> u64 {
        self.conversions_succeeded.load(Ordering::Relaxed) + self.failures()
    }

    /// Get total uptime
    pub fn uptime(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Log metrics summary
    pub fn log_summary(&self) {
        tracing::info!("=== Conversion Metrics Summary ===");
        tracing::info!("Uptime: {:.2}s", self.uptime().as_secs_f64());
        tracing::info!(
            "Conversions: {} attempted, {} succeeded, {} failed",
            self.total(),
            self.conversions_succeeded.load(Ordering::Relaxed),
            self.failures()
        );
        tracing::info!(
            "Failures: {} empty input, {} invalid number, {} unknown unit",
            self.empty_input_errors.load(Ordering::Relaxed),
            self.invalid_number_errors.load(Ordering::Relaxed),
            self.unknown_unit_errors.load(Ordering::Relaxed)
        );
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::convert;
    use std::thread;

    #[test]
    fn test_metrics_creation() {
        let metrics = Metrics::new();
        assert_eq!(metrics.total(), 0);
        assert_eq!(metrics.failures(), 0);
    }

    #[test]
    fn test_record_outcomes() {
        let metrics = Metrics::new();

        metrics.record(&convert("1", "Metre", "Foot"));
        metrics.record(&convert("2", "Mile", "Metre"));
        metrics.record(&convert("", "Metre", "Foot"));
        metrics.record(&convert("x", "Metre", "Foot"));
        metrics.record(&convert("1", "Metre", "Furlong"));

        assert_eq!(metrics.conversions_succeeded.load(Ordering::Relaxed), 2);
        assert_eq!(metrics.empty_input_errors.load(Ordering::Relaxed), 1);
        assert_eq!(metrics.invalid_number_errors.load(Ordering::Relaxed), 1);
        assert_eq!(metrics.unknown_unit_errors.load(Ordering::Relaxed), 1);
        assert_eq!(metrics.failures(), 3);
        assert_eq!(metrics.total(), 5);
    }

    #[test]
    fn test_uptime() {
        let metrics = Metrics::new();
        thread::sleep(Duration::from_millis(10));
        assert!(metrics.uptime().as_millis() >= 10);
    }
}
