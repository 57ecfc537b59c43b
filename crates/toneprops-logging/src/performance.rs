// ABOUTME: Operation timing on tracing spans
// ABOUTME: PerfTimer records elapsed time on its span and warns past a threshold

use std::time::{Duration, Instant};
use tracing::{Level, Span, field, span, warn};

/// Guard that records `elapsed_ms` on a `perf_timer` span when dropped.
#[derive(Debug)]
pub struct PerfTimer {
    span: Span,
    start: Instant,
    operation: &'static str,
    warn_threshold: Option<Duration>,
}

impl PerfTimer {
    pub fn new(operation: &'static str) -> Self {
        Self {
            span: span!(Level::DEBUG, "perf_timer", operation, elapsed_ms = field::Empty),
            start: Instant::now(),
            operation,
            warn_threshold: None,
        }
    }

    /// Warn when the guarded operation outlives `threshold`.
    pub fn with_warn_threshold(mut self, threshold: Duration) -> Self {
        self.warn_threshold = Some(threshold);
        self
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

impl Drop for PerfTimer {
    fn drop(&mut self) {
        let elapsed = self.start.elapsed();
        let elapsed_ms = elapsed.as_secs_f64() * 1000.0;
        self.span.record("elapsed_ms", elapsed_ms);

        if let Some(threshold) = self.warn_threshold
            && elapsed > threshold
        {
            warn!(
                operation = self.operation,
                elapsed_ms,
                threshold_ms = threshold.as_secs_f64() * 1000.0,
                "Slow operation detected"
            );
        }
    }
}
