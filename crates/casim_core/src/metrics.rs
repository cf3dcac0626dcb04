//! Step metrics and structured logging setup.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};
use tracing_subscriber::EnvFilter;

/// Counts steps and the time spent in them.
pub struct StepMetrics {
    steps: AtomicU64,
    busy_micros: AtomicU64,
    log_every: u64,
    start_time: Instant,
}

impl Default for StepMetrics {
    fn default() -> Self {
        Self::new(0)
    }
}

impl StepMetrics {
    /// `log_every` of 0 disables the periodic summary.
    #[must_use]
    pub fn new(log_every: u64) -> Self {
        Self {
            steps: AtomicU64::new(0),
            busy_micros: AtomicU64::new(0),
            log_every,
            start_time: Instant::now(),
        }
    }

    pub fn record_step(&self, duration: Duration) {
        let step = self.steps.fetch_add(1, Ordering::Relaxed) + 1;
        let micros = u64::try_from(duration.as_micros()).unwrap_or(u64::MAX);
        let busy = self
            .busy_micros
            .fetch_add(micros, Ordering::Relaxed)
            .saturating_add(micros);

        if self.log_every > 0 && step % self.log_every == 0 {
            tracing::info!(
                steps = step,
                avg_step_us = busy / step,
                last_step_us = micros,
                "Step summary"
            );
        }
    }

    #[must_use]
    pub fn steps(&self) -> u64 {
        self.steps.load(Ordering::Relaxed)
    }

    /// Total time spent inside recorded steps.
    #[must_use]
    pub fn busy(&self) -> Duration {
        Duration::from_micros(self.busy_micros.load(Ordering::Relaxed))
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }
}

/// Initialize the tracing subscriber. Honors `RUST_LOG`, defaulting to
/// `info`. Safe to call more than once.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing::subscriber::set_global_default(
        tracing_subscriber::fmt().with_env_filter(filter).finish(),
    )
    .ok();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_new() {
        let metrics = StepMetrics::new(10);
        assert_eq!(metrics.steps(), 0);
        assert_eq!(metrics.busy(), Duration::ZERO);
    }

    #[test]
    fn test_record_step() {
        let metrics = StepMetrics::new(1);
        metrics.record_step(Duration::from_millis(2));
        metrics.record_step(Duration::from_millis(3));
        assert_eq!(metrics.steps(), 2);
        assert_eq!(metrics.busy(), Duration::from_millis(5));
    }

    #[test]
    fn test_init_logging_twice() {
        init_logging();
        init_logging();
    }
}
