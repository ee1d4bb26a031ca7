//! Observability metrics for the activity hook.
//!
//! Provides counters about throttling behavior for monitoring and debugging.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Metrics tracking hook statistics.
///
/// All metrics use atomic operations, so a clone of the handle can be read
/// from another thread while the hook keeps running.
#[derive(Debug, Clone)]
pub struct Metrics {
    inner: Arc<MetricsInner>,
}

#[derive(Debug)]
struct MetricsInner {
    /// Events that passed the gate and triggered an emission
    events_emitted: AtomicU64,
    /// Events suppressed by the gate
    events_suppressed: AtomicU64,
    /// Emissions that failed to start
    emission_failures: AtomicU64,
}

impl Metrics {
    /// Create a new metrics tracker.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(MetricsInner {
                events_emitted: AtomicU64::new(0),
                events_suppressed: AtomicU64::new(0),
                emission_failures: AtomicU64::new(0),
            }),
        }
    }

    pub(crate) fn record_emitted(&self) {
        self.inner.events_emitted.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_suppressed(&self) {
        self.inner.events_suppressed.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_emission_failure(&self) {
        self.inner.emission_failures.fetch_add(1, Ordering::Relaxed);
    }

    /// Get the number of events that passed the gate.
    pub fn events_emitted(&self) -> u64 {
        self.inner.events_emitted.load(Ordering::Relaxed)
    }

    /// Get the number of events suppressed by the gate.
    pub fn events_suppressed(&self) -> u64 {
        self.inner.events_suppressed.load(Ordering::Relaxed)
    }

    /// Get the number of emissions that failed to start.
    ///
    /// Failed emissions are still counted in `events_emitted`.
    pub fn emission_failures(&self) -> u64 {
        self.inner.emission_failures.load(Ordering::Relaxed)
    }

    /// Get a snapshot of all metrics.
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            events_emitted: self.events_emitted(),
            events_suppressed: self.events_suppressed(),
            emission_failures: self.emission_failures(),
        }
    }

    /// Reset all metrics to zero.
    pub fn reset(&self) {
        self.inner.events_emitted.store(0, Ordering::Relaxed);
        self.inner.events_suppressed.store(0, Ordering::Relaxed);
        self.inner.emission_failures.store(0, Ordering::Relaxed);
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

/// A point-in-time snapshot of metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub events_emitted: u64,
    pub events_suppressed: u64,
    pub emission_failures: u64,
}

impl MetricsSnapshot {
    /// Total number of events seen by the hook.
    pub fn total_events(&self) -> u64 {
        self.events_emitted.saturating_add(self.events_suppressed)
    }

    /// Calculate the suppression rate (0.0 to 1.0).
    ///
    /// Returns 0.0 if no events have been processed.
    pub fn suppression_rate(&self) -> f64 {
        let total = self.total_events();
        if total == 0 {
            0.0
        } else {
            self.events_suppressed as f64 / total as f64
        }
    }
}
