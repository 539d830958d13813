use serde::Serialize;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::time::{Duration, Instant};

/// Per-run counters. Purely observational; nothing here feeds back into output.
pub struct RunStats {
    records_written: AtomicUsize,
    resolved: AtomicUsize,
    degraded: AtomicUsize,

    // Timing (in microseconds)
    total_lookup_time_us: AtomicU64,
}

impl RunStats {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            records_written: AtomicUsize::new(0),
            resolved: AtomicUsize::new(0),
            degraded: AtomicUsize::new(0),
            total_lookup_time_us: AtomicU64::new(0),
        })
    }

    pub fn record_lookup(&self, duration: Duration, success: bool) {
        self.total_lookup_time_us
            .fetch_add(duration.as_micros() as u64, Ordering::Relaxed);
        if success {
            self.resolved.fetch_add(1, Ordering::Relaxed);
        } else {
            self.degraded.fetch_add(1, Ordering::Relaxed);
        }
    }

    pub fn record_written(&self) {
        self.records_written.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> RunSummary {
        let lookups = self.resolved.load(Ordering::Relaxed) + self.degraded.load(Ordering::Relaxed);
        let total_us = self.total_lookup_time_us.load(Ordering::Relaxed) as f64;
        RunSummary {
            records_written: self.records_written.load(Ordering::Relaxed),
            resolved: self.resolved.load(Ordering::Relaxed),
            degraded: self.degraded.load(Ordering::Relaxed),
            avg_lookup_time_ms: if lookups > 0 {
                total_us / lookups as f64 / 1000.0
            } else {
                0.0
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunSummary {
    pub records_written: usize,
    pub resolved: usize,
    /// Lookups that failed and fell back to a chembl-only record
    pub degraded: usize,
    pub avg_lookup_time_ms: f64,
}

pub struct TimedOperation {
    start: Instant,
}

impl TimedOperation {
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}
