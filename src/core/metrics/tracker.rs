use std::time::{Duration, Instant};

use crate::core::algorithms::info::{Complexity, complexity};
use crate::core::algorithms::kinds::{AlgorithmKind, ExchangeLabel};

/// Counters observed during a run. Has no say over the run itself.
///
/// Counts survive `start` so that a run resumed after a pause keeps adding
/// to them; only `reset` (array regeneration) zeroes them.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricsTracker {
    algorithm: AlgorithmKind,
    comparisons: u64,
    exchanges: u64,
    started_at: Option<Instant>,
    finished_at: Option<Instant>,
    progress: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MetricsSnapshot {
    pub algorithm: AlgorithmKind,
    pub comparisons: u64,
    pub exchanges: u64,
    pub elapsed: Duration,
    pub progress: f64,
    pub exchange_label: ExchangeLabel,
    pub complexity: Complexity,
}

impl MetricsTracker {
    #[must_use]
    pub fn new(algorithm: AlgorithmKind) -> Self {
        Self {
            algorithm,
            comparisons: 0,
            exchanges: 0,
            started_at: None,
            finished_at: None,
            progress: 0.0,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new(self.algorithm);
    }

    pub fn set_algorithm(&mut self, algorithm: AlgorithmKind) {
        self.algorithm = algorithm;
    }

    pub fn start(&mut self, now: Instant) {
        self.started_at = Some(now);
        self.finished_at = None;
    }

    pub fn finish(&mut self, now: Instant) {
        if self.started_at.is_some() {
            self.finished_at = Some(now);
        }
    }

    pub fn record_comparison(&mut self) {
        self.comparisons += 1;
    }

    pub fn record_exchange(&mut self) {
        self.exchanges += 1;
    }

    pub fn set_progress(&mut self, fraction: f64) {
        if fraction.is_finite() {
            self.progress = fraction.clamp(0.0, 1.0);
        }
    }

    #[must_use]
    pub fn algorithm(&self) -> AlgorithmKind {
        self.algorithm
    }

    #[must_use]
    pub fn comparisons(&self) -> u64 {
        self.comparisons
    }

    #[must_use]
    pub fn exchanges(&self) -> u64 {
        self.exchanges
    }

    #[must_use]
    pub fn progress(&self) -> f64 {
        self.progress
    }

    #[must_use]
    pub fn elapsed(&self, now: Instant) -> Duration {
        match (self.started_at, self.finished_at) {
            (Some(start), Some(end)) => end.saturating_duration_since(start),
            (Some(start), None) => now.saturating_duration_since(start),
            _ => Duration::ZERO,
        }
    }

    #[must_use]
    pub fn snapshot(&self, now: Instant) -> MetricsSnapshot {
        MetricsSnapshot {
            algorithm: self.algorithm,
            comparisons: self.comparisons,
            exchanges: self.exchanges,
            elapsed: self.elapsed(now),
            progress: self.progress,
            exchange_label: self.algorithm.exchange_label(),
            complexity: complexity(self.algorithm),
        }
    }
}

impl Default for MetricsTracker {
    fn default() -> Self {
        Self::new(AlgorithmKind::default())
    }
}
