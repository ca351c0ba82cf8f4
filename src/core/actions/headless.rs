use crate::core::actions::cancellation::{CancelToken, Cancelled, NeverCancel};
use crate::core::actions::run_algorithm::run_algorithm;
use crate::core::actions::step_sink::{Pace, StepSink};
use crate::core::algorithms::kinds::AlgorithmKind;
use crate::core::data::sort_array::SortArray;
use crate::core::metrics::tracker::MetricsTracker;

type FrameObserver<'a> = Box<dyn FnMut(&SortArray) + 'a>;

/// A synchronous sink with no pacing. Counts what the algorithm reports and
/// optionally hands every suspended frame to an observer.
pub struct HeadlessSink<'a, C: CancelToken> {
    cancel: C,
    metrics: MetricsTracker,
    frames: u64,
    tones: u64,
    observer: Option<FrameObserver<'a>>,
}

impl<'a, C: CancelToken> HeadlessSink<'a, C> {
    pub fn new(kind: AlgorithmKind, cancel: C) -> Self {
        Self {
            cancel,
            metrics: MetricsTracker::new(kind),
            frames: 0,
            tones: 0,
            observer: None,
        }
    }

    #[must_use]
    pub fn with_observer(mut self, observer: impl FnMut(&SortArray) + 'a) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }

    #[must_use]
    pub fn metrics(&self) -> &MetricsTracker {
        &self.metrics
    }

    #[must_use]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    #[must_use]
    pub fn tones(&self) -> u64 {
        self.tones
    }
}

impl<C: CancelToken> StepSink for HeadlessSink<'_, C> {
    fn checkpoint(&mut self) -> Result<(), Cancelled> {
        self.cancel.ensure_live()
    }

    fn compared(&mut self) {
        self.metrics.record_comparison();
    }

    fn exchanged(&mut self, _value: u32) {
        self.metrics.record_exchange();
        self.tones += 1;
    }

    fn tone(&mut self, _frequency: f64) {
        self.tones += 1;
    }

    fn progress(&mut self, fraction: f64) {
        self.metrics.set_progress(fraction);
    }

    fn suspend(&mut self, array: &SortArray, _pace: Pace) -> Result<(), Cancelled> {
        self.frames += 1;
        if let Some(observer) = self.observer.as_mut() {
            observer(array);
        }
        self.cancel.ensure_live()
    }
}

/// Runs `kind` to completion over `array` without pacing or cancellation.
pub fn sort_headless(kind: AlgorithmKind, array: &mut SortArray) -> MetricsTracker {
    let mut sink = HeadlessSink::new(kind, NeverCancel);
    match run_algorithm(kind, array, &mut sink) {
        Ok(()) | Err(Cancelled) => sink.metrics,
    }
}
