use std::time::Instant;

use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::events::sort_event::SortEvent;
use crate::controllers::interactive::shared::SharedState;
use crate::controllers::run_controller::RunToken;
use crate::core::actions::cancellation::Cancelled;
use crate::core::actions::step_sink::{FINALE_DELAY, Pace, StepSink, exchange_tone};
use crate::core::data::sort_array::SortArray;
use crate::core::metrics::tracker::MetricsTracker;

/// Step sink for the worker thread.
///
/// The algorithm mutates a private copy of the array. At every suspension
/// the copy and the running metrics are published into the session, under
/// the session lock and only while `token` is live, then the frame is
/// presented in publication order and paced outside the lock.
pub(super) struct LiveStepDriver<'a> {
    shared: &'a SharedState,
    token: RunToken,
    metrics: MetricsTracker,
}

impl<'a> LiveStepDriver<'a> {
    pub(super) fn new(shared: &'a SharedState, token: RunToken, metrics: MetricsTracker) -> Self {
        Self {
            shared,
            token,
            metrics,
        }
    }

    pub(super) fn into_metrics(self) -> MetricsTracker {
        self.metrics
    }

    fn ensure_live(&self) -> Result<(), Cancelled> {
        if self.shared.is_live(self.token) {
            Ok(())
        } else {
            Err(Cancelled)
        }
    }
}

impl StepSink for LiveStepDriver<'_> {
    fn checkpoint(&mut self) -> Result<(), Cancelled> {
        self.ensure_live()
    }

    fn compared(&mut self) {
        self.metrics.record_comparison();
    }

    fn exchanged(&mut self, value: u32) {
        self.metrics.record_exchange();
        self.tone(exchange_tone(value));
    }

    fn tone(&mut self, frequency: f64) {
        let sound_enabled = self.shared.session().config.sound_enabled;
        if sound_enabled {
            self.shared.present(SortEvent::Tone { frequency });
        }
    }

    fn progress(&mut self, fraction: f64) {
        self.metrics.set_progress(fraction);
    }

    fn suspend(&mut self, array: &SortArray, pace: Pace) -> Result<(), Cancelled> {
        let mut session = self.shared.session();
        self.ensure_live()?;

        session.array = array.clone();
        session.metrics = self.metrics.clone();

        let delay = match pace {
            Pace::Step => session.config.speed.delay(),
            Pace::Finale => FINALE_DELAY,
        };
        let frame = FrameData {
            token: self.token,
            elements: array.elements().to_vec(),
            visual_mode: session.config.visual_mode,
        };
        let snapshot = self.metrics.snapshot(Instant::now());

        self.shared.present_after(
            session,
            [SortEvent::Frame(frame), SortEvent::Metrics(snapshot)],
        );
        self.shared.pacer.wait(delay);

        self.ensure_live()
    }
}
