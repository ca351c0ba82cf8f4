//! The boundary between an algorithm and whatever drives it.
//!
//! Algorithms never see the run controller. They report what they did and
//! ask the sink at every step boundary whether they may go on; a
//! [`Cancelled`] answer is propagated with `?` until the whole call stack,
//! recursive frames included, has unwound.

use std::time::Duration;

use crate::core::actions::cancellation::Cancelled;
use crate::core::data::sort_array::SortArray;

pub const EXCHANGE_TONE_BASE_HZ: f64 = 200.0;
pub const FINALE_TONE_BASE_HZ: f64 = 400.0;
pub const FINALE_DELAY: Duration = Duration::from_millis(30);

#[must_use]
pub fn exchange_tone(value: u32) -> f64 {
    EXCHANGE_TONE_BASE_HZ + f64::from(value)
}

#[must_use]
pub fn finale_tone(value: u32) -> f64 {
    FINALE_TONE_BASE_HZ + f64::from(value) * 2.0
}

/// How long a suspension should hold the frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pace {
    /// The user's selected speed preset.
    Step,
    /// The short fixed delay of the finalization pass.
    Finale,
}

pub trait StepSink {
    /// Fails once the run no longer owns the array. Called before mutating.
    fn checkpoint(&mut self) -> Result<(), Cancelled>;

    fn compared(&mut self);

    /// Counts one exchange (or shift) and sounds the tone for `value`.
    fn exchanged(&mut self, value: u32);

    fn tone(&mut self, frequency: f64);

    fn progress(&mut self, fraction: f64);

    /// Renders `array`, waits for the pace interval and checks cancellation.
    fn suspend(&mut self, array: &SortArray, pace: Pace) -> Result<(), Cancelled>;
}
