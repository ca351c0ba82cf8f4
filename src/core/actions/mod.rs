pub mod cancellation;
pub mod headless;
pub mod run_algorithm;
pub mod step_sink;

pub use cancellation::{CancelToken, Cancelled, NeverCancel};
pub use step_sink::{Pace, StepSink};
