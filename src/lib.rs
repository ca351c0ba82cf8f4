//! Stepwise sorting visualizer engine.
//!
//! Eight sorting algorithms run one comparison or exchange at a time,
//! reporting every step to a presenter and stopping cleanly when the run they
//! belong to is paused or superseded.

pub mod controllers;
pub mod core;
pub mod input;
pub mod logging;
pub mod presenters;

pub use controllers::interactive::{
    ControllerError, ControllerOptions, FrameData, NoDelayPacer, Pacer, PresenterError,
    SortEvent, SortPresenterPort, SortingController, ThreadSleepPacer,
};
pub use controllers::run_controller::{RunController, RunError, RunToken};
pub use crate::core::actions::headless::{HeadlessSink, sort_headless};
pub use crate::core::actions::run_algorithm::run_algorithm;
pub use crate::core::actions::{CancelToken, Cancelled, NeverCancel, Pace, StepSink};
pub use crate::core::algorithms::{AlgorithmKind, ExchangeLabel, SortAlgorithm, algorithm_factory};
pub use crate::core::config::{SessionConfig, SpeedPreset, VisualMode};
pub use crate::core::data::{Element, ElementState, SortArray, SortArrayError};
pub use crate::core::metrics::{MetricsSnapshot, MetricsTracker};
pub use presenters::terminal::TerminalPresenter;
