//! Interactive controller for paced, cancellable sorting runs.
//!
//! # Architecture
//!
//! The controller follows the ports & adapters pattern:
//! - **Input**: control calls (`start`, `pause`, `reset`, `generate`, ...)
//! - **Output**: [`SortPresenterPort`] receiving frames, tones and metrics
//! - **Core**: algorithms from `core/` driven through a step sink
//!
//! Runs execute on a single worker thread. The UI thread never blocks on a
//! run; it only flips the run token or pause flag, which the worker observes
//! at its next step boundary.

mod controller;
pub mod data;
mod driver;
pub mod errors;
pub mod events;
pub mod ports;
mod shared;

pub use controller::{ControllerOptions, SortingController};
pub use data::frame_data::FrameData;
pub use errors::controller::ControllerError;
pub use errors::presenter::PresenterError;
pub use events::sort_event::SortEvent;
pub use ports::pacer::{NoDelayPacer, Pacer, ThreadSleepPacer};
pub use ports::presenter::SortPresenterPort;
