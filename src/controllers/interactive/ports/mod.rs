//! Port definitions for the sorting controller.
//!
//! The controller pushes everything a user interface needs through these
//! traits; it never draws or plays sound itself.

pub mod pacer;
pub mod presenter;
