pub mod tracker;

pub use tracker::{MetricsSnapshot, MetricsTracker};
