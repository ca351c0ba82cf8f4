pub mod actions;
pub mod algorithms;
pub mod config;
pub mod data;
pub mod metrics;
