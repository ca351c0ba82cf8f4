pub mod interactive;
pub mod run_controller;
