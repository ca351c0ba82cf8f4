pub mod controller;
pub mod presenter;
