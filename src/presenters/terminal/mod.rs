pub mod presenter;
pub mod render;

pub use presenter::TerminalPresenter;
