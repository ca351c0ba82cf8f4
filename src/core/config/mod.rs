pub mod session_config;
pub mod speed;
pub mod visual_mode;

pub use session_config::{ConfigError, SessionConfig};
pub use speed::SpeedPreset;
pub use visual_mode::VisualMode;
