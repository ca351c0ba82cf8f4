use thiserror::Error;

use crate::core::algorithms::kinds::AlgorithmKind;
use crate::core::config::speed::SpeedPreset;
use crate::core::config::visual_mode::VisualMode;

pub const MIN_ARRAY_SIZE: usize = 1;
pub const MAX_ARRAY_SIZE: usize = 1000;
pub const DEFAULT_ARRAY_SIZE: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("array size {size} outside {min}..={max}")]
    ArraySizeOutOfRange { size: usize, min: usize, max: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    pub array_size: usize,
    pub speed: SpeedPreset,
    pub sound_enabled: bool,
    pub algorithm: AlgorithmKind,
    pub visual_mode: VisualMode,
}

impl SessionConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_array_size(self.array_size)
    }
}

pub fn check_array_size(size: usize) -> Result<(), ConfigError> {
    if (MIN_ARRAY_SIZE..=MAX_ARRAY_SIZE).contains(&size) {
        Ok(())
    } else {
        Err(ConfigError::ArraySizeOutOfRange {
            size,
            min: MIN_ARRAY_SIZE,
            max: MAX_ARRAY_SIZE,
        })
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            array_size: DEFAULT_ARRAY_SIZE,
            speed: SpeedPreset::default(),
            sound_enabled: true,
            algorithm: AlgorithmKind::default(),
            visual_mode: VisualMode::default(),
        }
    }
}
