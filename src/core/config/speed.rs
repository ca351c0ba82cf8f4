use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

/// Pacing presets, slowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SpeedPreset {
    Slow,
    Normal,
    #[default]
    Fast,
    VeryFast,
    Lightning,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown speed preset '{0}'")]
pub struct UnknownSpeed(pub String);

impl SpeedPreset {
    pub const ALL: &'static [Self] = &[
        Self::Slow,
        Self::Normal,
        Self::Fast,
        Self::VeryFast,
        Self::Lightning,
    ];

    #[must_use]
    pub const fn delay(self) -> Duration {
        let millis = match self {
            Self::Slow => 200,
            Self::Normal => 100,
            Self::Fast => 50,
            Self::VeryFast => 25,
            Self::Lightning => 10,
        };
        Duration::from_millis(millis)
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Slow => "Slow",
            Self::Normal => "Normal",
            Self::Fast => "Fast",
            Self::VeryFast => "Very Fast",
            Self::Lightning => "Lightning",
        }
    }

    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Slow => "slow",
            Self::Normal => "normal",
            Self::Fast => "fast",
            Self::VeryFast => "very-fast",
            Self::Lightning => "lightning",
        }
    }
}

impl FromStr for SpeedPreset {
    type Err = UnknownSpeed;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace(['_', ' '], "-");
        Self::ALL
            .iter()
            .copied()
            .find(|preset| preset.key() == wanted)
            .ok_or_else(|| UnknownSpeed(s.to_owned()))
    }
}

impl std::fmt::Display for SpeedPreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}
