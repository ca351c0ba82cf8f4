use std::str::FromStr;

use thiserror::Error;

/// How a presenter should draw elements. Has no effect on sorting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VisualMode {
    #[default]
    Bars,
    Dots,
    Blocks,
    Particles,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown visual mode '{0}'")]
pub struct UnknownVisualMode(pub String);

impl VisualMode {
    pub const ALL: &'static [Self] = &[Self::Bars, Self::Dots, Self::Blocks, Self::Particles];

    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Bars => "bars",
            Self::Dots => "dots",
            Self::Blocks => "blocks",
            Self::Particles => "particles",
        }
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Bars => "Bars",
            Self::Dots => "Dots",
            Self::Blocks => "3D Blocks",
            Self::Particles => "Particles",
        }
    }

    #[must_use]
    pub fn cycle(self, direction: isize) -> Self {
        let len = Self::ALL.len() as isize;
        let position = Self::ALL.iter().position(|&m| m == self).unwrap_or(0) as isize;
        Self::ALL[(position + direction).rem_euclid(len) as usize]
    }
}

impl FromStr for VisualMode {
    type Err = UnknownVisualMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|mode| mode.key() == wanted)
            .ok_or_else(|| UnknownVisualMode(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_wraps() {
        assert_eq!(VisualMode::Bars.cycle(-1), VisualMode::Particles);
        assert_eq!(VisualMode::Particles.cycle(1), VisualMode::Bars);
    }

    #[test]
    fn keys_round_trip() {
        for &mode in VisualMode::ALL {
            assert_eq!(mode.key().parse::<VisualMode>(), Ok(mode));
        }
    }
}
