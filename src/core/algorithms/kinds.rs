use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AlgorithmKind {
    #[default]
    Bubble,
    Selection,
    Insertion,
    Merge,
    Quick,
    Heap,
    Radix,
    Counting,
}

/// What the exchange counter means for an algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExchangeLabel {
    Swaps,
    Shifts,
}

impl ExchangeLabel {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Swaps => "Swaps",
            Self::Shifts => "Shifts",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown algorithm '{0}'")]
pub struct UnknownAlgorithm(pub String);

impl AlgorithmKind {
    pub const ALL: &'static [Self] = &[
        Self::Bubble,
        Self::Selection,
        Self::Insertion,
        Self::Merge,
        Self::Quick,
        Self::Heap,
        Self::Radix,
        Self::Counting,
    ];

    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Bubble => "bubble",
            Self::Selection => "selection",
            Self::Insertion => "insertion",
            Self::Merge => "merge",
            Self::Quick => "quick",
            Self::Heap => "heap",
            Self::Radix => "radix",
            Self::Counting => "counting",
        }
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Bubble => "Bubble Sort",
            Self::Selection => "Selection Sort",
            Self::Insertion => "Insertion Sort",
            Self::Merge => "Merge Sort",
            Self::Quick => "Quick Sort",
            Self::Heap => "Heap Sort",
            Self::Radix => "Radix Sort",
            Self::Counting => "Counting Sort",
        }
    }

    #[must_use]
    pub const fn exchange_label(self) -> ExchangeLabel {
        match self {
            Self::Insertion | Self::Merge => ExchangeLabel::Shifts,
            _ => ExchangeLabel::Swaps,
        }
    }

    /// Steps through [`AlgorithmKind::ALL`] cyclically.
    #[must_use]
    pub fn cycle(self, direction: isize) -> Self {
        let len = Self::ALL.len() as isize;
        let position = Self::ALL.iter().position(|&k| k == self).unwrap_or(0) as isize;
        Self::ALL[(position + direction).rem_euclid(len) as usize]
    }
}

impl FromStr for AlgorithmKind {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.key() == wanted)
            .ok_or_else(|| UnknownAlgorithm(s.to_owned()))
    }
}

impl std::fmt::Display for AlgorithmKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}
