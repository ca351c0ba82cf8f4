/// Presentational tag carried by each slot. Never consulted by ordering logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ElementState {
    #[default]
    Default,
    Comparing,
    Swapping,
    Sorted,
    Pivot,
}

impl ElementState {
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Comparing => "comparing",
            Self::Swapping => "swapping",
            Self::Sorted => "sorted",
            Self::Pivot => "pivot",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Element {
    pub value: u32,
    pub state: ElementState,
    /// Position the element was created at.
    pub index: usize,
}

impl Element {
    #[must_use]
    pub const fn new(value: u32, index: usize) -> Self {
        Self {
            value,
            state: ElementState::Default,
            index,
        }
    }

    #[must_use]
    pub const fn with_state(self, state: ElementState) -> Self {
        Self { state, ..self }
    }
}
