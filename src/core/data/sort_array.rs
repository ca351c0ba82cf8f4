use rand::Rng;
use thiserror::Error;

use crate::core::data::custom_input::parse_custom_values;
use crate::core::data::element::{Element, ElementState};

pub const MIN_GENERATED_VALUE: u32 = 10;
pub const GENERATED_VALUE_SPAN: u32 = 300;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SortArrayError {
    #[error("array size must be at least 1, got {size}")]
    InvalidSize { size: usize },
    #[error("no valid positive integers found in input")]
    EmptyOrInvalidInput,
}

/// The array every algorithm reads and writes.
///
/// `exchange` and `assign` are the only value-moving mutators; both count
/// towards [`SortArray::mutation_count`]. Tagging a slot with
/// [`SortArray::set_state`] is presentational and not counted.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SortArray {
    elements: Vec<Element>,
    mutations: u64,
}

impl SortArray {
    /// Fills `size` slots with independent values in `[10, 309]`.
    pub fn generate<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Result<Self, SortArrayError> {
        if size < 1 {
            return Err(SortArrayError::InvalidSize { size });
        }

        let elements = (0..size)
            .map(|index| {
                let value = rng
                    .gen_range(MIN_GENERATED_VALUE..MIN_GENERATED_VALUE + GENERATED_VALUE_SPAN);
                Element::new(value, index)
            })
            .collect();

        Ok(Self {
            elements,
            mutations: 0,
        })
    }

    pub fn from_custom<S: AsRef<str>>(items: &[S]) -> Result<Self, SortArrayError> {
        let values = parse_custom_values(items);
        if values.is_empty() {
            return Err(SortArrayError::EmptyOrInvalidInput);
        }

        Ok(Self::from_values(&values))
    }

    #[must_use]
    pub fn from_values(values: &[u32]) -> Self {
        Self {
            elements: values
                .iter()
                .enumerate()
                .map(|(index, &value)| Element::new(value, index))
                .collect(),
            mutations: 0,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    #[must_use]
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    #[must_use]
    pub fn get(&self, i: usize) -> Element {
        self.elements[i]
    }

    #[must_use]
    pub fn value(&self, i: usize) -> u32 {
        self.elements[i].value
    }

    #[must_use]
    pub fn state(&self, i: usize) -> ElementState {
        self.elements[i].state
    }

    pub fn set_state(&mut self, i: usize, state: ElementState) {
        self.elements[i].state = state;
    }

    pub fn set_range_state(&mut self, range: std::ops::Range<usize>, state: ElementState) {
        for element in &mut self.elements[range] {
            element.state = state;
        }
    }

    /// Swaps whole records, state included.
    pub fn exchange(&mut self, i: usize, j: usize) {
        self.elements.swap(i, j);
        self.mutations += 1;
    }

    pub fn assign(&mut self, i: usize, element: Element) {
        self.elements[i] = element;
        self.mutations += 1;
    }

    #[must_use]
    pub fn mutation_count(&self) -> u64 {
        self.mutations
    }

    #[must_use]
    pub fn values(&self) -> Vec<u32> {
        self.elements.iter().map(|e| e.value).collect()
    }

    #[must_use]
    pub fn is_sorted(&self) -> bool {
        self.elements.windows(2).all(|w| w[0].value <= w[1].value)
    }

    #[must_use]
    pub fn max_value(&self) -> Option<u32> {
        self.elements.iter().map(|e| e.value).max()
    }

    #[must_use]
    pub fn min_value(&self) -> Option<u32> {
        self.elements.iter().map(|e| e.value).min()
    }
}
