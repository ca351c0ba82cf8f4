use crate::core::actions::cancellation::Cancelled;
use crate::core::actions::step_sink::{Pace, StepSink};
use crate::core::algorithms::kinds::AlgorithmKind;
use crate::core::algorithms::sort_algorithm::SortAlgorithm;
use crate::core::data::element::ElementState;
use crate::core::data::sort_array::SortArray;

/// Histogram over `[min, max]`, prefix sums, then back-to-front placement.
#[derive(Debug, Clone, Copy, Default)]
pub struct CountingSort;

impl SortAlgorithm for CountingSort {
    fn kind(&self) -> AlgorithmKind {
        AlgorithmKind::Counting
    }

    fn sort(&self, array: &mut SortArray, sink: &mut dyn StepSink) -> Result<(), Cancelled> {
        sink.checkpoint()?;

        let (Some(min), Some(max)) = (array.min_value(), array.max_value()) else {
            return Ok(());
        };
        let n = array.len();
        let slot = |value: u32| (value - min) as usize;

        let mut counts = vec![0usize; slot(max) + 1];

        for i in 0..n {
            sink.checkpoint()?;
            array.set_state(i, ElementState::Comparing);
            counts[slot(array.value(i))] += 1;
            sink.compared();
            sink.progress(0.5 * (i + 1) as f64 / n as f64);
            sink.suspend(array, Pace::Step)?;
        }

        for k in 1..counts.len() {
            counts[k] += counts[k - 1];
        }

        let mut output = array.elements().to_vec();
        for (placed, i) in (0..n).rev().enumerate() {
            sink.checkpoint()?;
            let element = array.get(i);
            let k = slot(element.value);
            counts[k] -= 1;
            output[counts[k]] = element.with_state(ElementState::Swapping);
            sink.exchanged(element.value);
            sink.progress(0.5 + 0.5 * (placed + 1) as f64 / n as f64);
            sink.suspend(array, Pace::Step)?;
        }

        sink.checkpoint()?;
        for (i, element) in output.into_iter().enumerate() {
            array.assign(i, element.with_state(ElementState::Default));
        }
        sink.suspend(array, Pace::Step)
    }
}
