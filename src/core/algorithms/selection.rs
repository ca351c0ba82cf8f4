use crate::core::actions::cancellation::Cancelled;
use crate::core::actions::step_sink::{Pace, StepSink};
use crate::core::algorithms::kinds::AlgorithmKind;
use crate::core::algorithms::sort_algorithm::SortAlgorithm;
use crate::core::data::element::ElementState;
use crate::core::data::sort_array::SortArray;

#[derive(Debug, Clone, Copy, Default)]
pub struct SelectionSort;

impl SortAlgorithm for SelectionSort {
    fn kind(&self) -> AlgorithmKind {
        AlgorithmKind::Selection
    }

    fn sort(&self, array: &mut SortArray, sink: &mut dyn StepSink) -> Result<(), Cancelled> {
        let n = array.len();

        for i in 0..n {
            sink.checkpoint()?;

            let mut min_idx = i;
            array.set_state(min_idx, ElementState::Comparing);

            for j in i + 1..n {
                sink.checkpoint()?;

                array.set_state(j, ElementState::Comparing);
                sink.compared();
                sink.suspend(array, Pace::Step)?;

                // The comparing tag follows the current minimum candidate.
                if array.value(j) < array.value(min_idx) {
                    array.set_state(min_idx, ElementState::Default);
                    min_idx = j;
                } else {
                    array.set_state(j, ElementState::Default);
                }
            }

            if min_idx != i {
                array.set_state(i, ElementState::Swapping);
                array.set_state(min_idx, ElementState::Swapping);
                sink.suspend(array, Pace::Step)?;

                array.exchange(i, min_idx);
                sink.exchanged(array.value(i));
                array.set_state(min_idx, ElementState::Default);
            }

            array.set_state(i, ElementState::Sorted);
            sink.progress(i as f64 / n as f64);
        }

        Ok(())
    }
}
