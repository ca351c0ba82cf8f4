use crate::core::actions::cancellation::Cancelled;
use crate::core::actions::step_sink::{Pace, StepSink};
use crate::core::algorithms::kinds::AlgorithmKind;
use crate::core::algorithms::sort_algorithm::SortAlgorithm;
use crate::core::data::element::ElementState;
use crate::core::data::sort_array::SortArray;

#[derive(Debug, Clone, Copy, Default)]
pub struct BubbleSort;

impl SortAlgorithm for BubbleSort {
    fn kind(&self) -> AlgorithmKind {
        AlgorithmKind::Bubble
    }

    fn sort(&self, array: &mut SortArray, sink: &mut dyn StepSink) -> Result<(), Cancelled> {
        let n = array.len();

        for i in 0..n {
            for j in 0..n - i - 1 {
                sink.checkpoint()?;

                array.set_state(j, ElementState::Comparing);
                array.set_state(j + 1, ElementState::Comparing);
                sink.compared();
                sink.progress(i as f64 / n as f64);
                sink.suspend(array, Pace::Step)?;

                if array.value(j) > array.value(j + 1) {
                    array.set_state(j, ElementState::Swapping);
                    array.set_state(j + 1, ElementState::Swapping);
                    sink.suspend(array, Pace::Step)?;

                    array.exchange(j, j + 1);
                    sink.exchanged(array.value(j));
                }

                array.set_state(j, ElementState::Default);
                array.set_state(j + 1, ElementState::Default);
            }

            array.set_state(n - i - 1, ElementState::Sorted);
        }

        Ok(())
    }
}
