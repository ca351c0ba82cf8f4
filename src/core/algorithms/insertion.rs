use crate::core::actions::cancellation::Cancelled;
use crate::core::actions::step_sink::{Pace, StepSink};
use crate::core::algorithms::kinds::AlgorithmKind;
use crate::core::algorithms::sort_algorithm::SortAlgorithm;
use crate::core::data::element::ElementState;
use crate::core::data::sort_array::SortArray;

/// Shifts larger elements one slot right until the key's position opens up.
/// Each single-slot write is one shift; comparisons are counted per shift.
#[derive(Debug, Clone, Copy, Default)]
pub struct InsertionSort;

impl SortAlgorithm for InsertionSort {
    fn kind(&self) -> AlgorithmKind {
        AlgorithmKind::Insertion
    }

    fn sort(&self, array: &mut SortArray, sink: &mut dyn StepSink) -> Result<(), Cancelled> {
        let n = array.len();

        for i in 1..n {
            sink.checkpoint()?;

            let key = array.get(i);
            array.set_state(i, ElementState::Comparing);
            sink.suspend(array, Pace::Step)?;

            let mut hole = i;
            while hole > 0 && array.value(hole - 1) > key.value {
                sink.checkpoint()?;

                let src = hole - 1;
                array.set_state(src, ElementState::Swapping);
                sink.compared();
                sink.suspend(array, Pace::Step)?;

                let shifted = array.get(src).with_state(ElementState::Swapping);
                array.assign(hole, shifted);
                sink.exchanged(shifted.value);
                sink.suspend(array, Pace::Step)?;

                array.set_state(hole, ElementState::Default);
                hole = src;
            }

            if hole == i {
                array.set_state(i, ElementState::Default);
            } else {
                array.assign(hole, key.with_state(ElementState::Default));
            }

            sink.progress(i as f64 / n as f64);
        }

        Ok(())
    }
}
