use crate::core::actions::cancellation::Cancelled;
use crate::core::actions::step_sink::{Pace, StepSink};
use crate::core::algorithms::kinds::AlgorithmKind;
use crate::core::algorithms::sort_algorithm::SortAlgorithm;
use crate::core::data::element::ElementState;
use crate::core::data::sort_array::SortArray;

/// Lomuto partition around the last element of each range.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuickSort;

impl SortAlgorithm for QuickSort {
    fn kind(&self) -> AlgorithmKind {
        AlgorithmKind::Quick
    }

    fn sort(&self, array: &mut SortArray, sink: &mut dyn StepSink) -> Result<(), Cancelled> {
        let n = array.len();
        if n < 2 {
            return Ok(());
        }
        quick_sort(array, 0, n - 1, sink)
    }
}

fn quick_sort(
    array: &mut SortArray,
    low: usize,
    high: usize,
    sink: &mut dyn StepSink,
) -> Result<(), Cancelled> {
    if low >= high {
        return Ok(());
    }

    let pivot = partition(array, low, high, sink)?;
    if pivot > low {
        quick_sort(array, low, pivot - 1, sink)?;
    }
    quick_sort(array, pivot + 1, high, sink)
}

fn partition(
    array: &mut SortArray,
    low: usize,
    high: usize,
    sink: &mut dyn StepSink,
) -> Result<usize, Cancelled> {
    sink.checkpoint()?;

    let pivot_value = array.value(high);
    array.set_state(high, ElementState::Pivot);

    // Next slot for an element smaller than the pivot.
    let mut store = low;

    for j in low..high {
        sink.checkpoint()?;

        array.set_state(j, ElementState::Comparing);
        sink.compared();
        sink.suspend(array, Pace::Step)?;

        if array.value(j) < pivot_value {
            if store != j {
                array.set_state(store, ElementState::Swapping);
                array.set_state(j, ElementState::Swapping);
                sink.suspend(array, Pace::Step)?;

                array.exchange(store, j);
                sink.exchanged(array.value(store));
                array.set_state(j, ElementState::Default);
            }
            array.set_state(store, ElementState::Default);
            store += 1;
        } else {
            array.set_state(j, ElementState::Default);
        }
    }

    if store != high {
        array.set_state(store, ElementState::Swapping);
        sink.suspend(array, Pace::Step)?;

        array.exchange(store, high);
        sink.exchanged(array.value(store));
        array.set_state(high, ElementState::Default);
    }

    array.set_state(store, ElementState::Sorted);
    sink.progress((high - low + 1) as f64 / array.len() as f64);

    Ok(store)
}
