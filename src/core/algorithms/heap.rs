use crate::core::actions::cancellation::Cancelled;
use crate::core::actions::step_sink::{Pace, StepSink};
use crate::core::algorithms::kinds::AlgorithmKind;
use crate::core::algorithms::sort_algorithm::SortAlgorithm;
use crate::core::data::element::ElementState;
use crate::core::data::sort_array::SortArray;

#[derive(Debug, Clone, Copy, Default)]
pub struct HeapSort;

impl SortAlgorithm for HeapSort {
    fn kind(&self) -> AlgorithmKind {
        AlgorithmKind::Heap
    }

    fn sort(&self, array: &mut SortArray, sink: &mut dyn StepSink) -> Result<(), Cancelled> {
        let n = array.len();

        for root in (0..n / 2).rev() {
            heapify(array, n, root, sink)?;
        }

        for end in (1..n).rev() {
            sink.checkpoint()?;

            array.set_state(0, ElementState::Swapping);
            array.set_state(end, ElementState::Swapping);
            sink.suspend(array, Pace::Step)?;

            array.exchange(0, end);
            sink.exchanged(array.value(end));

            array.set_state(end, ElementState::Sorted);
            array.set_state(0, ElementState::Default);

            heapify(array, end, 0, sink)?;
            sink.progress((n - end) as f64 / n as f64);
        }

        if n > 0 {
            array.set_state(0, ElementState::Sorted);
        }

        Ok(())
    }
}

/// Sifts `root` down within the first `size` slots.
fn heapify(
    array: &mut SortArray,
    size: usize,
    root: usize,
    sink: &mut dyn StepSink,
) -> Result<(), Cancelled> {
    sink.checkpoint()?;

    let left = 2 * root + 1;
    let right = 2 * root + 2;
    let mut largest = root;

    array.set_state(root, ElementState::Comparing);

    if left < size {
        array.set_state(left, ElementState::Comparing);
        sink.compared();
        if array.value(left) > array.value(largest) {
            largest = left;
        }
    }

    if right < size {
        array.set_state(right, ElementState::Comparing);
        sink.compared();
        if array.value(right) > array.value(largest) {
            largest = right;
        }
    }

    sink.suspend(array, Pace::Step)?;

    if largest != root {
        array.set_state(root, ElementState::Swapping);
        array.set_state(largest, ElementState::Swapping);
        sink.suspend(array, Pace::Step)?;

        array.exchange(root, largest);
        sink.exchanged(array.value(root));
    }

    array.set_state(root, ElementState::Default);
    for child in [left, right] {
        if child < size {
            array.set_state(child, ElementState::Default);
        }
    }

    if largest != root {
        heapify(array, size, largest, sink)?;
    }

    Ok(())
}
