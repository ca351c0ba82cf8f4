use crate::core::actions::cancellation::Cancelled;
use crate::core::actions::step_sink::{Pace, StepSink};
use crate::core::algorithms::kinds::AlgorithmKind;
use crate::core::algorithms::sort_algorithm::SortAlgorithm;
use crate::core::data::element::{Element, ElementState};
use crate::core::data::sort_array::SortArray;

#[derive(Debug, Clone, Copy, Default)]
pub struct MergeSort;

impl SortAlgorithm for MergeSort {
    fn kind(&self) -> AlgorithmKind {
        AlgorithmKind::Merge
    }

    fn sort(&self, array: &mut SortArray, sink: &mut dyn StepSink) -> Result<(), Cancelled> {
        let len = array.len();
        merge_sort(array, 0, len, sink)
    }
}

/// Sorts the half-open range `lo..hi`. The left half takes the extra element
/// of an odd-length range.
fn merge_sort(
    array: &mut SortArray,
    lo: usize,
    hi: usize,
    sink: &mut dyn StepSink,
) -> Result<(), Cancelled> {
    if hi - lo < 2 {
        return Ok(());
    }

    let mid = lo + (hi - lo).div_ceil(2);
    merge_sort(array, lo, mid, sink)?;
    merge_sort(array, mid, hi, sink)?;
    merge(array, lo, mid, hi, sink)
}

fn merge(
    array: &mut SortArray,
    lo: usize,
    mid: usize,
    hi: usize,
    sink: &mut dyn StepSink,
) -> Result<(), Cancelled> {
    sink.checkpoint()?;

    let left: Vec<Element> = array.elements()[lo..mid].to_vec();
    let right: Vec<Element> = array.elements()[mid..hi].to_vec();

    array.set_range_state(lo..hi, ElementState::Comparing);
    sink.suspend(array, Pace::Step)?;

    let (mut i, mut j, mut k) = (0, 0, lo);

    while i < left.len() && j < right.len() {
        sink.checkpoint()?;
        sink.compared();

        // Ties take from the left half to stay stable.
        let next = if left[i].value <= right[j].value {
            i += 1;
            left[i - 1]
        } else {
            j += 1;
            right[j - 1]
        };

        write_slot(array, k, next, sink)?;
        k += 1;
    }

    for &rest in left[i..].iter().chain(&right[j..]) {
        sink.checkpoint()?;
        write_slot(array, k, rest, sink)?;
        k += 1;
    }

    array.set_range_state(lo..hi, ElementState::Default);
    sink.progress((hi - lo) as f64 / array.len() as f64);

    Ok(())
}

fn write_slot(
    array: &mut SortArray,
    k: usize,
    element: Element,
    sink: &mut dyn StepSink,
) -> Result<(), Cancelled> {
    array.assign(k, element.with_state(ElementState::Swapping));
    sink.exchanged(element.value);
    sink.suspend(array, Pace::Step)
}
