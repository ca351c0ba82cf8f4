use crate::core::actions::cancellation::Cancelled;
use crate::core::actions::step_sink::{Pace, StepSink};
use crate::core::algorithms::kinds::AlgorithmKind;
use crate::core::algorithms::sort_algorithm::SortAlgorithm;
use crate::core::data::element::ElementState;
use crate::core::data::sort_array::SortArray;

/// LSD radix sort, one stable bucket pass per decimal digit.
#[derive(Debug, Clone, Copy, Default)]
pub struct RadixSort;

impl SortAlgorithm for RadixSort {
    fn kind(&self) -> AlgorithmKind {
        AlgorithmKind::Radix
    }

    fn sort(&self, array: &mut SortArray, sink: &mut dyn StepSink) -> Result<(), Cancelled> {
        let Some(max) = array.max_value() else {
            return Ok(());
        };
        let max = u64::from(max);
        let passes = digit_count(max);

        let mut exp: u64 = 1;
        let mut pass: u32 = 0;
        while max / exp > 0 {
            digit_pass(array, exp, sink)?;
            pass += 1;
            sink.progress(f64::from(pass) / f64::from(passes));
            exp *= 10;
        }

        Ok(())
    }
}

fn digit_count(mut value: u64) -> u32 {
    let mut digits = 0;
    while value > 0 {
        digits += 1;
        value /= 10;
    }
    digits.max(1)
}

fn digit(value: u32, exp: u64) -> usize {
    ((u64::from(value) / exp) % 10) as usize
}

fn digit_pass(array: &mut SortArray, exp: u64, sink: &mut dyn StepSink) -> Result<(), Cancelled> {
    sink.checkpoint()?;

    let n = array.len();
    let mut counts = [0usize; 10];

    for i in 0..n {
        sink.checkpoint()?;
        array.set_state(i, ElementState::Comparing);
        counts[digit(array.value(i), exp)] += 1;
        sink.compared();
        sink.suspend(array, Pace::Step)?;
    }

    for d in 1..10 {
        counts[d] += counts[d - 1];
    }

    // Walking back to front keeps equal digits in their current order.
    let mut output = array.elements().to_vec();
    for i in (0..n).rev() {
        sink.checkpoint()?;
        let element = array.get(i);
        let d = digit(element.value, exp);
        counts[d] -= 1;
        output[counts[d]] = element.with_state(ElementState::Swapping);
        sink.exchanged(element.value);
        sink.suspend(array, Pace::Step)?;
    }

    sink.checkpoint()?;
    for (i, element) in output.into_iter().enumerate() {
        array.assign(i, element.with_state(ElementState::Default));
    }
    sink.suspend(array, Pace::Step)
}
