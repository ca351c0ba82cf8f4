use crate::core::actions::cancellation::Cancelled;
use crate::core::actions::step_sink::{Pace, StepSink, finale_tone};
use crate::core::algorithms::factory::algorithm_factory;
use crate::core::algorithms::kinds::AlgorithmKind;
use crate::core::data::element::ElementState;
use crate::core::data::sort_array::SortArray;

/// Only every k-th element of the finalization pass waits a full frame.
pub const FINALE_FRAME_STRIDE: usize = 3;

/// Runs `kind` over `array` and, if it was not cancelled, the
/// finalization pass.
pub fn run_algorithm(
    kind: AlgorithmKind,
    array: &mut SortArray,
    sink: &mut dyn StepSink,
) -> Result<(), Cancelled> {
    let algorithm = algorithm_factory(kind);
    algorithm.sort(array, sink)?;
    mark_all_sorted(array, sink)
}

pub fn mark_all_sorted(array: &mut SortArray, sink: &mut dyn StepSink) -> Result<(), Cancelled> {
    for i in 0..array.len() {
        sink.checkpoint()?;

        array.set_state(i, ElementState::Sorted);
        sink.tone(finale_tone(array.value(i)));

        if i % FINALE_FRAME_STRIDE == 0 {
            sink.suspend(array, Pace::Finale)?;
        }
    }

    sink.progress(1.0);
    sink.suspend(array, Pace::Finale)
}
