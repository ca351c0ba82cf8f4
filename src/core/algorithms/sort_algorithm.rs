use crate::core::actions::cancellation::Cancelled;
use crate::core::actions::step_sink::StepSink;
use crate::core::algorithms::kinds::AlgorithmKind;
use crate::core::data::sort_array::SortArray;

pub trait SortAlgorithm: Send + Sync {
    fn kind(&self) -> AlgorithmKind;

    fn sort(&self, array: &mut SortArray, sink: &mut dyn StepSink) -> Result<(), Cancelled>;
}
