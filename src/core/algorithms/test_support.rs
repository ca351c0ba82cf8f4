use crate::core::actions::cancellation::NeverCancel;
use crate::core::actions::headless::HeadlessSink;
use crate::core::algorithms::sort_algorithm::SortAlgorithm;
use crate::core::data::sort_array::SortArray;
use crate::core::metrics::tracker::MetricsTracker;

/// Runs one algorithm without the finalization pass.
pub fn sort_values(algorithm: &dyn SortAlgorithm, values: &[u32]) -> (SortArray, MetricsTracker) {
    let mut array = SortArray::from_values(values);
    let mut sink = HeadlessSink::new(algorithm.kind(), NeverCancel);
    algorithm
        .sort(&mut array, &mut sink)
        .expect("NeverCancel runs complete");
    let metrics = sink.metrics().clone();
    (array, metrics)
}

pub fn sorted_copy(values: &[u32]) -> Vec<u32> {
    let mut expected = values.to_vec();
    expected.sort_unstable();
    expected
}
