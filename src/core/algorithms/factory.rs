use crate::core::algorithms::{
    bubble::BubbleSort, counting::CountingSort, heap::HeapSort, insertion::InsertionSort,
    kinds::AlgorithmKind, merge::MergeSort, quick::QuickSort, radix::RadixSort,
    selection::SelectionSort, sort_algorithm::SortAlgorithm,
};

#[must_use]
pub fn algorithm_factory(kind: AlgorithmKind) -> Box<dyn SortAlgorithm> {
    match kind {
        AlgorithmKind::Bubble => Box::new(BubbleSort),
        AlgorithmKind::Selection => Box::new(SelectionSort),
        AlgorithmKind::Insertion => Box::new(InsertionSort),
        AlgorithmKind::Merge => Box::new(MergeSort),
        AlgorithmKind::Quick => Box::new(QuickSort),
        AlgorithmKind::Heap => Box::new(HeapSort),
        AlgorithmKind::Radix => Box::new(RadixSort),
        AlgorithmKind::Counting => Box::new(CountingSort),
    }
}
