use proptest::prelude::*;

use crate::core::algorithms::factory::algorithm_factory;
use crate::core::algorithms::kinds::AlgorithmKind;
use crate::core::algorithms::test_support::{sort_values, sorted_copy};

fn values_strategy() -> impl Strategy<Value = Vec<u32>> {
    prop::collection::vec(1u32..=300, 0..60)
}

fn kind_strategy() -> impl Strategy<Value = AlgorithmKind> {
    prop::sample::select(AlgorithmKind::ALL.to_vec())
}

fn log2_ceil(n: u64) -> u64 {
    if n <= 1 {
        0
    } else {
        u64::from(64 - (n - 1).leading_zeros())
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn every_algorithm_sorts_a_permutation(kind in kind_strategy(), values in values_strategy()) {
        let (array, _) = sort_values(algorithm_factory(kind).as_ref(), &values);

        prop_assert!(array.is_sorted());
        prop_assert_eq!(array.values(), sorted_copy(&values));
        prop_assert_eq!(array.len(), values.len());
    }

    #[test]
    fn quadratic_sorts_stay_within_pair_count(values in values_strategy()) {
        let n = values.len() as u64;
        let bound = n * n.saturating_sub(1) / 2;

        for kind in [
            AlgorithmKind::Bubble,
            AlgorithmKind::Selection,
            AlgorithmKind::Insertion,
            AlgorithmKind::Quick,
        ] {
            let (_, metrics) = sort_values(algorithm_factory(kind).as_ref(), &values);
            prop_assert!(metrics.comparisons() <= bound, "{kind}: {} > {bound}", metrics.comparisons());
            prop_assert!(metrics.exchanges() <= bound, "{kind}: {} > {bound}", metrics.exchanges());
        }
    }

    #[test]
    fn merge_and_heap_stay_within_n_log_n(values in values_strategy()) {
        let n = values.len() as u64;
        let log = log2_ceil(n);

        let (_, merge) = sort_values(algorithm_factory(AlgorithmKind::Merge).as_ref(), &values);
        prop_assert!(merge.comparisons() <= n * log);
        prop_assert!(merge.exchanges() <= n * log);

        let (_, heap) = sort_values(algorithm_factory(AlgorithmKind::Heap).as_ref(), &values);
        prop_assert!(heap.comparisons() <= 2 * n * (log + 1));
    }

    #[test]
    fn distribution_sorts_are_linear_per_pass(values in values_strategy()) {
        let n = values.len() as u64;

        let (_, counting) = sort_values(algorithm_factory(AlgorithmKind::Counting).as_ref(), &values);
        prop_assert_eq!(counting.comparisons(), n);
        prop_assert_eq!(counting.exchanges(), n);

        let (_, radix) = sort_values(algorithm_factory(AlgorithmKind::Radix).as_ref(), &values);
        prop_assert!(radix.comparisons() <= 3 * n);
        prop_assert_eq!(radix.comparisons(), radix.exchanges());
    }
}
