use crate::core::algorithms::kinds::AlgorithmKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Complexity {
    pub time: &'static str,
    pub space: &'static str,
}

#[must_use]
pub const fn complexity(kind: AlgorithmKind) -> Complexity {
    let (time, space) = match kind {
        AlgorithmKind::Bubble => ("O(n²)", "O(1)"),
        AlgorithmKind::Selection => ("O(n²)", "O(1)"),
        AlgorithmKind::Insertion => ("O(n²)", "O(1)"),
        AlgorithmKind::Merge => ("O(n log n)", "O(n)"),
        AlgorithmKind::Quick => ("O(n log n)", "O(log n)"),
        AlgorithmKind::Heap => ("O(n log n)", "O(1)"),
        AlgorithmKind::Radix => ("O(nk)", "O(n+k)"),
        AlgorithmKind::Counting => ("O(n+k)", "O(k)"),
    };

    Complexity { time, space }
}
