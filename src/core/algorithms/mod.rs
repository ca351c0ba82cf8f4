pub mod bubble;
pub mod counting;
pub mod factory;
pub mod heap;
pub mod info;
pub mod insertion;
pub mod kinds;
pub mod merge;
pub mod quick;
pub mod radix;
pub mod selection;
pub mod sort_algorithm;

#[cfg(test)]
mod properties;
#[cfg(test)]
mod test_support;

pub use factory::algorithm_factory;
pub use kinds::{AlgorithmKind, ExchangeLabel};
pub use sort_algorithm::SortAlgorithm;
