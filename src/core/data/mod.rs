pub mod custom_input;
pub mod element;
pub mod sort_array;

pub use element::{Element, ElementState};
pub use sort_array::{SortArray, SortArrayError};
