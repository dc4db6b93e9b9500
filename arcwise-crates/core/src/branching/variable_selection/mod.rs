//! Provides the [`VariableSelector`] trait and the variable orderings available to the search.
mod input_order;
mod minimum_remaining_values;
mod variable_ordering;
mod variable_selector;

pub use input_order::*;
pub use minimum_remaining_values::*;
pub use variable_ordering::*;
pub use variable_selector::VariableSelector;
