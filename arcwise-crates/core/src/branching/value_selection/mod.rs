//! Provides the [`ValueSelector`] trait and the value orderings available to the search.
mod in_domain_order;
mod least_constraining_value;
mod value_ordering;
mod value_selector;

pub use in_domain_order::*;
pub use least_constraining_value::*;
pub use value_ordering::*;
pub use value_selector::ValueSelector;
