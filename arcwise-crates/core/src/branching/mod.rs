//! Contains the heuristics which decide on which variable the search branches next, and in which
//! order the values of that variable are tried.
//!
//! A [`VariableSelector`] picks an unassigned variable, a [`ValueSelector`] orders the values in
//! its current domain. The search asks for a variable first and then for the values of that
//! variable; neither heuristic is allowed to leave the problem in a different state than it found
//! it.
pub mod value_selection;
pub mod variable_selection;

pub use value_selection::ValueSelector;
pub use variable_selection::VariableSelector;
