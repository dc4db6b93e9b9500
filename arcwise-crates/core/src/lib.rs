//! # Arcwise
//! Arcwise is a library for solving finite-domain constraint satisfaction problems whose
//! constraints are given in extension, as tables of satisfying tuples.
//!
//! A [`Csp`] is built by creating variables with [`Csp::new_variable`] and adding table
//! constraints with [`Csp::add_constraint`]. It is then solved by a
//! [`BacktrackingSearch`](search::BacktrackingSearch), which interleaves decisions with one of
//! three levels of [propagation](propagation::PropagationStrategy) and is guided by the heuristics
//! in [`branching`].
//!
//! ```rust
//! # use arcwise_core::Csp;
//! # use arcwise_core::results::SatisfactionResult;
//! # use arcwise_core::search::BacktrackingSearch;
//! # use arcwise_core::termination::Indefinite;
//! let mut csp = Csp::new("example");
//! let x = csp.new_variable("x", 1..=3);
//! let y = csp.new_variable("y", 1..=3);
//! // x + y = 5
//! csp.add_constraint("sum", [x, y], [[2, 3], [3, 2]])
//!     .expect("the scope is valid");
//!
//! let mut search = BacktrackingSearch::default();
//! let result = search.solve(&mut csp, &mut Indefinite);
//!
//! let SatisfactionResult::Satisfiable(solution) = result else {
//!     panic!("the problem has a solution");
//! };
//! assert_eq!(5, solution.value(x) + solution.value(y));
//! ```
pub(crate) mod arcwise_asserts;
pub(crate) mod basic_types;
pub mod branching;
pub mod containers;
pub(crate) mod engine;
pub(crate) mod propagators;
pub mod statistics;

pub use convert_case;

// A private module with public uses, so that everything in the API is exported directly from the
// crate.
mod api;

pub use api::*;

pub use crate::basic_types::ConstraintOperationError;
pub use crate::engine::Csp;
