//! # Arcwise solver
//! KenKen models on top of the [`arcwise_core`] table-constraint solver, and the `arcwise-solver`
//! binary which reads a puzzle file, solves it, and prints the completed grid.
//!
//! ```rust
//! # use arcwise_solver::core::results::SatisfactionResult;
//! # use arcwise_solver::core::search::BacktrackingSearch;
//! # use arcwise_solver::core::termination::Indefinite;
//! # use arcwise_solver::kenken::kenken_model;
//! # use arcwise_solver::kenken::GridEncoding;
//! # use arcwise_solver::kenken::KenKenGrid;
//! let puzzle = "3\n11 12 2 -\n".parse::<KenKenGrid>().expect("valid puzzle");
//! let (mut csp, board) = kenken_model(&puzzle, GridEncoding::BinaryNotEqual).expect("valid model");
//!
//! let result = BacktrackingSearch::default().solve(&mut csp, &mut Indefinite);
//! let SatisfactionResult::Satisfiable(solution) = result else {
//!     panic!("the puzzle has a solution");
//! };
//!
//! let grid = board.values(&solution);
//! assert_eq!(2, (grid[0][0] - grid[0][1]).abs());
//! ```
pub mod kenken;

pub use arcwise_core as core;
