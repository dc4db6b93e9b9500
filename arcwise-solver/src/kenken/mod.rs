//! Models of KenKen puzzles as table-constraint problems.
//!
//! A KenKen puzzle of size `n` is an `n x n` grid which has to be filled with the values `1..=n`
//! such that every row and every column contains each value once. The grid is divided into cages;
//! the values in a cage, combined with the operation of the cage, have to yield its target.
//!
//! Every cell becomes a variable named `Var_{row}{column}` (1-based). The rows and columns are
//! constrained either pairwise with binary not-equal constraints or with one all-different
//! constraint per line, see [`GridEncoding`]. Every cage becomes a single table constraint.
mod error;
mod model;
mod operation;
mod puzzle;

pub use error::KenKenError;
pub use model::binary_not_equal_grid;
pub use model::kenken_model;
pub use model::nary_all_different_grid;
pub use model::Board;
pub use model::GridEncoding;
pub use operation::Operation;
pub use puzzle::Cage;
pub use puzzle::KenKenGrid;
