use arcwise_core::ConstraintOperationError;
use thiserror::Error;

/// The reasons why a KenKen puzzle cannot be read or modelled.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum KenKenError {
    #[error("operation '{0}' is not supported, expected one of 0 (+), 1 (-), 2 (/) or 3 (*)")]
    UnsupportedOperation(String),

    #[error("cell ({row}, {column}) lies outside of the {size}x{size} grid")]
    CellOutOfBounds {
        row: usize,
        column: usize,
        size: usize,
    },

    #[error("cage {0} does not contain any cells")]
    EmptyCage(usize),

    #[error("the grid must contain at least one cell")]
    EmptyGrid,

    #[error("a grid of size {0} has values which do not fit in a cell")]
    GridTooLarge(usize),

    #[error("line {line}: {message}")]
    MalformedPuzzle { line: usize, message: String },

    #[error("failed to add a constraint to the model: {0}")]
    Constraint(#[from] ConstraintOperationError),
}
