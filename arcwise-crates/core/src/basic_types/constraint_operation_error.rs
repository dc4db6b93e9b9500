use thiserror::Error;

use crate::engine::variables::VariableId;

/// Errors related to adding constraints to a [`Csp`](crate::Csp).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConstraintOperationError {
    /// The scope of the constraint refers to a variable which does not belong to the problem.
    #[error("constraint '{constraint}' refers to the unknown variable {variable}")]
    UnknownVariable {
        constraint: String,
        variable: VariableId,
    },
    /// A variable appears more than once in the scope of the constraint.
    #[error("variable {variable} appears more than once in the scope of '{constraint}'")]
    DuplicateVariable {
        constraint: String,
        variable: VariableId,
    },
    /// The scope of the constraint is empty.
    #[error("constraint '{0}' has an empty scope")]
    EmptyScope(String),
    /// A satisfying tuple does not have one value for every variable in the scope.
    #[error("constraint '{constraint}' has arity {arity} but was given a tuple of length {length}")]
    ArityMismatch {
        constraint: String,
        arity: usize,
        length: usize,
    },
}
