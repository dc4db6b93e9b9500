mod constraint_operation_error;
mod pruning;
mod solution;
mod trail;

pub use constraint_operation_error::ConstraintOperationError;
pub(crate) use pruning::EmptyDomain;
pub use pruning::Pruning;
pub use solution::Solution;
pub(crate) use trail::Trail;
