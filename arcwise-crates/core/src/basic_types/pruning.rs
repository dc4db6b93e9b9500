use std::fmt::Display;
use std::fmt::Formatter;

use crate::engine::variables::Value;
use crate::engine::variables::VariableId;

/// The removal of `value` from the current domain of `variable`.
///
/// Propagators report every removal they make as a [`Pruning`]; the caller owns the
/// responsibility of restoring them (see [`Csp::undo_prunings`](crate::Csp::undo_prunings)) when
/// it retracts the decision which caused them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Pruning {
    pub variable: VariableId,
    pub value: Value,
}

impl Pruning {
    pub fn new(variable: VariableId, value: Value) -> Self {
        Pruning { variable, value }
    }
}

impl Display for Pruning {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} != {}", self.variable, self.value)
    }
}

/// A pruning emptied the current domain of a variable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct EmptyDomain(pub(crate) VariableId);
