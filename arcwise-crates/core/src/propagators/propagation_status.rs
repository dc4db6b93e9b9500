use crate::basic_types::EmptyDomain;
use crate::basic_types::Pruning;
use crate::engine::constraints::ConstraintId;
use crate::engine::variables::VariableId;

/// The result of running a propagator internally. Every pruning made along the way is written to
/// a separate list, which is complete whether or not an inconsistency was found.
pub(crate) type PropagationStatusCP = Result<(), Inconsistency>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Inconsistency {
    EmptyDomain(VariableId),
    Violated(ConstraintId),
}

impl From<EmptyDomain> for Inconsistency {
    fn from(EmptyDomain(variable): EmptyDomain) -> Self {
        Inconsistency::EmptyDomain(variable)
    }
}

/// Whether propagation left the problem in a state from which search may continue.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PropagationStatus {
    Consistent,
    /// A fully assigned constraint is not satisfied by the assignment.
    Violated(ConstraintId),
    /// The current domain of the variable became empty.
    DomainWipeout(VariableId),
}

impl PropagationStatus {
    pub fn is_consistent(self) -> bool {
        matches!(self, PropagationStatus::Consistent)
    }
}

impl From<PropagationStatusCP> for PropagationStatus {
    fn from(status: PropagationStatusCP) -> Self {
        match status {
            Ok(()) => PropagationStatus::Consistent,
            Err(Inconsistency::EmptyDomain(variable)) => PropagationStatus::DomainWipeout(variable),
            Err(Inconsistency::Violated(constraint)) => PropagationStatus::Violated(constraint),
        }
    }
}

/// What a propagator reports back to the search: whether the problem is still consistent, and
/// every value it removed, in the order of removal.
///
/// The prunings are reported in both cases. Whoever retracts the decision that led to this call
/// has to restore each of them exactly once, see [`Csp::undo_prunings`](crate::Csp::undo_prunings).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PropagationOutcome {
    pub status: PropagationStatus,
    pub prunings: Vec<Pruning>,
}

impl PropagationOutcome {
    pub fn is_consistent(&self) -> bool {
        self.status.is_consistent()
    }
}
