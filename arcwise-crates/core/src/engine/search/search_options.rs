use crate::branching::value_selection::ValueOrdering;
use crate::branching::variable_selection::VariableOrdering;
use crate::propagators::PropagationStrategy;

/// The configuration of a [`BacktrackingSearch`](super::BacktrackingSearch).
///
/// The default is generalised arc consistency with minimum-remaining-values and
/// least-constraining-value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchOptions {
    pub propagation: PropagationStrategy,
    pub variable_ordering: VariableOrdering,
    pub value_ordering: ValueOrdering,
}
