use super::InputOrder;
use super::MinimumRemainingValues;
use super::VariableSelector;
use crate::engine::variables::VariableId;
use crate::Csp;

/// The variable orderings which can be chosen when configuring the search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum VariableOrdering {
    /// See [`InputOrder`].
    #[cfg_attr(feature = "clap", value(name = "input-order"))]
    InputOrder,
    /// See [`MinimumRemainingValues`].
    #[default]
    #[cfg_attr(feature = "clap", value(name = "mrv"))]
    MinimumRemainingValues,
}

impl VariableSelector for VariableOrdering {
    fn select_variable(&mut self, csp: &Csp) -> Option<VariableId> {
        match self {
            VariableOrdering::InputOrder => InputOrder.select_variable(csp),
            VariableOrdering::MinimumRemainingValues => {
                MinimumRemainingValues.select_variable(csp)
            }
        }
    }
}
