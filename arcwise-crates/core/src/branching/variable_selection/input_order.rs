use super::VariableSelector;
use crate::engine::variables::VariableId;
use crate::Csp;

/// A [`VariableSelector`] which selects the first unassigned variable in the order in which the
/// variables were created.
#[derive(Debug, Default, Clone, Copy)]
pub struct InputOrder;

impl VariableSelector for InputOrder {
    fn select_variable(&mut self, csp: &Csp) -> Option<VariableId> {
        csp.unassigned_variables().next()
    }
}
