use super::VariableSelector;
use crate::engine::variables::VariableId;
use crate::Csp;

/// A [`VariableSelector`] which selects the unassigned variable with the fewest values left in its
/// current domain (also known as first-fail).
///
/// Ties are broken in favour of the variable which was created first.
#[derive(Debug, Default, Clone, Copy)]
pub struct MinimumRemainingValues;

impl VariableSelector for MinimumRemainingValues {
    fn select_variable(&mut self, csp: &Csp) -> Option<VariableId> {
        select_mrv(csp)
    }
}

/// Returns the unassigned variable with the smallest current domain, or [`None`] if every variable
/// is assigned.
pub fn select_mrv(csp: &Csp) -> Option<VariableId> {
    // `min_by_key` keeps the first of several minimal elements.
    csp.unassigned_variables()
        .min_by_key(|&variable| csp.variable(variable).current_domain_size())
}
