use crate::engine::variables::VariableId;
use crate::Csp;

/// A trait containing the interface for [`VariableSelector`]s, which decide on which variable the
/// search branches next.
pub trait VariableSelector {
    /// Determines which variable to select next if there are any left to branch on.
    ///
    /// Should only return [`None`] when every variable of `csp` has been assigned.
    fn select_variable(&mut self, csp: &Csp) -> Option<VariableId>;
}
