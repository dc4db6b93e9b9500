use crate::engine::variables::Value;
use crate::engine::variables::VariableId;
use crate::Csp;

/// A trait containing the interface for [`ValueSelector`]s, which order the values of the variable
/// that the search branches on.
pub trait ValueSelector {
    /// Returns the values in the current domain of `decision_variable`, in the order in which they
    /// should be tried.
    ///
    /// The problem is handed over mutably so that implementations can try out assignments, but it
    /// has to be returned in exactly the state in which it was received.
    fn order_values(&mut self, csp: &mut Csp, decision_variable: VariableId) -> Vec<Value>;
}
