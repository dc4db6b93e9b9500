use super::ValueSelector;
use crate::engine::variables::Value;
use crate::engine::variables::VariableId;
use crate::Csp;

/// [`ValueSelector`] which tries the values in the order of the domain-of-record.
#[derive(Debug, Default, Clone, Copy)]
pub struct InDomainOrder;

impl ValueSelector for InDomainOrder {
    fn order_values(&mut self, csp: &mut Csp, decision_variable: VariableId) -> Vec<Value> {
        csp.variable(decision_variable).current_domain().collect()
    }
}
