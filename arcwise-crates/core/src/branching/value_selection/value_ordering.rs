use super::InDomainOrder;
use super::LeastConstrainingValue;
use super::ValueSelector;
use crate::engine::variables::Value;
use crate::engine::variables::VariableId;
use crate::Csp;

/// The value orderings which can be chosen when configuring the search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum ValueOrdering {
    /// See [`InDomainOrder`].
    #[cfg_attr(feature = "clap", value(name = "in-domain-order"))]
    InDomainOrder,
    /// See [`LeastConstrainingValue`].
    #[default]
    #[cfg_attr(feature = "clap", value(name = "lcv"))]
    LeastConstrainingValue,
}

impl ValueSelector for ValueOrdering {
    fn order_values(&mut self, csp: &mut Csp, decision_variable: VariableId) -> Vec<Value> {
        match self {
            ValueOrdering::InDomainOrder => InDomainOrder.order_values(csp, decision_variable),
            ValueOrdering::LeastConstrainingValue => {
                LeastConstrainingValue.order_values(csp, decision_variable)
            }
        }
    }
}
