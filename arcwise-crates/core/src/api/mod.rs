pub(crate) mod outputs;

pub mod results {
    //! Contains the outputs of a [`BacktrackingSearch`](crate::search::BacktrackingSearch).
    pub use crate::api::outputs::SatisfactionResult;
    pub use crate::basic_types::Solution;
}

pub mod variables {
    //! Contains the variables of a [`Csp`](crate::Csp).
    //!
    //! Every variable has a fixed domain-of-record and a current domain, which is the part of the
    //! domain-of-record that has not been pruned. Once a variable is assigned, its current domain
    //! consists of the assigned value only.
    pub use crate::engine::variables::Domain;
    pub use crate::engine::variables::Value;
    pub use crate::engine::variables::Variable;
    pub use crate::engine::variables::VariableId;
}

pub mod constraints {
    //! Contains the table constraints of a [`Csp`](crate::Csp).
    pub use crate::engine::constraints::ConstraintId;
    pub use crate::engine::constraints::TableConstraint;
}

pub mod propagation {
    //! Contains the propagation strategies which can be run after every decision.
    //!
    //! Every strategy removes values from the current domains and reports each of them as a
    //! [`Pruning`]; the caller restores them when the decision is retracted.
    pub use crate::basic_types::Pruning;
    pub use crate::propagators::PropagationOutcome;
    pub use crate::propagators::PropagationStatus;
    pub use crate::propagators::PropagationStrategy;
}

pub mod search {
    //! Contains the search which solves a [`Csp`](crate::Csp).
    pub use crate::engine::search::BacktrackingSearch;
    pub use crate::engine::search::SearchStatistics;
}

pub mod options {
    //! Contains the options of the [`BacktrackingSearch`](crate::search::BacktrackingSearch).
    pub use crate::branching::value_selection::ValueOrdering;
    pub use crate::branching::variable_selection::VariableOrdering;
    pub use crate::engine::search::SearchOptions;
    pub use crate::propagators::PropagationStrategy;
}

pub mod termination {
    //! Contains the conditions which make the search give up before the problem has been decided.
    //!
    //! The [`TerminationCondition`] is polled by the search after every decision. The most common
    //! example is [`TimeBudget`], which stops the search once the time budget is exceeded.
    pub use crate::engine::termination::Combinator;
    pub use crate::engine::termination::DecisionBudget;
    pub use crate::engine::termination::Indefinite;
    pub use crate::engine::termination::TerminationCondition;
    pub use crate::engine::termination::TimeBudget;
}

#[doc(hidden)]
pub mod asserts {
    pub use crate::arcwise_assert_advanced;
    pub use crate::arcwise_assert_moderate;
    pub use crate::arcwise_assert_simple;
    pub use crate::arcwise_asserts::ARCWISE_ASSERT_ADVANCED;
    pub use crate::arcwise_asserts::ARCWISE_ASSERT_LEVEL_DEFINITION;
    pub use crate::arcwise_asserts::ARCWISE_ASSERT_MODERATE;
    pub use crate::arcwise_asserts::ARCWISE_ASSERT_SIMPLE;
}
