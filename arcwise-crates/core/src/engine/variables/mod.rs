//! The variables of a constraint satisfaction problem and the store of their current domains.
mod domain;
mod variable;
mod variable_id;

pub use domain::Domain;
pub use variable::Variable;
pub use variable_id::VariableId;

/// The values taken by variables.
pub type Value = i32;
