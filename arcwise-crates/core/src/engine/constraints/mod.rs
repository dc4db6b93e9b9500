//! Constraints given in extension, as the table of tuples which satisfy them.
mod constraint_id;
mod table_constraint;

pub use constraint_id::ConstraintId;
pub use table_constraint::TableConstraint;
