pub(crate) mod constraints;
mod csp;
pub(crate) mod search;
pub(crate) mod termination;
pub(crate) mod variables;

pub use csp::Csp;
