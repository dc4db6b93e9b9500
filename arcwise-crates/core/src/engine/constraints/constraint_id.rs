use std::fmt::Display;
use std::fmt::Formatter;

use crate::containers::StorageKey;

/// A handle to a [`TableConstraint`](super::TableConstraint) owned by a [`Csp`](crate::Csp).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ConstraintId {
    pub id: u32,
}

impl ConstraintId {
    pub const fn new(id: u32) -> Self {
        ConstraintId { id }
    }
}

impl StorageKey for ConstraintId {
    fn index(&self) -> usize {
        self.id as usize
    }

    fn create_from_index(index: usize) -> Self {
        ConstraintId::new(index as u32)
    }
}

impl Display for ConstraintId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "c{}", self.id)
    }
}
