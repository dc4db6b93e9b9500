use std::fmt::Display;
use std::fmt::Formatter;

use crate::containers::StorageKey;

/// A handle to a [`Variable`](super::Variable) owned by a [`Csp`](crate::Csp).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VariableId {
    pub id: u32,
}

impl VariableId {
    pub const fn new(id: u32) -> Self {
        VariableId { id }
    }
}

impl StorageKey for VariableId {
    fn index(&self) -> usize {
        self.id as usize
    }

    fn create_from_index(index: usize) -> Self {
        VariableId::new(index as u32)
    }
}

impl Display for VariableId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "x{}", self.id)
    }
}
