use crate::containers::KeyedVec;
use crate::engine::variables::Value;
use crate::engine::variables::VariableId;

/// A complete assignment of the variables of a [`Csp`](crate::Csp), taken as a snapshot so that it
/// outlives the search which found it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Solution {
    values: KeyedVec<VariableId, Value>,
}

impl Solution {
    pub(crate) fn new(values: KeyedVec<VariableId, Value>) -> Self {
        Solution { values }
    }

    pub fn num_variables(&self) -> usize {
        self.values.len()
    }

    /// The value of `variable` in this solution.
    ///
    /// # Panics
    /// If `variable` does not belong to the problem which was solved.
    pub fn value(&self, variable: VariableId) -> Value {
        self.values[variable]
    }

    pub fn iter(&self) -> impl Iterator<Item = (VariableId, Value)> + '_ {
        self.values.keys().zip(self.values.iter().copied())
    }
}
