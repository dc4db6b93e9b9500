use crate::basic_types::Solution;
#[cfg(doc)]
use crate::engine::search::BacktrackingSearch;
#[cfg(doc)]
use crate::termination::TerminationCondition;

/// The result of a call to [`BacktrackingSearch::solve`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SatisfactionResult {
    /// A solution was found; it is a snapshot, the problem itself is left unassigned.
    Satisfiable(Solution),
    /// There is no solution to the problem.
    Unsatisfiable,
    /// It is not known whether a solution exists, because the [`TerminationCondition`] triggered.
    Unknown,
}

impl SatisfactionResult {
    pub fn solution(&self) -> Option<&Solution> {
        match self {
            SatisfactionResult::Satisfiable(solution) => Some(solution),
            SatisfactionResult::Unsatisfiable | SatisfactionResult::Unknown => None,
        }
    }
}
