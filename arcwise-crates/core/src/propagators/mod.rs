//! The propagators which are run after every decision of the search.
//!
//! A propagator inspects the current domains and the assignment, removes values which cannot be
//! part of a solution extending the current assignment, and reports whether search may continue.
//! Every removed value is reported as a [`Pruning`] so that the caller can restore it when the
//! decision is retracted; propagators never restore values themselves.
//!
//! Three levels of propagation are provided, see [`PropagationStrategy`]:
//! - [`PropagationStrategy::BacktrackingCheck`] only checks fully assigned constraints;
//! - [`PropagationStrategy::ForwardChecking`] prunes constraints with one unassigned variable;
//! - [`PropagationStrategy::GeneralisedArcConsistency`] prunes until every value has a support.
mod backtracking_check;
mod forward_checking;
mod generalised_arc_consistency;
mod propagation_status;

use std::fmt::Display;
use std::fmt::Formatter;

use backtracking_check::propagate_backtracking_check;
use forward_checking::propagate_forward_checking;
use generalised_arc_consistency::propagate_generalised_arc_consistency;
use log::debug;
pub(crate) use propagation_status::Inconsistency;
pub use propagation_status::PropagationOutcome;
pub use propagation_status::PropagationStatus;
pub(crate) use propagation_status::PropagationStatusCP;

use crate::basic_types::Pruning;
use crate::engine::variables::VariableId;
use crate::Csp;

/// The level of propagation applied by the search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum PropagationStrategy {
    /// Check the constraints which became fully assigned; never prune.
    #[cfg_attr(feature = "clap", value(name = "bt"))]
    BacktrackingCheck,
    /// Prune the last unassigned variable of every constraint on the assigned variable.
    #[cfg_attr(feature = "clap", value(name = "fc"))]
    ForwardChecking,
    /// Enforce generalised arc consistency on every constraint affected by the assignment.
    #[default]
    #[cfg_attr(feature = "clap", value(name = "gac"))]
    GeneralisedArcConsistency,
}

impl PropagationStrategy {
    /// Propagates `csp` after `newly_assigned` received its value, or before the first decision
    /// when `newly_assigned` is [`None`].
    ///
    /// The values removed from the current domains are listed in the outcome in the order in which
    /// they were removed, also when an inconsistency was found.
    pub fn propagate(
        &self,
        csp: &mut Csp,
        newly_assigned: Option<VariableId>,
    ) -> PropagationOutcome {
        let mut prunings = Vec::new();
        let status = self.propagate_into(csp, newly_assigned, &mut prunings);

        debug!(
            "{self} after {}: {status:?} with {} prunings",
            newly_assigned.map_or_else(|| "root".to_owned(), |variable| variable.to_string()),
            prunings.len()
        );

        PropagationOutcome {
            status: status.into(),
            prunings,
        }
    }

    pub(crate) fn propagate_into(
        &self,
        csp: &mut Csp,
        newly_assigned: Option<VariableId>,
        prunings: &mut Vec<Pruning>,
    ) -> PropagationStatusCP {
        match self {
            PropagationStrategy::BacktrackingCheck => {
                propagate_backtracking_check(csp, newly_assigned, prunings)
            }
            PropagationStrategy::ForwardChecking => {
                propagate_forward_checking(csp, newly_assigned, prunings)
            }
            PropagationStrategy::GeneralisedArcConsistency => {
                propagate_generalised_arc_consistency(csp, newly_assigned, prunings)
            }
        }
    }
}

impl Display for PropagationStrategy {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            PropagationStrategy::BacktrackingCheck => write!(f, "BT"),
            PropagationStrategy::ForwardChecking => write!(f, "FC"),
            PropagationStrategy::GeneralisedArcConsistency => write!(f, "GAC"),
        }
    }
}
