use log::trace;

use super::Inconsistency;
use super::PropagationStatusCP;
use crate::basic_types::Pruning;
use crate::engine::variables::VariableId;
use crate::Csp;

/// Plain backtracking: never prunes, only checks the constraints on `newly_assigned` whose scope
/// has become fully assigned.
pub(crate) fn propagate_backtracking_check(
    csp: &mut Csp,
    newly_assigned: Option<VariableId>,
    _prunings: &mut Vec<Pruning>,
) -> PropagationStatusCP {
    let Some(variable) = newly_assigned else {
        return Ok(());
    };

    for &constraint_id in csp.constraints_with(variable) {
        let constraint = &csp.constraints[constraint_id];
        let Some(tuple) = constraint.assigned_tuple(&csp.variables) else {
            continue;
        };

        if !constraint.check(&tuple) {
            trace!("'{}' is violated by {tuple:?}", constraint.name());
            return Err(Inconsistency::Violated(constraint_id));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::propagators::test_problems::not_equal_chain;

    #[test]
    fn nothing_happens_before_the_first_assignment() {
        let (mut csp, _) = not_equal_chain(3, 1..=2);
        let mut prunings = Vec::new();

        let status = propagate_backtracking_check(&mut csp, None, &mut prunings);

        assert_eq!(Ok(()), status);
        assert!(prunings.is_empty());
    }

    #[test]
    fn partially_assigned_constraints_are_not_checked() {
        let (mut csp, variables) = not_equal_chain(3, 1..=2);
        csp.assign(variables[1], 1);
        let mut prunings = Vec::new();

        let status = propagate_backtracking_check(&mut csp, Some(variables[1]), &mut prunings);

        assert_eq!(Ok(()), status);
        assert!(prunings.is_empty());
        assert_eq!(2, csp.variable(variables[0]).current_domain_size());
    }

    #[test]
    fn violated_constraint_is_reported() {
        let (mut csp, variables) = not_equal_chain(3, 1..=2);
        csp.assign(variables[0], 1);
        csp.assign(variables[1], 1);
        let mut prunings = Vec::new();

        let status = propagate_backtracking_check(&mut csp, Some(variables[1]), &mut prunings);

        assert_eq!(
            Err(Inconsistency::Violated(csp.constraints_with(variables[0])[0])),
            status
        );
        assert!(prunings.is_empty());
    }
}
