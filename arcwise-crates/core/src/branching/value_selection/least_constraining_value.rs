use log::trace;

use super::ValueSelector;
use crate::arcwise_assert_advanced;
use crate::arcwise_assert_simple;
use crate::asserts::ARCWISE_ASSERT_ADVANCED;
use crate::asserts::ARCWISE_ASSERT_LEVEL_DEFINITION;
use crate::basic_types::Pruning;
use crate::engine::variables::Value;
use crate::engine::variables::VariableId;
use crate::Csp;

/// [`ValueSelector`] which tries the values that rule out the fewest values of the other
/// unassigned variables first.
///
/// See [`order_lcv`].
#[derive(Debug, Default, Clone, Copy)]
pub struct LeastConstrainingValue;

impl ValueSelector for LeastConstrainingValue {
    fn order_values(&mut self, csp: &mut Csp, decision_variable: VariableId) -> Vec<Value> {
        order_lcv(csp, decision_variable)
    }
}

/// Orders the current domain of the unassigned `variable` by the number of values which each of
/// them would rule out, ascending. Ties keep the order of the current domain.
///
/// A value `w` of another unassigned variable `u` is ruled out by `variable = v` if `w` has a
/// support in some constraint on both `variable` and `u` before the assignment, and none after.
/// While scoring `v`, every ruled out value is removed from `u` so that the following constraints
/// only count it once. All of these removals are restored before the next value is scored, so the
/// problem is left exactly as it was found.
pub fn order_lcv(csp: &mut Csp, variable: VariableId) -> Vec<Value> {
    arcwise_assert_simple!(
        !csp.variable(variable).is_assigned(),
        "cannot order the values of the assigned variable {}",
        csp.variable(variable).name()
    );

    let snapshot = (ARCWISE_ASSERT_LEVEL_DEFINITION >= ARCWISE_ASSERT_ADVANCED)
        .then(|| csp.variables.clone());

    let mut scores = score_values(csp, variable);
    scores.sort_by_key(|&(_, num_ruled_out)| num_ruled_out);

    if let Some(snapshot) = snapshot {
        arcwise_assert_advanced!(
            snapshot == csp.variables,
            "ordering the values of {} changed the problem",
            csp.variable(variable).name()
        );
    }

    scores.into_iter().map(|(value, _)| value).collect()
}

/// Every value of the current domain of `variable` with the number of values it rules out, in the
/// order of the current domain.
fn score_values(csp: &mut Csp, variable: VariableId) -> Vec<(Value, usize)> {
    let candidates = csp.variable(variable).current_domain().collect::<Vec<_>>();
    let constraints = csp.constraints_with(variable).to_vec();

    let mut provisional = Vec::new();
    let mut scores = Vec::with_capacity(candidates.len());

    for candidate in candidates {
        let mut num_ruled_out = 0;

        for &constraint_id in &constraints {
            let constraint = &csp.constraints[constraint_id];

            for &other in constraint.scope() {
                if other == variable || csp.variables[other].is_assigned() {
                    continue;
                }

                let values = csp.variables[other].current_domain().collect::<Vec<_>>();
                for value in values {
                    let supported_before = constraint.has_support(&csp.variables, other, value);
                    csp.variables[variable].assign(candidate);
                    let supported_after = constraint.has_support(&csp.variables, other, value);
                    csp.variables[variable].unassign();

                    if supported_before && !supported_after {
                        csp.variables[other].prune(value);
                        provisional.push(Pruning::new(other, value));
                        num_ruled_out += 1;
                    }
                }
            }
        }

        trace!(
            "{} = {candidate} rules out {num_ruled_out} values",
            csp.variable(variable).name()
        );
        csp.undo_prunings(&provisional);
        provisional.clear();
        scores.push((candidate, num_ruled_out));
    }

    scores
}
