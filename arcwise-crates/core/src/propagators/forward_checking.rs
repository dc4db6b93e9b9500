use log::trace;

use super::PropagationStatusCP;
use crate::arcwise_assert_moderate;
use crate::basic_types::EmptyDomain;
use crate::basic_types::Pruning;
use crate::engine::constraints::ConstraintId;
use crate::engine::variables::Value;
use crate::engine::variables::VariableId;
use crate::Csp;

/// Forward checking: every constraint with exactly one unassigned variable in its scope loses the
/// values of that variable which cannot complete the current assignment.
///
/// Before the first assignment only the unary constraints are checked. After an assignment, the
/// constraints on the newly assigned variable which are left with a single unassigned variable are
/// checked. Propagation stops at the first domain wipe-out.
pub(crate) fn propagate_forward_checking(
    csp: &mut Csp,
    newly_assigned: Option<VariableId>,
    prunings: &mut Vec<Pruning>,
) -> PropagationStatusCP {
    match newly_assigned {
        None => {
            for constraint_id in csp.constraint_ids() {
                let constraint = &csp.constraints[constraint_id];
                if constraint.arity() == 1 {
                    let last_variable = constraint.scope()[0];
                    forward_check(csp, constraint_id, last_variable, prunings)?;
                }
            }
        }
        Some(variable) => {
            let constraints = csp.constraints_with(variable).to_vec();
            for constraint_id in constraints {
                let unassigned = csp.constraints[constraint_id]
                    .unassigned_in_scope(&csp.variables)
                    .collect::<Vec<_>>();

                if let [last_variable] = unassigned[..] {
                    forward_check(csp, constraint_id, last_variable, prunings)?;
                }
            }
        }
    }

    Ok(())
}

/// Prunes every value of `last_variable` which, together with the values of the other (assigned)
/// variables in the scope, does not satisfy the constraint.
fn forward_check(
    csp: &mut Csp,
    constraint_id: ConstraintId,
    last_variable: VariableId,
    prunings: &mut Vec<Pruning>,
) -> Result<(), EmptyDomain> {
    let constraint = &csp.constraints[constraint_id];
    let Some(position) = constraint.position_of(last_variable) else {
        panic!("{last_variable} is not part of '{}'", constraint.name());
    };

    let mut tuple = constraint
        .scope()
        .iter()
        .map(|&variable| csp.variables[variable].assigned_value())
        .collect::<Vec<Option<Value>>>();
    arcwise_assert_moderate!(tuple
        .iter()
        .enumerate()
        .all(|(index, value)| index == position || value.is_some()));

    let candidates = csp.variables[last_variable]
        .current_domain()
        .collect::<Vec<_>>();
    let mut values = vec![0; tuple.len()];
    for value in candidates {
        tuple[position] = Some(value);
        for (slot, assigned) in values.iter_mut().zip(&tuple) {
            *slot = assigned.unwrap_or_default();
        }

        if !constraint.check(&values) {
            trace!(
                "'{}' prunes {value} from {}",
                constraint.name(),
                csp.variables[last_variable].name()
            );
            csp.variables[last_variable].prune(value);
            prunings.push(Pruning::new(last_variable, value));
        }
    }

    if csp.variables[last_variable].current_domain_size() == 0 {
        trace!("Domain wipe-out of {}", csp.variables[last_variable].name());
        return Err(EmptyDomain(last_variable));
    }

    Ok(())
}
