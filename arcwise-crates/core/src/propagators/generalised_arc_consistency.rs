use log::trace;

use super::PropagationStatusCP;
use crate::basic_types::EmptyDomain;
use crate::basic_types::Pruning;
use crate::containers::UniqueQueue;
use crate::engine::constraints::ConstraintId;
use crate::engine::variables::VariableId;
use crate::Csp;

/// Generalised arc consistency: removes values until every remaining value of every variable has a
/// support in every constraint on that variable.
///
/// The worklist starts with every constraint before the first assignment, and with the constraints
/// on `newly_assigned` afterwards. Whenever a value is removed from a variable, every other
/// constraint on that variable is revisited. Propagation stops immediately at the first domain
/// wipe-out.
pub(crate) fn propagate_generalised_arc_consistency(
    csp: &mut Csp,
    newly_assigned: Option<VariableId>,
    prunings: &mut Vec<Pruning>,
) -> PropagationStatusCP {
    let mut queue = UniqueQueue::default();
    match newly_assigned {
        None => queue.extend(csp.constraint_ids()),
        Some(variable) => queue.extend(csp.constraints_with(variable).iter().copied()),
    }

    enforce(csp, &mut queue, prunings)?;
    Ok(())
}

fn enforce(
    csp: &mut Csp,
    queue: &mut UniqueQueue<ConstraintId>,
    prunings: &mut Vec<Pruning>,
) -> Result<(), EmptyDomain> {
    while let Some(constraint_id) = queue.pop() {
        let constraint = &csp.constraints[constraint_id];

        for &variable in constraint.scope() {
            let candidates = csp.variables[variable].current_domain().collect::<Vec<_>>();

            for value in candidates {
                if constraint.has_support(&csp.variables, variable, value) {
                    continue;
                }

                trace!(
                    "'{}' prunes {value} from {}",
                    constraint.name(),
                    csp.variables[variable].name()
                );
                csp.variables[variable].prune(value);
                prunings.push(Pruning::new(variable, value));

                if csp.variables[variable].current_domain_size() == 0 {
                    trace!("Domain wipe-out of {}", csp.variables[variable].name());
                    return Err(EmptyDomain(variable));
                }

                queue.extend(
                    csp.constraints_with[variable]
                        .iter()
                        .copied()
                        .filter(|&other| other != constraint_id),
                );
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::containers::HashSet;
    use crate::propagators::test_problems::not_equal_chain;
    use crate::propagators::Inconsistency;

    fn less_than_chain(num_variables: usize, upper_bound: i32) -> (Csp, Vec<VariableId>) {
        let mut csp = Csp::new("less_than_chain");
        let variables = (0..num_variables)
            .map(|index| csp.new_variable(format!("v{index}"), 1..=upper_bound))
            .collect::<Vec<_>>();
        let tuples = (1..=upper_bound)
            .flat_map(|a| (a + 1..=upper_bound).map(move |b| [a, b]))
            .collect::<Vec<_>>();
        for pair in variables.windows(2) {
            let _ = csp
                .add_constraint("less_than", [pair[0], pair[1]], tuples.iter())
                .expect("valid constraint");
        }
        (csp, variables)
    }

    fn assert_arc_consistent(csp: &Csp) {
        for constraint_id in csp.constraint_ids() {
            for &variable in csp.constraint(constraint_id).scope() {
                for value in csp.variable(variable).current_domain() {
                    assert!(
                        csp.has_support(constraint_id, variable, value),
                        "{variable} = {value} has no support in {constraint_id}"
                    );
                }
            }
        }
    }

    /// Restores every pruned value on its own and checks that some constraint on its variable still
    /// has no support for it.
    fn assert_prunings_unsupported(csp: &mut Csp, prunings: &[Pruning]) {
        for pruning in prunings {
            csp.unprune(pruning.variable, pruning.value);
            let refuted = csp
                .constraints_with(pruning.variable)
                .iter()
                .any(|&constraint| !csp.has_support(constraint, pruning.variable, pruning.value));
            assert!(refuted, "{pruning} was pruned while it is supported");
            csp.prune(pruning.variable, pruning.value);
        }
    }

    #[test]
    fn pruned_values_have_no_support() {
        let mut csp = Csp::new("sum");
        let x = csp.new_variable("x", 1..=4);
        let y = csp.new_variable("y", 1..=4);
        let z = csp.new_variable("z", 1..=4);
        let sums = (1..=4)
            .flat_map(|a| (1..=4).map(move |b| [a, b, a + b]))
            .filter(|tuple| tuple[2] <= 4)
            .collect::<Vec<_>>();
        let _ = csp
            .add_constraint("x + y = z", [x, y, z], sums.iter())
            .expect("valid constraint");
        let _ = csp
            .add_constraint("x < y", [x, y], [[1, 2], [1, 3], [1, 4], [2, 3], [2, 4], [3, 4]])
            .expect("valid constraint");

        let mut prunings = Vec::new();
        assert_eq!(
            Ok(()),
            propagate_generalised_arc_consistency(&mut csp, None, &mut prunings)
        );
        assert!(!prunings.is_empty());
        assert_prunings_unsupported(&mut csp, &prunings);

        csp.assign(z, 3);
        let mut after_assignment = Vec::new();
        assert_eq!(
            Ok(()),
            propagate_generalised_arc_consistency(&mut csp, Some(z), &mut after_assignment)
        );
        assert_eq!(
            vec![Pruning::new(x, 2), Pruning::new(y, 3)],
            after_assignment
        );
        assert_prunings_unsupported(&mut csp, &after_assignment);
        assert_prunings_unsupported(&mut csp, &prunings);
        assert_arc_consistent(&csp);
    }

    #[test]
    fn initial_pass_propagates_along_the_chain() {
        let (mut csp, variables) = less_than_chain(3, 3);
        let mut prunings = Vec::new();

        let status = propagate_generalised_arc_consistency(&mut csp, None, &mut prunings);

        assert_eq!(Ok(()), status);
        for (index, &variable) in variables.iter().enumerate() {
            assert_eq!(
                vec![index as i32 + 1],
                csp.variable(variable).current_domain().collect::<Vec<_>>()
            );
        }
        assert_eq!(6, prunings.len());
        assert_arc_consistent(&csp);
    }

    #[test]
    fn prunings_are_unique() {
        let (mut csp, _) = less_than_chain(4, 5);
        let mut prunings = Vec::new();

        let _ = propagate_generalised_arc_consistency(&mut csp, None, &mut prunings);

        let unique = prunings.iter().collect::<HashSet<_>>();
        assert_eq!(unique.len(), prunings.len());
    }

    #[test]
    fn assignment_is_propagated_transitively() {
        let (mut csp, variables) = not_equal_chain(3, 1..=2);
        let mut prunings = Vec::new();
        assert_eq!(
            Ok(()),
            propagate_generalised_arc_consistency(&mut csp, None, &mut prunings)
        );
        assert!(prunings.is_empty());

        csp.assign(variables[0], 1);
        let status =
            propagate_generalised_arc_consistency(&mut csp, Some(variables[0]), &mut prunings);

        assert_eq!(Ok(()), status);
        assert_eq!(
            vec![Pruning::new(variables[1], 1), Pruning::new(variables[2], 2)],
            prunings
        );
        assert_arc_consistent(&csp);
    }

    #[test]
    fn wipe_out_returns_the_prunings_made_so_far() {
        let (mut csp, variables) = less_than_chain(4, 3);
        let mut prunings = Vec::new();

        let status = propagate_generalised_arc_consistency(&mut csp, None, &mut prunings);

        let Err(Inconsistency::EmptyDomain(variable)) = status else {
            panic!("expected a wipe-out, got {status:?}");
        };
        assert!(variables.contains(&variable));
        assert_eq!(0, csp.variable(variable).current_domain_size());
        assert!(prunings.iter().any(|pruning| pruning.variable == variable));

        csp.undo_prunings(&prunings);
        for &variable in &variables {
            assert_eq!(3, csp.variable(variable).current_domain_size());
        }
    }

    #[test]
    fn unsupported_assigned_value_is_a_wipe_out() {
        let (mut csp, variables) = not_equal_chain(2, 1..=2);
        csp.assign(variables[0], 1);
        csp.assign(variables[1], 1);
        let mut prunings = Vec::new();

        let status =
            propagate_generalised_arc_consistency(&mut csp, Some(variables[1]), &mut prunings);

        assert_eq!(Err(Inconsistency::EmptyDomain(variables[0])), status);
        assert_eq!(vec![Pruning::new(variables[0], 1)], prunings);
    }

    #[test]
    fn second_pass_is_a_fixpoint() {
        let (mut csp, _) = less_than_chain(3, 5);
        let mut prunings = Vec::new();
        let _ = propagate_generalised_arc_consistency(&mut csp, None, &mut prunings);
        assert!(!prunings.is_empty());

        let mut second = Vec::new();
        let status = propagate_generalised_arc_consistency(&mut csp, None, &mut second);

        assert_eq!(Ok(()), status);
        assert!(second.is_empty());
    }
}
