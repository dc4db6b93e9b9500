use crate::arcwise_assert_moderate;
use crate::containers::HashMap;
use crate::containers::HashSet;
use crate::containers::KeyedVec;
use crate::engine::variables::Value;
use crate::engine::variables::Variable;
use crate::engine::variables::VariableId;

/// A constraint over an ordered scope, given by the set of tuples which satisfy it.
///
/// The `i`-th value of a tuple is the value of the `i`-th variable of the scope. Besides the
/// tuples themselves, the constraint keeps an index from every `(scope position, value)` pair to
/// the tuples which contain it, so that support queries only look at the relevant tuples.
///
/// Constraints are immutable once they are part of a [`Csp`](crate::Csp); the queries which depend
/// on the search state take the variables of the problem as an argument.
#[derive(Clone, Debug)]
pub struct TableConstraint {
    name: String,
    scope: Box<[VariableId]>,
    tuples: Vec<Box<[Value]>>,
    tuple_set: HashSet<Box<[Value]>>,
    supports: HashMap<(usize, Value), Vec<usize>>,
}

impl TableConstraint {
    /// Creates the constraint; the caller is responsible for validating the scope and the arity of
    /// the tuples. Duplicate tuples are only stored once.
    pub(crate) fn new(
        name: String,
        scope: Box<[VariableId]>,
        tuples: impl IntoIterator<Item = Box<[Value]>>,
    ) -> Self {
        let mut constraint = TableConstraint {
            name,
            scope,
            tuples: Vec::new(),
            tuple_set: HashSet::default(),
            supports: HashMap::default(),
        };

        for tuple in tuples {
            arcwise_assert_moderate!(tuple.len() == constraint.scope.len());
            if constraint.tuple_set.contains(&tuple) {
                continue;
            }

            let tuple_index = constraint.tuples.len();
            for (position, &value) in tuple.iter().enumerate() {
                constraint
                    .supports
                    .entry((position, value))
                    .or_default()
                    .push(tuple_index);
            }
            let _ = constraint.tuple_set.insert(tuple.clone());
            constraint.tuples.push(tuple);
        }

        constraint
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn scope(&self) -> &[VariableId] {
        &self.scope
    }

    pub fn arity(&self) -> usize {
        self.scope.len()
    }

    /// The satisfying tuples, in the order in which they were first given.
    pub fn tuples(&self) -> impl Iterator<Item = &[Value]> + '_ {
        self.tuples.iter().map(|tuple| &tuple[..])
    }

    pub fn num_tuples(&self) -> usize {
        self.tuples.len()
    }

    pub fn position_of(&self, variable: VariableId) -> Option<usize> {
        self.scope.iter().position(|&other| other == variable)
    }

    /// Returns true iff `tuple`, given positionally for the scope, satisfies the constraint.
    pub fn check(&self, tuple: &[Value]) -> bool {
        self.tuple_set.contains(tuple)
    }

    /// Returns true iff there is a satisfying tuple which assigns `value` to `variable` and whose
    /// other values are all in the current domains of their variables (for assigned variables:
    /// equal to the assigned value).
    pub fn has_support(
        &self,
        variables: &KeyedVec<VariableId, Variable>,
        variable: VariableId,
        value: Value,
    ) -> bool {
        let Some(position) = self.position_of(variable) else {
            panic!(
                "support for {variable} is requested from '{}' which does not contain it",
                self.name
            );
        };

        self.supports
            .get(&(position, value))
            .is_some_and(|tuple_indices| {
                tuple_indices
                    .iter()
                    .any(|&tuple_index| self.is_valid(variables, &self.tuples[tuple_index]))
            })
    }

    pub fn num_unassigned_in_scope(&self, variables: &KeyedVec<VariableId, Variable>) -> usize {
        self.unassigned_in_scope(variables).count()
    }

    pub fn unassigned_in_scope<'a>(
        &'a self,
        variables: &'a KeyedVec<VariableId, Variable>,
    ) -> impl Iterator<Item = VariableId> + 'a {
        self.scope
            .iter()
            .copied()
            .filter(|&variable| !variables[variable].is_assigned())
    }

    /// The assigned values of the scope, or [`None`] if part of the scope is unassigned.
    pub fn assigned_tuple(&self, variables: &KeyedVec<VariableId, Variable>) -> Option<Vec<Value>> {
        self.scope
            .iter()
            .map(|&variable| variables[variable].assigned_value())
            .collect()
    }

    fn is_valid(&self, variables: &KeyedVec<VariableId, Variable>, tuple: &[Value]) -> bool {
        self.scope
            .iter()
            .zip(tuple)
            .all(|(&variable, &value)| variables[variable].contains(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::variables::Domain;

    fn variables(num_variables: usize) -> KeyedVec<VariableId, Variable> {
        let mut variables = KeyedVec::default();
        for index in 0..num_variables {
            let _ = variables.push(Variable::new(format!("v{index}"), Domain::new(1..=3)));
        }
        variables
    }

    fn less_than(scope: [VariableId; 2]) -> TableConstraint {
        let tuples = (1..=3)
            .flat_map(|a| (1..=3).map(move |b| (a, b)))
            .filter(|(a, b)| a < b)
            .map(|(a, b)| vec![a, b].into_boxed_slice());
        TableConstraint::new("less_than".to_owned(), Box::new(scope), tuples)
    }

    #[test]
    fn check_is_positional() {
        let constraint = less_than([VariableId::new(0), VariableId::new(1)]);

        assert!(constraint.check(&[1, 2]));
        assert!(!constraint.check(&[2, 1]));
        assert!(!constraint.check(&[2, 2]));
    }

    #[test]
    fn support_respects_current_domains() {
        let mut variables = variables(2);
        let [x, y] = [VariableId::new(0), VariableId::new(1)];
        let constraint = less_than([x, y]);

        assert!(constraint.has_support(&variables, x, 1));
        assert!(!constraint.has_support(&variables, x, 3));

        variables[y].prune(3);
        assert!(!constraint.has_support(&variables, x, 2));
        assert!(constraint.has_support(&variables, x, 1));
    }

    #[test]
    fn support_respects_assignments() {
        let mut variables = variables(2);
        let [x, y] = [VariableId::new(0), VariableId::new(1)];
        let constraint = less_than([x, y]);

        variables[y].assign(2);

        assert!(constraint.has_support(&variables, x, 1));
        assert!(!constraint.has_support(&variables, x, 2));
        assert_eq!(vec![x], constraint.unassigned_in_scope(&variables).collect::<Vec<_>>());
        assert_eq!(None, constraint.assigned_tuple(&variables));

        variables[x].assign(1);
        assert_eq!(0, constraint.num_unassigned_in_scope(&variables));
        assert_eq!(Some(vec![1, 2]), constraint.assigned_tuple(&variables));
    }

    #[test]
    fn duplicate_tuples_are_stored_once() {
        let constraint = TableConstraint::new(
            "unary".to_owned(),
            Box::new([VariableId::new(0)]),
            [vec![1].into_boxed_slice(), vec![1].into_boxed_slice()],
        );

        assert_eq!(1, constraint.num_tuples());
        assert_eq!(1, constraint.arity());
    }
}
