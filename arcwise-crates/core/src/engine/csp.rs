use log::debug;

use super::constraints::ConstraintId;
use super::constraints::TableConstraint;
use super::variables::Domain;
use super::variables::Value;
use super::variables::Variable;
use super::variables::VariableId;
use crate::basic_types::ConstraintOperationError;
use crate::basic_types::Pruning;
use crate::basic_types::Solution;
use crate::containers::HashSet;
use crate::containers::KeyedVec;

/// A constraint satisfaction problem: the variables, the table constraints over them, and the
/// index from every variable to the constraints which mention it.
///
/// The problem owns all of its variables and constraints. The structure of the problem is fixed
/// once it is built; during search only the current domains and assignments of the variables
/// change, through [`Csp::assign`], [`Csp::unassign`], [`Csp::prune`] and [`Csp::unprune`].
#[derive(Clone, Debug, Default)]
pub struct Csp {
    name: String,
    pub(crate) variables: KeyedVec<VariableId, Variable>,
    pub(crate) constraints: KeyedVec<ConstraintId, TableConstraint>,
    pub(crate) constraints_with: KeyedVec<VariableId, Vec<ConstraintId>>,
}

impl Csp {
    pub fn new(name: impl Into<String>) -> Self {
        Csp {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Creates a new unassigned variable with the given domain-of-record.
    pub fn new_variable(
        &mut self,
        name: impl Into<String>,
        domain: impl IntoIterator<Item = Value>,
    ) -> VariableId {
        let variable = self
            .variables
            .push(Variable::new(name, Domain::new(domain)));
        let _ = self.constraints_with.push(Vec::new());
        variable
    }

    /// Adds a constraint over `scope` which is satisfied exactly by `tuples`.
    ///
    /// Tuples which use a value outside the domain-of-record of the corresponding variable can
    /// never be supported and are dropped.
    pub fn add_constraint<Tuple: AsRef<[Value]>>(
        &mut self,
        name: impl Into<String>,
        scope: impl IntoIterator<Item = VariableId>,
        tuples: impl IntoIterator<Item = Tuple>,
    ) -> Result<ConstraintId, ConstraintOperationError> {
        let name = name.into();
        let scope = scope.into_iter().collect::<Box<[VariableId]>>();

        if scope.is_empty() {
            return Err(ConstraintOperationError::EmptyScope(name));
        }

        let mut seen: HashSet<VariableId> = HashSet::default();
        for &variable in scope.iter() {
            if self.variables.get(variable).is_none() {
                return Err(ConstraintOperationError::UnknownVariable {
                    constraint: name,
                    variable,
                });
            }
            if !seen.insert(variable) {
                return Err(ConstraintOperationError::DuplicateVariable {
                    constraint: name,
                    variable,
                });
            }
        }

        let mut accepted = Vec::new();
        let mut num_dropped = 0;
        for tuple in tuples {
            let tuple = tuple.as_ref();
            if tuple.len() != scope.len() {
                return Err(ConstraintOperationError::ArityMismatch {
                    constraint: name,
                    arity: scope.len(),
                    length: tuple.len(),
                });
            }

            let is_in_record = scope
                .iter()
                .zip(tuple)
                .all(|(&variable, &value)| self.variables[variable].is_in_domain_of_record(value));
            if is_in_record {
                accepted.push(Box::<[Value]>::from(tuple));
            } else {
                num_dropped += 1;
            }
        }

        if num_dropped > 0 {
            debug!("Dropped {num_dropped} tuples of '{name}' which fall outside the domains");
        }

        let constraint_id = self.constraints.push(TableConstraint::new(
            name,
            scope.clone(),
            accepted,
        ));
        for &variable in scope.iter() {
            self.constraints_with[variable].push(constraint_id);
        }

        Ok(constraint_id)
    }

    pub fn num_variables(&self) -> usize {
        self.variables.len()
    }

    pub fn num_constraints(&self) -> usize {
        self.constraints.len()
    }

    pub fn variable(&self, variable: VariableId) -> &Variable {
        &self.variables[variable]
    }

    pub fn constraint(&self, constraint: ConstraintId) -> &TableConstraint {
        &self.constraints[constraint]
    }

    /// All variables, in the order in which they were created.
    pub fn variable_ids(&self) -> impl Iterator<Item = VariableId> {
        (0..self.variables.len() as u32).map(VariableId::new)
    }

    /// The variables without a value, in the order in which they were created.
    pub fn unassigned_variables(&self) -> impl Iterator<Item = VariableId> + '_ {
        self.variables
            .keys()
            .filter(|&variable| !self.variables[variable].is_assigned())
    }

    /// All constraints, in the order in which they were added.
    pub fn constraint_ids(&self) -> impl Iterator<Item = ConstraintId> {
        (0..self.constraints.len() as u32).map(ConstraintId::new)
    }

    /// The constraints whose scope contains `variable`, in the order in which they were added.
    pub fn constraints_with(&self, variable: VariableId) -> &[ConstraintId] {
        &self.constraints_with[variable]
    }

    pub fn variable_by_name(&self, name: &str) -> Option<VariableId> {
        self.variables
            .keys()
            .find(|&variable| self.variables[variable].name() == name)
    }

    pub fn has_support(&self, constraint: ConstraintId, variable: VariableId, value: Value) -> bool {
        self.constraints[constraint].has_support(&self.variables, variable, value)
    }

    pub fn num_unassigned_in_scope(&self, constraint: ConstraintId) -> usize {
        self.constraints[constraint].num_unassigned_in_scope(&self.variables)
    }

    pub fn is_fully_assigned(&self) -> bool {
        self.variables.iter().all(Variable::is_assigned)
    }

    pub fn assign(&mut self, variable: VariableId, value: Value) {
        self.variables[variable].assign(value)
    }

    pub fn unassign(&mut self, variable: VariableId) {
        self.variables[variable].unassign()
    }

    pub fn prune(&mut self, variable: VariableId, value: Value) {
        self.variables[variable].prune(value)
    }

    pub fn unprune(&mut self, variable: VariableId, value: Value) {
        self.variables[variable].unprune(value)
    }

    /// Restores the given prunings, most recent first.
    pub fn undo_prunings(&mut self, prunings: &[Pruning]) {
        for pruning in prunings.iter().rev() {
            self.unprune(pruning.variable, pruning.value);
        }
    }

    /// Takes a snapshot of the current assignment, or [`None`] if a variable is unassigned.
    pub fn solution(&self) -> Option<Solution> {
        let mut values = KeyedVec::default();
        for variable in self.variables.iter() {
            let _ = values.push(variable.assigned_value()?);
        }
        Some(Solution::new(values))
    }

    /// Returns true iff `solution` assigns every variable a value of its domain-of-record and
    /// satisfies every constraint.
    pub fn verify(&self, solution: &Solution) -> bool {
        if solution.num_variables() != self.num_variables() {
            return false;
        }

        let in_domains = self.variables.keys().all(|variable| {
            self.variables[variable].is_in_domain_of_record(solution.value(variable))
        });

        in_domains
            && self.constraints.iter().all(|constraint| {
                let tuple = constraint
                    .scope()
                    .iter()
                    .map(|&variable| solution.value(variable))
                    .collect::<Vec<_>>();
                constraint.check(&tuple)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constraints_are_indexed_by_variable() {
        let mut csp = Csp::new("index");
        let x = csp.new_variable("x", 1..=2);
        let y = csp.new_variable("y", 1..=2);
        let z = csp.new_variable("z", 1..=2);

        let c1 = csp
            .add_constraint("x != y", [x, y], [[1, 2], [2, 1]])
            .expect("valid constraint");
        let c2 = csp
            .add_constraint("y != z", [y, z], [[1, 2], [2, 1]])
            .expect("valid constraint");

        assert_eq!(&[c1], csp.constraints_with(x));
        assert_eq!(&[c1, c2], csp.constraints_with(y));
        assert_eq!(&[c2], csp.constraints_with(z));
        assert_eq!(Some(z), csp.variable_by_name("z"));
    }

    #[test]
    fn malformed_constraints_are_rejected() {
        let mut csp = Csp::new("malformed");
        let x = csp.new_variable("x", 1..=2);

        assert_eq!(
            Err(ConstraintOperationError::EmptyScope("empty".to_owned())),
            csp.add_constraint("empty", Vec::<VariableId>::new(), [[0_i32; 0]])
        );
        assert!(matches!(
            csp.add_constraint("twice", [x, x], [[1, 1]]),
            Err(ConstraintOperationError::DuplicateVariable { .. })
        ));
        assert!(matches!(
            csp.add_constraint("unknown", [VariableId::new(7)], [[1]]),
            Err(ConstraintOperationError::UnknownVariable { .. })
        ));
        assert!(matches!(
            csp.add_constraint("arity", [x], [vec![1, 2]]),
            Err(ConstraintOperationError::ArityMismatch {
                arity: 1,
                length: 2,
                ..
            })
        ));
        assert_eq!(0, csp.num_constraints());
    }

    #[test]
    fn tuples_outside_the_domains_are_dropped() {
        let mut csp = Csp::new("dropped");
        let x = csp.new_variable("x", 1..=2);

        let constraint = csp
            .add_constraint("unary", [x], [[1], [5]])
            .expect("valid constraint");

        assert_eq!(1, csp.constraint(constraint).num_tuples());
    }

    #[test]
    fn prunings_are_undone_exactly() {
        let mut csp = Csp::new("undo");
        let x = csp.new_variable("x", 1..=3);
        let y = csp.new_variable("y", 1..=3);
        let before = csp.variables.clone();

        csp.prune(x, 2);
        csp.prune(y, 1);
        csp.prune(x, 3);
        csp.undo_prunings(&[Pruning::new(x, 2), Pruning::new(y, 1), Pruning::new(x, 3)]);

        assert_eq!(before, csp.variables);
    }

    #[test]
    fn solutions_are_verified_against_every_constraint() {
        let mut csp = Csp::new("verify");
        let x = csp.new_variable("x", 1..=2);
        let y = csp.new_variable("y", 1..=2);
        let _ = csp
            .add_constraint("x != y", [x, y], [[1, 2], [2, 1]])
            .expect("valid constraint");

        assert_eq!(None, csp.solution());

        csp.assign(x, 1);
        csp.assign(y, 2);
        let solution = csp.solution().expect("fully assigned");
        assert!(csp.verify(&solution));
        assert_eq!(vec![(x, 1), (y, 2)], solution.iter().collect::<Vec<_>>());

        csp.unassign(y);
        csp.assign(y, 1);
        let violating = csp.solution().expect("fully assigned");
        assert!(!csp.verify(&violating));
    }
}
