use std::fmt::Display;
use std::fmt::Formatter;

use super::Domain;
use super::Value;
use crate::arcwise_assert_simple;

/// A variable of a constraint satisfaction problem.
///
/// Besides its [`Domain`], a variable can be assigned a single value. While assigned, the current
/// domain of the variable *conceptually* only contains the assigned value: [`Variable::contains`],
/// [`Variable::current_domain`] and [`Variable::current_domain_size`] all report that view. Should
/// propagation prune the assigned value itself, the current domain of the variable is empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Variable {
    name: String,
    domain: Domain,
    assigned: Option<Value>,
}

impl Variable {
    pub fn new(name: impl Into<String>, domain: Domain) -> Self {
        Variable {
            name: name.into(),
            domain,
            assigned: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn domain_of_record(&self) -> &[Value] {
        self.domain.record()
    }

    pub fn is_in_domain_of_record(&self, value: Value) -> bool {
        self.domain.is_in_record(value)
    }

    pub fn is_assigned(&self) -> bool {
        self.assigned.is_some()
    }

    pub fn assigned_value(&self) -> Option<Value> {
        self.assigned
    }

    pub fn contains(&self, value: Value) -> bool {
        match self.assigned {
            Some(assigned) => assigned == value && self.domain.contains(value),
            None => self.domain.contains(value),
        }
    }

    /// The values which are currently in the domain, in the order of the domain-of-record.
    pub fn current_domain(&self) -> impl Iterator<Item = Value> + '_ {
        let assigned = self.assigned;
        self.domain
            .iter()
            .filter(move |&value| assigned.map_or(true, |assigned| assigned == value))
    }

    pub fn current_domain_size(&self) -> usize {
        match self.assigned {
            Some(assigned) => usize::from(self.domain.contains(assigned)),
            None => self.domain.size(),
        }
    }

    pub(crate) fn assign(&mut self, value: Value) {
        arcwise_assert_simple!(
            self.assigned.is_none(),
            "variable {} is assigned twice",
            self.name
        );
        arcwise_assert_simple!(
            self.domain.contains(value),
            "variable {} is assigned {value} which is not in its current domain",
            self.name
        );

        self.assigned = Some(value);
    }

    pub(crate) fn unassign(&mut self) {
        arcwise_assert_simple!(
            self.assigned.is_some(),
            "variable {} is unassigned while it has no value",
            self.name
        );

        self.assigned = None;
    }

    pub(crate) fn prune(&mut self, value: Value) {
        self.domain.remove(value)
    }

    pub(crate) fn unprune(&mut self, value: Value) {
        self.domain.restore(value)
    }
}

impl Display for Variable {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.assigned {
            Some(value) => write!(f, "{} = {value}", self.name),
            None => {
                write!(f, "{} in {{", self.name)?;
                for (index, value) in self.current_domain().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{value}")?;
                }
                write!(f, "}}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn variable(values: impl IntoIterator<Item = Value>) -> Variable {
        Variable::new("v", Domain::new(values))
    }

    #[test]
    fn assigned_variable_exposes_only_its_value() {
        let mut variable = variable(1..=4);
        variable.assign(3);

        assert_eq!(vec![3], variable.current_domain().collect::<Vec<_>>());
        assert_eq!(1, variable.current_domain_size());
        assert!(variable.contains(3));
        assert!(!variable.contains(1));
    }

    #[test]
    fn pruning_the_assigned_value_empties_the_current_domain() {
        let mut variable = variable(1..=4);
        variable.assign(2);
        variable.prune(2);

        assert_eq!(0, variable.current_domain_size());
        assert_eq!(None, variable.current_domain().next());

        variable.unprune(2);
        variable.unassign();
        assert_eq!(4, variable.current_domain_size());
    }

    #[test]
    #[should_panic]
    fn assigning_a_pruned_value_is_a_contract_violation() {
        let mut variable = variable(1..=4);
        variable.prune(1);
        variable.assign(1);
    }

    #[test]
    fn display_lists_the_current_domain() {
        let mut variable = variable(1..=3);
        variable.prune(2);

        assert_eq!("v in {1, 3}", variable.to_string());

        variable.assign(3);
        assert_eq!("v = 3", variable.to_string());
    }
}
