use super::Value;
use crate::arcwise_assert_simple;
use crate::containers::HashMap;

/// The domain of a variable: the fixed domain-of-record together with the subset of it which is
/// currently alive.
///
/// Values are enumerated in the order of the domain-of-record, regardless of the order in which
/// they were removed or restored. Removing and restoring are exact inverses; removing an absent
/// value or restoring a present one is a bookkeeping error and panics.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Domain {
    values: Box<[Value]>,
    is_present: Box<[bool]>,
    size: usize,
    /// Maps a value to its position in `values`.
    positions: HashMap<Value, usize>,
}

impl Domain {
    /// Creates a domain with the given domain-of-record. Repeated values are only kept once.
    pub fn new(values: impl IntoIterator<Item = Value>) -> Self {
        let mut positions = HashMap::default();
        let mut record = Vec::new();

        for value in values {
            if !positions.contains_key(&value) {
                let _ = positions.insert(value, record.len());
                record.push(value);
            }
        }

        Domain {
            is_present: vec![true; record.len()].into_boxed_slice(),
            size: record.len(),
            values: record.into_boxed_slice(),
            positions,
        }
    }

    /// The original values of the domain.
    pub fn record(&self) -> &[Value] {
        &self.values
    }

    pub fn is_in_record(&self, value: Value) -> bool {
        self.positions.contains_key(&value)
    }

    pub fn contains(&self, value: Value) -> bool {
        self.positions
            .get(&value)
            .is_some_and(|&position| self.is_present[position])
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// The values which are currently in the domain.
    pub fn iter(&self) -> impl Iterator<Item = Value> + '_ {
        self.values
            .iter()
            .zip(self.is_present.iter())
            .filter(|(_, &is_present)| is_present)
            .map(|(&value, _)| value)
    }

    pub(crate) fn remove(&mut self, value: Value) {
        let position = self.position_of(value);
        arcwise_assert_simple!(
            self.is_present[position],
            "value {value} is pruned a second time"
        );

        self.is_present[position] = false;
        self.size -= 1;
    }

    pub(crate) fn restore(&mut self, value: Value) {
        let position = self.position_of(value);
        arcwise_assert_simple!(
            !self.is_present[position],
            "value {value} is restored but was never pruned"
        );

        self.is_present[position] = true;
        self.size += 1;
    }

    fn position_of(&self, value: Value) -> usize {
        match self.positions.get(&value) {
            Some(&position) => position,
            None => panic!("value {value} is not part of the domain-of-record"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_are_enumerated_in_record_order() {
        let mut domain = Domain::new([3, 1, 2, 1]);
        assert_eq!(&[3, 1, 2], domain.record());

        domain.remove(1);
        domain.remove(3);
        domain.restore(3);

        assert_eq!(vec![3, 2], domain.iter().collect::<Vec<_>>());
        assert_eq!(2, domain.size());
    }

    #[test]
    fn removing_every_value_empties_the_domain() {
        let mut domain = Domain::new(1..=2);
        domain.remove(2);
        domain.remove(1);

        assert!(domain.is_empty());
        assert!(!domain.contains(1));
        assert!(domain.is_in_record(1));
    }

    #[test]
    #[should_panic]
    fn removing_twice_is_a_contract_violation() {
        let mut domain = Domain::new(1..=3);
        domain.remove(2);
        domain.remove(2);
    }

    #[test]
    #[should_panic]
    fn restoring_a_present_value_is_a_contract_violation() {
        let mut domain = Domain::new(1..=3);
        domain.restore(2);
    }

    #[test]
    #[should_panic]
    fn removing_a_foreign_value_is_a_contract_violation() {
        let mut domain = Domain::new(1..=3);
        domain.remove(7);
    }
}
