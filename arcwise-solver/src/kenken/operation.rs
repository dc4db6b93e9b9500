use std::fmt::Display;
use std::fmt::Formatter;
use std::str::FromStr;

use arcwise_core::variables::Value;

use super::KenKenError;

/// The arithmetic operation of a cage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    Add,
    Subtract,
    Divide,
    Multiply,
}

impl Operation {
    /// Decodes the numeric operation codes `0 = +`, `1 = -`, `2 = /` and `3 = *`.
    pub fn from_code(code: i64) -> Result<Operation, KenKenError> {
        match code {
            0 => Ok(Operation::Add),
            1 => Ok(Operation::Subtract),
            2 => Ok(Operation::Divide),
            3 => Ok(Operation::Multiply),
            _ => Err(KenKenError::UnsupportedOperation(code.to_string())),
        }
    }

    /// Returns true iff the values of a cage yield `target` under this operation.
    ///
    /// Addition and multiplication combine all values. Subtraction and division are satisfied if
    /// some value, used as the left-hand operand, yields `target` when the other values are
    /// subtracted from it or divided into it one after the other. Division has to be exact.
    pub fn is_satisfied(self, values: &[Value], target: Value) -> bool {
        let target = i64::from(target);

        match self {
            Operation::Add => values.iter().map(|&value| i64::from(value)).sum::<i64>() == target,
            Operation::Multiply => {
                values
                    .iter()
                    .map(|&value| i64::from(value))
                    .product::<i64>()
                    == target
            }
            Operation::Subtract => (0..values.len()).any(|left| {
                let rest = others(values, left).sum::<i64>();
                i64::from(values[left]) - rest == target
            }),
            Operation::Divide => (0..values.len()).any(|left| {
                let rest = others(values, left).product::<i64>();
                rest != 0 && i64::from(values[left]) == target * rest
            }),
        }
    }
}

/// Every value except the one at `skipped`.
fn others(values: &[Value], skipped: usize) -> impl Iterator<Item = i64> + '_ {
    values
        .iter()
        .enumerate()
        .filter(move |&(index, _)| index != skipped)
        .map(|(_, &value)| i64::from(value))
}

impl FromStr for Operation {
    type Err = KenKenError;

    /// Accepts the numeric codes of [`Operation::from_code`] and the symbols `+`, `-`, `/`, `*`
    /// and `x`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" => Ok(Operation::Add),
            "-" => Ok(Operation::Subtract),
            "/" => Ok(Operation::Divide),
            "*" | "x" => Ok(Operation::Multiply),
            _ => s
                .parse::<i64>()
                .map_err(|_| KenKenError::UnsupportedOperation(s.to_owned()))
                .and_then(Operation::from_code),
        }
    }
}

impl Display for Operation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let symbol = match self {
            Operation::Add => "+",
            Operation::Subtract => "-",
            Operation::Divide => "/",
            Operation::Multiply => "*",
        };
        write!(f, "{symbol}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_and_symbols_are_parsed() {
        assert_eq!(Ok(Operation::Add), "0".parse());
        assert_eq!(Ok(Operation::Subtract), "-".parse());
        assert_eq!(Ok(Operation::Divide), "2".parse());
        assert_eq!(Ok(Operation::Multiply), "x".parse());
        assert_eq!(
            Err(KenKenError::UnsupportedOperation("4".to_owned())),
            "4".parse::<Operation>()
        );
        assert_eq!(
            Err(KenKenError::UnsupportedOperation("%".to_owned())),
            "%".parse::<Operation>()
        );
    }

    #[test]
    fn commutative_operations_combine_all_values() {
        assert!(Operation::Add.is_satisfied(&[1, 2, 3], 6));
        assert!(!Operation::Add.is_satisfied(&[1, 2, 3], 5));
        assert!(Operation::Multiply.is_satisfied(&[2, 2, 3], 12));
        assert!(!Operation::Multiply.is_satisfied(&[2, 2, 3], 7));
    }

    #[test]
    fn subtraction_tries_every_left_operand() {
        assert!(Operation::Subtract.is_satisfied(&[1, 3], 2));
        assert!(Operation::Subtract.is_satisfied(&[3, 1], 2));
        assert!(Operation::Subtract.is_satisfied(&[1, 6, 2], 3));
        assert!(!Operation::Subtract.is_satisfied(&[2, 3], 2));
    }

    #[test]
    fn division_has_to_be_exact() {
        assert!(Operation::Divide.is_satisfied(&[2, 4], 2));
        assert!(Operation::Divide.is_satisfied(&[2, 8, 2], 2));
        assert!(!Operation::Divide.is_satisfied(&[4, 6], 1));
        assert!(!Operation::Divide.is_satisfied(&[2, 3], 1));
    }

    #[test]
    fn single_cell_cage_is_its_target() {
        for operation in [
            Operation::Add,
            Operation::Subtract,
            Operation::Divide,
            Operation::Multiply,
        ] {
            assert!(operation.is_satisfied(&[3], 3), "{operation}");
            assert!(!operation.is_satisfied(&[2], 3), "{operation}");
        }
    }
}
