use std::str::FromStr;

use arcwise_core::variables::Value;

use super::model::largest_value;
use super::KenKenError;
use super::Operation;

/// A group of cells whose values have to yield `target` under `operation`.
///
/// Cells are `(row, column)` pairs, counted from 0.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cage {
    pub cells: Vec<(usize, usize)>,
    pub operation: Operation,
    pub target: Value,
}

/// A KenKen puzzle: the size of the grid and its cages.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KenKenGrid {
    size: usize,
    cages: Vec<Cage>,
}

impl KenKenGrid {
    /// Creates a puzzle, checking that the grid is not empty and that every cage has cells which
    /// lie within the grid.
    pub fn new(size: usize, cages: Vec<Cage>) -> Result<KenKenGrid, KenKenError> {
        let _ = largest_value(size)?;

        for (index, cage) in cages.iter().enumerate() {
            if cage.cells.is_empty() {
                return Err(KenKenError::EmptyCage(index));
            }

            if let Some(&(row, column)) = cage
                .cells
                .iter()
                .find(|&&(row, column)| row >= size || column >= size)
            {
                return Err(KenKenError::CellOutOfBounds { row, column, size });
            }
        }

        Ok(KenKenGrid { size, cages })
    }

    /// Reads the list encoding of a puzzle: the first list holds the size of the grid, every
    /// further list is a cage `[c1, c2, ..., target, operation]`.
    ///
    /// A cell `c` is given as the two-digit code `rowcolumn`, counted from 1; e.g. `23` is the
    /// third cell of the second row. The operation is one of the codes of
    /// [`Operation::from_code`].
    pub fn from_encoding(encoding: &[Vec<i64>]) -> Result<KenKenGrid, KenKenError> {
        let Some((header, cages)) = encoding.split_first() else {
            return Err(malformed(1, "the size of the grid is missing"));
        };

        let size = match header.as_slice() {
            [size] => usize::try_from(*size)
                .map_err(|_| malformed(1, format!("'{size}' is not a valid size")))?,
            _ => return Err(malformed(1, "expected a single size")),
        };

        let cages = cages
            .iter()
            .enumerate()
            .map(|(index, cage)| {
                let line = index + 2;
                let [cells @ .., target, operation] = cage.as_slice() else {
                    return Err(malformed(line, "expected cells, a target and an operation"));
                };
                if cells.is_empty() {
                    return Err(malformed(line, "expected cells, a target and an operation"));
                }

                Ok(Cage {
                    cells: cells
                        .iter()
                        .map(|&code| decode_cell(code, line))
                        .collect::<Result<_, _>>()?,
                    operation: Operation::from_code(*operation)?,
                    target: Value::try_from(*target)
                        .map_err(|_| malformed(line, format!("'{target}' is not a valid target")))?,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        KenKenGrid::new(size, cages)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn cages(&self) -> &[Cage] {
        &self.cages
    }
}

/// Reads a puzzle from text: the first line holds the size of the grid, every further line one
/// cage `c1 c2 ... target operation`, with cells encoded as in [`KenKenGrid::from_encoding`].
/// The operation may also be given as one of the symbols accepted by [`Operation::from_str`].
///
/// Tokens are separated by whitespace or commas, brackets are ignored and `#` starts a comment,
/// so the list encoding can be written one list per line.
impl FromStr for KenKenGrid {
    type Err = KenKenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut lines = s
            .lines()
            .enumerate()
            .map(|(index, line)| (index + 1, tokenise(line)))
            .filter(|(_, tokens)| !tokens.is_empty());

        let Some((line, header)) = lines.next() else {
            return Err(malformed(1, "the size of the grid is missing"));
        };
        let size = match header.as_slice() {
            [size] => size
                .parse::<usize>()
                .map_err(|_| malformed(line, format!("'{size}' is not a valid size")))?,
            _ => return Err(malformed(line, "expected a single size")),
        };

        let cages = lines
            .map(|(line, tokens)| {
                let [cells @ .., target, operation] = tokens.as_slice() else {
                    return Err(malformed(line, "expected cells, a target and an operation"));
                };
                if cells.is_empty() {
                    return Err(malformed(line, "expected cells, a target and an operation"));
                }

                Ok(Cage {
                    cells: cells
                        .iter()
                        .map(|cell| {
                            cell.parse::<i64>()
                                .map_err(|_| malformed(line, format!("'{cell}' is not a cell")))
                                .and_then(|code| decode_cell(code, line))
                        })
                        .collect::<Result<_, _>>()?,
                    operation: operation.parse()?,
                    target: target
                        .parse()
                        .map_err(|_| malformed(line, format!("'{target}' is not a valid target")))?,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        KenKenGrid::new(size, cages)
    }
}

fn tokenise(line: &str) -> Vec<&str> {
    let content = line.split('#').next().unwrap_or_default();
    content
        .split(|c: char| c.is_whitespace() || matches!(c, ',' | '[' | ']' | '(' | ')'))
        .filter(|token| !token.is_empty())
        .collect()
}

/// Turns the 1-based code `rowcolumn` into a 0-based `(row, column)` pair.
fn decode_cell(code: i64, line: usize) -> Result<(usize, usize), KenKenError> {
    let (row, column) = (code / 10, code % 10);
    if code < 0 || row == 0 || column == 0 {
        return Err(malformed(line, format!("'{code}' is not a cell")));
    }

    Ok((row as usize - 1, column as usize - 1))
}

fn malformed(line: usize, message: impl Into<String>) -> KenKenError {
    KenKenError::MalformedPuzzle {
        line,
        message: message.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_and_list_encodings_agree() {
        let text = "\
# a 3x3 puzzle
3
11, 21, 3, 0
12 22 2 1
[13, 23, 33, 6, 3]
31 32 5 +
";
        let from_text = text.parse::<KenKenGrid>().expect("valid puzzle");
        let from_encoding = KenKenGrid::from_encoding(&[
            vec![3],
            vec![11, 21, 3, 0],
            vec![12, 22, 2, 1],
            vec![13, 23, 33, 6, 3],
            vec![31, 32, 5, 0],
        ])
        .expect("valid puzzle");

        assert_eq!(from_text, from_encoding);
        assert_eq!(3, from_text.size());
        assert_eq!(
            Cage {
                cells: vec![(0, 2), (1, 2), (2, 2)],
                operation: Operation::Multiply,
                target: 6,
            },
            from_text.cages()[2]
        );
    }

    #[test]
    fn size_is_required() {
        assert_eq!(
            Err(KenKenError::MalformedPuzzle {
                line: 1,
                message: "the size of the grid is missing".to_owned()
            }),
            "# nothing here\n".parse::<KenKenGrid>()
        );
        assert_eq!(Err(KenKenError::EmptyGrid), "0".parse::<KenKenGrid>());
        assert_eq!(
            Err(KenKenError::GridTooLarge(4_294_967_296)),
            "4294967296".parse::<KenKenGrid>()
        );
    }

    #[test]
    fn cells_outside_the_grid_are_rejected() {
        assert_eq!(
            Err(KenKenError::CellOutOfBounds {
                row: 0,
                column: 3,
                size: 3
            }),
            "3\n11 14 3 +".parse::<KenKenGrid>()
        );
        assert!(matches!(
            "3\n10 11 3 +".parse::<KenKenGrid>(),
            Err(KenKenError::MalformedPuzzle { line: 2, .. })
        ));
    }

    #[test]
    fn cage_needs_a_target_and_an_operation() {
        assert!(matches!(
            "2\n11 +".parse::<KenKenGrid>(),
            Err(KenKenError::MalformedPuzzle { line: 2, .. })
        ));
        assert_eq!(
            Err(KenKenError::UnsupportedOperation("5".to_owned())),
            KenKenGrid::from_encoding(&[vec![2], vec![11, 12, 3, 5]])
        );
    }

    #[test]
    fn cage_without_cells_is_rejected() {
        let cage = Cage {
            cells: Vec::new(),
            operation: Operation::Add,
            target: 3,
        };

        assert_eq!(Err(KenKenError::EmptyCage(0)), KenKenGrid::new(2, vec![cage]));
    }
}
