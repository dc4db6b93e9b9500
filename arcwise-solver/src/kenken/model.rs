use std::fmt::Write;

use arcwise_core::results::Solution;
use arcwise_core::variables::Value;
use arcwise_core::variables::VariableId;
use arcwise_core::Csp;
use itertools::Itertools;
use log::debug;

use super::Cage;
use super::KenKenError;
use super::KenKenGrid;

/// How the rows and columns of the grid are constrained to hold different values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum GridEncoding {
    /// A binary not-equal constraint for every pair of cells in a row or column.
    #[default]
    #[value(name = "binary")]
    BinaryNotEqual,
    /// A single all-different constraint for every row and column.
    #[value(name = "nary")]
    NaryAllDifferent,
}

/// The variables of the cells of a grid, row by row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<VariableId>,
}

impl Board {
    /// Creates a variable with domain `1..=size` for every cell.
    fn create(csp: &mut Csp, size: usize) -> Result<Board, KenKenError> {
        let largest = largest_value(size)?;
        let cells = (0..size)
            .cartesian_product(0..size)
            .map(|(row, column)| {
                csp.new_variable(format!("Var_{}{}", row + 1, column + 1), 1..=largest)
            })
            .collect();

        Ok(Board { size, cells })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn variable(&self, row: usize, column: usize) -> VariableId {
        self.cells[row * self.size + column]
    }

    pub fn row(&self, row: usize) -> Vec<VariableId> {
        (0..self.size)
            .map(|column| self.variable(row, column))
            .collect()
    }

    pub fn column(&self, column: usize) -> Vec<VariableId> {
        (0..self.size).map(|row| self.variable(row, column)).collect()
    }

    /// Reads the value of every cell from `solution`, row by row.
    pub fn values(&self, solution: &Solution) -> Vec<Vec<Value>> {
        self.cells
            .chunks(self.size)
            .map(|row| row.iter().map(|&cell| solution.value(cell)).collect())
            .collect()
    }

    /// Renders the grid of `solution` with one row per line.
    pub fn render(&self, solution: &Solution) -> String {
        let width = self.size.to_string().len();
        let mut rendered = String::new();
        for row in self.values(solution) {
            let line = row
                .iter()
                .map(|value| format!("{value:>width$}"))
                .join(" ");
            let _ = writeln!(rendered, "{line}");
        }
        rendered
    }

    /// The rows of the grid followed by its columns, each with a name.
    fn lines(&self) -> impl Iterator<Item = (String, Vec<VariableId>)> + '_ {
        let rows = (0..self.size).map(|row| (format!("row {}", row + 1), self.row(row)));
        let columns = (0..self.size)
            .map(|column| (format!("column {}", column + 1), self.column(column)));
        rows.chain(columns)
    }
}

/// A grid without cages in which the cells of every row and column are pairwise constrained by
/// binary not-equal constraints.
pub fn binary_not_equal_grid(size: usize) -> Result<(Csp, Board), KenKenError> {
    let largest = largest_value(size)?;
    let mut csp = Csp::new(format!("kenken_{size}x{size}_binary"));
    let board = Board::create(&mut csp, size)?;

    let tuples = (1..=largest).permutations(2).collect::<Vec<_>>();
    for (name, line) in board.lines() {
        for (&first, &second) in line.iter().tuple_combinations() {
            let constraint_name = format!(
                "{name}: {} != {}",
                csp.variable(first).name(),
                csp.variable(second).name()
            );
            let _ = csp.add_constraint(constraint_name, [first, second], tuples.iter())?;
        }
    }

    debug!(
        "Created a binary grid with {} constraints",
        csp.num_constraints()
    );
    Ok((csp, board))
}

/// A grid without cages in which every row and every column has one all-different constraint.
pub fn nary_all_different_grid(size: usize) -> Result<(Csp, Board), KenKenError> {
    let largest = largest_value(size)?;
    let mut csp = Csp::new(format!("kenken_{size}x{size}_nary"));
    let board = Board::create(&mut csp, size)?;

    let tuples = (1..=largest).permutations(size).collect::<Vec<_>>();
    for (name, line) in board.lines() {
        let _ = csp.add_constraint(format!("{name}: all different"), line, tuples.iter())?;
    }

    debug!(
        "Created an n-ary grid with {} constraints of {} tuples",
        csp.num_constraints(),
        tuples.len()
    );
    Ok((csp, board))
}

/// The model of `puzzle`: a grid in the given encoding with a table constraint for every cage,
/// holding exactly the combinations of values which satisfy the cage.
pub fn kenken_model(
    puzzle: &KenKenGrid,
    encoding: GridEncoding,
) -> Result<(Csp, Board), KenKenError> {
    let (mut csp, board) = match encoding {
        GridEncoding::BinaryNotEqual => binary_not_equal_grid(puzzle.size())?,
        GridEncoding::NaryAllDifferent => nary_all_different_grid(puzzle.size())?,
    };

    for (index, cage) in puzzle.cages().iter().enumerate() {
        add_cage(&mut csp, &board, index, cage)?;
    }

    Ok((csp, board))
}

/// The largest value of a cell in a grid of the given size, which is the size itself.
pub(crate) fn largest_value(size: usize) -> Result<Value, KenKenError> {
    if size == 0 {
        return Err(KenKenError::EmptyGrid);
    }
    Value::try_from(size).map_err(|_| KenKenError::GridTooLarge(size))
}

fn add_cage(csp: &mut Csp, board: &Board, index: usize, cage: &Cage) -> Result<(), KenKenError> {
    let scope = cage
        .cells
        .iter()
        .map(|&(row, column)| {
            if row >= board.size() || column >= board.size() {
                Err(KenKenError::CellOutOfBounds {
                    row,
                    column,
                    size: board.size(),
                })
            } else {
                Ok(board.variable(row, column))
            }
        })
        .collect::<Result<Vec<_>, _>>()?;

    let tuples = std::iter::repeat(1..=largest_value(board.size())?)
        .take(scope.len())
        .multi_cartesian_product()
        .filter(|values| cage.operation.is_satisfied(values, cage.target))
        .collect::<Vec<_>>();

    if tuples.is_empty() {
        debug!(
            "Cage {index} ({} {}) cannot be satisfied",
            cage.operation, cage.target
        );
    }

    let _ = csp.add_constraint(
        format!("cage {index}: {} {}", cage.operation, cage.target),
        scope,
        tuples,
    )?;
    Ok(())
}
