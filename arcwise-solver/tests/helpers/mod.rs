//! Helpers to run the solver binary and to check the grids it prints.
#![allow(
    dead_code,
    reason = "is used in integration tests but unable to find a way to silence these warnings"
)]

use std::fs::File;
use std::path::Path;
use std::path::PathBuf;
use std::process::Command;
use std::process::ExitStatus;
use std::process::Stdio;
use std::time::Duration;

use arcwise_solver::core::variables::Value;
use arcwise_solver::kenken::KenKenGrid;
use wait_timeout::ChildExt;

pub(crate) fn puzzle_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("puzzles")
        .join(format!("{name}.txt"))
}

pub(crate) fn read_puzzle(name: &str) -> KenKenGrid {
    std::fs::read_to_string(puzzle_path(name))
        .expect("Failed to read puzzle file")
        .parse()
        .expect("Expected a valid puzzle")
}

#[derive(Debug)]
pub(crate) struct SolverRun {
    pub(crate) status: ExitStatus,
    pub(crate) stdout: String,
    pub(crate) stderr: String,
}

/// Runs the solver on the puzzle `name`; `prefix` keeps the output files of runs on the same
/// puzzle apart.
pub(crate) fn run_solver(name: &str, prefix: &str, args: &[&str]) -> SolverRun {
    const TEST_TIMEOUT: Duration = Duration::from_secs(60);

    let puzzle_path = puzzle_path(name);
    let solver = PathBuf::from(env!("CARGO_BIN_EXE_arcwise-solver"));

    let log_file_path = puzzle_path.with_extension(format!("{prefix}.log"));
    let err_file_path = puzzle_path.with_extension(format!("{prefix}.err"));

    let mut child = Command::new(solver)
        .args(args)
        .arg(&puzzle_path)
        .stdout(File::create(&log_file_path).expect("Failed to create log file."))
        .stderr(File::create(&err_file_path).expect("Failed to create error file."))
        .stdin(Stdio::null())
        .spawn()
        .expect("Failed to run solver.");

    let status = match child.wait_timeout(TEST_TIMEOUT) {
        Ok(None) => panic!("solver took more than {} seconds", TEST_TIMEOUT.as_secs()),
        Ok(Some(status)) => status,
        Err(e) => panic!("error starting solver: {e}"),
    };

    SolverRun {
        status,
        stdout: read_and_remove(&log_file_path),
        stderr: read_and_remove(&err_file_path),
    }
}

fn read_and_remove(path: &Path) -> String {
    let contents = std::fs::read_to_string(path).expect("Failed to read output file.");
    std::fs::remove_file(path).expect("Failed to remove output file.");
    contents
}

/// The lines printed by the solver which are not log messages.
pub(crate) fn output_lines(stdout: &str) -> Vec<&str> {
    stdout
        .lines()
        .filter(|line| !line.starts_with("c ") && !line.is_empty())
        .collect()
}

/// Parses a grid as printed by the solver.
pub(crate) fn parse_grid(lines: &[&str]) -> Vec<Vec<Value>> {
    lines
        .iter()
        .map(|line| {
            line.split_whitespace()
                .map(|value| value.parse().expect("Expected a value"))
                .collect()
        })
        .collect()
}

/// Asserts that `grid` is a solution of `puzzle`.
pub(crate) fn assert_solves(puzzle: &KenKenGrid, grid: &[Vec<Value>]) {
    let size = puzzle.size();
    assert_eq!(size, grid.len(), "wrong number of rows");

    let expected = (1..=size as Value).collect::<Vec<_>>();
    for index in 0..size {
        let mut row = grid[index].clone();
        row.sort_unstable();
        assert_eq!(expected, row, "row {index} is not a permutation");

        let mut column = grid.iter().map(|row| row[index]).collect::<Vec<_>>();
        column.sort_unstable();
        assert_eq!(expected, column, "column {index} is not a permutation");
    }

    for cage in puzzle.cages() {
        let values = cage
            .cells
            .iter()
            .map(|&(row, column)| grid[row][column])
            .collect::<Vec<_>>();
        assert!(
            cage.operation.is_satisfied(&values, cage.target),
            "{values:?} does not satisfy {cage:?}"
        );
    }
}
