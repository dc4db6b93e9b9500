use std::time::Instant;

use log::debug;
use log::info;

use super::SearchOptions;
use super::SearchStatistics;
use crate::api::outputs::SatisfactionResult;
use crate::basic_types::Pruning;
use crate::basic_types::Solution;
use crate::basic_types::Trail;
use crate::branching::value_selection::ValueOrdering;
use crate::branching::variable_selection::VariableOrdering;
use crate::branching::ValueSelector;
use crate::branching::VariableSelector;
use crate::engine::termination::TerminationCondition;
use crate::engine::variables::Value;
use crate::engine::variables::VariableId;
use crate::propagators::PropagationStrategy;
use crate::Csp;

/// Depth-first search which assigns one variable at a time and propagates after every assignment.
///
/// Before the first decision the problem is propagated once without an assigned variable. Then the
/// variable selector picks a variable, the value selector orders its values, and the values are
/// tried in that order. An assignment after which propagation fails is retracted immediately,
/// together with every value removed by that propagation; a variable which runs out of values
/// retracts the assignment of the variable before it.
///
/// Whatever the outcome, [`BacktrackingSearch::solve`] returns the problem in the state in which it
/// was given: no variable is assigned and every removed value is restored, including those removed
/// before the first decision.
#[derive(Debug)]
pub struct BacktrackingSearch<VarSel = VariableOrdering, ValSel = ValueOrdering> {
    propagation: PropagationStrategy,
    variable_selector: VarSel,
    value_selector: ValSel,
    /// The prunings made so far. Checkpoint `i` holds the prunings made after the decision of
    /// `frames[i - 1]`; the prunings of the initial pass are below the first checkpoint.
    trail: Trail<Pruning>,
    frames: Vec<Frame>,
    statistics: SearchStatistics,
}

/// A variable on the current branch together with the values which are still to be tried.
#[derive(Debug)]
struct Frame {
    variable: VariableId,
    values: Vec<Value>,
    next: usize,
    is_assigned: bool,
}

enum Decision {
    /// A value was assigned and propagation succeeded.
    Descended,
    /// Every value of the variable failed.
    Exhausted,
    Stopped,
}

impl Default for BacktrackingSearch {
    fn default() -> Self {
        BacktrackingSearch::new(SearchOptions::default())
    }
}

impl BacktrackingSearch {
    pub fn new(options: SearchOptions) -> Self {
        BacktrackingSearch::with_selectors(
            options.propagation,
            options.variable_ordering,
            options.value_ordering,
        )
    }
}

impl<VarSel: VariableSelector, ValSel: ValueSelector> BacktrackingSearch<VarSel, ValSel> {
    pub fn with_selectors(
        propagation: PropagationStrategy,
        variable_selector: VarSel,
        value_selector: ValSel,
    ) -> Self {
        BacktrackingSearch {
            propagation,
            variable_selector,
            value_selector,
            trail: Trail::default(),
            frames: Vec::new(),
            statistics: SearchStatistics::default(),
        }
    }

    /// The statistics of the last call to [`BacktrackingSearch::solve`].
    pub fn statistics(&self) -> &SearchStatistics {
        &self.statistics
    }

    /// Searches for an assignment of all variables of `csp` which satisfies every constraint.
    pub fn solve(
        &mut self,
        csp: &mut Csp,
        termination: &mut impl TerminationCondition,
    ) -> SatisfactionResult {
        let started_at = Instant::now();
        self.statistics = SearchStatistics::default();

        info!(
            "Solving '{}' ({} variables, {} constraints) with {}",
            csp.name(),
            csp.num_variables(),
            csp.num_constraints(),
            self.propagation
        );

        let result = self.search(csp, termination);
        self.restore(csp);

        self.statistics.time_spent = started_at.elapsed();
        info!(
            "Search finished after {} decisions and {} backtracks",
            self.statistics.num_decisions, self.statistics.num_backtracks
        );

        result
    }

    fn search(
        &mut self,
        csp: &mut Csp,
        termination: &mut impl TerminationCondition,
    ) -> SatisfactionResult {
        let mut prunings = Vec::new();
        let status = self
            .propagation
            .propagate_into(csp, None, &mut prunings);
        self.record_prunings(prunings);

        if let Err(inconsistency) = status {
            debug!("The initial propagation failed: {inconsistency:?}");
            return SatisfactionResult::Unsatisfiable;
        }

        if let Some(solution) = self.open_frame(csp) {
            return SatisfactionResult::Satisfiable(solution);
        }

        loop {
            if termination.should_stop() {
                return SatisfactionResult::Unknown;
            }

            match self.make_next_decision(csp, termination) {
                Decision::Descended => {
                    if let Some(solution) = self.open_frame(csp) {
                        return SatisfactionResult::Satisfiable(solution);
                    }
                }
                Decision::Exhausted => {
                    let _ = self.frames.pop();
                    if self.frames.is_empty() {
                        return SatisfactionResult::Unsatisfiable;
                    }
                }
                Decision::Stopped => return SatisfactionResult::Unknown,
            }
        }
    }

    /// Selects the next variable to branch on, or returns the solution when every variable is
    /// assigned.
    fn open_frame(&mut self, csp: &mut Csp) -> Option<Solution> {
        if let Some(solution) = csp.solution() {
            return Some(solution);
        }

        let Some(variable) = self.variable_selector.select_variable(csp) else {
            panic!("no variable was selected while some variables are unassigned");
        };
        let values = self.value_selector.order_values(csp, variable);
        debug!(
            "Branching on {} with values {values:?}",
            csp.variable(variable).name()
        );

        self.frames.push(Frame {
            variable,
            values,
            next: 0,
            is_assigned: false,
        });
        self.statistics.peak_depth = self.statistics.peak_depth.max(self.frames.len());

        None
    }

    /// Assigns the next value of the deepest variable for which propagation succeeds, retracting
    /// the current value of that variable first.
    fn make_next_decision(
        &mut self,
        csp: &mut Csp,
        termination: &mut impl TerminationCondition,
    ) -> Decision {
        if self.frames.last().is_some_and(|frame| frame.is_assigned) {
            self.undo_decision(csp);
        }

        let Some(frame) = self.frames.last_mut() else {
            return Decision::Exhausted;
        };

        while let Some(&value) = frame.values.get(frame.next) {
            frame.next += 1;

            csp.assign(frame.variable, value);
            frame.is_assigned = true;
            self.trail.new_checkpoint();
            self.statistics.num_decisions += 1;
            termination.decision_has_been_made();

            let mut prunings = Vec::new();
            let status = self
                .propagation
                .propagate_into(csp, Some(frame.variable), &mut prunings);
            self.statistics.num_prunings += prunings.len() as u64;
            self.trail.extend(prunings);

            if status.is_ok() {
                return Decision::Descended;
            }

            for pruning in self.trail.synchronise(self.trail.get_checkpoint() - 1) {
                csp.unprune(pruning.variable, pruning.value);
            }
            csp.unassign(frame.variable);
            frame.is_assigned = false;
            self.statistics.num_backtracks += 1;

            if termination.should_stop() {
                return Decision::Stopped;
            }
        }

        Decision::Exhausted
    }

    /// Retracts the assignment of the deepest variable and restores the values removed after it.
    fn undo_decision(&mut self, csp: &mut Csp) {
        let Some(frame) = self.frames.last_mut() else {
            return;
        };

        for pruning in self.trail.synchronise(self.trail.get_checkpoint() - 1) {
            csp.unprune(pruning.variable, pruning.value);
        }
        csp.unassign(frame.variable);
        frame.is_assigned = false;
        self.statistics.num_backtracks += 1;
    }

    fn record_prunings(&mut self, prunings: Vec<Pruning>) {
        self.statistics.num_prunings += prunings.len() as u64;
        self.trail.extend(prunings);
    }

    /// Undoes every assignment and every pruning made by the search.
    fn restore(&mut self, csp: &mut Csp) {
        for frame in self.frames.drain(..) {
            if frame.is_assigned {
                csp.unassign(frame.variable);
            }
        }
        for pruning in self.trail.clear() {
            csp.unprune(pruning.variable, pruning.value);
        }
    }
}
