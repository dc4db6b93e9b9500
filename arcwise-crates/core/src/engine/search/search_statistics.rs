use std::time::Duration;

use crate::statistics::log_statistic;
use crate::statistics::log_statistic_postfix;
use crate::statistics::should_log_statistics;

/// Counters kept by the search; reset at the start of every call to
/// [`BacktrackingSearch::solve`](super::BacktrackingSearch::solve).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStatistics {
    /// The number of values assigned to a variable.
    pub num_decisions: u64,
    /// The number of values removed by propagation, the initial pass included.
    pub num_prunings: u64,
    /// The number of assignments which were retracted.
    pub num_backtracks: u64,
    /// The largest number of variables assigned at the same time.
    pub peak_depth: usize,
    pub time_spent: Duration,
}

impl SearchStatistics {
    /// Writes the statistics through the configured statistic logger, if any.
    pub fn log(&self) {
        if !should_log_statistics() {
            return;
        }

        log_statistic("numDecisions", self.num_decisions);
        log_statistic("numPrunings", self.num_prunings);
        log_statistic("numBacktracks", self.num_backtracks);
        log_statistic("peakDepth", self.peak_depth);
        log_statistic("timeSpentInSolverInMilliseconds", self.time_spent.as_millis());
        log_statistic_postfix();
    }
}
