//! A [`TerminationCondition`] is polled by the search after every decision. It tells the search to
//! give up before the problem has been decided, for example because the time budget of
//! [`TimeBudget`] ran out.
mod combinator;
mod decision_budget;
mod indefinite;
mod time_budget;

pub use combinator::Combinator;
pub use decision_budget::DecisionBudget;
pub use indefinite::Indefinite;
pub use time_budget::TimeBudget;

/// Determines when the search should stop without an answer.
pub trait TerminationCondition {
    /// Returns `true` when the search should stop, `false` otherwise.
    fn should_stop(&mut self) -> bool;

    /// Called every time the search assigns a value to a variable.
    fn decision_has_been_made(&mut self) {}
}

impl<T: TerminationCondition> TerminationCondition for Option<T> {
    fn should_stop(&mut self) -> bool {
        match self {
            Some(t) => t.should_stop(),
            None => false,
        }
    }

    fn decision_has_been_made(&mut self) {
        if let Some(t) = self {
            t.decision_has_been_made()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_condition_never_stops() {
        let mut condition: Option<DecisionBudget> = None;
        condition.decision_has_been_made();
        assert!(!condition.should_stop());
    }

    #[test]
    fn combinator_stops_when_either_stops() {
        let mut condition = Combinator::new(Indefinite, DecisionBudget::new(2));
        assert!(!condition.should_stop());

        condition.decision_has_been_made();
        assert!(!condition.should_stop());

        condition.decision_has_been_made();
        assert!(condition.should_stop());
    }
}
