//! Smallest starting offset balance that never runs dry.

use crate::model::AmortizationInputs;

use super::result::SearchOutcome;
use super::search::{SearchGoal, bisect};
use super::worst_offset;

/// Bracket searched for a starting offset balance.
const OFFSET_RANGE: (f64, f64) = (0.0, 5_000_000.0);

/// Find the minimum initial offset balance that keeps the offset
/// non-negative in every month of the window, not just the last one.
pub fn solve_secure_offset(inputs: &AmortizationInputs) -> SearchOutcome {
    let (low, high) = OFFSET_RANGE;
    bisect(low, high, SearchGoal::MinimizeFeasible, |candidate| {
        let mut trial = inputs.clone();
        trial.initial_offset_balance = candidate;
        worst_offset(&trial) >= 0.0
    })
}
