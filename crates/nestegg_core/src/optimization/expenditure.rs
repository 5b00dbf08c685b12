//! Largest affordable monthly expenditure.

use crate::model::AmortizationInputs;

use super::final_offset;
use super::result::SearchOutcome;
use super::search::{SearchGoal, bisect};

/// Bracket searched for a monthly expenditure.
const EXPENDITURE_RANGE: (f64, f64) = (0.0, 50_000.0);

/// Find the largest monthly living expenditure that still leaves the final
/// month's offset balance non-negative.
///
/// The candidate is written to both the working and the retirement expense
/// levels: one "what can we spend" figure across the whole window.
pub fn solve_max_expenditure(inputs: &AmortizationInputs) -> SearchOutcome {
    let (low, high) = EXPENDITURE_RANGE;
    bisect(low, high, SearchGoal::MaximizeFeasible, |candidate| {
        let mut trial = inputs.clone();
        trial.current_living_expenses = candidate;
        trial.retirement_living_expenses = candidate;
        final_offset(&trial) >= 0.0
    })
}
