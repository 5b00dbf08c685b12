//! Smallest workable retirement plan: extra working years plus the income
//! they must bring in.

use serde::{Deserialize, Serialize};

use crate::model::AmortizationInputs;

use super::final_offset;
use super::result::SearchOutcome;
use super::search::{SearchGoal, bisect};

/// Bracket searched for the required monthly income.
const INCOME_RANGE: (f64, f64) = (0.0, 50_000.0);
/// Largest number of post-retirement working years considered.
const MAX_WORKING_YEARS: u32 = 10;

/// A solved working plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkingPlan {
    /// Fewest post-retirement working years that keep the plan funded,
    /// capped at the scan limit when none do.
    pub years_working: u32,
    /// Smallest net monthly income over those years that funds the plan.
    pub required_net_income: f64,
    pub income_search: SearchOutcome,
}

/// Solve the two-stage working plan.
///
/// Stage one scans working years 0..=10 for the smallest count whose final
/// offset balance stays non-negative at the configured transitional income,
/// settling on 10 when none qualifies. Stage two then bisects for the
/// smallest transitional income that funds the plan over those years.
pub fn solve_working_plan(inputs: &AmortizationInputs) -> WorkingPlan {
    let mut base = inputs.clone();
    base.continue_working = true;

    let mut years_working = MAX_WORKING_YEARS;
    for years in 0..=MAX_WORKING_YEARS {
        let mut trial = base.clone();
        trial.years_working = years;
        if final_offset(&trial) >= 0.0 {
            years_working = years;
            break;
        }
    }
    base.years_working = years_working;

    let (low, high) = INCOME_RANGE;
    let income_search = bisect(low, high, SearchGoal::MinimizeFeasible, |candidate| {
        let mut trial = base.clone();
        trial.transitional_salary = candidate;
        final_offset(&trial) >= 0.0
    });

    WorkingPlan {
        years_working,
        required_net_income: income_search.value,
        income_search,
    }
}
