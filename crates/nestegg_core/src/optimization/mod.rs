//! Goal-seeking solvers over the amortization simulator.
//!
//! Each solver treats [`crate::amortization::simulate`] as a black-box
//! objective: clone the inputs, write one candidate value into them, run
//! the schedule, test feasibility. The simulator's path-dependent branches
//! (refinance trigger, phase boundaries, the offset floor inside the
//! interest base) rule out closed-form inversion, but every searched field
//! moves the offset balance monotonically, so bisection against the
//! feasibility boundary converges to well under a cent.

mod expenditure;
mod income;
mod offset;
mod result;
mod search;

pub use expenditure::solve_max_expenditure;
pub use income::{WorkingPlan, solve_working_plan};
pub use offset::solve_secure_offset;
pub use result::{ProbeRecord, SearchOutcome};
pub use search::SEARCH_ITERATIONS;

use crate::amortization::simulate;
use crate::model::AmortizationInputs;

/// Offset balance in the final month of the window.
pub(crate) fn final_offset(inputs: &AmortizationInputs) -> f64 {
    simulate(inputs)
        .schedule
        .last()
        .map(|row| row.offset_balance)
        .unwrap_or(0.0)
}

/// Lowest offset balance seen anywhere in the window.
pub(crate) fn worst_offset(inputs: &AmortizationInputs) -> f64 {
    simulate(inputs)
        .schedule
        .iter()
        .map(|row| row.offset_balance)
        .fold(f64::INFINITY, f64::min)
}
