//! Month-by-month loan amortization with an offset account.
//!
//! The schedule always covers the same fixed calendar window, one row per
//! month from [`AMORTIZATION_START`] through [`AMORTIZATION_END`] inclusive.
//! Inputs move the phase boundaries and balances inside that window, never
//! its length, which keeps every run directly comparable and gives the
//! goal-seek solvers a fixed-cost objective.
//!
//! Within a month the order is: January rent escalation, phase
//! determination, income, expenses, loan step, offset step. The offset
//! balance absorbs whatever is left over and is allowed to go negative;
//! the loan balance never does.

use crate::model::{AmortizationInputs, AmortizationOutcome, AmortizationRow};
use crate::month::Month;

/// First month of every amortization schedule.
pub const AMORTIZATION_START: Month = Month::new(2025, 1);
/// Last month of every amortization schedule, inclusive.
pub const AMORTIZATION_END: Month = Month::new(2039, 12);

/// Term assumed when a refinance computes a fresh amortizing payment.
const REFINANCE_TERM_MONTHS: i32 = 300;

/// Classic amortizing payment over a 25-year term.
///
/// Returns 0 for a non-positive principal, and straight-line repayment when
/// the rate is zero or negative.
pub fn standard_monthly_repayment(principal: f64, annual_rate_pct: f64) -> f64 {
    if principal <= 0.0 {
        return 0.0;
    }
    let monthly_rate = annual_rate_pct / 100.0 / 12.0;
    if monthly_rate <= 0.0 {
        return principal / REFINANCE_TERM_MONTHS as f64;
    }
    let growth = (1.0 + monthly_rate).powi(REFINANCE_TERM_MONTHS);
    principal * monthly_rate * growth / (growth - 1.0)
}

/// Run the amortization schedule over the fixed window.
pub fn simulate(inputs: &AmortizationInputs) -> AmortizationOutcome {
    let monthly_rate = inputs.interest_rate / 100.0 / 12.0;
    let offset_rate = inputs.offset_income_rate / 100.0 / 12.0;
    let rental_growth = 1.0 + inputs.rental_growth_rate / 100.0;
    // Exclusive end of the transition phase.
    let working_end = inputs.retirement_date.add_years(inputs.years_working as i32);

    let window = AMORTIZATION_START.months_until(AMORTIZATION_END) as usize + 1;
    let mut schedule = Vec::with_capacity(window);

    let mut rental = inputs.initial_rental_income;
    let mut loan = inputs.principal;
    let mut offset = inputs.initial_offset_balance;
    // Computed once, at the first post-career month with a loan remaining,
    // and reused verbatim for the rest of the run.
    let mut refinanced_payment: Option<f64> = None;

    let mut month = AMORTIZATION_START;
    while month <= AMORTIZATION_END {
        if month.is_january() && month.year() > AMORTIZATION_START.year() {
            rental *= rental_growth;
        }

        let is_career = month < inputs.retirement_date;
        let is_transition = !is_career && inputs.continue_working && month < working_end;

        let salary = if is_career {
            inputs.monthly_salary
        } else if is_transition {
            inputs.transitional_salary
        } else {
            0.0
        };
        let offset_income = if inputs.consider_offset_income {
            (offset - loan).max(0.0) * offset_rate
        } else {
            0.0
        };
        let total_incoming = rental + salary + offset_income;

        let expenses = if is_career || is_transition {
            inputs.current_living_expenses
        } else {
            inputs.retirement_living_expenses
        };

        let beginning_balance = loan;
        let mut repayment = 0.0;
        let mut interest = 0.0;
        if loan > 0.0 {
            interest = (loan - offset).max(0.0) * monthly_rate;
            let target = if inputs.is_refinanced && !is_career {
                *refinanced_payment.get_or_insert_with(|| {
                    standard_monthly_repayment(loan, inputs.interest_rate)
                })
            } else {
                inputs.monthly_repayment
            };
            // Never pay more than would clear the loan.
            repayment = target.min(loan + interest);
        }
        let ending_balance = (loan - (repayment - interest)).max(0.0);

        let total_outgoing = repayment + expenses;
        let total_shortfall = total_outgoing - total_incoming;
        let next_offset = offset + total_incoming - total_outgoing;

        schedule.push(AmortizationRow {
            month,
            date_label: month.label(),
            beginning_balance,
            repayment,
            rental_income: rental,
            offset_income,
            total_incoming,
            total_outgoing,
            total_shortfall,
            ending_balance,
            offset_balance: next_offset,
            is_retirement_row: month == inputs.retirement_date,
        });

        loan = ending_balance;
        offset = next_offset;
        month = month.next();
    }

    AmortizationOutcome {
        schedule,
        actual_monthly_repayment: refinanced_payment.unwrap_or(inputs.monthly_repayment),
    }
}
