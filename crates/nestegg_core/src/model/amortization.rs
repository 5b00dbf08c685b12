use serde::{Deserialize, Serialize};

use crate::month::Month;

/// Inputs to the fixed-window amortization simulator.
///
/// Rate fields are annual percentages (`6.0` means 6% p.a.); the simulator
/// derives monthly rates internally. Dollar fields are month-denominated
/// unless the name says otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AmortizationInputs {
    /// Loan balance at the start of the window.
    pub principal: f64,
    pub interest_rate: f64,
    /// Repayment targeted each month while the loan is alive.
    pub monthly_repayment: f64,
    pub initial_offset_balance: f64,
    pub initial_rental_income: f64,
    /// Applied to the rent every January after the first year.
    pub rental_growth_rate: f64,
    /// Net salary during the career phase.
    pub monthly_salary: f64,
    /// Net income during the post-retirement working years.
    pub transitional_salary: f64,
    pub current_living_expenses: f64,
    pub retirement_living_expenses: f64,
    /// Switch to a standard 25-year amortizing payment once the career
    /// phase ends.
    pub is_refinanced: bool,
    /// Credit interest on the slice of the offset exceeding the loan.
    pub consider_offset_income: bool,
    pub offset_income_rate: f64,
    /// Keep working part-time for `years_working` years past retirement.
    pub continue_working: bool,
    pub years_working: u32,
    pub retirement_date: Month,
    /// Slot the working-plan solver reports into; the simulator never
    /// reads it.
    pub net_income: f64,
}

impl Default for AmortizationInputs {
    fn default() -> Self {
        Self {
            principal: 900_000.0,
            interest_rate: 6.0,
            monthly_repayment: 6_800.0,
            initial_offset_balance: 1_000_000.0,
            initial_rental_income: 2_500.0,
            rental_growth_rate: 3.0,
            monthly_salary: 12_000.0,
            transitional_salary: 6_000.0,
            current_living_expenses: 7_000.0,
            retirement_living_expenses: 5_500.0,
            is_refinanced: false,
            consider_offset_income: true,
            offset_income_rate: 4.5,
            continue_working: true,
            years_working: 5,
            retirement_date: Month::new(2030, 6),
            net_income: 0.0,
        }
    }
}

/// One calendar month of the amortization schedule.
///
/// `offset_balance` is the end-of-month figure and is deliberately not
/// floored at zero: a negative offset is the signal that the plan does not
/// fund itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmortizationRow {
    pub month: Month,
    /// Pre-rendered form of `month`, e.g. "Jun 2030".
    pub date_label: String,
    /// Loan balance at the start of the month.
    pub beginning_balance: f64,
    pub repayment: f64,
    pub rental_income: f64,
    /// Interest credited on the offset surplus, zero unless enabled.
    pub offset_income: f64,
    pub total_incoming: f64,
    pub total_outgoing: f64,
    /// Outgoing minus incoming; positive when the month ran short.
    pub total_shortfall: f64,
    /// Loan balance at the end of the month, floored at zero.
    pub ending_balance: f64,
    pub offset_balance: f64,
    /// True only for the retirement month itself.
    pub is_retirement_row: bool,
}

/// Complete output of one amortization run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmortizationOutcome {
    pub schedule: Vec<AmortizationRow>,
    /// The repayment in effect at the end of the run: the cached refinanced
    /// payment when one was computed, otherwise the configured repayment.
    pub actual_monthly_repayment: f64,
}
