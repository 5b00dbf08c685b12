//! Superannuation accumulation and drawdown for a two-person household.
//!
//! Both calc modes share one accumulation loop. `Balance` projects the
//! configured contributions forward. `Contribution` first solves the flat
//! monthly payment needed to reach the target with the closed-form annuity
//! identity, then replays the loop with that payment so the reported
//! breakdown includes the extra yearly lumps the closed form cannot see.
//! Each person accumulates on their own horizon; the combined breakdown
//! holds the earlier finisher's balance flat while the other keeps going.

use crate::model::{
    ContributionFrequency, PersonSuper, SuperBreakdownRow, SuperCalcMode, SuperDrawdownRow,
    SuperInputs, SuperOutcome,
};

/// Drawdown loops stop here even if the balance never reaches zero.
const DRAWDOWN_CAP_MONTHS: u32 = 1200;

/// Run the configured calc mode.
///
/// Returns `None` when the inputs cannot be computed yet: any NaN field, or
/// contribution mode without a target balance. That is the caller's cue to
/// wait for complete input rather than an error.
pub fn calculate(inputs: &SuperInputs) -> Option<SuperOutcome> {
    if !inputs_are_numeric(inputs) {
        return None;
    }

    let monthly_rate = inputs.net_annual_return / 100.0 / 12.0;

    let (fv_of_current_super, required_monthly_contribution, run1, run2) = match inputs.mode {
        SuperCalcMode::Contribution => {
            let target = inputs.target_balance?;
            let fv_total = future_value(&inputs.person1, monthly_rate)
                + future_value(&inputs.person2, monthly_rate);
            let annuity_total = annuity_factor(&inputs.person1, monthly_rate)
                + annuity_factor(&inputs.person2, monthly_rate);
            let required = if annuity_total > 0.0 {
                ((target - fv_total) / annuity_total).max(0.0)
            } else {
                0.0
            };
            // Replay with the solved payment so the breakdown shows the
            // actual path, extra lumps included.
            let replay = |person: &PersonSuper| {
                let mut solved = person.clone();
                solved.contribution_pre_50 = required;
                solved.contribution_post_50 = required;
                accumulate(&solved, monthly_rate, ContributionFrequency::Monthly)
            };
            (
                Some(fv_total),
                Some(required),
                replay(&inputs.person1),
                replay(&inputs.person2),
            )
        }
        SuperCalcMode::Balance => (
            None,
            None,
            accumulate(&inputs.person1, monthly_rate, inputs.contribution_frequency),
            accumulate(&inputs.person2, monthly_rate, inputs.contribution_frequency),
        ),
    };

    let breakdown = merge_breakdowns(&run1, &run2);
    let combined_final = run1.final_balance + run2.final_balance;
    let drawdown_start_age = inputs.person1.target_age.max(inputs.person2.target_age);
    let drawdown = drawdown_schedule(
        combined_final,
        drawdown_start_age,
        inputs.drawdown_annual_amount,
        inputs.drawdown_annual_return,
    );

    Some(SuperOutcome {
        person1_final: run1.final_balance,
        person2_final: run2.final_balance,
        combined_final,
        fv_of_current_super,
        required_monthly_contribution,
        breakdown,
        drawdown,
    })
}

/// One person's accumulation: the month-by-month path and closing balance.
struct AccumulationRun {
    rows: Vec<PersonMonth>,
    final_balance: f64,
}

struct PersonMonth {
    month_in_year: u8,
    age: u8,
    balance: f64,
}

fn accumulate(
    person: &PersonSuper,
    monthly_rate: f64,
    frequency: ContributionFrequency,
) -> AccumulationRun {
    if person.target_age <= person.current_age {
        return AccumulationRun {
            rows: Vec::new(),
            final_balance: person.current_balance,
        };
    }

    let horizon = (person.target_age - person.current_age) as u32 * 12;
    let mut rows = Vec::with_capacity(horizon as usize);
    let mut balance = person.current_balance;

    for m in 1..=horizon {
        balance *= 1.0 + monthly_rate;

        let age = person.current_age + ((m - 1) / 12) as u8;
        let contribution = if age < 50 {
            person.contribution_pre_50
        } else {
            person.contribution_post_50
        };
        let due = match frequency {
            ContributionFrequency::Monthly => true,
            ContributionFrequency::Yearly => m % 12 == 0,
        };
        if due {
            balance += contribution;
        }
        if m % 12 == 0 && m / 12 <= person.extra_contribution_years {
            balance += person.extra_yearly_contribution;
        }

        rows.push(PersonMonth {
            month_in_year: ((m - 1) % 12 + 1) as u8,
            age,
            balance,
        });
    }

    AccumulationRun {
        final_balance: balance,
        rows,
    }
}

/// Combine two accumulation paths into one breakdown.
///
/// The longer horizon drives the month and age columns; the shorter path
/// contributes its final balance once it runs out of rows.
fn merge_breakdowns(a: &AccumulationRun, b: &AccumulationRun) -> Vec<SuperBreakdownRow> {
    let (longer, shorter) = if a.rows.len() >= b.rows.len() { (a, b) } else { (b, a) };
    longer
        .rows
        .iter()
        .enumerate()
        .map(|(i, lead)| {
            let other = shorter
                .rows
                .get(i)
                .map(|row| row.balance)
                .unwrap_or(shorter.final_balance);
            SuperBreakdownRow {
                month_in_year: lead.month_in_year,
                age: lead.age,
                combined_balance: lead.balance + other,
            }
        })
        .collect()
}

fn drawdown_schedule(
    start_balance: f64,
    start_age: u8,
    annual_amount: f64,
    annual_return_pct: f64,
) -> Vec<SuperDrawdownRow> {
    if annual_amount <= 0.0 || start_balance <= 0.0 {
        return Vec::new();
    }

    let monthly_rate = annual_return_pct / 100.0 / 12.0;
    let monthly_draw = annual_amount / 12.0;
    let mut rows = Vec::new();
    let mut balance = start_balance;
    let mut m: u32 = 0;

    while balance > 0.0 && m < DRAWDOWN_CAP_MONTHS {
        let earnings = balance * monthly_rate;
        let available = balance + earnings;
        let drawdown = monthly_draw.min(available);
        let end_balance = available - drawdown;
        rows.push(SuperDrawdownRow {
            age: start_age.saturating_add((m / 12) as u8),
            month_in_year: (m % 12 + 1) as u8,
            start_balance: balance,
            drawdown,
            earnings,
            end_balance,
        });
        balance = end_balance;
        m += 1;
    }

    rows
}

fn months_to_target(person: &PersonSuper) -> u32 {
    if person.target_age <= person.current_age {
        0
    } else {
        (person.target_age - person.current_age) as u32 * 12
    }
}

fn future_value(person: &PersonSuper, monthly_rate: f64) -> f64 {
    person.current_balance * (1.0 + monthly_rate).powi(months_to_target(person) as i32)
}

/// Accumulated value of one unit contributed at the end of each month.
fn annuity_factor(person: &PersonSuper, monthly_rate: f64) -> f64 {
    let n = months_to_target(person);
    if monthly_rate == 0.0 {
        return n as f64;
    }
    ((1.0 + monthly_rate).powi(n as i32) - 1.0) / monthly_rate
}

fn inputs_are_numeric(inputs: &SuperInputs) -> bool {
    fn person_ok(person: &PersonSuper) -> bool {
        !(person.current_balance.is_nan()
            || person.contribution_pre_50.is_nan()
            || person.contribution_post_50.is_nan()
            || person.extra_yearly_contribution.is_nan())
    }
    person_ok(&inputs.person1)
        && person_ok(&inputs.person2)
        && !inputs.net_annual_return.is_nan()
        && !inputs.drawdown_annual_amount.is_nan()
        && !inputs.drawdown_annual_return.is_nan()
        && inputs.target_balance.is_none_or(|t| !t.is_nan())
}
