//! Tests for the fixed-window amortization schedule
//!
//! These tests verify that:
//! - The window never changes length, whatever the inputs
//! - Loan balances and repayments respect the no-overpayment rule
//! - Phase boundaries switch income and expenses at the right months
//! - The refinanced payment is computed once and held constant
//! - The offset balance is honest bookkeeping, negative included

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::amortization::{
    AMORTIZATION_END, AMORTIZATION_START, simulate, standard_monthly_repayment,
};
use crate::model::AmortizationInputs;
use crate::month::Month;

/// Test that the schedule always spans Jan 2025 through Dec 2039.
#[test]
fn test_schedule_length_is_window_length() {
    let variants = [
        AmortizationInputs::default(),
        AmortizationInputs {
            principal: 0.0,
            ..Default::default()
        },
        AmortizationInputs {
            principal: 50_000_000.0,
            monthly_repayment: 100.0,
            ..Default::default()
        },
        AmortizationInputs {
            retirement_date: Month::new(2020, 1),
            ..Default::default()
        },
        AmortizationInputs {
            retirement_date: Month::new(2050, 1),
            ..Default::default()
        },
    ];
    for inputs in variants {
        let outcome = simulate(&inputs);
        assert_eq!(outcome.schedule.len(), 180, "window must not depend on inputs");
        assert_eq!(outcome.schedule[0].month, AMORTIZATION_START);
        assert_eq!(outcome.schedule[179].month, AMORTIZATION_END);
    }
}

/// Test that the repayment never exceeds balance plus interest and the loan
/// never goes negative, even under an absurd repayment setting.
#[test]
fn test_repayment_never_overpays() {
    let inputs = AmortizationInputs {
        monthly_repayment: 500_000.0,
        initial_offset_balance: 20_000.0,
        ..Default::default()
    };
    let monthly_rate = inputs.interest_rate / 100.0 / 12.0;
    let outcome = simulate(&inputs);

    let mut offset = inputs.initial_offset_balance;
    for row in &outcome.schedule {
        let interest = (row.beginning_balance - offset).max(0.0) * monthly_rate;
        assert!(
            row.repayment <= row.beginning_balance + interest + 1e-9,
            "{}: repayment {:.2} exceeds balance {:.2} plus interest {:.2}",
            row.date_label,
            row.repayment,
            row.beginning_balance,
            interest
        );
        assert!(row.ending_balance >= 0.0, "{}: loan went negative", row.date_label);
        offset = row.offset_balance;
    }
}

/// Test that rent escalates every January after the start year and holds
/// in between.
#[test]
fn test_rental_escalates_every_january_after_start_year() {
    let inputs = AmortizationInputs {
        initial_rental_income: 1_000.0,
        rental_growth_rate: 10.0,
        ..Default::default()
    };
    let schedule = simulate(&inputs).schedule;
    // Jan 2025 is the start month: no escalation yet.
    assert!((schedule[0].rental_income - 1_000.0).abs() < 1e-9);
    assert!((schedule[11].rental_income - 1_000.0).abs() < 1e-9);
    // Jan 2026 escalates, then holds until the next January.
    assert!((schedule[12].rental_income - 1_100.0).abs() < 1e-9);
    assert!((schedule[23].rental_income - 1_100.0).abs() < 1e-9);
    assert!((schedule[24].rental_income - 1_210.0).abs() < 1e-9);
}

/// Test that career, transition, and retirement phases switch income and
/// expenses at the right months, with the retirement flag on exactly one row.
#[test]
fn test_phase_boundaries_switch_income_and_expenses() {
    let inputs = AmortizationInputs {
        principal: 0.0,
        initial_offset_balance: 0.0,
        initial_rental_income: 0.0,
        rental_growth_rate: 0.0,
        consider_offset_income: false,
        monthly_salary: 9_000.0,
        transitional_salary: 4_000.0,
        current_living_expenses: 3_000.0,
        retirement_living_expenses: 2_000.0,
        continue_working: true,
        years_working: 2,
        retirement_date: Month::new(2030, 6),
        ..Default::default()
    };
    let outcome = simulate(&inputs);
    let row_at = |month: Month| {
        let idx = AMORTIZATION_START.months_until(month) as usize;
        &outcome.schedule[idx]
    };

    // Career: full salary, working expenses.
    let career = row_at(Month::new(2030, 5));
    assert!((career.total_incoming - 9_000.0).abs() < 1e-9);
    assert!((career.total_outgoing - 3_000.0).abs() < 1e-9);

    // The retirement month itself starts the transition.
    let transition = row_at(Month::new(2030, 6));
    assert!(transition.is_retirement_row);
    assert!((transition.total_incoming - 4_000.0).abs() < 1e-9);
    assert!((transition.total_outgoing - 3_000.0).abs() < 1e-9);

    // Two years on, exclusive end: May 2032 still transitional.
    let last_transition = row_at(Month::new(2032, 5));
    assert!((last_transition.total_incoming - 4_000.0).abs() < 1e-9);

    // Fully retired: no salary, retirement expenses.
    let retired = row_at(Month::new(2032, 6));
    assert!(retired.total_incoming.abs() < 1e-9);
    assert!((retired.total_outgoing - 2_000.0).abs() < 1e-9);

    let flagged = outcome.schedule.iter().filter(|r| r.is_retirement_row).count();
    assert_eq!(flagged, 1);
}

/// Test that continue_working off skips the transition phase entirely.
#[test]
fn test_transition_requires_continue_working() {
    let inputs = AmortizationInputs {
        principal: 0.0,
        initial_offset_balance: 0.0,
        initial_rental_income: 0.0,
        consider_offset_income: false,
        monthly_salary: 9_000.0,
        transitional_salary: 4_000.0,
        continue_working: false,
        years_working: 5,
        retirement_date: Month::new(2030, 6),
        ..Default::default()
    };
    let outcome = simulate(&inputs);
    let idx = AMORTIZATION_START.months_until(Month::new(2030, 6)) as usize;
    assert_eq!(outcome.schedule[idx].total_incoming, 0.0);
}

/// Test that without a refinance the configured repayment is reported back.
#[test]
fn test_actual_repayment_passthrough_without_refinance() {
    let inputs = AmortizationInputs {
        is_refinanced: false,
        ..Default::default()
    };
    let outcome = simulate(&inputs);
    assert_eq!(outcome.actual_monthly_repayment, inputs.monthly_repayment);
}

/// Test that the refinanced payment is computed from the balance at the
/// first post-career month and reused bit-identically afterwards.
#[test]
fn test_refinanced_payment_cached_once() {
    // Repayment below interest-only, so the balance drifts upward during
    // the career phase and a recomputation later would give a different
    // payment.
    let inputs = AmortizationInputs {
        is_refinanced: true,
        principal: 900_000.0,
        monthly_repayment: 4_000.0,
        interest_rate: 6.37,
        initial_offset_balance: 0.0,
        consider_offset_income: false,
        continue_working: false,
        retirement_date: Month::new(2030, 6),
        ..Default::default()
    };
    let outcome = simulate(&inputs);

    let trigger = AMORTIZATION_START.months_until(Month::new(2030, 6)) as usize;
    let expected =
        standard_monthly_repayment(outcome.schedule[trigger].beginning_balance, 6.37);
    assert_eq!(outcome.actual_monthly_repayment, expected);

    for row in &outcome.schedule[..trigger] {
        assert_eq!(row.repayment, 4_000.0, "{}: career months keep the configured repayment", row.date_label);
    }
    for row in &outcome.schedule[trigger..] {
        if row.beginning_balance > 0.0 && row.repayment < row.beginning_balance {
            assert_eq!(row.repayment, expected, "{}: refinanced payment drifted", row.date_label);
        }
    }
}

/// Test that offset interest is credited only on the surplus over the loan,
/// and only when enabled.
#[test]
fn test_offset_income_only_on_surplus_when_enabled() {
    let base = AmortizationInputs {
        principal: 200_000.0,
        initial_offset_balance: 500_000.0,
        offset_income_rate: 6.0,
        consider_offset_income: true,
        ..Default::default()
    };
    // Surplus of 300k at 6%/12 earns 1,500 in month one.
    let first = &simulate(&base).schedule[0];
    assert!((first.offset_income - 1_500.0).abs() < 1e-9);

    let disabled = AmortizationInputs {
        consider_offset_income: false,
        ..base.clone()
    };
    assert_eq!(simulate(&disabled).schedule[0].offset_income, 0.0);

    let underwater = AmortizationInputs {
        initial_offset_balance: 100_000.0,
        ..base
    };
    assert_eq!(simulate(&underwater).schedule[0].offset_income, 0.0);
}

/// Test that an offset covering the loan eliminates interest, so every
/// repayment is pure principal.
#[test]
fn test_full_offset_eliminates_interest() {
    let inputs = AmortizationInputs {
        principal: 100_000.0,
        initial_offset_balance: 1_000_000.0,
        monthly_repayment: 10_000.0,
        monthly_salary: 50_000.0,
        ..Default::default()
    };
    let outcome = simulate(&inputs);
    assert!((outcome.schedule[0].ending_balance - 90_000.0).abs() < 1e-9);
    assert!((outcome.schedule[9].beginning_balance - 10_000.0).abs() < 1e-6);
    assert_eq!(outcome.schedule[9].repayment, 10_000.0);
    assert_eq!(outcome.schedule[10].beginning_balance, 0.0);
    assert_eq!(outcome.schedule[10].repayment, 0.0);
}

/// Test that the offset balance is plain running bookkeeping and is allowed
/// to go negative when the household overspends.
#[test]
fn test_offset_balance_goes_negative_unfloored() {
    let inputs = AmortizationInputs {
        principal: 0.0,
        initial_offset_balance: 5_000.0,
        initial_rental_income: 0.0,
        consider_offset_income: false,
        monthly_salary: 0.0,
        transitional_salary: 0.0,
        continue_working: false,
        current_living_expenses: 8_000.0,
        retirement_living_expenses: 8_000.0,
        ..Default::default()
    };
    let outcome = simulate(&inputs);

    let first = &outcome.schedule[0];
    let expected = 5_000.0 + first.total_incoming - first.total_outgoing;
    assert!((first.offset_balance - expected).abs() < 1e-9);
    assert!((first.total_shortfall - 8_000.0).abs() < 1e-9);

    let last = outcome.schedule.last().unwrap();
    assert!(
        last.offset_balance < -1_000_000.0,
        "offset should run deeply negative, got {:.2}",
        last.offset_balance
    );
}

/// Test that simulation is pure: same inputs, same output, no drift across
/// randomized scenarios.
#[test]
fn test_random_inputs_keep_window_and_purity() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..25 {
        let inputs = AmortizationInputs {
            principal: rng.random_range(0.0..2_000_000.0),
            interest_rate: rng.random_range(0.0..12.0),
            monthly_repayment: rng.random_range(0.0..20_000.0),
            initial_offset_balance: rng.random_range(0.0..2_000_000.0),
            initial_rental_income: rng.random_range(0.0..5_000.0),
            rental_growth_rate: rng.random_range(0.0..8.0),
            monthly_salary: rng.random_range(0.0..30_000.0),
            transitional_salary: rng.random_range(0.0..15_000.0),
            current_living_expenses: rng.random_range(0.0..15_000.0),
            retirement_living_expenses: rng.random_range(0.0..15_000.0),
            is_refinanced: rng.random_bool(0.5),
            consider_offset_income: rng.random_bool(0.5),
            offset_income_rate: rng.random_range(0.0..8.0),
            continue_working: rng.random_bool(0.5),
            years_working: rng.random_range(0u32..=10),
            retirement_date: Month::new(
                rng.random_range(2024i16..=2041),
                rng.random_range(1i8..=12),
            ),
            net_income: 0.0,
        };
        let a = simulate(&inputs);
        let b = simulate(&inputs);
        assert_eq!(a, b);
        assert_eq!(a.schedule.len(), 180);
        for row in &a.schedule {
            assert!(row.ending_balance >= 0.0);
            assert!(
                (row.total_shortfall - (row.total_outgoing - row.total_incoming)).abs() < 1e-9
            );
        }
    }
}
