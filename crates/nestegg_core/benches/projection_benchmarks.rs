//! Criterion benchmarks for the nestegg_core projection engines
//!
//! Run with: cargo bench -p nestegg_core

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use nestegg_core::amortization::simulate;
use nestegg_core::model::{
    AmortizationInputs, DrawdownPlanInputs, SaleInputs, SuperCalcMode, SuperInputs,
};
use nestegg_core::optimization::{solve_max_expenditure, solve_secure_offset, solve_working_plan};
use nestegg_core::sale::project;
use nestegg_core::superannuation::calculate;

fn bench_amortization(c: &mut Criterion) {
    let inputs = AmortizationInputs::default();
    c.bench_function("amortization_180_months", |b| {
        b.iter(|| simulate(black_box(&inputs)));
    });

    let refinanced = AmortizationInputs {
        is_refinanced: true,
        ..Default::default()
    };
    c.bench_function("amortization_refinanced", |b| {
        b.iter(|| simulate(black_box(&refinanced)));
    });
}

fn bench_superannuation(c: &mut Criterion) {
    let balance = SuperInputs::default();
    c.bench_function("super_balance_projection", |b| {
        b.iter(|| calculate(black_box(&balance)));
    });

    let contribution = SuperInputs {
        mode: SuperCalcMode::Contribution,
        target_balance: Some(2_000_000.0),
        ..Default::default()
    };
    c.bench_function("super_contribution_solve", |b| {
        b.iter(|| calculate(black_box(&contribution)));
    });
}

fn bench_sale(c: &mut Criterion) {
    let sale = SaleInputs::default();
    let plan = DrawdownPlanInputs::default();
    c.bench_function("sale_cgt_and_depletion", |b| {
        b.iter(|| project(black_box(&sale), black_box(&plan)));
    });
}

fn bench_goal_seeks(c: &mut Criterion) {
    let inputs = AmortizationInputs::default();
    c.bench_function("solve_max_expenditure", |b| {
        b.iter(|| solve_max_expenditure(black_box(&inputs)));
    });
    c.bench_function("solve_working_plan", |b| {
        b.iter(|| solve_working_plan(black_box(&inputs)));
    });
    c.bench_function("solve_secure_offset", |b| {
        b.iter(|| solve_secure_offset(black_box(&inputs)));
    });
}

criterion_group!(
    benches,
    bench_amortization,
    bench_superannuation,
    bench_sale,
    bench_goal_seeks,
);
criterion_main!(benches);
