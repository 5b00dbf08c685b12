//! `nestegg optimize` - goal-seeks over the amortization schedule.

use clap::Subcommand;
use color_eyre::Result;
use tracing::debug;

use nestegg_core::optimization::{
    SearchOutcome, solve_max_expenditure, solve_secure_offset, solve_working_plan,
};

use crate::scenario::Scenario;
use crate::util::format::format_currency;

/// Which value to solve for.
#[derive(Subcommand, Debug, Clone, Copy)]
pub enum Goal {
    /// Largest affordable monthly expenditure
    Expenditure,
    /// Fewest post-retirement working years and the income they require
    WorkingPlan,
    /// Smallest starting offset balance that never runs dry
    Offset,
}

pub fn run(scenario: &Scenario, goal: Goal, json: bool) -> Result<()> {
    let inputs = &scenario.amortization;
    match goal {
        Goal::Expenditure => {
            let solved = solve_max_expenditure(inputs);
            report(&solved, json, "Affordable monthly expenditure")
        }
        Goal::WorkingPlan => {
            let plan = solve_working_plan(inputs);
            if json {
                println!("{}", serde_json::to_string_pretty(&plan)?);
                return Ok(());
            }
            println!("Working years needed: {}", plan.years_working);
            println!(
                "Net income required:  {} per month",
                format_currency(plan.required_net_income)
            );
            if !plan.income_search.feasible {
                println!("(no income inside the search range funds the plan; showing the bound)");
            }
            Ok(())
        }
        Goal::Offset => {
            let solved = solve_secure_offset(inputs);
            report(&solved, json, "Starting offset balance required")
        }
    }
}

fn report(solved: &SearchOutcome, json: bool, label: &str) -> Result<()> {
    debug!(
        iterations = solved.iterations,
        feasible = solved.feasible,
        "search finished"
    );
    if json {
        println!("{}", serde_json::to_string_pretty(solved)?);
        return Ok(());
    }
    println!("{label}: {}", format_currency(solved.value));
    if !solved.feasible {
        println!("(no feasible value inside the search range; showing the bound)");
    }
    Ok(())
}
