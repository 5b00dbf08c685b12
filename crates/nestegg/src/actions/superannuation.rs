//! `nestegg super` - project balances and the retirement drawdown.

use color_eyre::Result;
use color_eyre::eyre::bail;
use tracing::info;

use nestegg_core::superannuation::calculate;

use crate::scenario::Scenario;
use crate::util::format::{format_currency, format_currency_short};

pub fn run(scenario: &Scenario, json: bool) -> Result<()> {
    let Some(outcome) = calculate(&scenario.superannuation) else {
        bail!("superannuation inputs are incomplete (contribution mode needs target_balance)");
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(());
    }

    info!(
        months = outcome.breakdown.len(),
        drawdown_months = outcome.drawdown.len(),
        "superannuation projection complete"
    );

    if let Some(required) = outcome.required_monthly_contribution {
        println!("Required monthly contribution (each): {}", format_currency(required));
        if let Some(fv) = outcome.fv_of_current_super {
            println!("Future value of current balances:     {}", format_currency(fv));
        }
        println!();
    }

    println!("Person 1 at target age: {}", format_currency(outcome.person1_final));
    println!("Person 2 at target age: {}", format_currency(outcome.person2_final));
    println!("Combined:               {}", format_currency(outcome.combined_final));

    if !outcome.breakdown.is_empty() {
        println!();
        println!("Accumulation by year:");
        for row in outcome.breakdown.iter().filter(|r| r.month_in_year == 12) {
            println!(
                "  age {:>3}  {:>14}",
                row.age,
                format_currency_short(row.combined_balance)
            );
        }
    }

    if !outcome.drawdown.is_empty() {
        println!();
        println!("Drawdown ({} months):", outcome.drawdown.len());
        let milestones = outcome
            .drawdown
            .iter()
            .filter(|r| r.month_in_year == 12 || r.end_balance <= 0.0);
        for row in milestones {
            println!(
                "  age {:>3}  start {:>12}  draw {:>10}  end {:>12}",
                row.age,
                format_currency_short(row.start_balance),
                format_currency_short(row.drawdown),
                format_currency_short(row.end_balance),
            );
        }
    }

    Ok(())
}
