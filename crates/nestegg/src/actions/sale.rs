//! `nestegg sale` - CGT assessment plus the proceeds drawdown.

use color_eyre::Result;
use tracing::info;

use nestegg_core::sale::project;

use crate::scenario::Scenario;
use crate::util::format::{format_currency, format_currency_short};

pub fn run(scenario: &Scenario, rows: Option<usize>, json: bool) -> Result<()> {
    let outcome = project(&scenario.sale, &scenario.drawdown_plan);

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(());
    }

    info!(months = outcome.schedule.len(), "sale projection complete");

    let cgt = &outcome.cgt;
    println!("Adjusted cost base: {}", format_currency(cgt.adjusted_cost_base));
    println!("Taxable gain:       {}", format_currency(cgt.taxable_gain));
    println!("Per-owner gain:     {}", format_currency(cgt.per_owner_gain));
    println!("Person 1 tax:       {}", format_currency(cgt.person1_tax));
    println!("Person 2 tax:       {}", format_currency(cgt.person2_tax));
    println!("Total tax:          {}", format_currency(cgt.total_tax));
    println!("Net proceeds:       {}", format_currency(cgt.net_proceeds));
    println!(
        "Outstanding loan:   {} (not deducted from proceeds)",
        format_currency(scenario.sale.outstanding_loan)
    );

    println!();
    println!("Proceeds last: {}", outcome.duration);
    if let Some(label) = &outcome.depletion_date_label {
        println!("Depleted in:   {label}");
    }

    if !outcome.schedule.is_empty() {
        println!();
        println!(
            "{:<9} {:>12} {:>10} {:>10} {:>12} {:>10}",
            "Month", "Start", "Interest", "Draw", "End", "Rent lost"
        );
        let limit = rows.unwrap_or(outcome.schedule.len());
        for row in outcome.schedule.iter().take(limit) {
            println!(
                "{:<9} {:>12} {:>10} {:>10} {:>12} {:>10}",
                row.date_label,
                format_currency_short(row.start_balance),
                format_currency_short(row.interest_earned),
                format_currency_short(row.drawdown),
                format_currency_short(row.end_balance),
                format_currency_short(row.rent_lost),
            );
        }
        if limit < outcome.schedule.len() {
            println!("... {} more rows", outcome.schedule.len() - limit);
        }
        println!();
        println!(
            "Rent foregone over the schedule: {}",
            format_currency(outcome.total_rent_lost)
        );
    }

    Ok(())
}
