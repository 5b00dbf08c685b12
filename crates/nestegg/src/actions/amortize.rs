//! `nestegg amortize` - run and print the amortization schedule.

use color_eyre::Result;
use tracing::info;

use nestegg_core::amortization::simulate;

use crate::scenario::Scenario;
use crate::util::format::{format_currency, format_currency_short};

pub fn run(scenario: &Scenario, rows: Option<usize>, json: bool) -> Result<()> {
    let outcome = simulate(&scenario.amortization);

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(());
    }

    info!(months = outcome.schedule.len(), "amortization schedule complete");

    println!(
        "Monthly repayment in effect: {}",
        format_currency(outcome.actual_monthly_repayment)
    );
    println!();
    println!(
        "{:<9} {:>12} {:>10} {:>9} {:>9} {:>11} {:>12} {:>12}",
        "Month", "Loan", "Repay", "Rent", "Offset$", "Shortfall", "End loan", "Offset"
    );

    let limit = rows.unwrap_or(outcome.schedule.len());
    for row in outcome.schedule.iter().take(limit) {
        let marker = if row.is_retirement_row { "  << retirement" } else { "" };
        println!(
            "{:<9} {:>12} {:>10} {:>9} {:>9} {:>11} {:>12} {:>12}{}",
            row.date_label,
            format_currency_short(row.beginning_balance),
            format_currency_short(row.repayment),
            format_currency_short(row.rental_income),
            format_currency_short(row.offset_income),
            format_currency_short(row.total_shortfall),
            format_currency_short(row.ending_balance),
            format_currency_short(row.offset_balance),
            marker,
        );
    }
    if limit < outcome.schedule.len() {
        println!("... {} more rows", outcome.schedule.len() - limit);
    }

    if let Some(last) = outcome.schedule.last() {
        println!();
        println!("Final loan balance:   {}", format_currency(last.ending_balance));
        println!("Final offset balance: {}", format_currency(last.offset_balance));
    }

    Ok(())
}
