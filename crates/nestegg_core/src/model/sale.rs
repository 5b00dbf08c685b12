use std::fmt;

use serde::{Deserialize, Serialize};

use crate::month::Month;

/// Inputs to the property-sale assessment.
///
/// The property is owned 50/50, so the discounted gain splits evenly and
/// each owner's share is taxed at their own marginal rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SaleInputs {
    pub sale_price: f64,
    /// Loan still owed on the property. Reported alongside the assessment
    /// but not deducted from the proceeds.
    pub outstanding_loan: f64,
    pub cost_base: f64,
    /// Depreciation already claimed; comes back off the cost base.
    pub depreciation_claimed: f64,
    /// Agent fees, conveyancing and the rest.
    pub selling_costs: f64,
    /// Marginal tax rate for each owner, percent.
    pub person1_tax_rate: f64,
    pub person2_tax_rate: f64,
    /// CGT discount applied to each owner's share, percent.
    pub cgt_discount_rate: f64,
}

impl Default for SaleInputs {
    fn default() -> Self {
        Self {
            sale_price: 1_000_000.0,
            outstanding_loan: 400_000.0,
            cost_base: 600_000.0,
            depreciation_claimed: 50_000.0,
            selling_costs: 25_000.0,
            person1_tax_rate: 45.0,
            person2_tax_rate: 37.0,
            cgt_discount_rate: 50.0,
        }
    }
}

/// Inputs to the proceeds-depletion walk that follows a sale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrawdownPlanInputs {
    /// Return earned on the un-drawn proceeds, percent p.a.
    pub annual_interest_rate: f64,
    pub monthly_drawdown: f64,
    pub start_month: Month,
    /// Rent the household stops receiving once the property is sold.
    pub net_monthly_rent: f64,
    /// Applied to the foregone rent on each anniversary of the start.
    pub net_rent_growth_rate: f64,
}

impl Default for DrawdownPlanInputs {
    fn default() -> Self {
        Self {
            annual_interest_rate: 5.0,
            monthly_drawdown: 5_000.0,
            start_month: Month::new(2026, 1),
            net_monthly_rent: 2_200.0,
            net_rent_growth_rate: 3.0,
        }
    }
}

/// Capital-gains breakdown for one sale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CgtAssessment {
    /// Cost base after clawing back claimed depreciation.
    pub adjusted_cost_base: f64,
    pub taxable_gain: f64,
    /// Each owner's share of the gain after the CGT discount.
    pub per_owner_gain: f64,
    pub person1_tax: f64,
    pub person2_tax: f64,
    pub total_tax: f64,
    /// Sale price less selling costs and both owners' tax.
    pub net_proceeds: f64,
}

/// One month of the proceeds drawdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleDrawdownRow {
    pub month: Month,
    pub date_label: String,
    pub start_balance: f64,
    pub interest_earned: f64,
    pub drawdown: f64,
    pub end_balance: f64,
    /// Rent foregone this month by not holding the property.
    pub rent_lost: f64,
}

/// How long the sale proceeds last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DepletionDuration {
    Lasts { years: u32, months: u32 },
    DoesNotDeplete,
}

impl fmt::Display for DepletionDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DepletionDuration::DoesNotDeplete => write!(f, "Does not deplete"),
            DepletionDuration::Lasts { years, months } => {
                let year_word = if *years == 1 { "year" } else { "years" };
                let month_word = if *months == 1 { "month" } else { "months" };
                if *years == 0 {
                    write!(f, "{months} {month_word}")
                } else if *months == 0 {
                    write!(f, "{years} {year_word}")
                } else {
                    write!(f, "{years} {year_word} {months} {month_word}")
                }
            }
        }
    }
}

/// Complete output of one sale projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleOutcome {
    pub cgt: CgtAssessment,
    pub schedule: Vec<SaleDrawdownRow>,
    /// Months until the proceeds hit zero, when they do.
    pub months_to_deplete: Option<u32>,
    /// Label of the month the balance hit zero.
    pub depletion_date_label: Option<String>,
    pub duration: DepletionDuration,
    /// Total rent foregone across the walked schedule.
    pub total_rent_lost: f64,
}
