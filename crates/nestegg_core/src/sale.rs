//! Property-sale capital gains assessment and net-proceeds depletion.
//!
//! [`assess`] is a one-shot CGT calculation for a 50/50-owned property:
//! claw claimed depreciation back off the cost base, discount each owner's
//! half of the gain, tax each share at that owner's marginal rate. The net
//! proceeds figure is gross of any loan payoff; the outstanding loan rides
//! along in the inputs for reporting only.
//!
//! [`project`] then walks those proceeds forward under a monthly drawdown,
//! tracking the rent the household gave up by selling.

use crate::model::{
    CgtAssessment, DepletionDuration, DrawdownPlanInputs, SaleDrawdownRow, SaleInputs, SaleOutcome,
};
use crate::month::Month;

/// Depletion walks stop here even if the balance never reaches zero.
const DEPLETION_CAP_MONTHS: u32 = 1200;

/// Assess the capital-gains position of a sale.
pub fn assess(sale: &SaleInputs) -> CgtAssessment {
    let adjusted_cost_base = (sale.cost_base - sale.depreciation_claimed).max(0.0);
    let taxable_gain = (sale.sale_price - sale.selling_costs - adjusted_cost_base).max(0.0);
    let per_owner_gain = taxable_gain * 0.5 * (1.0 - sale.cgt_discount_rate / 100.0);
    let person1_tax = per_owner_gain * sale.person1_tax_rate / 100.0;
    let person2_tax = per_owner_gain * sale.person2_tax_rate / 100.0;
    let total_tax = person1_tax + person2_tax;
    let net_proceeds = (sale.sale_price - sale.selling_costs - total_tax).max(0.0);

    CgtAssessment {
        adjusted_cost_base,
        taxable_gain,
        per_owner_gain,
        person1_tax,
        person2_tax,
        total_tax,
        net_proceeds,
    }
}

/// Assess the sale, then walk the proceeds under the drawdown plan.
pub fn project(sale: &SaleInputs, plan: &DrawdownPlanInputs) -> SaleOutcome {
    let cgt = assess(sale);
    let monthly_rate = plan.annual_interest_rate / 100.0 / 12.0;

    // No draw, or interest alone covers it: nothing to walk.
    if plan.monthly_drawdown <= 0.0 || cgt.net_proceeds * monthly_rate >= plan.monthly_drawdown {
        return SaleOutcome {
            cgt,
            schedule: Vec::new(),
            months_to_deplete: None,
            depletion_date_label: None,
            duration: DepletionDuration::DoesNotDeplete,
            total_rent_lost: 0.0,
        };
    }

    let rent_growth = 1.0 + plan.net_rent_growth_rate / 100.0;
    let mut schedule = Vec::new();
    let mut balance = cgt.net_proceeds;
    let mut rent = plan.net_monthly_rent;
    let mut total_rent_lost = 0.0;
    let mut month = plan.start_month;
    let mut m: u32 = 0;
    let mut depleted: Option<(u32, Month)> = None;

    while balance > 0.0 && m < DEPLETION_CAP_MONTHS {
        if m > 0 && m % 12 == 0 {
            rent *= rent_growth;
        }

        let interest_earned = balance * monthly_rate;
        let available = balance + interest_earned;
        let drawdown = plan.monthly_drawdown.min(available);
        let end_balance = (available - drawdown).max(0.0);
        total_rent_lost += rent;

        schedule.push(SaleDrawdownRow {
            month,
            date_label: month.label(),
            start_balance: balance,
            interest_earned,
            drawdown,
            end_balance,
            rent_lost: rent,
        });

        m += 1;
        if end_balance <= 0.0 {
            depleted = Some((m, month));
        }
        balance = end_balance;
        month = month.next();
    }

    let (months_to_deplete, depletion_date_label) = match depleted {
        Some((months, last_month)) => (Some(months), Some(last_month.label())),
        None => (None, None),
    };
    let duration = match months_to_deplete {
        Some(months) => DepletionDuration::Lasts {
            years: months / 12,
            months: months % 12,
        },
        None => DepletionDuration::DoesNotDeplete,
    };

    SaleOutcome {
        cgt,
        schedule,
        months_to_deplete,
        depletion_date_label,
        duration,
        total_rent_lost,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_depreciation_claws_back_cost_base() {
        let sale = SaleInputs {
            cost_base: 600_000.0,
            depreciation_claimed: 50_000.0,
            ..Default::default()
        };
        assert_eq!(assess(&sale).adjusted_cost_base, 550_000.0);

        let over_claimed = SaleInputs {
            cost_base: 40_000.0,
            depreciation_claimed: 90_000.0,
            ..Default::default()
        };
        assert_eq!(assess(&over_claimed).adjusted_cost_base, 0.0);
    }

    #[test]
    fn test_loss_making_sale_has_no_gain_or_tax() {
        let sale = SaleInputs {
            sale_price: 500_000.0,
            cost_base: 800_000.0,
            depreciation_claimed: 0.0,
            selling_costs: 20_000.0,
            ..Default::default()
        };
        let cgt = assess(&sale);
        assert_eq!(cgt.taxable_gain, 0.0);
        assert_eq!(cgt.total_tax, 0.0);
        assert!((cgt.net_proceeds - 480_000.0).abs() < 1e-9);
    }

    #[test]
    fn test_duration_labels() {
        let lasts = |years, months| DepletionDuration::Lasts { years, months }.to_string();
        assert_eq!(lasts(0, 10), "10 months");
        assert_eq!(lasts(2, 1), "2 years 1 month");
        assert_eq!(lasts(1, 0), "1 year");
        assert_eq!(lasts(3, 7), "3 years 7 months");
        assert_eq!(DepletionDuration::DoesNotDeplete.to_string(), "Does not deplete");
    }
}
