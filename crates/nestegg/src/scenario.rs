//! Scenario files and typed field overrides.
//!
//! A scenario is one JSON document holding the inputs for every
//! subcommand. Sections and fields missing from the file fall back to
//! their defaults, so a scenario only needs to spell out what differs.
//! `--set` overrides go through the core update types, which clamp values
//! into their supported ranges.

use std::fs;
use std::path::Path;

use color_eyre::Result;
use color_eyre::eyre::{WrapErr, bail, eyre};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use nestegg_core::Month;
use nestegg_core::bounds::{
    AmortizationUpdate, DrawdownPlanUpdate, PersonSlot, SaleUpdate, SuperUpdate,
};
use nestegg_core::model::{
    AmortizationInputs, ContributionFrequency, DrawdownPlanInputs, SaleInputs, SuperCalcMode,
    SuperInputs,
};

/// A complete household scenario.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Scenario {
    pub amortization: AmortizationInputs,
    pub superannuation: SuperInputs,
    pub sale: SaleInputs,
    pub drawdown_plan: DrawdownPlanInputs,
}

/// Load a scenario file, or the built-in defaults when no path is given.
pub fn load(path: Option<&Path>) -> Result<Scenario> {
    match path {
        Some(path) => {
            let text = fs::read_to_string(path)
                .wrap_err_with(|| format!("reading scenario {}", path.display()))?;
            let scenario: Scenario = serde_json::from_str(&text)
                .wrap_err_with(|| format!("parsing scenario {}", path.display()))?;
            info!("loaded scenario from {}", path.display());
            Ok(scenario)
        }
        None => {
            debug!("no scenario file given, using defaults");
            Ok(Scenario::default())
        }
    }
}

/// Write a scenario as pretty JSON.
pub fn save(path: &Path, scenario: &Scenario) -> Result<()> {
    let text = serde_json::to_string_pretty(scenario)?;
    fs::write(path, text).wrap_err_with(|| format!("writing scenario {}", path.display()))?;
    Ok(())
}

pub fn apply_amortization_overrides(scenario: &mut Scenario, sets: &[String]) -> Result<()> {
    for raw in sets {
        let (field, value) = split_assignment(raw)?;
        debug!("override: {raw}");
        amortization_update(field, value)?.apply(&mut scenario.amortization);
    }
    Ok(())
}

pub fn apply_super_overrides(scenario: &mut Scenario, sets: &[String]) -> Result<()> {
    for raw in sets {
        let (field, value) = split_assignment(raw)?;
        debug!("override: {raw}");
        super_update(field, value)?.apply(&mut scenario.superannuation);
    }
    Ok(())
}

/// Sale overrides cover both records: bare fields edit the sale itself,
/// `plan.`-prefixed fields edit the drawdown plan.
pub fn apply_sale_overrides(scenario: &mut Scenario, sets: &[String]) -> Result<()> {
    for raw in sets {
        let (field, value) = split_assignment(raw)?;
        debug!("override: {raw}");
        if let Some(plan_field) = field.strip_prefix("plan.") {
            plan_update(plan_field, value)?.apply(&mut scenario.drawdown_plan);
        } else {
            sale_update(field, value)?.apply(&mut scenario.sale);
        }
    }
    Ok(())
}

fn split_assignment(raw: &str) -> Result<(&str, &str)> {
    raw.split_once('=')
        .map(|(field, value)| (field.trim(), value.trim()))
        .ok_or_else(|| eyre!("expected FIELD=VALUE, got {raw:?}"))
}

fn parse_number(field: &str, value: &str) -> Result<f64> {
    let number: f64 = value
        .parse()
        .wrap_err_with(|| format!("{field}: expected a number, got {value:?}"))?;
    if !number.is_finite() {
        bail!("{field}: value must be finite");
    }
    Ok(number)
}

fn parse_flag(field: &str, value: &str) -> Result<bool> {
    value
        .parse()
        .wrap_err_with(|| format!("{field}: expected true or false, got {value:?}"))
}

fn parse_month(field: &str, value: &str) -> Result<Month> {
    value
        .parse()
        .wrap_err_with(|| format!("{field}: expected YYYY-MM, got {value:?}"))
}

fn amortization_update(field: &str, value: &str) -> Result<AmortizationUpdate> {
    let update = match field {
        "principal" => AmortizationUpdate::Principal(parse_number(field, value)?),
        "interest_rate" => AmortizationUpdate::InterestRate(parse_number(field, value)?),
        "monthly_repayment" => AmortizationUpdate::MonthlyRepayment(parse_number(field, value)?),
        "initial_offset_balance" => {
            AmortizationUpdate::InitialOffsetBalance(parse_number(field, value)?)
        }
        "initial_rental_income" => {
            AmortizationUpdate::InitialRentalIncome(parse_number(field, value)?)
        }
        "rental_growth_rate" => AmortizationUpdate::RentalGrowthRate(parse_number(field, value)?),
        "monthly_salary" => AmortizationUpdate::MonthlySalary(parse_number(field, value)?),
        "transitional_salary" => {
            AmortizationUpdate::TransitionalSalary(parse_number(field, value)?)
        }
        "current_living_expenses" => {
            AmortizationUpdate::CurrentLivingExpenses(parse_number(field, value)?)
        }
        "retirement_living_expenses" => {
            AmortizationUpdate::RetirementLivingExpenses(parse_number(field, value)?)
        }
        "offset_income_rate" => AmortizationUpdate::OffsetIncomeRate(parse_number(field, value)?),
        "net_income" => AmortizationUpdate::NetIncome(parse_number(field, value)?),
        "years_working" => AmortizationUpdate::YearsWorking(parse_number(field, value)? as u32),
        "retirement_date" => AmortizationUpdate::RetirementDate(parse_month(field, value)?),
        "is_refinanced" => AmortizationUpdate::IsRefinanced(parse_flag(field, value)?),
        "consider_offset_income" => {
            AmortizationUpdate::ConsiderOffsetIncome(parse_flag(field, value)?)
        }
        "continue_working" => AmortizationUpdate::ContinueWorking(parse_flag(field, value)?),
        _ => bail!("unknown amortization field {field:?}"),
    };
    Ok(update)
}

fn super_update(field: &str, value: &str) -> Result<SuperUpdate> {
    if let Some((person, person_field)) = field.split_once('.') {
        let slot = match person {
            "person1" => PersonSlot::First,
            "person2" => PersonSlot::Second,
            _ => bail!("unknown person {person:?} in {field:?}"),
        };
        let update = match person_field {
            "current_age" => SuperUpdate::CurrentAge(slot, parse_number(field, value)? as u8),
            "current_balance" => SuperUpdate::CurrentBalance(slot, parse_number(field, value)?),
            "contribution_pre_50" => {
                SuperUpdate::ContributionPre50(slot, parse_number(field, value)?)
            }
            "contribution_post_50" => {
                SuperUpdate::ContributionPost50(slot, parse_number(field, value)?)
            }
            "extra_yearly_contribution" => {
                SuperUpdate::ExtraYearlyContribution(slot, parse_number(field, value)?)
            }
            "extra_contribution_years" => {
                SuperUpdate::ExtraContributionYears(slot, parse_number(field, value)? as u32)
            }
            "target_age" => SuperUpdate::TargetAge(slot, parse_number(field, value)? as u8),
            _ => bail!("unknown super field {field:?}"),
        };
        return Ok(update);
    }

    let update = match field {
        "net_annual_return" => SuperUpdate::NetAnnualReturn(parse_number(field, value)?),
        "frequency" => SuperUpdate::Frequency(match value {
            "monthly" => ContributionFrequency::Monthly,
            "yearly" => ContributionFrequency::Yearly,
            _ => bail!("{field}: expected monthly or yearly, got {value:?}"),
        }),
        "mode" => SuperUpdate::Mode(match value {
            "contribution" => SuperCalcMode::Contribution,
            "balance" => SuperCalcMode::Balance,
            _ => bail!("{field}: expected contribution or balance, got {value:?}"),
        }),
        "target_balance" => SuperUpdate::TargetBalance(if value.eq_ignore_ascii_case("none") {
            None
        } else {
            Some(parse_number(field, value)?)
        }),
        "drawdown_annual_amount" => SuperUpdate::DrawdownAnnualAmount(parse_number(field, value)?),
        "drawdown_annual_return" => SuperUpdate::DrawdownAnnualReturn(parse_number(field, value)?),
        _ => bail!("unknown super field {field:?}"),
    };
    Ok(update)
}

fn sale_update(field: &str, value: &str) -> Result<SaleUpdate> {
    let update = match field {
        "sale_price" => SaleUpdate::SalePrice(parse_number(field, value)?),
        "outstanding_loan" => SaleUpdate::OutstandingLoan(parse_number(field, value)?),
        "cost_base" => SaleUpdate::CostBase(parse_number(field, value)?),
        "depreciation_claimed" => SaleUpdate::DepreciationClaimed(parse_number(field, value)?),
        "selling_costs" => SaleUpdate::SellingCosts(parse_number(field, value)?),
        "person1_tax_rate" => SaleUpdate::Person1TaxRate(parse_number(field, value)?),
        "person2_tax_rate" => SaleUpdate::Person2TaxRate(parse_number(field, value)?),
        "cgt_discount_rate" => SaleUpdate::CgtDiscountRate(parse_number(field, value)?),
        _ => bail!("unknown sale field {field:?}"),
    };
    Ok(update)
}

fn plan_update(field: &str, value: &str) -> Result<DrawdownPlanUpdate> {
    let update = match field {
        "annual_interest_rate" => {
            DrawdownPlanUpdate::AnnualInterestRate(parse_number(field, value)?)
        }
        "monthly_drawdown" => DrawdownPlanUpdate::MonthlyDrawdown(parse_number(field, value)?),
        "start_month" => DrawdownPlanUpdate::StartMonth(parse_month(field, value)?),
        "net_monthly_rent" => DrawdownPlanUpdate::NetMonthlyRent(parse_number(field, value)?),
        "net_rent_growth_rate" => {
            DrawdownPlanUpdate::NetRentGrowthRate(parse_number(field, value)?)
        }
        _ => bail!("unknown plan field {field:?}"),
    };
    Ok(update)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scenario_round_trips_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scenario.json");
        let mut scenario = Scenario::default();
        scenario.amortization.principal = 750_000.0;
        scenario.superannuation.person1.current_age = 44;
        scenario.drawdown_plan.start_month = Month::new(2027, 3);

        save(&path, &scenario).unwrap();
        let loaded = load(Some(&path)).unwrap();
        assert_eq!(loaded, scenario);
    }

    #[test]
    fn test_partial_scenario_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("partial.json");
        fs::write(&path, r#"{"amortization": {"principal": 123000.0}}"#).unwrap();

        let loaded = load(Some(&path)).unwrap();
        assert_eq!(loaded.amortization.principal, 123_000.0);
        assert_eq!(
            loaded.amortization.monthly_repayment,
            AmortizationInputs::default().monthly_repayment
        );
        assert_eq!(loaded.sale, SaleInputs::default());
    }

    #[test]
    fn test_amortization_overrides_parse_and_clamp() {
        let mut scenario = Scenario::default();
        apply_amortization_overrides(
            &mut scenario,
            &[
                "principal=750000".to_string(),
                "interest_rate=22".to_string(),
                "retirement_date=2031-03".to_string(),
                "is_refinanced=true".to_string(),
            ],
        )
        .unwrap();
        assert_eq!(scenario.amortization.principal, 750_000.0);
        // 22% is above the supported ceiling.
        assert_eq!(scenario.amortization.interest_rate, 15.0);
        assert_eq!(scenario.amortization.retirement_date, Month::new(2031, 3));
        assert!(scenario.amortization.is_refinanced);
    }

    #[test]
    fn test_bad_overrides_are_errors() {
        let mut scenario = Scenario::default();
        assert!(apply_amortization_overrides(&mut scenario, &["prinicpal=1".to_string()]).is_err());
        assert!(apply_amortization_overrides(&mut scenario, &["principal".to_string()]).is_err());
        assert!(
            apply_amortization_overrides(&mut scenario, &["principal=abc".to_string()]).is_err()
        );
        assert!(
            apply_amortization_overrides(&mut scenario, &["principal=NaN".to_string()]).is_err()
        );
        assert!(
            apply_amortization_overrides(&mut scenario, &["retirement_date=June".to_string()])
                .is_err()
        );
    }

    #[test]
    fn test_super_overrides_reach_the_right_person() {
        let mut scenario = Scenario::default();
        apply_super_overrides(
            &mut scenario,
            &[
                "person2.current_balance=90000".to_string(),
                "mode=contribution".to_string(),
                "target_balance=2500000".to_string(),
                "frequency=yearly".to_string(),
            ],
        )
        .unwrap();
        assert_eq!(scenario.superannuation.person2.current_balance, 90_000.0);
        assert_eq!(scenario.superannuation.person1.current_balance, 250_000.0);
        assert_eq!(scenario.superannuation.mode, SuperCalcMode::Contribution);
        assert_eq!(scenario.superannuation.target_balance, Some(2_500_000.0));
        assert_eq!(
            scenario.superannuation.contribution_frequency,
            ContributionFrequency::Yearly
        );

        apply_super_overrides(&mut scenario, &["target_balance=none".to_string()]).unwrap();
        assert_eq!(scenario.superannuation.target_balance, None);
    }

    #[test]
    fn test_sale_overrides_split_between_sale_and_plan() {
        let mut scenario = Scenario::default();
        apply_sale_overrides(
            &mut scenario,
            &[
                "selling_costs=30000".to_string(),
                "plan.monthly_drawdown=6000".to_string(),
                "plan.start_month=2027-07".to_string(),
            ],
        )
        .unwrap();
        assert_eq!(scenario.sale.selling_costs, 30_000.0);
        assert_eq!(scenario.drawdown_plan.monthly_drawdown, 6_000.0);
        assert_eq!(scenario.drawdown_plan.start_month, Month::new(2027, 7));
    }
}
