//! Field bounds and typed input updates.
//!
//! Edits to simulator inputs arrive as tagged updates rather than raw field
//! writes. Each numeric update snaps its value to the field's step grid and
//! clamps it into the field's range before touching the record, so the
//! simulators can assume in-range inputs and never clamp on their own.
//! Non-numeric updates (dates, flags, enum choices) pass through as-is.

use serde::{Deserialize, Serialize};

use crate::model::{
    AmortizationInputs, ContributionFrequency, DrawdownPlanInputs, PersonSuper, SaleInputs,
    SuperCalcMode, SuperInputs,
};
use crate::month::Month;

/// Closed numeric range with a step grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldBounds {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl FieldBounds {
    pub const fn new(min: f64, max: f64, step: f64) -> Self {
        Self { min, max, step }
    }

    /// Snap to the step grid, then clamp into `[min, max]`.
    ///
    /// NaN snaps to `min`.
    pub fn apply(&self, value: f64) -> f64 {
        if value.is_nan() {
            return self.min;
        }
        let snapped = if self.step > 0.0 {
            (value / self.step).round() * self.step
        } else {
            value
        };
        snapped.clamp(self.min, self.max)
    }
}

pub const PRINCIPAL_BOUNDS: FieldBounds = FieldBounds::new(0.0, 10_000_000.0, 1_000.0);
pub const ANNUAL_RATE_BOUNDS: FieldBounds = FieldBounds::new(0.0, 15.0, 0.05);
pub const GROWTH_RATE_BOUNDS: FieldBounds = FieldBounds::new(0.0, 10.0, 0.1);
pub const REPAYMENT_BOUNDS: FieldBounds = FieldBounds::new(0.0, 50_000.0, 50.0);
pub const OFFSET_BALANCE_BOUNDS: FieldBounds = FieldBounds::new(0.0, 5_000_000.0, 1_000.0);
pub const MONTHLY_INCOME_BOUNDS: FieldBounds = FieldBounds::new(0.0, 100_000.0, 100.0);
pub const MONTHLY_EXPENSE_BOUNDS: FieldBounds = FieldBounds::new(0.0, 50_000.0, 50.0);
pub const MONTHLY_RENT_BOUNDS: FieldBounds = FieldBounds::new(0.0, 50_000.0, 50.0);
pub const WORKING_YEARS_BOUNDS: FieldBounds = FieldBounds::new(0.0, 10.0, 1.0);
pub const AGE_BOUNDS: FieldBounds = FieldBounds::new(16.0, 100.0, 1.0);
pub const SUPER_BALANCE_BOUNDS: FieldBounds = FieldBounds::new(0.0, 10_000_000.0, 1_000.0);
pub const CONTRIBUTION_BOUNDS: FieldBounds = FieldBounds::new(0.0, 20_000.0, 50.0);
pub const EXTRA_YEARS_BOUNDS: FieldBounds = FieldBounds::new(0.0, 40.0, 1.0);
pub const TARGET_BALANCE_BOUNDS: FieldBounds = FieldBounds::new(0.0, 20_000_000.0, 10_000.0);
pub const ANNUAL_DRAWDOWN_BOUNDS: FieldBounds = FieldBounds::new(0.0, 500_000.0, 1_000.0);
pub const SALE_PRICE_BOUNDS: FieldBounds = FieldBounds::new(0.0, 20_000_000.0, 1_000.0);
pub const TAX_RATE_BOUNDS: FieldBounds = FieldBounds::new(0.0, 60.0, 0.5);
pub const DISCOUNT_RATE_BOUNDS: FieldBounds = FieldBounds::new(0.0, 100.0, 5.0);

/// One edit to [`AmortizationInputs`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum AmortizationUpdate {
    Principal(f64),
    InterestRate(f64),
    MonthlyRepayment(f64),
    InitialOffsetBalance(f64),
    InitialRentalIncome(f64),
    RentalGrowthRate(f64),
    MonthlySalary(f64),
    TransitionalSalary(f64),
    CurrentLivingExpenses(f64),
    RetirementLivingExpenses(f64),
    OffsetIncomeRate(f64),
    NetIncome(f64),
    YearsWorking(u32),
    RetirementDate(Month),
    IsRefinanced(bool),
    ConsiderOffsetIncome(bool),
    ContinueWorking(bool),
}

impl AmortizationUpdate {
    pub fn apply(self, inputs: &mut AmortizationInputs) {
        use AmortizationUpdate::*;
        match self {
            Principal(v) => inputs.principal = PRINCIPAL_BOUNDS.apply(v),
            InterestRate(v) => inputs.interest_rate = ANNUAL_RATE_BOUNDS.apply(v),
            MonthlyRepayment(v) => inputs.monthly_repayment = REPAYMENT_BOUNDS.apply(v),
            InitialOffsetBalance(v) => {
                inputs.initial_offset_balance = OFFSET_BALANCE_BOUNDS.apply(v);
            }
            InitialRentalIncome(v) => inputs.initial_rental_income = MONTHLY_RENT_BOUNDS.apply(v),
            RentalGrowthRate(v) => inputs.rental_growth_rate = GROWTH_RATE_BOUNDS.apply(v),
            MonthlySalary(v) => inputs.monthly_salary = MONTHLY_INCOME_BOUNDS.apply(v),
            TransitionalSalary(v) => inputs.transitional_salary = MONTHLY_INCOME_BOUNDS.apply(v),
            CurrentLivingExpenses(v) => {
                inputs.current_living_expenses = MONTHLY_EXPENSE_BOUNDS.apply(v);
            }
            RetirementLivingExpenses(v) => {
                inputs.retirement_living_expenses = MONTHLY_EXPENSE_BOUNDS.apply(v);
            }
            OffsetIncomeRate(v) => inputs.offset_income_rate = ANNUAL_RATE_BOUNDS.apply(v),
            NetIncome(v) => inputs.net_income = MONTHLY_INCOME_BOUNDS.apply(v),
            YearsWorking(v) => {
                inputs.years_working = WORKING_YEARS_BOUNDS.apply(v as f64) as u32;
            }
            RetirementDate(v) => inputs.retirement_date = v,
            IsRefinanced(v) => inputs.is_refinanced = v,
            ConsiderOffsetIncome(v) => inputs.consider_offset_income = v,
            ContinueWorking(v) => inputs.continue_working = v,
        }
    }
}

/// Which household member a per-person update targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PersonSlot {
    First,
    Second,
}

impl PersonSlot {
    fn select(self, inputs: &mut SuperInputs) -> &mut PersonSuper {
        match self {
            PersonSlot::First => &mut inputs.person1,
            PersonSlot::Second => &mut inputs.person2,
        }
    }
}

/// One edit to [`SuperInputs`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SuperUpdate {
    CurrentAge(PersonSlot, u8),
    CurrentBalance(PersonSlot, f64),
    ContributionPre50(PersonSlot, f64),
    ContributionPost50(PersonSlot, f64),
    ExtraYearlyContribution(PersonSlot, f64),
    ExtraContributionYears(PersonSlot, u32),
    TargetAge(PersonSlot, u8),
    NetAnnualReturn(f64),
    Frequency(ContributionFrequency),
    Mode(SuperCalcMode),
    TargetBalance(Option<f64>),
    DrawdownAnnualAmount(f64),
    DrawdownAnnualReturn(f64),
}

impl SuperUpdate {
    pub fn apply(self, inputs: &mut SuperInputs) {
        match self {
            SuperUpdate::CurrentAge(slot, v) => {
                slot.select(inputs).current_age = AGE_BOUNDS.apply(v as f64) as u8;
            }
            SuperUpdate::CurrentBalance(slot, v) => {
                slot.select(inputs).current_balance = SUPER_BALANCE_BOUNDS.apply(v);
            }
            SuperUpdate::ContributionPre50(slot, v) => {
                slot.select(inputs).contribution_pre_50 = CONTRIBUTION_BOUNDS.apply(v);
            }
            SuperUpdate::ContributionPost50(slot, v) => {
                slot.select(inputs).contribution_post_50 = CONTRIBUTION_BOUNDS.apply(v);
            }
            SuperUpdate::ExtraYearlyContribution(slot, v) => {
                slot.select(inputs).extra_yearly_contribution = ANNUAL_DRAWDOWN_BOUNDS.apply(v);
            }
            SuperUpdate::ExtraContributionYears(slot, v) => {
                slot.select(inputs).extra_contribution_years =
                    EXTRA_YEARS_BOUNDS.apply(v as f64) as u32;
            }
            SuperUpdate::TargetAge(slot, v) => {
                slot.select(inputs).target_age = AGE_BOUNDS.apply(v as f64) as u8;
            }
            SuperUpdate::NetAnnualReturn(v) => {
                inputs.net_annual_return = ANNUAL_RATE_BOUNDS.apply(v);
            }
            SuperUpdate::Frequency(v) => inputs.contribution_frequency = v,
            SuperUpdate::Mode(v) => inputs.mode = v,
            SuperUpdate::TargetBalance(v) => {
                inputs.target_balance = v.map(|t| TARGET_BALANCE_BOUNDS.apply(t));
            }
            SuperUpdate::DrawdownAnnualAmount(v) => {
                inputs.drawdown_annual_amount = ANNUAL_DRAWDOWN_BOUNDS.apply(v);
            }
            SuperUpdate::DrawdownAnnualReturn(v) => {
                inputs.drawdown_annual_return = ANNUAL_RATE_BOUNDS.apply(v);
            }
        }
    }
}

/// One edit to [`SaleInputs`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SaleUpdate {
    SalePrice(f64),
    OutstandingLoan(f64),
    CostBase(f64),
    DepreciationClaimed(f64),
    SellingCosts(f64),
    Person1TaxRate(f64),
    Person2TaxRate(f64),
    CgtDiscountRate(f64),
}

impl SaleUpdate {
    pub fn apply(self, inputs: &mut SaleInputs) {
        use SaleUpdate::*;
        match self {
            SalePrice(v) => inputs.sale_price = SALE_PRICE_BOUNDS.apply(v),
            OutstandingLoan(v) => inputs.outstanding_loan = PRINCIPAL_BOUNDS.apply(v),
            CostBase(v) => inputs.cost_base = SALE_PRICE_BOUNDS.apply(v),
            DepreciationClaimed(v) => inputs.depreciation_claimed = SALE_PRICE_BOUNDS.apply(v),
            SellingCosts(v) => inputs.selling_costs = SALE_PRICE_BOUNDS.apply(v),
            Person1TaxRate(v) => inputs.person1_tax_rate = TAX_RATE_BOUNDS.apply(v),
            Person2TaxRate(v) => inputs.person2_tax_rate = TAX_RATE_BOUNDS.apply(v),
            CgtDiscountRate(v) => inputs.cgt_discount_rate = DISCOUNT_RATE_BOUNDS.apply(v),
        }
    }
}

/// One edit to [`DrawdownPlanInputs`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum DrawdownPlanUpdate {
    AnnualInterestRate(f64),
    MonthlyDrawdown(f64),
    StartMonth(Month),
    NetMonthlyRent(f64),
    NetRentGrowthRate(f64),
}

impl DrawdownPlanUpdate {
    pub fn apply(self, inputs: &mut DrawdownPlanInputs) {
        use DrawdownPlanUpdate::*;
        match self {
            AnnualInterestRate(v) => inputs.annual_interest_rate = ANNUAL_RATE_BOUNDS.apply(v),
            MonthlyDrawdown(v) => inputs.monthly_drawdown = MONTHLY_EXPENSE_BOUNDS.apply(v),
            StartMonth(v) => inputs.start_month = v,
            NetMonthlyRent(v) => inputs.net_monthly_rent = MONTHLY_RENT_BOUNDS.apply(v),
            NetRentGrowthRate(v) => inputs.net_rent_growth_rate = GROWTH_RATE_BOUNDS.apply(v),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_snaps_then_clamps() {
        let bounds = FieldBounds::new(0.0, 100.0, 5.0);
        assert_eq!(bounds.apply(12.4), 10.0);
        assert_eq!(bounds.apply(12.6), 15.0);
        assert_eq!(bounds.apply(-3.0), 0.0);
        assert_eq!(bounds.apply(240.0), 100.0);
        assert_eq!(bounds.apply(f64::NAN), 0.0);
        assert_eq!(bounds.apply(f64::INFINITY), 100.0);
    }

    #[test]
    fn test_zero_step_only_clamps() {
        let bounds = FieldBounds::new(0.0, 10.0, 0.0);
        assert_eq!(bounds.apply(3.7), 3.7);
        assert_eq!(bounds.apply(11.0), 10.0);
    }

    #[test]
    fn test_amortization_update_clamps_into_range() {
        let mut inputs = AmortizationInputs::default();
        AmortizationUpdate::InterestRate(22.0).apply(&mut inputs);
        assert_eq!(inputs.interest_rate, 15.0);
        AmortizationUpdate::Principal(649_499.0).apply(&mut inputs);
        assert_eq!(inputs.principal, 649_000.0);
        AmortizationUpdate::YearsWorking(99).apply(&mut inputs);
        assert_eq!(inputs.years_working, 10);
        AmortizationUpdate::RetirementDate(Month::new(2031, 3)).apply(&mut inputs);
        assert_eq!(inputs.retirement_date, Month::new(2031, 3));
        AmortizationUpdate::ContinueWorking(false).apply(&mut inputs);
        assert!(!inputs.continue_working);
    }

    #[test]
    fn test_super_update_targets_the_right_person() {
        let mut inputs = SuperInputs::default();
        SuperUpdate::CurrentBalance(PersonSlot::Second, 90_000.0).apply(&mut inputs);
        assert_eq!(inputs.person2.current_balance, 90_000.0);
        assert_eq!(inputs.person1.current_balance, 250_000.0);

        SuperUpdate::TargetAge(PersonSlot::First, 130).apply(&mut inputs);
        assert_eq!(inputs.person1.target_age, 100);

        SuperUpdate::TargetBalance(Some(2_504_999.0)).apply(&mut inputs);
        assert_eq!(inputs.target_balance, Some(2_500_000.0));
        SuperUpdate::TargetBalance(None).apply(&mut inputs);
        assert_eq!(inputs.target_balance, None);
    }

    #[test]
    fn test_sale_and_plan_updates() {
        let mut sale = SaleInputs::default();
        SaleUpdate::Person1TaxRate(47.3).apply(&mut sale);
        assert_eq!(sale.person1_tax_rate, 47.5);

        let mut plan = DrawdownPlanInputs::default();
        DrawdownPlanUpdate::MonthlyDrawdown(5_524.0).apply(&mut plan);
        assert_eq!(plan.monthly_drawdown, 5_500.0);
        DrawdownPlanUpdate::StartMonth(Month::new(2027, 7)).apply(&mut plan);
        assert_eq!(plan.start_month, Month::new(2027, 7));
    }
}
