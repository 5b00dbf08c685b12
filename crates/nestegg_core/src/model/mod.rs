mod amortization;
mod sale;
mod superannuation;

pub use amortization::{AmortizationInputs, AmortizationOutcome, AmortizationRow};
pub use sale::{
    CgtAssessment, DepletionDuration, DrawdownPlanInputs, SaleDrawdownRow, SaleInputs, SaleOutcome,
};
pub use superannuation::{
    ContributionFrequency, PersonSuper, SuperBreakdownRow, SuperCalcMode, SuperDrawdownRow,
    SuperInputs, SuperOutcome,
};
