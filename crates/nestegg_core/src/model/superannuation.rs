use serde::{Deserialize, Serialize};

/// How often regular contributions land in an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContributionFrequency {
    Monthly,
    Yearly,
}

/// What the superannuation simulator is asked to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SuperCalcMode {
    /// Solve the flat monthly contribution needed to hit `target_balance`.
    Contribution,
    /// Project the balance the configured contributions produce.
    Balance,
}

/// One person's superannuation position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonSuper {
    pub current_age: u8,
    pub current_balance: f64,
    /// Monthly contribution while younger than 50.
    pub contribution_pre_50: f64,
    /// Monthly contribution from age 50.
    pub contribution_post_50: f64,
    /// Lump added at every 12th simulated month.
    pub extra_yearly_contribution: f64,
    /// How many years the extra lump keeps landing.
    pub extra_contribution_years: u32,
    /// Age at which accumulation stops for this person.
    pub target_age: u8,
}

impl Default for PersonSuper {
    fn default() -> Self {
        Self {
            current_age: 40,
            current_balance: 250_000.0,
            contribution_pre_50: 1_500.0,
            contribution_post_50: 2_000.0,
            extra_yearly_contribution: 0.0,
            extra_contribution_years: 0,
            target_age: 60,
        }
    }
}

/// Inputs to the two-person superannuation simulator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuperInputs {
    pub person1: PersonSuper,
    pub person2: PersonSuper,
    /// Annual return net of fees and tax, percent.
    pub net_annual_return: f64,
    pub contribution_frequency: ContributionFrequency,
    pub mode: SuperCalcMode,
    /// Combined balance to solve for in contribution mode.
    pub target_balance: Option<f64>,
    /// Combined amount drawn per year once both have reached target age.
    pub drawdown_annual_amount: f64,
    pub drawdown_annual_return: f64,
}

impl Default for SuperInputs {
    fn default() -> Self {
        Self {
            person1: PersonSuper::default(),
            person2: PersonSuper {
                current_age: 38,
                current_balance: 180_000.0,
                contribution_pre_50: 1_200.0,
                contribution_post_50: 1_800.0,
                ..PersonSuper::default()
            },
            net_annual_return: 6.5,
            contribution_frequency: ContributionFrequency::Monthly,
            mode: SuperCalcMode::Balance,
            target_balance: None,
            drawdown_annual_amount: 80_000.0,
            drawdown_annual_return: 5.0,
        }
    }
}

/// One month of the combined accumulation path.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SuperBreakdownRow {
    /// Position within the person's contribution year, 1..=12.
    pub month_in_year: u8,
    /// Age of the person with the longer horizon.
    pub age: u8,
    pub combined_balance: f64,
}

/// One month of the retirement drawdown.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SuperDrawdownRow {
    pub age: u8,
    pub month_in_year: u8,
    pub start_balance: f64,
    pub drawdown: f64,
    pub earnings: f64,
    pub end_balance: f64,
}

/// Complete output of one superannuation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuperOutcome {
    pub person1_final: f64,
    pub person2_final: f64,
    pub combined_final: f64,
    /// Future value of today's balances alone; contribution mode only.
    pub fv_of_current_super: Option<f64>,
    /// Solved flat contribution per person; contribution mode only.
    pub required_monthly_contribution: Option<f64>,
    pub breakdown: Vec<SuperBreakdownRow>,
    pub drawdown: Vec<SuperDrawdownRow>,
}
