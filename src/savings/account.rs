//! Interest-bearing account snapshot

use serde::{Deserialize, Serialize};

/// A savings account earning periodic compound interest, typically the
/// emergency fund.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterestBearingAccount {
    /// Balance today
    pub current_balance: f64,

    /// Savings target for this account (>= 0)
    pub target_goal: f64,

    /// Annual percentage yield as a percentage (4.5 = 4.5%)
    pub annual_percentage_yield: f64,

    /// How many times per year interest compounds (12 = monthly, 365 = daily)
    pub compounding_periods_per_year: u32,

    /// Recurring deposit per calendar month
    pub monthly_contribution: f64,
}

impl InterestBearingAccount {
    /// Periodic rate per compounding period (APY % / 100 / periods)
    pub fn rate_per_period(&self) -> f64 {
        if self.compounding_periods_per_year == 0 {
            return 0.0;
        }
        self.annual_percentage_yield / 100.0 / self.compounding_periods_per_year as f64
    }

    /// Monthly contribution re-expressed per compounding period
    pub fn contribution_per_period(&self) -> f64 {
        if self.compounding_periods_per_year == 0 {
            return 0.0;
        }
        self.monthly_contribution * 12.0 / self.compounding_periods_per_year as f64
    }

    /// Whether the balance already meets the target
    pub fn at_goal(&self) -> bool {
        self.current_balance >= self.target_goal
    }
}
