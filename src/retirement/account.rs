//! Capped contribution account snapshot

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// How often the user makes recurring contributions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContributionFrequency {
    Weekly,
    Biweekly,
    Monthly,
    Quarterly,
    Annual,
    /// No recurring contribution set up
    None,
}

impl ContributionFrequency {
    /// Contribution events per year for this cadence
    pub fn periods_per_year(&self) -> u32 {
        match self {
            ContributionFrequency::Weekly => 52,
            ContributionFrequency::Biweekly => 26,
            ContributionFrequency::Monthly => 12,
            ContributionFrequency::Quarterly => 4,
            ContributionFrequency::Annual => 1,
            ContributionFrequency::None => 0,
        }
    }
}

/// An account with an annual contribution limit (IRA-style).
///
/// `contributions_this_period` is the running total the store keeps for the
/// current limit year; `period_end` is the last day contributions count
/// toward it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CappedContributionAccount {
    /// Amount already contributed in the current limit year (>= 0)
    pub contributions_this_period: f64,

    /// Annual contribution limit for this account type
    pub annual_limit: f64,

    /// Amount of each recurring contribution
    pub recurring_amount: f64,

    /// Last day of the current contribution window
    pub period_end: NaiveDate,

    /// Cadence of recurring contributions
    pub frequency: ContributionFrequency,
}
