//! Future-value projection with periodic compounding and recurring deposits

use super::InterestBearingAccount;
use crate::{MAX_PROJECTION_MONTHS, UNREACHABLE_MONTHS};
use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

/// One month of a savings projection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionEntry {
    /// Month index within the projection (1-based)
    pub month: u32,

    /// Calendar date this month's balance is projected for
    pub date: NaiveDate,

    /// Deposit made during the month
    pub contribution: f64,

    /// Interest earned during the month (balance delta net of the deposit)
    pub interest_earned: f64,

    /// Projected balance at month end
    pub ending_balance: f64,

    /// Progress toward the target, clamped to [0, 100]
    pub progress_percent: f64,
}

/// Projected balance `months_ahead` months from now.
///
/// With no yield this is a straight line: balance plus contributions.
/// Otherwise applies the future-value identity
/// `FV = PV*(1+r)^n + PMT*((1+r)^n - 1)/r` with the rate, period count,
/// and contribution all expressed per compounding period.
pub fn project_balance(account: &InterestBearingAccount, months_ahead: u32) -> f64 {
    if account.annual_percentage_yield <= 0.0 || account.compounding_periods_per_year == 0 {
        return account.current_balance + account.monthly_contribution * months_ahead as f64;
    }

    let rate = account.rate_per_period();
    let periods = months_ahead as f64 * account.compounding_periods_per_year as f64 / 12.0;
    let growth = (1.0 + rate).powf(periods);

    account.current_balance * growth + account.contribution_per_period() * (growth - 1.0) / rate
}

/// First month at which the projected balance meets the target.
///
/// Returns 0 when already at the goal and [`UNREACHABLE_MONTHS`] when
/// nothing is being contributed or the search cap passes without reaching
/// it. Searches forward month by month rather than inverting the
/// future-value formula: the compounding-period/monthly-contribution
/// mismatch makes the closed form ambiguous, and iteration is exact.
pub fn months_to_reach_goal(account: &InterestBearingAccount) -> u32 {
    if account.at_goal() {
        return 0;
    }
    if account.monthly_contribution <= 0.0 {
        return UNREACHABLE_MONTHS;
    }

    for month in 1..=MAX_PROJECTION_MONTHS {
        if project_balance(account, month) >= account.target_goal {
            return month;
        }
    }

    UNREACHABLE_MONTHS
}

/// Monthly deposit required to hit the target in `target_months`.
///
/// Inverts the future-value identity for the payment term; with no usable
/// rate (zero APY, zero-growth denominator) falls back to dividing the
/// remaining amount linearly across the months. Never negative: an account
/// already past its goal requires nothing.
pub fn required_monthly_contribution(account: &InterestBearingAccount, target_months: u32) -> f64 {
    let months = target_months.max(1);
    let remaining = account.target_goal - account.current_balance;
    if remaining <= 0.0 {
        return 0.0;
    }

    if account.annual_percentage_yield <= 0.0 || account.compounding_periods_per_year == 0 {
        return remaining / months as f64;
    }

    let rate = account.rate_per_period();
    let periods = months as f64 * account.compounding_periods_per_year as f64 / 12.0;
    let growth = (1.0 + rate).powf(periods);
    let annuity_factor = (growth - 1.0) / rate;
    if annuity_factor <= 0.0 {
        return remaining / months as f64;
    }

    let per_period = (account.target_goal - account.current_balance * growth) / annuity_factor;
    let monthly = per_period * account.compounding_periods_per_year as f64 / 12.0;
    monthly.max(0.0)
}

/// Produce a month-by-month projection schedule starting from `start`.
///
/// Each month's interest is derived by differencing consecutive projected
/// balances net of the contribution, so entries always reconcile with
/// [`project_balance`] exactly.
pub fn generate_projection_schedule(
    account: &InterestBearingAccount,
    months: u32,
    start: NaiveDate,
) -> Vec<ProjectionEntry> {
    let mut entries = Vec::with_capacity(months as usize);
    let mut previous_balance = account.current_balance;

    for month in 1..=months {
        let balance = project_balance(account, month);
        let contribution = account.monthly_contribution;
        let interest_earned = balance - previous_balance - contribution;

        let progress_percent = if account.target_goal <= 0.0 {
            100.0
        } else {
            (balance / account.target_goal * 100.0).clamp(0.0, 100.0)
        };

        entries.push(ProjectionEntry {
            month,
            date: start + Months::new(month),
            contribution,
            interest_earned,
            ending_balance: balance,
            progress_percent,
        });

        previous_balance = balance;
    }

    entries
}
