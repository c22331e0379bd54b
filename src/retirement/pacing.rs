//! Remaining-room and required-pace math for capped accounts

use super::{CappedContributionAccount, ContributionFrequency};
use crate::dates::months_until_inclusive;
use chrono::NaiveDate;

/// Fraction of the annual limit that still counts as "maxing out".
/// A 5% band absorbs rounding on per-event amounts so the last recurring
/// contribution of the year does not flip the answer to false.
pub const MAX_OUT_TOLERANCE: f64 = 0.95;

/// Contribution room left this limit year, floored at zero.
pub fn remaining_room(account: &CappedContributionAccount) -> f64 {
    (account.annual_limit - account.contributions_this_period).max(0.0)
}

/// Number of recurring contribution events left between `as_of` and the
/// period end, given the account's cadence.
///
/// Weekly and biweekly count whole weeks; monthly counts remaining calendar
/// months inclusive of both endpoints; quarterly counts three-month blocks
/// rounded up; annual is a single event while the window is still open.
pub fn remaining_contribution_events(account: &CappedContributionAccount, as_of: NaiveDate) -> u32 {
    if as_of > account.period_end {
        return 0;
    }

    let days_left = account.period_end.signed_duration_since(as_of).num_days();
    match account.frequency {
        ContributionFrequency::Weekly => (days_left / 7) as u32,
        ContributionFrequency::Biweekly => (days_left / 14) as u32,
        ContributionFrequency::Monthly => months_until_inclusive(as_of, account.period_end),
        ContributionFrequency::Quarterly => {
            months_until_inclusive(as_of, account.period_end).div_ceil(3)
        }
        ContributionFrequency::Annual => 1,
        ContributionFrequency::None => 0,
    }
}

/// Amount per remaining event needed to exactly fill the room. With no
/// events left, the whole room is returned as a single lump sum.
pub fn required_contribution_per_event(
    account: &CappedContributionAccount,
    as_of: NaiveDate,
) -> f64 {
    let room = remaining_room(account);
    let events = remaining_contribution_events(account, as_of);
    if events == 0 {
        room
    } else {
        room / events as f64
    }
}

/// Total contributed by period end if the recurring amount keeps landing
/// every remaining event.
pub fn projected_year_end_total(account: &CappedContributionAccount, as_of: NaiveDate) -> f64 {
    account.contributions_this_period
        + account.recurring_amount * remaining_contribution_events(account, as_of) as f64
}

/// Whether the current pace lands within [`MAX_OUT_TOLERANCE`] of the
/// annual limit by period end.
pub fn is_on_pace_to_max_out(account: &CappedContributionAccount, as_of: NaiveDate) -> bool {
    projected_year_end_total(account, as_of) >= account.annual_limit * MAX_OUT_TOLERANCE
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn ira(
        contributed: f64,
        recurring: f64,
        frequency: ContributionFrequency,
    ) -> CappedContributionAccount {
        CappedContributionAccount {
            contributions_this_period: contributed,
            annual_limit: 7_000.0,
            recurring_amount: recurring,
            period_end: date(2025, 12, 31),
            frequency,
        }
    }

    #[test]
    fn test_remaining_room() {
        assert_relative_eq!(remaining_room(&ira(2_500.0, 0.0, ContributionFrequency::None)), 4_500.0);
        assert_relative_eq!(remaining_room(&ira(7_000.0, 0.0, ContributionFrequency::None)), 0.0);
        // Over-contribution never goes negative
        assert_relative_eq!(remaining_room(&ira(7_500.0, 0.0, ContributionFrequency::None)), 0.0);
    }

    #[test]
    fn test_remaining_events_by_frequency() {
        let as_of = date(2025, 6, 15); // 199 days to Dec 31, Jun-Dec inclusive = 7 months

        let events = |f| remaining_contribution_events(&ira(0.0, 0.0, f), as_of);
        assert_eq!(events(ContributionFrequency::Weekly), 28);
        assert_eq!(events(ContributionFrequency::Biweekly), 14);
        assert_eq!(events(ContributionFrequency::Monthly), 7);
        assert_eq!(events(ContributionFrequency::Quarterly), 3);
        assert_eq!(events(ContributionFrequency::Annual), 1);
        assert_eq!(events(ContributionFrequency::None), 0);
    }

    #[test]
    fn test_no_events_after_period_end() {
        let account = ira(0.0, 500.0, ContributionFrequency::Monthly);
        assert_eq!(remaining_contribution_events(&account, date(2026, 1, 5)), 0);
    }

    #[test]
    fn test_required_per_event_splits_room() {
        let account = ira(1_000.0, 0.0, ContributionFrequency::Monthly);
        let as_of = date(2025, 7, 1); // Jul-Dec inclusive = 6 events
        assert_relative_eq!(required_contribution_per_event(&account, as_of), 1_000.0);
    }

    #[test]
    fn test_required_per_event_lump_sum_when_no_events() {
        let account = ira(1_000.0, 0.0, ContributionFrequency::None);
        assert_relative_eq!(
            required_contribution_per_event(&account, date(2025, 7, 1)),
            6_000.0
        );
    }

    #[test]
    fn test_projected_year_end_total() {
        let account = ira(3_000.0, 500.0, ContributionFrequency::Monthly);
        let as_of = date(2025, 7, 1); // 6 events left
        assert_relative_eq!(projected_year_end_total(&account, as_of), 6_000.0);
    }

    #[test]
    fn test_on_pace_within_tolerance_band() {
        // 3500 + 6*550 = 6800 >= 6650 (95% of 7000): on pace despite missing 200
        let account = ira(3_500.0, 550.0, ContributionFrequency::Monthly);
        assert!(is_on_pace_to_max_out(&account, date(2025, 7, 1)));

        // 3500 + 6*500 = 6500 < 6650: behind
        let behind = ira(3_500.0, 500.0, ContributionFrequency::Monthly);
        assert!(!is_on_pace_to_max_out(&behind, date(2025, 7, 1)));
    }

    #[test]
    fn test_maxed_out_account_is_on_pace() {
        // Limit already hit: room is zero and pace holds with no recurring amount
        let account = ira(7_000.0, 0.0, ContributionFrequency::None);
        assert_relative_eq!(remaining_room(&account), 0.0);
        assert!(is_on_pace_to_max_out(&account, date(2025, 11, 30)));
    }
}
