//! Progress, pace, and status cascade for savings goals

use super::{Goal, GoalStatus};
use crate::dates::whole_months_between;
use chrono::NaiveDate;

/// Days remaining at or under which an unfinished goal becomes urgent.
/// Product-tunable constant, not a derived value.
pub const URGENT_WINDOW_DAYS: i64 = 30;

/// Fraction of time-proportional expected progress that still counts as
/// on track. Product-tunable constant, not a derived value.
pub const ON_TRACK_TOLERANCE: f64 = 0.90;

/// Progress toward the target, clamped to [0, 100]. A zero target counts
/// as fully funded.
pub fn progress_percent(goal: &Goal) -> f64 {
    if goal.target_amount <= 0.0 {
        return 100.0;
    }
    (goal.current_amount / goal.target_amount * 100.0).clamp(0.0, 100.0)
}

/// Monthly amount needed from `as_of` to finish by the deadline. The month
/// count is floored at 1 so near-due goals report the full remaining
/// amount rather than dividing by zero.
pub fn required_monthly_pace(goal: &Goal, as_of: NaiveDate) -> f64 {
    let months = whole_months_between(as_of, goal.deadline).max(1);
    goal.remaining_amount() / months as f64
}

/// Expected progress if funding were spread evenly from creation to
/// deadline, as a percent of the target.
fn expected_progress_percent(goal: &Goal, as_of: NaiveDate) -> f64 {
    let total_days = goal
        .deadline
        .signed_duration_since(goal.created_at)
        .num_days();
    if total_days <= 0 {
        return 100.0;
    }

    let elapsed_days = as_of
        .signed_duration_since(goal.created_at)
        .num_days()
        .clamp(0, total_days);
    elapsed_days as f64 / total_days as f64 * 100.0
}

/// Evaluate the goal's status as of a date.
///
/// Priority cascade, first match wins: completed beats a passed deadline,
/// overdue beats urgency, urgency beats pacing, and pacing compares actual
/// progress against [`ON_TRACK_TOLERANCE`] of the elapsed-time-
/// proportional expectation.
pub fn status(goal: &Goal, as_of: NaiveDate) -> GoalStatus {
    if goal.current_amount >= goal.target_amount {
        return GoalStatus::Completed;
    }
    if goal.deadline < as_of {
        return GoalStatus::Overdue;
    }

    let days_left = goal.deadline.signed_duration_since(as_of).num_days();
    if days_left <= URGENT_WINDOW_DAYS {
        return GoalStatus::Urgent;
    }

    if progress_percent(goal) >= ON_TRACK_TOLERANCE * expected_progress_percent(goal, as_of) {
        GoalStatus::OnTrack
    } else {
        GoalStatus::Behind
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn goal(target: f64, current: f64) -> Goal {
        Goal {
            target_amount: target,
            current_amount: current,
            deadline: date(2025, 12, 31),
            created_at: date(2025, 1, 1),
            monthly_contribution: 100.0,
        }
    }

    #[test]
    fn test_progress_percent_clamped() {
        assert_relative_eq!(progress_percent(&goal(1_000.0, 250.0)), 25.0);
        assert_relative_eq!(progress_percent(&goal(1_000.0, 1_500.0)), 100.0);
        assert_relative_eq!(progress_percent(&goal(1_000.0, -50.0)), 0.0);
    }

    #[test]
    fn test_progress_percent_zero_target() {
        assert_relative_eq!(progress_percent(&goal(0.0, 0.0)), 100.0);
    }

    #[test]
    fn test_required_monthly_pace() {
        // 7500 remaining over Jun 15 -> Dec 31 (6 whole months)
        let g = goal(10_000.0, 2_500.0);
        assert_relative_eq!(required_monthly_pace(&g, date(2025, 6, 15)), 1_250.0);
    }

    #[test]
    fn test_required_monthly_pace_floors_month_count() {
        // Ten days out: everything is due this month
        let g = goal(10_000.0, 9_000.0);
        assert_relative_eq!(required_monthly_pace(&g, date(2025, 12, 21)), 1_000.0);
    }

    #[test]
    fn test_completed_beats_overdue() {
        let g = goal(1_000.0, 1_000.0);
        // Well past the deadline, yet completion wins the cascade
        assert_eq!(status(&g, date(2026, 6, 1)), GoalStatus::Completed);
    }

    #[test]
    fn test_overdue_after_deadline() {
        let g = goal(1_000.0, 500.0);
        assert_eq!(status(&g, date(2026, 1, 1)), GoalStatus::Overdue);
    }

    #[test]
    fn test_urgent_inside_thirty_days() {
        let g = goal(1_000.0, 990.0);
        assert_eq!(status(&g, date(2025, 12, 10)), GoalStatus::Urgent);
        // Exactly 30 days out is still urgent
        assert_eq!(status(&g, date(2025, 12, 1)), GoalStatus::Urgent);
    }

    #[test]
    fn test_on_track_vs_behind_pacing() {
        // Jul 2: ~50% elapsed, expectation ~50%, tolerance 90% -> need ~45%
        let on_track = goal(1_000.0, 460.0);
        assert_eq!(status(&on_track, date(2025, 7, 2)), GoalStatus::OnTrack);

        let behind = goal(1_000.0, 400.0);
        assert_eq!(status(&behind, date(2025, 7, 2)), GoalStatus::Behind);
    }

    #[test]
    fn test_brand_new_goal_is_on_track() {
        // No time elapsed, no expectation yet
        let g = goal(1_000.0, 0.0);
        assert_eq!(status(&g, date(2025, 1, 1)), GoalStatus::OnTrack);
    }
}
