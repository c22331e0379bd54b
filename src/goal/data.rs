//! Savings goal snapshot and status states

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A deadline-bound savings target.
///
/// Created by user action and updated on each recorded contribution; the
/// store owns its lifecycle (including archival), the calculators only
/// read it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Goal {
    /// Amount to accumulate
    pub target_amount: f64,

    /// Amount accumulated so far
    pub current_amount: f64,

    /// Date the goal should be fully funded by
    pub deadline: NaiveDate,

    /// Date the goal was created (anchors expected-progress pacing)
    pub created_at: NaiveDate,

    /// Recurring monthly contribution the user has planned
    pub monthly_contribution: f64,
}

impl Goal {
    /// Amount still needed, floored at zero once the goal is funded
    pub fn remaining_amount(&self) -> f64 {
        (self.target_amount - self.current_amount).max(0.0)
    }
}

/// Evaluated state of a goal. The variants form a priority cascade:
/// completion beats everything (including a passed deadline), then
/// overdue, then the urgency window, then pacing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GoalStatus {
    /// Target reached
    Completed,
    /// Deadline passed with the target unmet
    Overdue,
    /// 30 days or less remain
    Urgent,
    /// Progress keeps pace with elapsed time
    OnTrack,
    /// Progress lags elapsed time beyond the tolerance
    Behind,
}
