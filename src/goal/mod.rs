//! Savings goal progress, pace, and status evaluation

mod data;
mod progress;

pub use data::{Goal, GoalStatus};
pub use progress::{progress_percent, required_monthly_pace, status};
