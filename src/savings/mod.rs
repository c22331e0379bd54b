//! Compound-interest projections for interest-bearing savings accounts

mod account;
mod projection;

pub use account::InterestBearingAccount;
pub use projection::{
    generate_projection_schedule, months_to_reach_goal, project_balance,
    required_monthly_contribution, ProjectionEntry,
};
