//! Contribution pacing for annually-capped retirement accounts

mod account;
mod pacing;

pub use account::{CappedContributionAccount, ContributionFrequency};
pub use pacing::{
    is_on_pace_to_max_out, projected_year_end_total, remaining_contribution_events,
    remaining_room, required_contribution_per_event,
};
