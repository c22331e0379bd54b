//! Portfolio allocation analysis and rebalancing suggestions

mod allocation;
mod holding;

pub use allocation::{
    current_allocation_percent, needs_rebalancing, suggest_next_investment_allocation,
    suggested_rebalance_trades, total_value,
};
pub use holding::{Holding, Portfolio};
