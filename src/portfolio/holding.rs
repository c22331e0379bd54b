//! Portfolio and holding snapshots

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A position in a single ETF or stock.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Holding {
    /// Ticker symbol ("VOO", "BND", ...)
    pub ticker: String,

    /// Shares currently owned (fractional shares allowed)
    pub shares_owned: f64,

    /// Latest quoted price per share
    pub current_price_per_share: f64,

    /// Total amount paid for the position
    pub cost_basis: f64,
}

impl Holding {
    /// Market value of the position (shares x price); derived, never stored
    pub fn current_value(&self) -> f64 {
        self.shares_owned * self.current_price_per_share
    }

    /// Gain or loss relative to what was paid
    pub fn unrealized_gain(&self) -> f64 {
        self.current_value() - self.cost_basis
    }
}

/// Target allocation and rebalance policy for a multi-asset portfolio.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Portfolio {
    /// Ticker to target percent (60.0 = 60%). Typically sums to 100 but
    /// the calculators do not require it.
    pub target_allocation: HashMap<String, f64>,

    /// Drift in percentage points that triggers a rebalance
    pub rebalance_threshold_pct: f64,
}
