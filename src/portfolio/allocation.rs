//! Current-vs-target allocation comparison and trade suggestions

use super::{Holding, Portfolio};
use std::collections::HashMap;

/// Total market value across all holdings.
pub fn total_value(holdings: &[Holding]) -> f64 {
    holdings.iter().map(Holding::current_value).sum()
}

/// Market value per ticker, with duplicate lots of the same ticker summed.
fn value_by_ticker(holdings: &[Holding]) -> HashMap<String, f64> {
    let mut values: HashMap<String, f64> = HashMap::new();
    for holding in holdings {
        *values.entry(holding.ticker.clone()).or_insert(0.0) += holding.current_value();
    }
    values
}

/// Current allocation per ticker as a percent of total portfolio value.
/// Empty when the portfolio has no value (avoids division by zero).
pub fn current_allocation_percent(holdings: &[Holding]) -> HashMap<String, f64> {
    let total = total_value(holdings);
    if total <= 0.0 {
        return HashMap::new();
    }

    value_by_ticker(holdings)
        .into_iter()
        .map(|(ticker, value)| (ticker, value / total * 100.0))
        .collect()
}

/// Whether any target ticker has drifted beyond the rebalance threshold.
/// Tickers absent from holdings sit at 0% current allocation.
pub fn needs_rebalancing(portfolio: &Portfolio, holdings: &[Holding]) -> bool {
    let current = current_allocation_percent(holdings);

    portfolio.target_allocation.iter().any(|(ticker, target)| {
        let actual = current.get(ticker).copied().unwrap_or(0.0);
        (actual - target).abs() > portfolio.rebalance_threshold_pct
    })
}

/// Dollar trade per target ticker that would restore the target mix:
/// positive is a buy, negative a sell. Empty when the portfolio has no
/// value to rebalance.
pub fn suggested_rebalance_trades(
    portfolio: &Portfolio,
    holdings: &[Holding],
) -> HashMap<String, f64> {
    let total = total_value(holdings);
    if total <= 0.0 {
        return HashMap::new();
    }

    let values = value_by_ticker(holdings);
    portfolio
        .target_allocation
        .iter()
        .map(|(ticker, target)| {
            let current = values.get(ticker).copied().unwrap_or(0.0);
            (ticker.clone(), target / 100.0 * total - current)
        })
        .collect()
}

/// How to split `new_cash` across the target tickers so the portfolio
/// lands as close to target as buying alone allows.
///
/// Targets are computed against the post-investment total; amounts are
/// floored at zero since new cash only ever buys, it never funds a sell.
pub fn suggest_next_investment_allocation(
    portfolio: &Portfolio,
    holdings: &[Holding],
    new_cash: f64,
) -> HashMap<String, f64> {
    let new_total = total_value(holdings) + new_cash;
    if new_total <= 0.0 {
        return HashMap::new();
    }

    let values = value_by_ticker(holdings);
    portfolio
        .target_allocation
        .iter()
        .map(|(ticker, target)| {
            let current = values.get(ticker).copied().unwrap_or(0.0);
            let buy = (target / 100.0 * new_total - current).max(0.0);
            (ticker.clone(), buy)
        })
        .collect()
}
