//! Load account snapshots from JSON and CSV exports

use crate::loan::LoanAccount;
use crate::portfolio::{Holding, Portfolio};
use chrono::NaiveDate;
use csv::Reader;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors from reading or parsing snapshot files.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("failed to read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {path}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to read CSV {path}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

/// Portfolio definition plus its holdings, as one JSON document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioSnapshot {
    pub portfolio: Portfolio,
    pub holdings: Vec<Holding>,
}

/// Load any snapshot type from a JSON file.
pub fn load_snapshot_json<T, P>(path: P) -> Result<T, SnapshotError>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|source| SnapshotError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&contents).map_err(|source| SnapshotError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Raw CSV row for a loan export
#[derive(Debug, Deserialize)]
struct LoanCsvRow {
    #[serde(rename = "Principal")]
    principal: f64,
    #[serde(rename = "CurrentBalance")]
    current_balance: f64,
    #[serde(rename = "AnnualRatePct")]
    annual_rate_pct: f64,
    #[serde(rename = "MonthlyPayment")]
    monthly_payment: f64,
    #[serde(rename = "AdjustedPayment")]
    adjusted_payment: Option<f64>,
    #[serde(rename = "NextPaymentDue")]
    next_payment_due: NaiveDate,
}

impl LoanCsvRow {
    fn into_loan(self) -> LoanAccount {
        LoanAccount {
            principal: self.principal,
            current_balance: self.current_balance,
            annual_interest_rate_pct: self.annual_rate_pct,
            monthly_payment: self.monthly_payment,
            adjusted_monthly_payment: self.adjusted_payment,
            next_payment_due: self.next_payment_due,
        }
    }
}

/// Load all loans from a CSV export.
pub fn load_loans_csv<P: AsRef<Path>>(path: P) -> Result<Vec<LoanAccount>, SnapshotError> {
    let path = path.as_ref();
    let mut reader = Reader::from_path(path).map_err(|source| SnapshotError::Csv {
        path: path.to_path_buf(),
        source,
    })?;

    let mut loans = Vec::new();
    for result in reader.deserialize() {
        let row: LoanCsvRow = result.map_err(|source| SnapshotError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        loans.push(row.into_loan());
    }

    log::debug!("loaded {} loans from {}", loans.len(), path.display());
    Ok(loans)
}

/// Raw CSV row for a holdings export
#[derive(Debug, Deserialize)]
struct HoldingCsvRow {
    #[serde(rename = "Ticker")]
    ticker: String,
    #[serde(rename = "Shares")]
    shares: f64,
    #[serde(rename = "Price")]
    price: f64,
    #[serde(rename = "CostBasis")]
    cost_basis: f64,
}

/// Load all holdings from a CSV export.
pub fn load_holdings_csv<P: AsRef<Path>>(path: P) -> Result<Vec<Holding>, SnapshotError> {
    let path = path.as_ref();
    let mut reader = Reader::from_path(path).map_err(|source| SnapshotError::Csv {
        path: path.to_path_buf(),
        source,
    })?;

    let mut holdings = Vec::new();
    for result in reader.deserialize() {
        let row: HoldingCsvRow = result.map_err(|source| SnapshotError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        holdings.push(Holding {
            ticker: row.ticker,
            shares_owned: row.shares,
            current_price_per_share: row.price,
            cost_basis: row.cost_basis,
        });
    }

    log::debug!("loaded {} holdings from {}", holdings.len(), path.display());
    Ok(holdings)
}
