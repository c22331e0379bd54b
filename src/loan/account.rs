//! Loan account snapshot

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single debt instrument as last synced from the store.
///
/// Balances and rates are caller-validated; the calculators only guard the
/// zero/negative-denominator cases that arise from legitimate data (paid-off
/// loans, promotional 0% rates, payments below interest accrual).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanAccount {
    /// Original amount borrowed
    pub principal: f64,

    /// Outstanding balance today (at most `principal`)
    pub current_balance: f64,

    /// Annual interest rate as a percentage (5.0 = 5%)
    pub annual_interest_rate_pct: f64,

    /// Nominal monthly payment from the loan terms
    pub monthly_payment: f64,

    /// User-entered payment override, if any
    #[serde(default)]
    pub adjusted_monthly_payment: Option<f64>,

    /// Due date of the next scheduled payment
    pub next_payment_due: NaiveDate,
}

impl LoanAccount {
    /// Payment used by every calculation: the user override when present,
    /// otherwise the nominal payment
    pub fn effective_payment(&self) -> f64 {
        self.adjusted_monthly_payment.unwrap_or(self.monthly_payment)
    }

    /// Monthly periodic rate (annual % / 100 / 12)
    pub fn monthly_rate(&self) -> f64 {
        self.annual_interest_rate_pct / 100.0 / 12.0
    }

    /// Interest that accrues over one month at the current balance
    pub fn monthly_interest_accrual(&self) -> f64 {
        self.current_balance * self.monthly_rate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_loan() -> LoanAccount {
        LoanAccount {
            principal: 20_000.0,
            current_balance: 15_000.0,
            annual_interest_rate_pct: 6.0,
            monthly_payment: 350.0,
            adjusted_monthly_payment: None,
            next_payment_due: NaiveDate::from_ymd_opt(2025, 7, 1).unwrap(),
        }
    }

    #[test]
    fn test_effective_payment_defaults_to_nominal() {
        let loan = test_loan();
        assert!((loan.effective_payment() - 350.0).abs() < 1e-10);
    }

    #[test]
    fn test_effective_payment_uses_override() {
        let mut loan = test_loan();
        loan.adjusted_monthly_payment = Some(500.0);
        assert!((loan.effective_payment() - 500.0).abs() < 1e-10);
    }

    #[test]
    fn test_monthly_rate() {
        let loan = test_loan();
        assert!((loan.monthly_rate() - 0.005).abs() < 1e-12);
        assert!((loan.monthly_interest_accrual() - 75.0).abs() < 1e-9);
    }
}
