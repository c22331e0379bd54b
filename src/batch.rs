//! Parallel batch evaluation over many candidate payments or accounts
//!
//! The calculators themselves are single-threaded and pure; these helpers
//! fan independent calls out across a thread pool for the "what if"
//! surfaces that evaluate many scenarios at once.

use crate::loan::{
    months_remaining, projected_payoff_date, simulate_payment, LoanAccount,
    PaymentSimulationResult,
};
use chrono::NaiveDate;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// One candidate payment's outcome within a sweep, with savings measured
/// against the loan's effective payment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentSweepRow {
    pub result: PaymentSimulationResult,

    /// Interest saved versus staying at the effective payment
    pub interest_saved: f64,

    /// Months shaved off versus staying at the effective payment
    pub months_saved: u32,
}

/// Simulate a set of candidate monthly payments against one loan in
/// parallel, comparing each against the effective-payment baseline.
///
/// Row order matches `candidates`. Non-viable candidates report zero
/// savings.
pub fn sweep_loan_payments(
    loan: &LoanAccount,
    candidates: &[f64],
    as_of: NaiveDate,
) -> Vec<PaymentSweepRow> {
    log::debug!(
        "sweeping {} candidate payments against balance {:.2}",
        candidates.len(),
        loan.current_balance
    );
    let baseline = simulate_payment(loan, loan.effective_payment(), as_of);

    candidates
        .par_iter()
        .map(|&candidate| {
            let result = simulate_payment(loan, candidate, as_of);
            let interest_saved = result.interest_saved_vs(&baseline);
            let months_saved = if result.viable && baseline.viable {
                baseline.months_to_payoff.saturating_sub(result.months_to_payoff)
            } else {
                0
            };
            PaymentSweepRow {
                result,
                interest_saved,
                months_saved,
            }
        })
        .collect()
}

/// Payoff outlook for one loan within a multi-loan report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanPayoffOutlook {
    pub months_remaining: u32,
    pub payoff_date: NaiveDate,

    /// Total interest left to pay at the effective payment; `f64::MAX`
    /// when the loan is unpayable at that payment
    pub remaining_interest: f64,
}

/// Evaluate the payoff outlook for every loan in parallel. Order matches
/// the input slice.
pub fn payoff_report(loans: &[LoanAccount], as_of: NaiveDate) -> Vec<LoanPayoffOutlook> {
    loans
        .par_iter()
        .map(|loan| {
            let simulated = simulate_payment(loan, loan.effective_payment(), as_of);
            LoanPayoffOutlook {
                months_remaining: months_remaining(loan),
                payoff_date: projected_payoff_date(loan, as_of),
                remaining_interest: simulated.total_interest,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::UNREACHABLE_MONTHS;

    fn loan(balance: f64, rate_pct: f64, payment: f64) -> LoanAccount {
        LoanAccount {
            principal: balance,
            current_balance: balance,
            annual_interest_rate_pct: rate_pct,
            monthly_payment: payment,
            adjusted_monthly_payment: None,
            next_payment_due: NaiveDate::from_ymd_opt(2025, 7, 1).unwrap(),
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    #[test]
    fn test_sweep_preserves_order_and_monotonic_savings() {
        let l = loan(15_000.0, 6.0, 350.0);
        let candidates = [350.0, 450.0, 550.0, 650.0];
        let rows = sweep_loan_payments(&l, &candidates, today());

        assert_eq!(rows.len(), 4);
        for (row, candidate) in rows.iter().zip(candidates) {
            assert!((row.result.monthly_payment - candidate).abs() < 1e-12);
        }

        // The baseline candidate saves nothing; bigger payments save more
        assert!(rows[0].interest_saved.abs() < 1e-9);
        assert!(rows[1].interest_saved < rows[2].interest_saved);
        assert!(rows[2].interest_saved < rows[3].interest_saved);
        assert!(rows[3].months_saved > 0);
    }

    #[test]
    fn test_sweep_flags_non_viable_candidates() {
        let l = loan(10_000.0, 18.0, 400.0);
        // 10000 * 0.015 = 150/month accrual: 100 never amortizes
        let rows = sweep_loan_payments(&l, &[100.0, 400.0], today());

        assert!(!rows[0].result.viable);
        assert!(rows[0].interest_saved.abs() < 1e-9);
        assert_eq!(rows[0].months_saved, 0);
        assert!(rows[1].result.viable);
    }

    #[test]
    fn test_payoff_report_covers_all_loans() {
        let loans = vec![
            loan(11_550.0, 0.0, 475.0),
            loan(10_000.0, 18.0, 100.0),
            loan(0.0, 5.0, 200.0),
        ];
        let report = payoff_report(&loans, today());

        assert_eq!(report.len(), 3);
        assert_eq!(report[0].months_remaining, 25);
        assert_eq!(report[1].months_remaining, UNREACHABLE_MONTHS);
        assert_eq!(report[2].months_remaining, 0);
        assert_eq!(report[2].payoff_date, today());
    }
}
