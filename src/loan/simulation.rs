//! Payoff timing and hypothetical-payment simulation

use super::LoanAccount;
use crate::{MAX_PROJECTION_MONTHS, UNREACHABLE_MONTHS};
use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

/// Outcome of paying a hypothetical monthly amount against a loan.
///
/// Non-viable results carry sentinel values (999 months, `f64::MAX`
/// totals) so the display layer always has a record to render; check
/// `viable` before treating the totals as money.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentSimulationResult {
    /// Hypothetical payment that was simulated
    pub monthly_payment: f64,

    /// Months until the balance reaches zero (999 when never)
    pub months_to_payoff: u32,

    /// Interest accrued over the life of the payoff
    pub total_interest: f64,

    /// Total of all payments made
    pub total_paid: f64,

    /// Projected date of the final payment
    pub payoff_date: NaiveDate,

    /// False when the payment never covers monthly interest accrual
    pub viable: bool,
}

impl PaymentSimulationResult {
    fn not_viable(payment: f64, as_of: NaiveDate) -> Self {
        Self {
            monthly_payment: payment,
            months_to_payoff: UNREACHABLE_MONTHS,
            total_interest: f64::MAX,
            total_paid: f64::MAX,
            payoff_date: as_of + Months::new(UNREACHABLE_MONTHS),
            viable: false,
        }
    }

    /// Interest saved relative to a baseline simulation (typically the
    /// nominal payment). Zero when either result is non-viable.
    pub fn interest_saved_vs(&self, baseline: &Self) -> f64 {
        if !self.viable || !baseline.viable {
            return 0.0;
        }
        (baseline.total_interest - self.total_interest).max(0.0)
    }
}

/// Months until payoff at the loan's effective payment.
///
/// Zero-rate loans divide out exactly: `ceil(balance / payment)`. Otherwise
/// solves the closed-form amortization identity
/// `n = -ln(1 - r*P/A) / ln(1 + r)`. Returns [`UNREACHABLE_MONTHS`] when
/// the payment does not cover interest accrual (the log argument goes
/// non-positive) or the payment itself is degenerate.
pub fn months_remaining(loan: &LoanAccount) -> u32 {
    let balance = loan.current_balance;
    if balance <= 0.0 {
        return 0;
    }

    let payment = loan.effective_payment();
    if payment <= 0.0 {
        return UNREACHABLE_MONTHS;
    }

    let rate = loan.monthly_rate();
    if rate <= 0.0 {
        return (balance / payment).ceil() as u32;
    }

    let log_arg = 1.0 - rate * balance / payment;
    if log_arg <= 0.0 {
        return UNREACHABLE_MONTHS;
    }

    (-log_arg.ln() / (1.0 + rate).ln()).ceil() as u32
}

/// Projected final payment date at the effective payment: `as_of` plus
/// [`months_remaining`] calendar months. An unpayable loan projects the
/// sentinel 999 months out.
pub fn projected_payoff_date(loan: &LoanAccount, as_of: NaiveDate) -> NaiveDate {
    as_of + Months::new(months_remaining(loan))
}

/// Simulate paying `candidate_payment` every month until payoff.
///
/// Iterates month by month (capped at [`MAX_PROJECTION_MONTHS`])
/// accumulating interest at full precision. The moment the payment fails
/// to reduce principal the debt can never retire, so a non-viable sentinel
/// result is returned immediately.
pub fn simulate_payment(
    loan: &LoanAccount,
    candidate_payment: f64,
    as_of: NaiveDate,
) -> PaymentSimulationResult {
    let mut balance = loan.current_balance;
    if balance <= 0.0 {
        return PaymentSimulationResult {
            monthly_payment: candidate_payment,
            months_to_payoff: 0,
            total_interest: 0.0,
            total_paid: 0.0,
            payoff_date: as_of,
            viable: true,
        };
    }

    if candidate_payment <= 0.0 {
        return PaymentSimulationResult::not_viable(candidate_payment, as_of);
    }

    let rate = loan.monthly_rate();
    let mut total_interest = 0.0;
    let mut total_paid = 0.0;
    let mut months = 0u32;

    while balance > 0.0 && months < MAX_PROJECTION_MONTHS {
        let interest = balance * rate;
        if candidate_payment - interest <= 0.0 {
            return PaymentSimulationResult::not_viable(candidate_payment, as_of);
        }

        months += 1;
        total_interest += interest;

        if balance + interest <= candidate_payment {
            // Payoff month: only the remaining balance plus interest is due
            total_paid += balance + interest;
            balance = 0.0;
        } else {
            total_paid += candidate_payment;
            balance -= candidate_payment - interest;
        }
    }

    if balance > 0.0 {
        // Cap exhausted without retiring the debt
        return PaymentSimulationResult::not_viable(candidate_payment, as_of);
    }

    PaymentSimulationResult {
        monthly_payment: candidate_payment,
        months_to_payoff: months,
        total_interest,
        total_paid,
        payoff_date: as_of + Months::new(months),
        viable: true,
    }
}
