//! Amortization schedule generation

use super::LoanAccount;
use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

/// One month of an amortization schedule.
///
/// `principal_portion + interest_portion` equals `payment` up to float
/// rounding, and `remaining_balance` is non-increasing across a schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmortizationEntry {
    /// Month index within the schedule (1-based)
    pub month: u32,

    /// Payment date for this month
    pub date: NaiveDate,

    /// Amount actually paid this month (payoff-adjusted in the final month)
    pub payment: f64,

    /// Portion of the payment that reduced the balance
    pub principal_portion: f64,

    /// Portion of the payment that covered accrued interest
    pub interest_portion: f64,

    /// Balance outstanding after this payment
    pub remaining_balance: f64,
}

/// Generate up to `number_of_months` of the loan's amortization schedule,
/// starting at the next payment due date.
///
/// Stops early once the balance reaches zero; the final month's payment is
/// reduced to exactly clear the remaining balance plus that month's
/// interest. A loan whose payment never covers interest simply amortizes
/// nothing month after month; the schedule still terminates at
/// `number_of_months`. Full float precision is carried through the
/// iteration; rounding is presentation-only.
pub fn generate_schedule(loan: &LoanAccount, number_of_months: u32) -> Vec<AmortizationEntry> {
    let payment = loan.effective_payment();
    if payment <= 0.0 || loan.current_balance <= 0.0 {
        return Vec::new();
    }

    let rate = loan.monthly_rate();
    let mut balance = loan.current_balance;
    let mut date = loan.next_payment_due;
    let mut entries = Vec::new();

    for month in 1..=number_of_months {
        if balance <= 0.0 {
            break;
        }

        let interest = balance * rate;
        let (actual_payment, principal) = if balance < payment {
            // Payoff month: clear the balance plus this month's interest
            (balance + interest, balance)
        } else {
            (payment, (payment - interest).max(0.0))
        };

        balance -= principal;

        entries.push(AmortizationEntry {
            month,
            date,
            payment: actual_payment,
            principal_portion: principal,
            interest_portion: interest,
            remaining_balance: balance,
        });

        date = date + Months::new(1);
    }

    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn loan(balance: f64, rate_pct: f64, payment: f64) -> LoanAccount {
        LoanAccount {
            principal: balance,
            current_balance: balance,
            annual_interest_rate_pct: rate_pct,
            monthly_payment: payment,
            adjusted_monthly_payment: None,
            next_payment_due: NaiveDate::from_ymd_opt(2025, 7, 15).unwrap(),
        }
    }

    #[test]
    fn test_schedule_balances_non_increasing() {
        let schedule = generate_schedule(&loan(10_000.0, 5.0, 300.0), 60);

        for pair in schedule.windows(2) {
            assert!(pair[1].remaining_balance <= pair[0].remaining_balance);
        }
        assert_relative_eq!(
            schedule.last().unwrap().remaining_balance,
            0.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_entry_portions_sum_to_payment() {
        let schedule = generate_schedule(&loan(10_000.0, 5.0, 300.0), 60);

        for entry in &schedule {
            assert_relative_eq!(
                entry.principal_portion + entry.interest_portion,
                entry.payment,
                epsilon = 1e-9
            );
        }
    }

    #[test]
    fn test_final_payment_is_payoff_adjusted() {
        // 1000 at 0% with 300/month: 300, 300, 300, then 100
        let schedule = generate_schedule(&loan(1_000.0, 0.0, 300.0), 12);

        assert_eq!(schedule.len(), 4);
        assert_relative_eq!(schedule[3].payment, 100.0, epsilon = 1e-9);
        assert_relative_eq!(schedule[3].remaining_balance, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_dates_advance_by_calendar_month() {
        let schedule = generate_schedule(&loan(1_000.0, 0.0, 300.0), 12);

        assert_eq!(schedule[0].date, NaiveDate::from_ymd_opt(2025, 7, 15).unwrap());
        assert_eq!(schedule[1].date, NaiveDate::from_ymd_opt(2025, 8, 15).unwrap());
        assert_eq!(schedule[3].date, NaiveDate::from_ymd_opt(2025, 10, 15).unwrap());
    }

    #[test]
    fn test_underwater_payment_never_amortizes() {
        // Interest is 10000 * 0.02 = 200/month; a 150 payment reduces nothing
        let schedule = generate_schedule(&loan(10_000.0, 24.0, 150.0), 12);

        assert_eq!(schedule.len(), 12);
        for entry in &schedule {
            assert_relative_eq!(entry.principal_portion, 0.0, epsilon = 1e-12);
            assert!(entry.remaining_balance >= 10_000.0 - 1e-9);
        }
    }

    #[test]
    fn test_zero_payment_yields_empty_schedule() {
        assert!(generate_schedule(&loan(10_000.0, 5.0, 0.0), 12).is_empty());
    }
}
