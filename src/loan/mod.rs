//! Loan amortization, payoff timing, and extra-payment simulation

mod account;
mod schedule;
mod simulation;

pub use account::LoanAccount;
pub use schedule::{generate_schedule, AmortizationEntry};
pub use simulation::{
    months_remaining, projected_payoff_date, simulate_payment, PaymentSimulationResult,
};
