//! Finance Models - Calculation engine for a personal-finance tracker
//!
//! This library provides:
//! - Loan amortization schedules, payoff timing, and extra-payment simulation
//! - Compound-interest savings projections with recurring contributions
//! - Contribution pacing for annually-capped retirement accounts
//! - Portfolio allocation analysis and rebalancing suggestions
//! - Deadline-bound savings goal progress and status evaluation
//!
//! Every calculator is a pure, synchronous function over an immutable
//! snapshot supplied by the caller. Degenerate numeric inputs (payments
//! that never cover interest, zero targets, zero denominators) map to
//! documented sentinel values rather than errors, so a display layer
//! always has something to show.

pub mod batch;
pub mod dates;
pub mod goal;
pub mod loan;
pub mod portfolio;
pub mod retirement;
pub mod savings;
pub mod snapshot;

// Re-export commonly used types
pub use goal::{Goal, GoalStatus};
pub use loan::{AmortizationEntry, LoanAccount, PaymentSimulationResult};
pub use portfolio::{Holding, Portfolio};
pub use retirement::{CappedContributionAccount, ContributionFrequency};
pub use savings::{InterestBearingAccount, ProjectionEntry};

/// Month-count sentinel meaning "never reached at the current pace".
///
/// Returned by payoff and goal searches when the payment does not cover
/// interest accrual or the target is not hit within the iteration cap.
/// Callers compare against this value; it is never an error.
pub const UNREACHABLE_MONTHS: u32 = 999;

/// Cap on month-by-month iteration (50 years).
///
/// Bounds worst-case execution time for degenerate inputs such as zero or
/// near-zero payments. Searches that exhaust the cap report
/// [`UNREACHABLE_MONTHS`].
pub const MAX_PROJECTION_MONTHS: u32 = 600;
