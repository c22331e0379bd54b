//! Finance Models CLI
//!
//! Runs the calculators against JSON account snapshots exported by the
//! sync layer and prints display-rounded results. Amounts are rounded to
//! two places here only; the calculators carry full precision.

use anyhow::Context;
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use finance_models::batch::{payoff_report, sweep_loan_payments};
use finance_models::goal::{progress_percent, required_monthly_pace, status};
use finance_models::loan::generate_schedule;
use finance_models::portfolio::{
    current_allocation_percent, needs_rebalancing, suggest_next_investment_allocation,
    suggested_rebalance_trades, total_value,
};
use finance_models::retirement::{
    is_on_pace_to_max_out, projected_year_end_total, remaining_contribution_events,
    remaining_room, required_contribution_per_event,
};
use finance_models::savings::{
    generate_projection_schedule, months_to_reach_goal, required_monthly_contribution,
};
use finance_models::snapshot::{load_snapshot_json, PortfolioSnapshot};
use finance_models::{
    CappedContributionAccount, Goal, InterestBearingAccount, LoanAccount, UNREACHABLE_MONTHS,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "finance_models", about = "Personal-finance calculators over account snapshots")]
struct Cli {
    /// Evaluation date override (defaults to today)
    #[arg(long, global = true)]
    as_of: Option<NaiveDate>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print a loan's amortization schedule
    LoanSchedule {
        /// JSON snapshot of a LoanAccount
        snapshot: PathBuf,
        /// Maximum months to generate
        #[arg(long, default_value_t = 360)]
        months: u32,
        /// Also write the full schedule to a CSV file
        #[arg(long)]
        csv: Option<PathBuf>,
    },
    /// Compare extra-payment scenarios for a loan
    LoanSweep {
        /// JSON snapshot of a LoanAccount
        snapshot: PathBuf,
        /// Increment between candidate payments
        #[arg(long, default_value_t = 50.0)]
        step: f64,
        /// Number of candidates above the effective payment
        #[arg(long, default_value_t = 6)]
        count: u32,
    },
    /// Payoff outlook for a batch of loans from a CSV export
    LoanReport {
        /// CSV export of loans
        csv: PathBuf,
    },
    /// Project an interest-bearing account forward
    Savings {
        /// JSON snapshot of an InterestBearingAccount
        snapshot: PathBuf,
        /// Months to project
        #[arg(long, default_value_t = 24)]
        months: u32,
    },
    /// Contribution pacing for a capped retirement account
    Retirement {
        /// JSON snapshot of a CappedContributionAccount
        snapshot: PathBuf,
    },
    /// Allocation drift and trade suggestions for a portfolio
    Portfolio {
        /// JSON snapshot of a portfolio plus holdings
        snapshot: PathBuf,
        /// Suggest how to allocate this much new cash
        #[arg(long)]
        invest: Option<f64>,
    },
    /// Progress and status for a savings goal
    Goal {
        /// JSON snapshot of a Goal
        snapshot: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let as_of = cli.as_of.unwrap_or_else(|| Local::now().date_naive());

    match cli.command {
        Command::LoanSchedule { snapshot, months, csv } => {
            let loan: LoanAccount = load_snapshot_json(&snapshot)
                .with_context(|| format!("loading loan snapshot {}", snapshot.display()))?;
            print_loan_schedule(&loan, months, csv.as_deref())?;
        }
        Command::LoanSweep { snapshot, step, count } => {
            let loan: LoanAccount = load_snapshot_json(&snapshot)
                .with_context(|| format!("loading loan snapshot {}", snapshot.display()))?;
            print_loan_sweep(&loan, step, count, as_of);
        }
        Command::LoanReport { csv } => {
            let loans = finance_models::snapshot::load_loans_csv(&csv)
                .with_context(|| format!("loading loan export {}", csv.display()))?;
            print_loan_report(&loans, as_of);
        }
        Command::Savings { snapshot, months } => {
            let account: InterestBearingAccount = load_snapshot_json(&snapshot)
                .with_context(|| format!("loading savings snapshot {}", snapshot.display()))?;
            print_savings(&account, months, as_of);
        }
        Command::Retirement { snapshot } => {
            let account: CappedContributionAccount = load_snapshot_json(&snapshot)
                .with_context(|| format!("loading retirement snapshot {}", snapshot.display()))?;
            print_retirement(&account, as_of);
        }
        Command::Portfolio { snapshot, invest } => {
            let snap: PortfolioSnapshot = load_snapshot_json(&snapshot)
                .with_context(|| format!("loading portfolio snapshot {}", snapshot.display()))?;
            print_portfolio(&snap, invest);
        }
        Command::Goal { snapshot } => {
            let goal: Goal = load_snapshot_json(&snapshot)
                .with_context(|| format!("loading goal snapshot {}", snapshot.display()))?;
            print_goal(&goal, as_of);
        }
    }

    Ok(())
}

fn format_months(months: u32) -> String {
    if months == UNREACHABLE_MONTHS {
        "never (payment below interest)".to_string()
    } else {
        format!("{} months", months)
    }
}

fn print_loan_schedule(
    loan: &LoanAccount,
    months: u32,
    csv: Option<&std::path::Path>,
) -> anyhow::Result<()> {
    let schedule = generate_schedule(loan, months);

    println!("Balance ${:.2} at {:.2}%, paying ${:.2}/month",
        loan.current_balance, loan.annual_interest_rate_pct, loan.effective_payment());
    println!("{:>5} {:>12} {:>12} {:>12} {:>12} {:>14}",
        "Month", "Date", "Payment", "Principal", "Interest", "Balance");
    println!("{}", "-".repeat(72));

    for entry in schedule.iter().take(24) {
        println!("{:>5} {:>12} {:>12.2} {:>12.2} {:>12.2} {:>14.2}",
            entry.month,
            entry.date,
            entry.payment,
            entry.principal_portion,
            entry.interest_portion,
            entry.remaining_balance,
        );
    }
    if schedule.len() > 24 {
        println!("... ({} more months)", schedule.len() - 24);
    }

    let total_interest: f64 = schedule.iter().map(|e| e.interest_portion).sum();
    println!("\nTotal interest over schedule: ${:.2}", total_interest);

    if let Some(path) = csv {
        let mut writer = csv::Writer::from_path(path)
            .with_context(|| format!("creating {}", path.display()))?;
        writer.write_record(["Month", "Date", "Payment", "Principal", "Interest", "Balance"])?;
        for entry in &schedule {
            writer.write_record([
                entry.month.to_string(),
                entry.date.to_string(),
                format!("{:.2}", entry.payment),
                format!("{:.2}", entry.principal_portion),
                format!("{:.2}", entry.interest_portion),
                format!("{:.2}", entry.remaining_balance),
            ])?;
        }
        writer.flush()?;
        println!("Full schedule written to: {}", path.display());
    }

    Ok(())
}

fn print_loan_sweep(loan: &LoanAccount, step: f64, count: u32, as_of: NaiveDate) {
    let base = loan.effective_payment();
    let candidates: Vec<f64> = (0..=count).map(|i| base + step * i as f64).collect();
    let rows = sweep_loan_payments(loan, &candidates, as_of);

    println!("Extra-payment scenarios (baseline ${:.2}/month):", base);
    println!("{:>12} {:>10} {:>14} {:>16} {:>12}",
        "Payment", "Months", "Total Interest", "Interest Saved", "Payoff");
    println!("{}", "-".repeat(70));

    for row in &rows {
        if row.result.viable {
            println!("{:>12.2} {:>10} {:>14.2} {:>16.2} {:>12}",
                row.result.monthly_payment,
                row.result.months_to_payoff,
                row.result.total_interest,
                row.interest_saved,
                row.result.payoff_date,
            );
        } else {
            println!("{:>12.2} {:>10} {:>14} {:>16} {:>12}",
                row.result.monthly_payment, "never", "-", "-", "-");
        }
    }
}

fn print_loan_report(loans: &[LoanAccount], as_of: NaiveDate) {
    let report = payoff_report(loans, as_of);

    println!("{:>14} {:>8} {:>10} {:>12} {:>16}",
        "Balance", "Rate", "Payment", "Payoff", "Interest Left");
    println!("{}", "-".repeat(64));
    for (loan, outlook) in loans.iter().zip(&report) {
        let interest = if outlook.months_remaining == UNREACHABLE_MONTHS {
            "-".to_string()
        } else {
            format!("{:.2}", outlook.remaining_interest)
        };
        println!("{:>14.2} {:>7.2}% {:>10.2} {:>12} {:>16}",
            loan.current_balance,
            loan.annual_interest_rate_pct,
            loan.effective_payment(),
            format_months(outlook.months_remaining),
            interest,
        );
    }
}

fn print_savings(account: &InterestBearingAccount, months: u32, as_of: NaiveDate) {
    println!("Balance ${:.2}, target ${:.2}, {:.2}% APY, ${:.2}/month",
        account.current_balance,
        account.target_goal,
        account.annual_percentage_yield,
        account.monthly_contribution);
    println!("Time to goal: {}", format_months(months_to_reach_goal(account)));
    println!("Needed to finish in 12 months: ${:.2}/month",
        required_monthly_contribution(account, 12));

    println!("\n{:>5} {:>12} {:>12} {:>10} {:>14} {:>9}",
        "Month", "Date", "Deposit", "Interest", "Balance", "Progress");
    println!("{}", "-".repeat(68));
    for entry in generate_projection_schedule(account, months, as_of) {
        println!("{:>5} {:>12} {:>12.2} {:>10.2} {:>14.2} {:>8.1}%",
            entry.month,
            entry.date,
            entry.contribution,
            entry.interest_earned,
            entry.ending_balance,
            entry.progress_percent,
        );
    }
}

fn print_retirement(account: &CappedContributionAccount, as_of: NaiveDate) {
    let events = remaining_contribution_events(account, as_of);

    println!("Contributed ${:.2} of ${:.2} (window ends {})",
        account.contributions_this_period, account.annual_limit, account.period_end);
    println!("Remaining room:       ${:.2}", remaining_room(account));
    println!("Events left:          {}", events);
    println!("Needed per event:     ${:.2}", required_contribution_per_event(account, as_of));
    println!("Projected year end:   ${:.2}", projected_year_end_total(account, as_of));
    println!("On pace to max out:   {}",
        if is_on_pace_to_max_out(account, as_of) { "yes" } else { "no" });
}

fn print_portfolio(snap: &PortfolioSnapshot, invest: Option<f64>) {
    let total = total_value(&snap.holdings);
    let current = current_allocation_percent(&snap.holdings);

    println!("Portfolio value: ${:.2}", total);
    println!("{:>8} {:>10} {:>10} {:>12}", "Ticker", "Current", "Target", "Trade");
    println!("{}", "-".repeat(44));

    let trades = suggested_rebalance_trades(&snap.portfolio, &snap.holdings);
    let mut tickers: Vec<&String> = snap.portfolio.target_allocation.keys().collect();
    tickers.sort();
    for ticker in tickers {
        println!("{:>8} {:>9.1}% {:>9.1}% {:>12.2}",
            ticker,
            current.get(ticker).copied().unwrap_or(0.0),
            snap.portfolio.target_allocation[ticker],
            trades.get(ticker).copied().unwrap_or(0.0),
        );
    }

    println!("\nNeeds rebalancing: {}",
        if needs_rebalancing(&snap.portfolio, &snap.holdings) { "yes" } else { "no" });

    if let Some(cash) = invest {
        println!("\nSuggested buys for ${:.2} new cash:", cash);
        let buys = suggest_next_investment_allocation(&snap.portfolio, &snap.holdings, cash);
        let mut tickers: Vec<&String> = buys.keys().collect();
        tickers.sort();
        for ticker in tickers {
            println!("{:>8} {:>12.2}", ticker, buys[ticker]);
        }
    }
}

fn print_goal(goal: &Goal, as_of: NaiveDate) {
    println!("${:.2} of ${:.2} by {}", goal.current_amount, goal.target_amount, goal.deadline);
    println!("Progress:      {:.1}%", progress_percent(goal));
    println!("Needed pace:   ${:.2}/month", required_monthly_pace(goal, as_of));
    println!("Status:        {:?}", status(goal, as_of));
}
