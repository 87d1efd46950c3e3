//! Loan Engine CLI
//!
//! Command-line interface for the dashboard calculators: amortization
//! schedules, early payoff, refinance comparison, and loan cost ranking.

use anyhow::{anyhow, Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};
use loan_engine::{
    amortize, analyze_refinance, find_milestones, loan::load_loans, portfolio, project_payoff,
    rank_by_total_cost, BreakEven, Loan, LoanTerms,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "loan_engine", version, about = "Loan amortization and payoff analytics")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compute a full amortization schedule
    Amortize {
        /// Amount borrowed
        #[arg(long)]
        principal: f64,
        /// Annual interest rate in percent (e.g. 6.5)
        #[arg(long)]
        rate: f64,
        /// Term in months
        #[arg(long)]
        term: u32,
        /// Write the full schedule to a CSV file
        #[arg(long)]
        out: Option<PathBuf>,
        /// Print milestone analysis after the summary
        #[arg(long)]
        milestones: bool,
        /// Emit the result as JSON instead of tables
        #[arg(long)]
        json: bool,
    },
    /// Project early payoff with an extra monthly payment
    Payoff {
        #[arg(long)]
        principal: f64,
        #[arg(long)]
        rate: f64,
        #[arg(long)]
        term: u32,
        /// Current monthly payment; defaults to the computed annuity payment
        #[arg(long)]
        payment: Option<f64>,
        /// Extra amount added to every monthly payment
        #[arg(long)]
        extra: f64,
        /// Emit the result as JSON instead of tables
        #[arg(long)]
        json: bool,
    },
    /// Compare current terms against a refinance offer
    Refinance {
        #[arg(long)]
        principal: f64,
        #[arg(long)]
        rate: f64,
        #[arg(long)]
        term: u32,
        /// Current monthly payment; defaults to the computed annuity payment
        #[arg(long)]
        payment: Option<f64>,
        /// Offered annual rate in percent
        #[arg(long)]
        new_rate: f64,
        /// Upfront closing costs
        #[arg(long, default_value_t = 0.0)]
        closing_costs: f64,
        /// Emit the result as JSON instead of tables
        #[arg(long)]
        json: bool,
    },
    /// Rank loans from a CSV export by lifetime cost
    Compare {
        /// CSV file with columns id,name,amount,interest_rate,term_months,monthly_payment,start_date
        file: PathBuf,
        /// Also print combined monthly totals across all loans
        #[arg(long)]
        aggregate: bool,
        /// Emit the ranking as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    match Cli::parse().command {
        Command::Amortize {
            principal,
            rate,
            term,
            out,
            milestones,
            json,
        } => run_amortize(principal, rate, term, out, milestones, json),
        Command::Payoff {
            principal,
            rate,
            term,
            payment,
            extra,
            json,
        } => run_payoff(principal, rate, term, payment, extra, json),
        Command::Refinance {
            principal,
            rate,
            term,
            payment,
            new_rate,
            closing_costs,
            json,
        } => run_refinance(principal, rate, term, payment, new_rate, closing_costs, json),
        Command::Compare {
            file,
            aggregate,
            json,
        } => run_compare(&file, aggregate, json),
    }
}

/// Build an ad-hoc loan record from CLI arguments
fn loan_from_args(principal: f64, rate: f64, term: u32, payment: Option<f64>) -> Result<Loan> {
    let monthly_payment = match payment {
        Some(p) => p,
        None => amortize(&LoanTerms::new(principal, rate, term))?.monthly_payment,
    };

    Ok(Loan {
        id: 0,
        name: "current".to_string(),
        principal,
        annual_rate_pct: rate,
        term_months: term,
        monthly_payment,
        start_date: Utc::now().date_naive(),
    })
}

/// JSON response shape for the amortize subcommand
#[derive(serde::Serialize)]
struct AmortizeResponse {
    #[serde(flatten)]
    result: loan_engine::AmortizationResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    milestones: Option<loan_engine::MilestoneReport>,
}

fn run_amortize(
    principal: f64,
    rate: f64,
    term: u32,
    out: Option<PathBuf>,
    milestones: bool,
    json: bool,
) -> Result<()> {
    let result = amortize(&LoanTerms::new(principal, rate, term))?;

    if json {
        if let Some(path) = &out {
            loan_engine::export::write_schedule_to_path(path, &result.schedule)
                .map_err(|e| anyhow!("failed to write {}: {}", path.display(), e))?;
            log::info!("schedule written to {}", path.display());
        }
        let response = AmortizeResponse {
            milestones: milestones.then(|| find_milestones(&result.schedule, principal)),
            result,
        };
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    println!("Amortization: ${:.2} at {}% over {} months\n", principal, rate, term);
    println!("  Monthly Payment: ${:.2}", result.monthly_payment);
    println!("  Total Payment:   ${:.2}", result.total_payment);
    println!("  Total Interest:  ${:.2}", result.total_interest);
    println!();

    println!("{:>5} {:>12} {:>12} {:>12} {:>14} {:>14}",
        "Month", "Payment", "Principal", "Interest", "Balance", "TotalInterest");
    println!("{}", "-".repeat(74));

    for row in result.schedule.iter().take(24) {
        println!("{:>5} {:>12.2} {:>12.2} {:>12.2} {:>14.2} {:>14.2}",
            row.month,
            row.payment,
            row.principal_portion,
            row.interest_portion,
            row.ending_balance,
            row.cumulative_interest,
        );
    }
    if result.schedule.len() > 24 {
        println!("... ({} more months)", result.schedule.len() - 24);
    }

    if milestones {
        let report = find_milestones(&result.schedule, principal);
        println!("\nMilestones:");
        match report.halfway {
            Some(m) => println!("  50% paid off:  month {} ({:.1} years)", m, m as f64 / 12.0),
            None => println!("  50% paid off:  not reached"),
        }
        match report.three_quarters_repaid {
            Some(m) => println!("  75% paid off:  month {} ({:.1} years)", m, m as f64 / 12.0),
            None => println!("  75% paid off:  not reached"),
        }
        match report.interest_equals_principal {
            Some(m) => println!("  Interest equals principal: month {}", m),
            None => println!("  Interest equals principal: not reached"),
        }
    }

    if let Some(path) = out {
        loan_engine::export::write_schedule_to_path(&path, &result.schedule)
            .map_err(|e| anyhow!("failed to write {}: {}", path.display(), e))?;
        log::info!("schedule written to {}", path.display());
        println!("\nFull schedule written to: {}", path.display());
    }

    Ok(())
}

fn run_payoff(
    principal: f64,
    rate: f64,
    term: u32,
    payment: Option<f64>,
    extra: f64,
    json: bool,
) -> Result<()> {
    let loan = loan_from_args(principal, rate, term, payment)?;
    let projection = project_payoff(&loan, extra)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&projection)?);
        return Ok(());
    }

    println!("Early payoff with ${:.2} extra per month:\n", extra);
    println!("  New Term:        {} months ({:.1} years)",
        projection.new_term_months, projection.new_term_months as f64 / 12.0);
    println!("  New Total Cost:  ${:.2}", projection.new_total_cost);
    println!("  New Interest:    ${:.2}", projection.new_total_interest);
    println!("  Months Saved:    {}", projection.months_saved);
    println!("  Interest Saved:  ${:.2}", projection.interest_saved);

    Ok(())
}

fn run_refinance(
    principal: f64,
    rate: f64,
    term: u32,
    payment: Option<f64>,
    new_rate: f64,
    closing_costs: f64,
    json: bool,
) -> Result<()> {
    let loan = loan_from_args(principal, rate, term, payment)?;
    let analysis = analyze_refinance(&loan, new_rate, closing_costs)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
        return Ok(());
    }

    println!("Refinance {}% -> {}% with ${:.2} closing costs:\n", rate, new_rate, closing_costs);
    println!("  New Payment:      ${:.2}", analysis.new_monthly_payment);
    println!("  Monthly Savings:  ${:.2}", analysis.monthly_savings);
    println!("  Interest Savings: ${:.2}", analysis.total_interest_savings);
    match analysis.break_even {
        BreakEven::Months(m) => println!("  Break-even:       {} months", m),
        BreakEven::Never => println!("  Break-even:       never (no monthly savings)"),
    }
    println!("  Net Savings:      ${:.2}", analysis.net_savings);

    Ok(())
}

/// JSON response shape for the compare subcommand
#[derive(serde::Serialize)]
struct CompareResponse {
    ranking: Vec<loan_engine::LoanCostSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    monthly_totals: Option<Vec<portfolio::AggregatedMonth>>,
}

fn run_compare(file: &PathBuf, aggregate: bool, json: bool) -> Result<()> {
    let loans = load_loans(file)
        .map_err(|e| anyhow!("failed to load {}: {}", file.display(), e))?;
    log::info!("loaded {} loans from {}", loans.len(), file.display());

    if json {
        let monthly_totals = if aggregate {
            let results = portfolio::amortize_all(&loans).context("batch amortization failed")?;
            Some(portfolio::aggregate_monthly(&results))
        } else {
            None
        };
        let response = CompareResponse {
            ranking: rank_by_total_cost(&loans),
            monthly_totals,
        };
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    if loans.is_empty() {
        println!("No loans in {}", file.display());
        return Ok(());
    }

    let ranked = rank_by_total_cost(&loans);

    println!("Loan cost comparison ({} loans, cheapest first):\n", ranked.len());
    println!("{:>4} {:<20} {:>14} {:>14} {:>10}",
        "ID", "Name", "TotalCost", "Interest", "Int/Prin");
    println!("{}", "-".repeat(66));
    for summary in &ranked {
        println!("{:>4} {:<20} {:>14.2} {:>14.2} {:>9.1}%",
            summary.loan_id,
            summary.name,
            summary.total_cost,
            summary.total_interest,
            summary.interest_ratio_pct,
        );
    }

    if aggregate {
        let results = portfolio::amortize_all(&loans).context("batch amortization failed")?;
        let monthly = portfolio::aggregate_monthly(&results);

        println!("\nCombined monthly totals (first 24 months):");
        println!("{:>5} {:>14} {:>14} {:>14} {:>16}",
            "Month", "Payment", "Principal", "Interest", "Balance");
        println!("{}", "-".repeat(66));
        for agg in monthly.iter().take(24) {
            println!("{:>5} {:>14.2} {:>14.2} {:>14.2} {:>16.2}",
                agg.month,
                agg.total_payment,
                agg.total_principal,
                agg.total_interest,
                agg.total_balance,
            );
        }
        if monthly.len() > 24 {
            println!("... ({} more months)", monthly.len() - 24);
        }
    }

    Ok(())
}
