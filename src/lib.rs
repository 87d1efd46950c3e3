//! Loan Engine - Amortization and payoff analytics for a personal-finance dashboard
//!
//! This library provides:
//! - Fixed-payment amortization schedules with per-month breakdowns
//! - Early payoff projections for extra monthly payments
//! - Refinance comparison with break-even analysis
//! - Milestone detection over computed schedules
//! - Loan cost ranking and portfolio-level batch amortization
//! - CSV loading of stored loan records and schedule export

pub mod analysis;
pub mod error;
pub mod export;
pub mod loan;
pub mod portfolio;
pub mod schedule;

// Re-export commonly used types
pub use analysis::{
    analyze_refinance, project_payoff, rank_by_total_cost, BreakEven, LoanCostSummary,
    PayoffProjection, RefinanceAnalysis,
};
pub use error::LoanError;
pub use loan::{Loan, LoanTerms};
pub use schedule::{amortize, find_milestones, AmortizationResult, MilestoneReport, ScheduleRow};
