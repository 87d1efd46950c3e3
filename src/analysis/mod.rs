//! Payoff, refinance, and comparison calculators built on the schedule
//! engine

mod comparison;
mod payoff;
mod refinance;

pub use comparison::{rank_by_total_cost, LoanCostSummary};
pub use payoff::{project_payoff, PayoffProjection};
pub use refinance::{analyze_refinance, BreakEven, RefinanceAnalysis};
