//! Amortization schedule computation and milestone analysis

mod engine;
mod milestones;
mod rows;

pub use engine::{amortize, monthly_rate};
pub use milestones::{find_milestones, MilestoneReport};
pub use rows::{AmortizationResult, ScheduleRow};
