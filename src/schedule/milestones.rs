//! Milestone detection over a computed schedule
//!
//! Single forward pass; each milestone is the first qualifying month,
//! or absent if the schedule ends before the threshold is crossed.

use super::rows::ScheduleRow;
use serde::{Deserialize, Serialize};

/// Months at which a schedule crosses key repayment thresholds
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MilestoneReport {
    /// First month with half the principal repaid
    pub halfway: Option<u32>,

    /// First month with three quarters of the principal repaid
    /// (balance at or below a quarter of the original principal)
    pub three_quarters_repaid: Option<u32>,

    /// First month where cumulative interest reaches the original
    /// principal
    pub interest_equals_principal: Option<u32>,
}

impl MilestoneReport {
    fn complete(&self) -> bool {
        self.halfway.is_some()
            && self.three_quarters_repaid.is_some()
            && self.interest_equals_principal.is_some()
    }
}

/// Scan an ordered schedule for threshold crossings
pub fn find_milestones(schedule: &[ScheduleRow], original_principal: f64) -> MilestoneReport {
    let mut report = MilestoneReport::default();

    for row in schedule {
        if report.halfway.is_none() && row.ending_balance <= original_principal / 2.0 {
            report.halfway = Some(row.month);
        }
        if report.three_quarters_repaid.is_none()
            && row.ending_balance <= original_principal / 4.0
        {
            report.three_quarters_repaid = Some(row.month);
        }
        if report.interest_equals_principal.is_none()
            && row.cumulative_interest >= original_principal
        {
            report.interest_equals_principal = Some(row.month);
        }
        if report.complete() {
            break;
        }
    }

    report
}
