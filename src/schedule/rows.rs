//! Schedule output structures for amortization runs

use serde::{Deserialize, Serialize};

/// A single month of an amortization schedule
///
/// `payment` is constant across all rows for a standard fixed-payment
/// amortization; `principal_portion + interest_portion == payment` for
/// every row within floating-point tolerance.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ScheduleRow {
    /// Schedule month (1-indexed)
    pub month: u32,

    /// Total payment for the month
    pub payment: f64,

    /// Portion of the payment reducing the balance
    pub principal_portion: f64,

    /// Portion of the payment covering accrued interest
    pub interest_portion: f64,

    /// Balance after this month's payment, never below zero
    pub ending_balance: f64,

    /// Running sum of interest portions through this row
    pub cumulative_interest: f64,
}

/// Complete result of an amortization run
///
/// Pure output: re-derivable at any time from the same `LoanTerms`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmortizationResult {
    /// Fixed monthly payment
    pub monthly_payment: f64,

    /// Total paid over the life of the loan
    pub total_payment: f64,

    /// Total interest paid over the life of the loan
    pub total_interest: f64,

    /// Monthly rows, one per month of the term
    pub schedule: Vec<ScheduleRow>,
}

impl AmortizationResult {
    /// Number of months in the schedule
    pub fn term_months(&self) -> u32 {
        self.schedule.len() as u32
    }

    /// Final row of the schedule, if the term is non-empty
    pub fn final_row(&self) -> Option<&ScheduleRow> {
        self.schedule.last()
    }
}
