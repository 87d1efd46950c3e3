//! Error types for loan calculations
//!
//! All validation failures are synchronous and identify the offending
//! field. A refinance that never breaks even is reported as data
//! (`BreakEven::Never`), not as an error.

use thiserror::Error;

/// Errors produced by the calculation functions
#[derive(Debug, Error)]
pub enum LoanError {
    /// An input failed validation before any schedule was computed
    #[error("invalid input: {field} {reason}")]
    InvalidInput {
        field: &'static str,
        reason: String,
    },

    /// The monthly payment does not cover the first month's interest
    /// accrual, so the balance never declines
    #[error(
        "monthly payment {payment:.2} does not cover monthly interest {interest_due:.2}; \
         the loan never amortizes"
    )]
    NonAmortizingPayment { payment: f64, interest_due: f64 },
}

impl LoanError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        LoanError::InvalidInput {
            field,
            reason: reason.into(),
        }
    }
}
