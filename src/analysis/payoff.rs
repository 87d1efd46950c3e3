//! Early payoff projection for an existing loan

use crate::error::LoanError;
use crate::loan::Loan;
use crate::schedule::{amortize, monthly_rate};
use serde::{Deserialize, Serialize};

/// Effect of adding a fixed extra amount to every monthly payment
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PayoffProjection {
    /// Months to payoff at the increased payment
    pub new_term_months: u32,

    /// Total paid at the increased payment
    pub new_total_cost: f64,

    /// Total interest at the increased payment
    pub new_total_interest: f64,

    /// Months cut from the original term
    pub months_saved: i64,

    /// Interest saved versus the original schedule
    pub interest_saved: f64,
}

/// Solve for the payoff term at `monthly_payment + extra_payment`
///
/// Closed form: `n = ln(P' / (P' - principal * r)) / ln(1 + r)`, rounded
/// up to whole months. The result is snapped to the nearest integer
/// first so that a payment matching the original annuity exactly does
/// not round up an extra month on floating-point noise.
///
/// Fails with [`LoanError::NonAmortizingPayment`] when the combined
/// payment does not exceed the first month's interest accrual, since
/// the balance would never decline.
pub fn project_payoff(loan: &Loan, extra_payment: f64) -> Result<PayoffProjection, LoanError> {
    if !extra_payment.is_finite() || extra_payment < 0.0 {
        return Err(LoanError::invalid("extra_payment", "must be non-negative"));
    }

    let original = amortize(&loan.terms())?;

    let paid = loan.monthly_payment + extra_payment;
    if !paid.is_finite() || paid <= 0.0 {
        return Err(LoanError::invalid("monthly_payment", "must be positive"));
    }

    let r = monthly_rate(loan.annual_rate_pct);
    let new_term_months = if r == 0.0 {
        ceil_months(loan.principal / paid)
    } else {
        let interest_due = loan.principal * r;
        if paid <= interest_due {
            return Err(LoanError::NonAmortizingPayment {
                payment: paid,
                interest_due,
            });
        }
        ceil_months((paid / (paid - interest_due)).ln() / (1.0 + r).ln())
    };

    let new_total_cost = paid * new_term_months as f64;
    let new_total_interest = new_total_cost - loan.principal;

    Ok(PayoffProjection {
        new_term_months,
        new_total_cost,
        new_total_interest,
        months_saved: loan.term_months as i64 - new_term_months as i64,
        interest_saved: original.total_interest - new_total_interest,
    })
}

/// Round a fractional month count up, snapping near-integers first
fn ceil_months(raw: f64) -> u32 {
    let snapped = if (raw - raw.round()).abs() < 1e-6 {
        raw.round()
    } else {
        raw.ceil()
    };
    snapped.max(1.0) as u32
}
