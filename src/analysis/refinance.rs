//! Refinance comparison against a loan's current terms
//!
//! The refinanced payment is computed on the original principal and
//! term with the new rate substituted. A worse offer is a legitimate
//! result, not an error: savings go negative and break-even is `Never`.

use crate::error::LoanError;
use crate::loan::{Loan, LoanTerms};
use crate::schedule::amortize;
use serde::{Deserialize, Serialize};

/// Break-even point for refinance closing costs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BreakEven {
    /// Months of payment savings needed to recoup the closing costs
    Months(u32),

    /// Savings never recoup the costs (zero or negative monthly savings)
    Never,
}

impl BreakEven {
    /// Month count, if the costs are ever recouped
    pub fn months(&self) -> Option<u32> {
        match self {
            BreakEven::Months(m) => Some(*m),
            BreakEven::Never => None,
        }
    }
}

/// Outcome of refinancing at a new rate with upfront closing costs
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RefinanceAnalysis {
    /// Fixed payment at the new rate, same principal and term
    pub new_monthly_payment: f64,

    /// Current payment minus new payment; negative for a worse rate
    pub monthly_savings: f64,

    /// Lifetime interest difference between old and new schedules
    pub total_interest_savings: f64,

    /// When the monthly savings recoup the closing costs
    pub break_even: BreakEven,

    /// Lifetime cost difference net of closing costs
    pub net_savings: f64,
}

/// Compare the loan's current terms against a refinance offer
pub fn analyze_refinance(
    loan: &Loan,
    new_rate_pct: f64,
    closing_costs: f64,
) -> Result<RefinanceAnalysis, LoanError> {
    if !new_rate_pct.is_finite() || new_rate_pct < 0.0 {
        return Err(LoanError::invalid("new_rate_pct", "must be non-negative"));
    }
    if !closing_costs.is_finite() || closing_costs < 0.0 {
        return Err(LoanError::invalid("closing_costs", "must be non-negative"));
    }

    let current = amortize(&loan.terms())?;
    let refinanced = amortize(&LoanTerms::new(
        loan.principal,
        new_rate_pct,
        loan.term_months,
    ))?;

    let monthly_savings = loan.monthly_payment - refinanced.monthly_payment;
    let break_even = if monthly_savings > 0.0 {
        BreakEven::Months((closing_costs / monthly_savings).ceil() as u32)
    } else {
        BreakEven::Never
    };

    let current_total_cost = loan.total_cost();
    Ok(RefinanceAnalysis {
        new_monthly_payment: refinanced.monthly_payment,
        monthly_savings,
        total_interest_savings: current.total_interest - refinanced.total_interest,
        break_even,
        net_savings: (current_total_cost - refinanced.total_payment) - closing_costs,
    })
}
