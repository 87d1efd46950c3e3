//! Lifetime cost ranking across a set of stored loans

use crate::loan::Loan;
use serde::{Deserialize, Serialize};

/// Lifetime cost of a loan at its scheduled payment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanCostSummary {
    pub loan_id: u32,
    pub name: String,

    /// monthly_payment * term_months
    pub total_cost: f64,

    /// Lifetime cost minus principal
    pub total_interest: f64,

    /// Lifetime interest as a percentage of principal
    pub interest_ratio_pct: f64,
}

/// Rank loans by total lifetime cost, cheapest first
pub fn rank_by_total_cost(loans: &[Loan]) -> Vec<LoanCostSummary> {
    let mut ranked: Vec<LoanCostSummary> = loans
        .iter()
        .map(|loan| {
            let total_cost = loan.total_cost();
            let total_interest = total_cost - loan.principal;
            LoanCostSummary {
                loan_id: loan.id,
                name: loan.name.clone(),
                total_cost,
                total_interest,
                interest_ratio_pct: total_interest / loan.principal * 100.0,
            }
        })
        .collect();

    ranked.sort_by(|a, b| a.total_cost.total_cmp(&b.total_cost));
    ranked
}
