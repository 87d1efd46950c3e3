//! Batch amortization across a book of loans
//!
//! Each loan amortizes independently, so the batch runs in parallel.
//! Aggregated monthly totals feed the dashboard's combined payment and
//! balance charts.

use crate::error::LoanError;
use crate::loan::Loan;
use crate::schedule::{amortize, AmortizationResult};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Combined monthly totals across all loans still running that month
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AggregatedMonth {
    pub month: u32,
    pub total_payment: f64,
    pub total_principal: f64,
    pub total_interest: f64,
    pub total_balance: f64,
}

/// Amortize every loan in the book
///
/// Fails on the first invalid loan rather than returning a partial
/// batch.
pub fn amortize_all(loans: &[Loan]) -> Result<Vec<AmortizationResult>, LoanError> {
    loans.par_iter().map(|loan| amortize(&loan.terms())).collect()
}

/// Sum schedules by month index across a set of results
///
/// The horizon is the longest term in the batch; shorter loans simply
/// stop contributing once repaid.
pub fn aggregate_monthly(results: &[AmortizationResult]) -> Vec<AggregatedMonth> {
    let horizon = results.iter().map(|r| r.schedule.len()).max().unwrap_or(0);

    let mut aggregated: Vec<AggregatedMonth> = (1..=horizon as u32)
        .map(|month| AggregatedMonth {
            month,
            ..Default::default()
        })
        .collect();

    for result in results {
        for row in &result.schedule {
            let agg = &mut aggregated[(row.month - 1) as usize];
            agg.total_payment += row.payment;
            agg.total_principal += row.principal_portion;
            agg.total_interest += row.interest_portion;
            agg.total_balance += row.ending_balance;
        }
    }

    aggregated
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loan::LoanTerms;
    use approx::assert_relative_eq;
    use chrono::NaiveDate;

    fn loan(id: u32, principal: f64, rate: f64, term: u32) -> Loan {
        let payment = amortize(&LoanTerms::new(principal, rate, term))
            .unwrap()
            .monthly_payment;
        Loan {
            id,
            name: format!("Loan {}", id),
            principal,
            annual_rate_pct: rate,
            term_months: term,
            monthly_payment: payment,
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        }
    }

    #[test]
    fn test_batch_matches_single_runs() {
        let loans = vec![loan(1, 200000.0, 6.5, 360), loan(2, 24000.0, 4.9, 60)];
        let results = amortize_all(&loans).unwrap();

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].schedule.len(), 360);
        assert_eq!(results[1].schedule.len(), 60);

        let single = amortize(&loans[0].terms()).unwrap();
        assert_eq!(results[0].monthly_payment, single.monthly_payment);
    }

    #[test]
    fn test_batch_fails_on_invalid_loan() {
        let mut bad = loan(1, 1000.0, 5.0, 12);
        bad.principal = -1.0;

        assert!(amortize_all(&[bad]).is_err());
    }

    #[test]
    fn test_aggregation_horizon_and_totals() {
        let loans = vec![loan(1, 200000.0, 6.5, 360), loan(2, 24000.0, 4.9, 60)];
        let results = amortize_all(&loans).unwrap();
        let aggregated = aggregate_monthly(&results);

        assert_eq!(aggregated.len(), 360);

        // Both loans pay in month 1
        let first = &aggregated[0];
        assert_relative_eq!(
            first.total_payment,
            results[0].monthly_payment + results[1].monthly_payment,
            max_relative = 1e-12
        );

        // Only the mortgage remains after month 60
        let later = &aggregated[60];
        assert_relative_eq!(
            later.total_payment,
            results[0].monthly_payment,
            max_relative = 1e-12
        );

        // Aggregate principal over the horizon repays both loans
        let total_principal: f64 = aggregated.iter().map(|m| m.total_principal).sum();
        assert_relative_eq!(total_principal, 224000.0, max_relative = 1e-6);
    }

    #[test]
    fn test_empty_batch() {
        let results = amortize_all(&[]).unwrap();
        assert!(results.is_empty());
        assert!(aggregate_monthly(&results).is_empty());
    }
}
