//! Loan data structures matching the dashboard's stored loan format

use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

/// Input terms for an amortization computation
///
/// The rate is a nominal annual percentage (6.5 means 6.5%), compounded
/// monthly at rate / 12.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanTerms {
    /// Amount borrowed
    pub principal: f64,

    /// Nominal annual interest rate in percent
    pub annual_rate_pct: f64,

    /// Repayment term in months
    pub term_months: u32,
}

impl LoanTerms {
    pub fn new(principal: f64, annual_rate_pct: f64, term_months: u32) -> Self {
        Self {
            principal,
            annual_rate_pct,
            term_months,
        }
    }
}

/// A stored loan record as persisted by the dashboard's loans table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Loan {
    pub id: u32,
    pub name: String,

    /// Original amount borrowed
    pub principal: f64,

    /// Nominal annual interest rate in percent
    pub annual_rate_pct: f64,

    /// Repayment term in months
    pub term_months: u32,

    /// Scheduled monthly payment
    pub monthly_payment: f64,

    /// Origination date
    pub start_date: NaiveDate,
}

impl Loan {
    /// Amortization inputs for this loan
    pub fn terms(&self) -> LoanTerms {
        LoanTerms::new(self.principal, self.annual_rate_pct, self.term_months)
    }

    /// Scheduled payoff date: origination plus the full term
    pub fn payoff_date(&self) -> NaiveDate {
        self.start_date + Months::new(self.term_months)
    }

    /// Lifetime cost at the scheduled payment
    pub fn total_cost(&self) -> f64 {
        self.monthly_payment * self.term_months as f64
    }

    /// Lifetime interest at the scheduled payment
    pub fn total_interest(&self) -> f64 {
        self.total_cost() - self.principal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payoff_date() {
        let loan = Loan {
            id: 1,
            name: "Auto".to_string(),
            principal: 24000.0,
            annual_rate_pct: 4.9,
            term_months: 60,
            monthly_payment: 451.79,
            start_date: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
        };

        assert_eq!(
            loan.payoff_date(),
            NaiveDate::from_ymd_opt(2029, 3, 15).unwrap()
        );
    }

    #[test]
    fn test_lifetime_cost() {
        let loan = Loan {
            id: 2,
            name: "Mortgage".to_string(),
            principal: 200000.0,
            annual_rate_pct: 6.5,
            term_months: 360,
            monthly_payment: 1264.14,
            start_date: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
        };

        assert!((loan.total_cost() - 455090.4).abs() < 0.01);
        assert!((loan.total_interest() - 255090.4).abs() < 0.01);
    }
}
