//! Fixed-payment amortization schedule computation

use super::rows::{AmortizationResult, ScheduleRow};
use crate::error::LoanError;
use crate::loan::LoanTerms;

/// Convert a nominal annual percentage rate to a monthly rate
/// (6.5 -> 0.065 / 12)
pub fn monthly_rate(annual_rate_pct: f64) -> f64 {
    annual_rate_pct / 100.0 / 12.0
}

fn validate(terms: &LoanTerms) -> Result<(), LoanError> {
    if !terms.principal.is_finite() || terms.principal <= 0.0 {
        return Err(LoanError::invalid("principal", "must be a positive amount"));
    }
    if !terms.annual_rate_pct.is_finite() || terms.annual_rate_pct < 0.0 {
        return Err(LoanError::invalid("annual_rate_pct", "must be non-negative"));
    }
    if terms.term_months == 0 {
        return Err(LoanError::invalid("term_months", "must be at least 1"));
    }
    Ok(())
}

/// Compute the full amortization schedule for the given terms
///
/// Uses the standard fixed-payment annuity formula
/// `payment = P * r * (1+r)^n / ((1+r)^n - 1)`, then rolls the balance
/// forward month by month: `interest = balance * r`,
/// `principal = payment - interest`.
///
/// A zero rate degenerates to equal principal-only payments. The same
/// branch is taken if `(1+r)^n` underflows to 1 for an extremely small
/// rate, which would otherwise divide by zero.
///
/// The final row's balance is forced to exactly zero so the schedule
/// closes cleanly instead of carrying a floating-point residue.
pub fn amortize(terms: &LoanTerms) -> Result<AmortizationResult, LoanError> {
    validate(terms)?;

    let n = terms.term_months;
    let growth = (1.0 + monthly_rate(terms.annual_rate_pct)).powi(n as i32);

    let (payment, r) = if terms.annual_rate_pct == 0.0 || growth <= 1.0 {
        (terms.principal / n as f64, 0.0)
    } else {
        let r = monthly_rate(terms.annual_rate_pct);
        (terms.principal * r * growth / (growth - 1.0), r)
    };

    let mut balance = terms.principal;
    let mut cumulative_interest = 0.0;
    let mut schedule = Vec::with_capacity(n as usize);

    for month in 1..=n {
        let interest = balance * r;
        let principal_portion = payment - interest;
        balance = (balance - principal_portion).max(0.0);
        if month == n {
            balance = 0.0;
        }
        cumulative_interest += interest;

        schedule.push(ScheduleRow {
            month,
            payment,
            principal_portion,
            interest_portion: interest,
            ending_balance: balance,
            cumulative_interest,
        });
    }

    Ok(AmortizationResult {
        monthly_payment: payment,
        total_payment: payment * n as f64,
        total_interest: cumulative_interest,
        schedule,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_standard_mortgage() {
        // 30-year fixed at 6.5% on $200k: the textbook ~$1264.14 payment
        let result = amortize(&LoanTerms::new(200000.0, 6.5, 360)).unwrap();

        assert!((result.monthly_payment - 1264.14).abs() < 0.01);
        assert_relative_eq!(result.total_interest, 255088.98, max_relative = 1e-4);
        assert_eq!(result.schedule.len(), 360);
    }

    #[test]
    fn test_zero_rate_loan() {
        let result = amortize(&LoanTerms::new(12000.0, 0.0, 12)).unwrap();

        assert_eq!(result.monthly_payment, 1000.0);
        assert_eq!(result.total_interest, 0.0);
        assert!(result.schedule.iter().all(|row| row.interest_portion == 0.0));
    }

    #[test]
    fn test_principal_sums_to_loan_amount() {
        let result = amortize(&LoanTerms::new(200000.0, 6.5, 360)).unwrap();

        let principal_sum: f64 = result.schedule.iter().map(|r| r.principal_portion).sum();
        assert_relative_eq!(principal_sum, 200000.0, max_relative = 1e-6);
    }

    #[test]
    fn test_final_balance_exactly_zero() {
        let result = amortize(&LoanTerms::new(35000.0, 5.5, 120)).unwrap();
        assert_eq!(result.final_row().unwrap().ending_balance, 0.0);
    }

    #[test]
    fn test_row_portions_sum_to_payment() {
        let result = amortize(&LoanTerms::new(24000.0, 4.9, 60)).unwrap();

        for row in &result.schedule {
            assert!((row.principal_portion + row.interest_portion - row.payment).abs() < 1e-9);
        }
    }

    #[test]
    fn test_balance_non_increasing() {
        let result = amortize(&LoanTerms::new(24000.0, 4.9, 60)).unwrap();

        let mut prev = result.schedule[0].ending_balance;
        for row in &result.schedule[1..] {
            assert!(row.ending_balance <= prev);
            prev = row.ending_balance;
        }
    }

    #[test]
    fn test_rejects_invalid_inputs() {
        assert!(matches!(
            amortize(&LoanTerms::new(0.0, 6.5, 360)),
            Err(LoanError::InvalidInput { field: "principal", .. })
        ));
        assert!(matches!(
            amortize(&LoanTerms::new(-5.0, 6.5, 360)),
            Err(LoanError::InvalidInput { field: "principal", .. })
        ));
        assert!(matches!(
            amortize(&LoanTerms::new(1000.0, -1.0, 12)),
            Err(LoanError::InvalidInput { field: "annual_rate_pct", .. })
        ));
        assert!(matches!(
            amortize(&LoanTerms::new(1000.0, 6.5, 0)),
            Err(LoanError::InvalidInput { field: "term_months", .. })
        ));
    }

    #[test]
    fn test_tiny_rate_falls_back_to_zero_branch() {
        // Small enough that (1+r)^n rounds to 1.0; must not divide by zero
        let result = amortize(&LoanTerms::new(1000.0, 1e-14, 12)).unwrap();

        assert!(result.monthly_payment.is_finite());
        assert!((result.monthly_payment - 1000.0 / 12.0).abs() < 1e-6);
    }

    #[test]
    fn test_single_month_term() {
        let result = amortize(&LoanTerms::new(1000.0, 12.0, 1)).unwrap();

        assert_eq!(result.schedule.len(), 1);
        // One month of interest at 1% monthly
        assert!((result.monthly_payment - 1010.0).abs() < 1e-6);
        assert_eq!(result.schedule[0].ending_balance, 0.0);
    }
}
