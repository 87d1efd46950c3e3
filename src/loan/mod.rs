//! Loan records and CSV loading

mod data;
mod loader;

pub use data::{Loan, LoanTerms};
pub use loader::{load_loans, load_loans_from_reader};
