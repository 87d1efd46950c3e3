//! Load loan records from CSV exports of the loans table

use super::Loan;
use chrono::NaiveDate;
use csv::Reader;
use std::error::Error;
use std::path::Path;

/// Raw CSV row matching the loans table export columns
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    id: u32,
    name: String,
    amount: f64,
    interest_rate: f64,
    term_months: u32,
    monthly_payment: f64,
    start_date: String,
}

impl CsvRow {
    fn into_loan(self) -> Result<Loan, Box<dyn Error>> {
        if self.amount <= 0.0 {
            return Err(format!("loan {}: amount must be positive", self.id).into());
        }
        if self.term_months == 0 {
            return Err(format!("loan {}: term_months must be at least 1", self.id).into());
        }
        if self.interest_rate < 0.0 {
            return Err(format!("loan {}: interest_rate must be non-negative", self.id).into());
        }
        if self.monthly_payment <= 0.0 {
            return Err(format!("loan {}: monthly_payment must be positive", self.id).into());
        }

        // Stored as a date or a full ISO timestamp; keep the date part
        let date_part = self.start_date.split('T').next().unwrap_or(&self.start_date);
        let start_date = NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
            .map_err(|e| format!("loan {}: bad start_date {:?}: {}", self.id, self.start_date, e))?;

        Ok(Loan {
            id: self.id,
            name: self.name,
            principal: self.amount,
            annual_rate_pct: self.interest_rate,
            term_months: self.term_months,
            monthly_payment: self.monthly_payment,
            start_date,
        })
    }
}

/// Load all loans from a CSV file
pub fn load_loans<P: AsRef<Path>>(path: P) -> Result<Vec<Loan>, Box<dyn Error>> {
    let mut reader = Reader::from_path(path)?;
    let mut loans = Vec::new();

    for result in reader.deserialize() {
        let row: CsvRow = result?;
        loans.push(row.into_loan()?);
    }

    log::debug!("loaded {} loans", loans.len());
    Ok(loans)
}

/// Load loans from any reader (e.g., string buffer, network stream)
pub fn load_loans_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<Loan>, Box<dyn Error>> {
    let mut csv_reader = Reader::from_reader(reader);
    let mut loans = Vec::new();

    for result in csv_reader.deserialize() {
        let row: CsvRow = result?;
        loans.push(row.into_loan()?);
    }

    Ok(loans)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
id,name,amount,interest_rate,term_months,monthly_payment,start_date
1,Mortgage,200000,6.5,360,1264.14,2023-06-01
2,Auto,24000,4.9,60,451.79,2024-03-15T00:00:00
3,Student,35000,5.5,120,379.84,2022-09-01
";

    #[test]
    fn test_load_from_reader() {
        let loans = load_loans_from_reader(SAMPLE.as_bytes()).expect("Failed to load loans");
        assert_eq!(loans.len(), 3);

        let mortgage = &loans[0];
        assert_eq!(mortgage.id, 1);
        assert_eq!(mortgage.name, "Mortgage");
        assert_eq!(mortgage.principal, 200000.0);
        assert_eq!(mortgage.term_months, 360);

        // Timestamp variant keeps just the date part
        let auto = &loans[1];
        assert_eq!(
            auto.start_date,
            NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
        );
    }

    #[test]
    fn test_rejects_nonpositive_amount() {
        let bad = "\
id,name,amount,interest_rate,term_months,monthly_payment,start_date
9,Broken,0,5.0,12,100.0,2024-01-01
";
        assert!(load_loans_from_reader(bad.as_bytes()).is_err());
    }

    #[test]
    fn test_rejects_negative_rate() {
        let bad = "\
id,name,amount,interest_rate,term_months,monthly_payment,start_date
9,Broken,1000,-2.5,12,100.0,2024-01-01
";
        let err = load_loans_from_reader(bad.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("interest_rate"));
    }

    #[test]
    fn test_rejects_nonpositive_payment() {
        let bad = "\
id,name,amount,interest_rate,term_months,monthly_payment,start_date
9,Broken,1000,5.0,12,0,2024-01-01
";
        let err = load_loans_from_reader(bad.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("monthly_payment"));
    }

    #[test]
    fn test_rejects_bad_date() {
        let bad = "\
id,name,amount,interest_rate,term_months,monthly_payment,start_date
9,Broken,1000,5.0,12,100.0,June 2024
";
        assert!(load_loans_from_reader(bad.as_bytes()).is_err());
    }
}
