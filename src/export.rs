//! Schedule export for user download
//!
//! Pure formatting transform over a computed schedule; column names
//! match the dashboard's downloadable table.

use crate::schedule::ScheduleRow;
use csv::Writer;
use serde::Serialize;
use std::error::Error;
use std::io::Write;
use std::path::Path;

/// Row shape written to the exported file
#[derive(Debug, Serialize)]
struct ExportRow {
    month: u32,
    payment: f64,
    principal: f64,
    interest: f64,
    balance: f64,
    #[serde(rename = "totalInterest")]
    total_interest: f64,
}

impl From<&ScheduleRow> for ExportRow {
    fn from(row: &ScheduleRow) -> Self {
        Self {
            month: row.month,
            payment: row.payment,
            principal: row.principal_portion,
            interest: row.interest_portion,
            balance: row.ending_balance,
            total_interest: row.cumulative_interest,
        }
    }
}

/// Write a schedule as CSV to any writer
pub fn write_schedule<W: Write>(writer: W, schedule: &[ScheduleRow]) -> Result<(), csv::Error> {
    let mut csv_writer = Writer::from_writer(writer);
    for row in schedule {
        csv_writer.serialize(ExportRow::from(row))?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Write a schedule as CSV to a file path
pub fn write_schedule_to_path<P: AsRef<Path>>(
    path: P,
    schedule: &[ScheduleRow],
) -> Result<(), Box<dyn Error>> {
    let mut csv_writer = Writer::from_path(path)?;
    for row in schedule {
        csv_writer.serialize(ExportRow::from(row))?;
    }
    csv_writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loan::LoanTerms;
    use crate::schedule::amortize;

    #[test]
    fn test_export_header_and_rows() {
        let result = amortize(&LoanTerms::new(12000.0, 0.0, 12)).unwrap();

        let mut buf = Vec::new();
        write_schedule(&mut buf, &result.schedule).unwrap();
        let text = String::from_utf8(buf).unwrap();

        let mut lines = text.lines();
        assert_eq!(
            lines.next().unwrap(),
            "month,payment,principal,interest,balance,totalInterest"
        );
        assert_eq!(lines.count(), 12);
    }

    #[test]
    fn test_export_first_row_values() {
        let result = amortize(&LoanTerms::new(12000.0, 0.0, 12)).unwrap();

        let mut buf = Vec::new();
        write_schedule(&mut buf, &result.schedule).unwrap();
        let text = String::from_utf8(buf).unwrap();

        let first = text.lines().nth(1).unwrap();
        let fields: Vec<&str> = first.split(',').collect();
        assert_eq!(fields[0], "1");
        assert_eq!(fields[1].parse::<f64>().unwrap(), 1000.0);
        assert_eq!(fields[4].parse::<f64>().unwrap(), 11000.0);
    }
}
