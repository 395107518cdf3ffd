//! CSV Export functionality
//!
//! One row per item of the vault report, header included.

use std::io::Write;

use super::export_error;
use super::report::VaultReport;
use crate::error::RenewalResult;

const HEADER: [&str; 9] = [
    "Title",
    "Category",
    "Issuer",
    "Expiry Date",
    "Days Left",
    "Status",
    "Price",
    "Completed",
    "Notes",
];

/// Export the report rows to CSV
pub fn export_report_csv<W: Write>(report: &VaultReport, writer: &mut W) -> RenewalResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.write_record(HEADER).map_err(export_error)?;

    for row in &report.rows {
        let expiry = row.expiry_date.to_string();
        let days_left = row.days_until_expiry.to_string();
        let status = row.bucket.to_string();

        csv_writer
            .write_record([
                row.title.as_str(),
                row.category.tag(),
                row.issuer.as_deref().unwrap_or(""),
                expiry.as_str(),
                days_left.as_str(),
                status.as_str(),
                row.price.as_deref().unwrap_or(""),
                if row.completed { "yes" } else { "no" },
                row.notes.as_str(),
            ])
            .map_err(export_error)?;
    }

    csv_writer.flush().map_err(export_error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::report::tests::sample_report;

    #[test]
    fn test_csv_export() {
        let report = sample_report();
        let mut output = Vec::new();
        export_report_csv(&report, &mut output).unwrap();

        let csv_string = String::from_utf8(output).unwrap();
        let lines: Vec<&str> = csv_string.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("Title,Category,Issuer"));
        assert!(lines[1].starts_with("Gym,subscription,"));
        assert!(lines[2].contains("\"City, Hall\""));
        assert!(lines[3].contains("€1200.00"));
    }

    #[test]
    fn test_csv_export_empty_report_has_header() {
        let mut report = sample_report();
        report.rows.clear();
        let mut output = Vec::new();
        export_report_csv(&report, &mut output).unwrap();
        assert_eq!(String::from_utf8(output).unwrap().lines().count(), 1);
    }
}
