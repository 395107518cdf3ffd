//! JSON Export functionality

use std::io::Write;

use super::export_error;
use super::report::VaultReport;
use crate::error::RenewalResult;

/// Export the report to JSON
pub fn export_report_json<W: Write>(
    report: &VaultReport,
    writer: &mut W,
    pretty: bool,
) -> RenewalResult<()> {
    if pretty {
        serde_json::to_writer_pretty(writer, report)
    } else {
        serde_json::to_writer(writer, report)
    }
    .map_err(export_error)?;

    Ok(())
}
