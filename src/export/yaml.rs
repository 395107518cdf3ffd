//! YAML Export functionality
//!
//! Same content as the JSON report, prefixed with a comment header.

use std::io::Write;

use super::export_error;
use super::report::VaultReport;
use crate::error::RenewalResult;

/// Export the report to YAML
pub fn export_report_yaml<W: Write>(report: &VaultReport, writer: &mut W) -> RenewalResult<()> {
    writeln!(writer, "# RenewalVault report: {}", report.vault_name).map_err(export_error)?;
    writeln!(writer, "# Generated: {}", report.generated_at).map_err(export_error)?;
    writeln!(writer, "# App Version: {}", report.app_version).map_err(export_error)?;
    writeln!(writer).map_err(export_error)?;

    serde_yaml::to_writer(writer, report).map_err(export_error)?;

    Ok(())
}
