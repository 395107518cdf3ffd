//! Export module for RenewalVault
//!
//! Writes the vault report (the data behind the printable vault summary) in
//! one of three formats:
//! - CSV: one row per item, spreadsheet-compatible
//! - JSON: machine-readable, schema-versioned
//! - YAML: human-readable with a header comment
//!
//! Exporting is a Pro feature; [`export_vault_report`] checks the gate before
//! writing anything.

pub mod csv;
pub mod json;
pub mod report;
pub mod yaml;

use std::fmt;
use std::io::Write;

use crate::error::{RenewalError, RenewalResult};
use crate::models::{GatedAction, SubscriptionTier};
use crate::services::FeatureGate;

pub use self::csv::export_report_csv;
pub use self::json::export_report_json;
pub use self::report::{ReportRow, VaultReport, REPORT_SCHEMA_VERSION};
pub use self::yaml::export_report_yaml;

/// Output format for a vault report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
    Yaml,
}

impl ExportFormat {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "csv" => Some(Self::Csv),
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }

    /// File extension without the dot
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
            Self::Yaml => "yaml",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.extension())
    }
}

/// Write `report` in `format` if `tier` may export
pub fn export_vault_report<W: Write>(
    report: &VaultReport,
    format: ExportFormat,
    tier: SubscriptionTier,
    writer: &mut W,
) -> RenewalResult<()> {
    FeatureGate::require(GatedAction::ExportPdf, 0, tier)?;

    match format {
        ExportFormat::Csv => export_report_csv(report, writer),
        ExportFormat::Json => export_report_json(report, writer, true),
        ExportFormat::Yaml => export_report_yaml(report, writer),
    }
}

pub(crate) fn export_error(e: impl fmt::Display) -> RenewalError {
    RenewalError::Export(e.to_string())
}
