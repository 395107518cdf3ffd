//! Export CLI command

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::Args;
use tracing::info;

use super::CliContext;
use crate::error::{RenewalError, RenewalResult};
use crate::export::{export_vault_report, ExportFormat, VaultReport};
use crate::models::GatedAction;
use crate::services::{FeatureGate, VaultService};

/// Export a vault report
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Vault name or ID
    pub vault: String,
    /// Output format: csv, json, yaml
    #[arg(short, long, default_value = "csv")]
    pub format: String,
    /// Output file (stdout if omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Handle the export command
pub fn handle_export_command(ctx: &CliContext, args: ExportArgs) -> RenewalResult<()> {
    FeatureGate::require(GatedAction::ExportPdf, 0, ctx.tier())?;

    let format = ExportFormat::parse(&args.format).ok_or_else(|| {
        RenewalError::Validation(format!(
            "Invalid format: '{}'. Valid formats: csv, json, yaml",
            args.format
        ))
    })?;

    let vault = VaultService::new(&ctx.snapshot.vaults).get(&args.vault)?;
    let report = VaultReport::build(
        vault,
        &ctx.snapshot.items,
        ctx.now,
        &ctx.scheduler(),
        &ctx.formatter(),
    );

    match args.output {
        Some(path) => {
            let file = File::create(&path).map_err(|e| {
                RenewalError::Export(format!("Failed to create {}: {}", path.display(), e))
            })?;
            let mut writer = BufWriter::new(file);
            export_vault_report(&report, format, ctx.tier(), &mut writer)?;
            writer
                .flush()
                .map_err(|e| RenewalError::Export(e.to_string()))?;
            info!(path = %path.display(), rows = report.rows.len(), "exported vault report");
            println!(
                "Exported {} item(s) from '{}' to {}",
                report.rows.len(),
                vault.name,
                path.display()
            );
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            export_vault_report(&report, format, ctx.tier(), &mut handle)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::tests::context;
    use crate::models::SubscriptionTier;
    use tempfile::TempDir;

    #[test]
    fn test_export_to_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("personal.json");
        let ctx = context(SubscriptionTier::Pro);

        handle_export_command(
            &ctx,
            ExportArgs {
                vault: "personal".into(),
                format: "json".into(),
                output: Some(path.clone()),
            },
        )
        .unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("\"Netflix\""));
        assert!(!contents.contains("\"Visa\""));
    }

    #[test]
    fn test_export_gated_before_creating_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("personal.csv");
        let ctx = context(SubscriptionTier::Free);

        let err = handle_export_command(
            &ctx,
            ExportArgs {
                vault: "personal".into(),
                format: "csv".into(),
                output: Some(path.clone()),
            },
        )
        .unwrap_err();
        assert!(matches!(err, RenewalError::UpgradeRequired(GatedAction::ExportPdf)));
        assert!(!path.exists());
    }

    #[test]
    fn test_export_bad_format() {
        let ctx = context(SubscriptionTier::Pro);
        let err = handle_export_command(
            &ctx,
            ExportArgs {
                vault: "personal".into(),
                format: "pdf".into(),
                output: None,
            },
        )
        .unwrap_err();
        assert!(err.is_validation());
    }
}
