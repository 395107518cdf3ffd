use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use renewal_vault::cli::{
    handle_dashboard_command, handle_days_command, handle_export_command, handle_gate_command,
    handle_item_command, handle_price_command, handle_vault_command, CliContext, DashboardArgs,
    DaysCommands, ExportArgs, GateArgs, ItemCommands, PriceCommands, VaultCommands,
};
use renewal_vault::config::{RenewalPaths, Settings};
use renewal_vault::models::SubscriptionTier;
use renewal_vault::services::{Clock, FixedClock, SystemClock};
use renewal_vault::snapshot::Snapshot;

#[derive(Parser)]
#[command(
    name = "renewal",
    author = "Kaylee Beyene",
    version,
    about = "Track expiring documents and subscriptions",
    long_about = "RenewalVault tracks passports, licenses, insurance policies and \
                  subscriptions. It works out when to remind you before each one \
                  expires and what your upcoming renewals will cost."
)]
struct Cli {
    /// Snapshot file with vaults and items (JSON or YAML)
    #[arg(long, global = true, env = "RENEWAL_VAULT_SNAPSHOT")]
    snapshot: Option<PathBuf>,

    /// Treat this date (YYYY-MM-DD) as today
    #[arg(long, global = true)]
    today: Option<NaiveDate>,

    /// Override the configured subscription tier (free, pro)
    #[arg(long, global = true, env = "RENEWAL_VAULT_TIER")]
    tier: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Item commands
    #[command(subcommand)]
    Item(ItemCommands),

    /// Vault commands
    #[command(subcommand)]
    Vault(VaultCommands),

    /// Renewal cost dashboard (Pro)
    Dashboard(DashboardArgs),

    /// Reminder-day selection helpers
    #[command(subcommand)]
    Days(DaysCommands),

    /// Price formatting and parsing
    #[command(subcommand)]
    Price(PriceCommands),

    /// Check whether an action is allowed on the current plan
    Gate(GateArgs),

    /// Export a vault report (Pro)
    Export(ExportArgs),

    /// Initialize settings and the personal vault
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = RenewalPaths::new()?;
    let stored_settings = Settings::load_or_create(&paths)?;
    let mut settings = stored_settings.clone();
    if let Some(tier) = &cli.tier {
        settings.tier = SubscriptionTier::parse(tier)
            .with_context(|| format!("Invalid tier '{}': expected free or pro", tier))?;
    }

    let clock: Box<dyn Clock> = match cli.today {
        Some(date) => Box::new(FixedClock::on_day(date, &settings.calendar())),
        None => Box::new(SystemClock),
    };
    debug!(now = %clock.now(), tier = %settings.tier, "starting");

    let snapshot_path = cli
        .snapshot
        .clone()
        .unwrap_or_else(|| paths.default_snapshot());
    let load_context = |settings: Settings| -> Result<CliContext> {
        let snapshot = Snapshot::load(&snapshot_path).with_context(|| {
            format!(
                "Could not load snapshot {} (run 'renewal init' or pass --snapshot)",
                snapshot_path.display()
            )
        })?;
        Ok(CliContext::new(settings, snapshot, clock.as_ref()))
    };

    match cli.command {
        Some(Commands::Item(cmd)) => {
            handle_item_command(&load_context(settings)?, cmd)?;
        }
        Some(Commands::Vault(cmd)) => {
            handle_vault_command(&load_context(settings)?, cmd)?;
        }
        Some(Commands::Dashboard(args)) => {
            handle_dashboard_command(&load_context(settings)?, args)?;
        }
        Some(Commands::Export(args)) => {
            handle_export_command(&load_context(settings)?, args)?;
        }
        Some(Commands::Days(cmd)) => handle_days_command(cmd)?,
        Some(Commands::Price(cmd)) => handle_price_command(&settings, cmd)?,
        Some(Commands::Gate(args)) => handle_gate_command(settings.tier, args)?,
        Some(Commands::Init) => {
            println!("Initializing RenewalVault at: {}", paths.base_dir().display());
            stored_settings.save(&paths)?;

            let default_snapshot = paths.default_snapshot();
            if default_snapshot.exists() {
                let mut snapshot = Snapshot::load(&default_snapshot)?;
                if snapshot.ensure_personal_vault() {
                    snapshot.save_json(&default_snapshot)?;
                    println!("Recreated the personal vault.");
                }
            } else {
                Snapshot::bootstrap().save_json(&default_snapshot)?;
                println!("Created the personal vault.");
            }
            println!("Initialization complete!");
        }
        Some(Commands::Config) => {
            println!("RenewalVault Configuration");
            println!("==========================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Snapshot:         {}", snapshot_path.display());
            println!();
            println!("Settings:");
            println!("  Default currency: {}", settings.default_currency);
            println!("  Tier:             {}", settings.tier);
            println!("  Reminder hour:    {:02}:00", settings.reminder_hour);
            println!(
                "  Reminder days:    {}",
                settings
                    .default_reminder_days
                    .iter()
                    .map(|d| d.to_string())
                    .collect::<Vec<_>>()
                    .join(", ")
            );
            println!("  UTC offset:       {}", settings.calendar().offset());
        }
        None => {
            println!("RenewalVault - renewal reminders and cost tracking");
            println!();
            println!("Run 'renewal --help' for usage information.");
        }
    }

    Ok(())
}
