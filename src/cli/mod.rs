//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod dashboard;
pub mod days;
pub mod export;
pub mod gate;
pub mod item;
pub mod price;
pub mod vault;

use chrono::{DateTime, Utc};

use crate::config::Settings;
use crate::error::{RenewalError, RenewalResult};
use crate::models::SubscriptionTier;
use crate::services::{Clock, PriceFormatter, ReminderScheduler};
use crate::snapshot::Snapshot;

pub use dashboard::{handle_dashboard_command, DashboardArgs};
pub use days::{handle_days_command, DaysCommands};
pub use export::{handle_export_command, ExportArgs};
pub use gate::{handle_gate_command, GateArgs};
pub use item::{handle_item_command, ItemCommands};
pub use price::{handle_price_command, PriceCommands};
pub use vault::{handle_vault_command, VaultCommands};

/// Everything a snapshot-backed command reads
#[derive(Debug)]
pub struct CliContext {
    pub settings: Settings,
    pub snapshot: Snapshot,
    pub now: DateTime<Utc>,
}

impl CliContext {
    pub fn new(settings: Settings, snapshot: Snapshot, clock: &dyn Clock) -> Self {
        Self {
            settings,
            snapshot,
            now: clock.now(),
        }
    }

    pub fn tier(&self) -> SubscriptionTier {
        self.settings.tier
    }

    pub fn scheduler(&self) -> ReminderScheduler {
        ReminderScheduler::new(self.settings.calendar())
    }

    pub fn formatter(&self) -> PriceFormatter {
        PriceFormatter::new(self.settings.default_currency.clone())
    }
}

/// Parse a comma-separated list of day offsets, e.g. "30,14,7"
pub(crate) fn parse_day_list(text: &str) -> RenewalResult<Vec<i32>> {
    text.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse::<i32>().map_err(|_| {
                RenewalError::Validation(format!("Invalid day offset: '{}'", part))
            })
        })
        .collect()
}

/// Join day offsets for output
pub(crate) fn join_days(days: &[i32]) -> String {
    days.iter()
        .map(|d| d.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::models::{Item, ItemCategory, Money, Price, Vault};
    use crate::services::{Calendar, FixedClock};
    use chrono::NaiveDate;

    pub(crate) fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// Context at 2025-01-15 in UTC with a personal and a travel vault
    pub(crate) fn context(tier: SubscriptionTier) -> CliContext {
        let mut settings = Settings::default();
        settings.tier = tier;
        settings.utc_offset_minutes = Some(0);

        let personal = Vault::personal();
        let travel = Vault::new("Travel");
        let items = vec![
            Item::new("Passport", ItemCategory::Passport, date(2025, 2, 1)).in_vault(personal.id),
            Item::new("Netflix", ItemCategory::Subscription, date(2025, 2, 10))
                .with_price(Price::untagged(Money::from_cents(1299)))
                .in_vault(personal.id),
            Item::new("Visa", ItemCategory::Other, date(2025, 6, 1)).in_vault(travel.id),
        ];
        let snapshot = Snapshot {
            vaults: vec![personal, travel],
            items,
        };

        let clock = FixedClock::on_day(date(2025, 1, 15), &Calendar::utc());
        CliContext::new(settings, snapshot, &clock)
    }

    #[test]
    fn test_parse_day_list() {
        assert_eq!(parse_day_list("30, 14,7").unwrap(), vec![30, 14, 7]);
        assert!(parse_day_list("").unwrap().is_empty());
        assert!(parse_day_list("30,x").unwrap_err().is_validation());
    }

    #[test]
    fn test_context_uses_settings() {
        let ctx = context(SubscriptionTier::Pro);
        assert_eq!(ctx.tier(), SubscriptionTier::Pro);
        assert_eq!(ctx.formatter().default_currency(), "€");
        assert_eq!(ctx.scheduler().calendar().today(ctx.now), date(2025, 1, 15));
    }
}
