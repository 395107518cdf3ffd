//! Vault report contents
//!
//! Everything the printable vault summary shows: the vault, when the report
//! was generated, and each of the vault's items in expiry order with its
//! urgency and canonical price text.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{Item, ItemCategory, Vault};
use crate::services::{
    CurrencyTotal, DashboardCalculator, ItemBucket, PriceFormatter, ReminderScheduler,
};

/// Current report schema version
pub const REPORT_SCHEMA_VERSION: &str = "1.0.0";

/// One item line in the report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRow {
    pub title: String,
    pub category: ItemCategory,
    pub issuer: Option<String>,
    pub expiry_date: NaiveDate,
    pub days_until_expiry: i64,
    pub bucket: ItemBucket,
    /// Canonical price text, `None` for unpriced items
    pub price: Option<String>,
    pub completed: bool,
    pub notes: String,
}

/// A vault report ready to be written
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VaultReport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Report timestamp
    pub generated_at: DateTime<Utc>,

    /// Application version that created the report
    pub app_version: String,

    pub vault_name: String,

    /// Items of the vault, soonest expiry first
    pub rows: Vec<ReportRow>,

    /// Sum of open priced items, per currency
    pub open_totals: Vec<CurrencyTotal>,
}

impl VaultReport {
    /// Build the report for `vault` from an item snapshot
    pub fn build(
        vault: &Vault,
        items: &[Item],
        now: DateTime<Utc>,
        scheduler: &ReminderScheduler,
        formatter: &PriceFormatter,
    ) -> Self {
        let mut in_vault: Vec<&Item> = items
            .iter()
            .filter(|item| item.vault_id == Some(vault.id))
            .collect();
        in_vault.sort_by_key(|item| item.expiry_date);

        let rows = in_vault
            .iter()
            .map(|item| ReportRow {
                title: item.title.clone(),
                category: item.category,
                issuer: item.issuer.clone(),
                expiry_date: item.expiry_date,
                days_until_expiry: scheduler.days_until_expiry(item, now),
                bucket: scheduler.bucket(item, now),
                price: formatter.price_text(item.price.as_ref()),
                completed: item.is_completed,
                notes: item.notes.clone(),
            })
            .collect();

        let calculator = DashboardCalculator::with_formatter(*scheduler.calendar(), formatter);
        let open_totals = calculator
            .totals_by_currency(in_vault.iter().copied().filter(|item| !item.is_completed));

        Self {
            schema_version: REPORT_SCHEMA_VERSION.to_string(),
            generated_at: now,
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            vault_name: vault.name.clone(),
            rows,
            open_totals,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
