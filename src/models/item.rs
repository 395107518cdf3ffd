//! Item model
//!
//! An item is a trackable expiring document or subscription: passport,
//! license, insurance policy, streaming plan. The scheduling and dashboard
//! services only ever read items; the lifecycle methods here are what the
//! storage collaborator calls when the user renews or retires one.

use chrono::{DateTime, Days, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::ItemCategory;
use super::ids::{ItemId, VaultId};
use super::money::Price;
use super::renewal::RenewalEvent;

/// Reminder offsets given to a newly created item
pub const DEFAULT_REMINDER_DAYS: [i32; 4] = [30, 14, 7, 1];

/// Days added to the current expiry when proposing a renewal date
pub const SUGGESTED_RENEWAL_DAYS: u64 = 365;

/// A tracked expiring item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier
    pub id: ItemId,

    /// Item title (e.g., "Passport", "Netflix")
    pub title: String,

    /// Kind of item
    #[serde(default)]
    pub category: ItemCategory,

    /// Issuing authority or provider
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issuer: Option<String>,

    /// Date the item expires; time of day is irrelevant
    pub expiry_date: NaiveDate,

    /// Days before expiry at which reminders fire
    #[serde(default = "default_reminder_days")]
    pub reminder_days: Vec<i32>,

    /// Whether the item is expected to be renewed again after this cycle
    #[serde(default = "default_true")]
    pub repeat_after_renewal: bool,

    /// Completed items are paid/retired and get no further reminders
    #[serde(default)]
    pub is_completed: bool,

    /// Optional price; absent means "no price", not zero
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Price>,

    /// Free-form notes
    #[serde(default)]
    pub notes: String,

    /// Owning vault; `None` for orphaned items
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vault_id: Option<VaultId>,

    /// Past renewals, oldest first
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub renewal_history: Vec<RenewalEvent>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

fn default_reminder_days() -> Vec<i32> {
    DEFAULT_REMINDER_DAYS.to_vec()
}

fn default_true() -> bool {
    true
}

impl Item {
    /// Create a new item with default reminder settings
    pub fn new(title: impl Into<String>, category: ItemCategory, expiry_date: NaiveDate) -> Self {
        let now = Utc::now();
        Self {
            id: ItemId::new(),
            title: title.into(),
            category,
            issuer: None,
            expiry_date,
            reminder_days: default_reminder_days(),
            repeat_after_renewal: true,
            is_completed: false,
            price: None,
            notes: String::new(),
            vault_id: None,
            renewal_history: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Builder: set the price
    pub fn with_price(mut self, price: Price) -> Self {
        self.price = Some(price);
        self
    }

    /// Builder: set the issuer
    pub fn with_issuer(mut self, issuer: impl Into<String>) -> Self {
        self.issuer = Some(issuer.into());
        self
    }

    /// Builder: place the item in a vault
    pub fn in_vault(mut self, vault_id: VaultId) -> Self {
        self.vault_id = Some(vault_id);
        self
    }

    /// Builder: set the reminder offsets
    pub fn with_reminder_days(mut self, days: Vec<i32>) -> Self {
        self.reminder_days = days;
        self
    }

    /// Builder: mark as completed
    pub fn completed(mut self) -> Self {
        self.is_completed = true;
        self
    }

    /// Stop tracking renewals: the item is done and will not come back
    pub fn mark_no_renewal(&mut self, now: DateTime<Utc>) {
        self.repeat_after_renewal = false;
        self.is_completed = true;
        self.updated_at = now;
    }

    /// Undo [`Item::mark_no_renewal`]
    pub fn reactivate(&mut self, now: DateTime<Utc>) {
        self.is_completed = false;
        self.repeat_after_renewal = true;
        self.updated_at = now;
    }

    /// Move the expiry date forward and record the renewal
    pub fn renew(&mut self, new_expiry: NaiveDate, now: DateTime<Utc>) -> &RenewalEvent {
        let event = RenewalEvent::new(self.expiry_date, new_expiry, now);
        self.expiry_date = new_expiry;
        self.updated_at = now;
        self.renewal_history.push(event);
        &self.renewal_history[self.renewal_history.len() - 1]
    }

    /// Proposed new expiry when the user starts a renewal
    pub fn suggested_renewal_date(&self) -> Option<NaiveDate> {
        self.expiry_date
            .checked_add_days(Days::new(SUGGESTED_RENEWAL_DAYS))
    }

    /// Renewal history, newest first (detail view order)
    pub fn renewals_newest_first(&self) -> Vec<&RenewalEvent> {
        let mut events: Vec<&RenewalEvent> = self.renewal_history.iter().collect();
        events.sort_by(|a, b| b.renewed_at.cmp(&a.renewed_at));
        events
    }

    /// Validate the item
    pub fn validate(&self) -> Result<(), ItemValidationError> {
        if self.title.trim().is_empty() {
            return Err(ItemValidationError::EmptyTitle);
        }

        if let Some(price) = &self.price {
            if price.amount.is_negative() {
                return Err(ItemValidationError::NegativePrice);
            }
        }

        Ok(())
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, expires {})", self.title, self.category, self.expiry_date)
    }
}

/// Validation errors for items
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemValidationError {
    EmptyTitle,
    NegativePrice,
}

impl fmt::Display for ItemValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "Item title cannot be empty"),
            Self::NegativePrice => write!(f, "Item price cannot be negative"),
        }
    }
}

impl std::error::Error for ItemValidationError {}
