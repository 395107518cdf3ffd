//! RenewalVault - renewal tracking for documents and subscriptions
//!
//! This library provides the scheduling and aggregation core of RenewalVault:
//! when to remind the user about an expiring item, which urgency bucket it
//! belongs to, how prices are formatted and parsed, and what the renewal-cost
//! dashboard shows. Storage and notification delivery are collaborators; the
//! library works over read-only snapshots of items and vaults.
//!
//! # Architecture
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (items, vaults, prices, tiers)
//! - `services`: Scheduling, pricing, dashboard and gate logic
//! - `snapshot`: Loading an item/vault snapshot from JSON or YAML
//! - `export`: Vault reports in CSV, JSON and YAML
//! - `display`: Terminal formatting
//! - `cli`: Command handlers for the `renewal` binary
//!
//! # Example
//!
//! ```rust,ignore
//! use renewal_vault::config::{RenewalPaths, Settings};
//! use renewal_vault::services::ReminderScheduler;
//!
//! let paths = RenewalPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let scheduler = ReminderScheduler::new(settings.calendar());
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod snapshot;

pub use error::{RenewalError, RenewalResult};
