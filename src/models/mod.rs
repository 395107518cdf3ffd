//! Core data models for RenewalVault
//!
//! Items, vaults, prices and the tier/action vocabulary used by the gates.
//! The services treat all of these as read-only snapshots.

pub mod category;
pub mod ids;
pub mod item;
pub mod money;
pub mod renewal;
pub mod tier;
pub mod vault;

pub use category::ItemCategory;
pub use ids::{ItemId, RenewalEventId, VaultId};
pub use item::{Item, ItemValidationError, DEFAULT_REMINDER_DAYS};
pub use money::{Money, Price};
pub use renewal::RenewalEvent;
pub use tier::{GatedAction, SubscriptionTier};
pub use vault::{Vault, VaultValidationError, PERSONAL_VAULT_NAME};
