//! Vault model
//!
//! A vault is a named grouping of tracked items. One vault, the personal
//! vault, is protected: it cannot be deleted and is recreated on first run.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::VaultId;

/// Name of the vault created on first run
pub const PERSONAL_VAULT_NAME: &str = "Personal";

/// A named grouping of items
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vault {
    /// Unique identifier
    pub id: VaultId,

    /// Display name
    pub name: String,

    /// Icon tag the UI resolves to a glyph
    #[serde(default = "default_icon")]
    pub icon: String,

    /// Set on the vault created by first-run bootstrap
    #[serde(default)]
    pub is_system_default: bool,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

fn default_icon() -> String {
    "folder".to_string()
}

impl Vault {
    /// Create a new user vault
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: VaultId::new(),
            name: name.into(),
            icon: default_icon(),
            is_system_default: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// The protected personal vault inserted by first-run bootstrap
    pub fn personal() -> Self {
        let mut vault = Self::new(PERSONAL_VAULT_NAME);
        vault.icon = "person".to_string();
        vault.is_system_default = true;
        vault
    }

    /// Whether this vault is the protected default
    ///
    /// True for the system default vault and for any vault named "Personal"
    /// (compared case-insensitively), which covers stores created before the
    /// system flag existed.
    pub fn is_protected_default(&self) -> bool {
        self.is_system_default || self.name.to_lowercase() == PERSONAL_VAULT_NAME.to_lowercase()
    }

    /// Validate the vault
    pub fn validate(&self) -> Result<(), VaultValidationError> {
        if self.name.trim().is_empty() {
            return Err(VaultValidationError::EmptyName);
        }

        if self.name.chars().count() > 60 {
            return Err(VaultValidationError::NameTooLong(self.name.chars().count()));
        }

        Ok(())
    }
}

impl fmt::Display for Vault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Validation errors for vaults
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VaultValidationError {
    EmptyName,
    NameTooLong(usize),
}

impl fmt::Display for VaultValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Vault name cannot be empty"),
            Self::NameTooLong(len) => {
                write!(f, "Vault name too long ({} characters, max 60)", len)
            }
        }
    }
}

impl std::error::Error for VaultValidationError {}
