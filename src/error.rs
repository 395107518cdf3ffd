//! Custom error types for RenewalVault
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions. The pure scheduling and aggregation
//! functions never produce these; they only surface at the edges (settings,
//! snapshot loading, export, CLI lookups and gate enforcement).

use thiserror::Error;

use crate::models::GatedAction;

/// The main error type for RenewalVault operations
#[derive(Error, Debug)]
pub enum RenewalError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// YAML serialization/deserialization errors
    #[error("YAML error: {0}")]
    Yaml(String),

    /// Validation errors for data models and user input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Attempt to delete a protected default vault
    #[error("Vault '{0}' is the protected default vault and cannot be deleted")]
    ProtectedVault(String),

    /// The current subscription tier does not allow the action
    #[error("Upgrade required: {0} is not available on the current plan")]
    UpgradeRequired(GatedAction),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Snapshot loading errors
    #[error("Snapshot error: {0}")]
    Snapshot(String),
}

impl RenewalError {
    /// Create a "not found" error for items
    pub fn item_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Item",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for vaults
    pub fn vault_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Vault",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for RenewalError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for RenewalError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<serde_yaml::Error> for RenewalError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Yaml(err.to_string())
    }
}

/// Result type alias for RenewalVault operations
pub type RenewalResult<T> = Result<T, RenewalError>;
