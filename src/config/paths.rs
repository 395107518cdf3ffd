//! Path management for RenewalVault
//!
//! ## Path Resolution Order
//!
//! 1. `RENEWAL_VAULT_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/renewal-vault` or `~/.config/renewal-vault`
//! 3. Windows: `%APPDATA%\renewal-vault`

use std::path::PathBuf;

use crate::error::RenewalError;

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "RENEWAL_VAULT_DATA_DIR";

/// Manages all paths used by RenewalVault
#[derive(Debug, Clone)]
pub struct RenewalPaths {
    base_dir: PathBuf,
}

impl RenewalPaths {
    /// Resolve the base directory from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if neither the override nor a home/appdata directory
    /// can be determined.
    pub fn new() -> Result<Self, RenewalError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create RenewalPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Snapshot used when the CLI is not given one explicitly
    pub fn default_snapshot(&self) -> PathBuf {
        self.base_dir.join("snapshot.json")
    }

    /// Directory report exports are written to by default
    pub fn export_dir(&self) -> PathBuf {
        self.base_dir.join("exports")
    }

    /// Ensure the base and export directories exist
    pub fn ensure_directories(&self) -> Result<(), RenewalError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| RenewalError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.export_dir())
            .map_err(|e| RenewalError::Io(format!("Failed to create export directory: {}", e)))?;

        Ok(())
    }

    /// Check if settings have been written
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, RenewalError> {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        return Ok(PathBuf::from(xdg).join("renewal-vault"));
    }
    let home = std::env::var("HOME")
        .map_err(|_| RenewalError::Config("Could not determine HOME directory".into()))?;
    Ok(PathBuf::from(home).join(".config").join("renewal-vault"))
}

#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, RenewalError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| RenewalError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("renewal-vault"))
}
