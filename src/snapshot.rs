//! Item and vault snapshots
//!
//! The scheduling and dashboard services never read storage themselves; they
//! are handed a snapshot of the user's vaults and items. This module loads
//! such a snapshot from a JSON or YAML file (picked by extension) and writes
//! the JSON form atomically.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{RenewalError, RenewalResult};
use crate::models::{Item, Vault};
use crate::services::VaultService;

/// File format of a snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotFormat {
    Json,
    Yaml,
}

impl SnapshotFormat {
    /// `.yaml`/`.yml` are YAML, everything else is JSON
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("yaml") | Some("yml") => Self::Yaml,
            _ => Self::Json,
        }
    }
}

/// Read-only view of the user's data
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub vaults: Vec<Vault>,
    #[serde(default)]
    pub items: Vec<Item>,
}

impl Snapshot {
    /// A first-run snapshot holding only the personal vault
    pub fn bootstrap() -> Self {
        let mut snapshot = Self::default();
        snapshot.ensure_personal_vault();
        snapshot
    }

    /// Load a snapshot, failing if the file is missing or malformed
    pub fn load<P: AsRef<Path>>(path: P) -> RenewalResult<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(RenewalError::Snapshot(format!(
                "File not found: {}",
                path.display()
            )));
        }

        let file = File::open(path).map_err(|e| {
            RenewalError::Snapshot(format!("Failed to open {}: {}", path.display(), e))
        })?;
        let reader = BufReader::new(file);

        let snapshot: Self = match SnapshotFormat::from_path(path) {
            SnapshotFormat::Json => serde_json::from_reader(reader).map_err(|e| {
                RenewalError::Snapshot(format!("Failed to parse {}: {}", path.display(), e))
            })?,
            SnapshotFormat::Yaml => serde_yaml::from_reader(reader).map_err(|e| {
                RenewalError::Snapshot(format!("Failed to parse {}: {}", path.display(), e))
            })?,
        };

        snapshot.validate()?;

        info!(
            path = %path.display(),
            vaults = snapshot.vaults.len(),
            items = snapshot.items.len(),
            "loaded snapshot"
        );
        Ok(snapshot)
    }

    /// Write the snapshot as pretty JSON (write to temp, then rename)
    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> RenewalResult<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                RenewalError::Io(format!(
                    "Failed to create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let temp_path = path.with_extension("json.tmp");
        let file = File::create(&temp_path)
            .map_err(|e| RenewalError::Io(format!("Failed to create temp file: {}", e)))?;

        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer
            .flush()
            .map_err(|e| RenewalError::Io(format!("Failed to flush snapshot: {}", e)))?;

        fs::rename(&temp_path, path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            RenewalError::Io(format!("Failed to rename temp file: {}", e))
        })?;

        debug!(path = %path.display(), "wrote snapshot");
        Ok(())
    }

    /// Insert the personal vault if the snapshot has no vaults at all
    ///
    /// Returns `true` if a vault was added.
    pub fn ensure_personal_vault(&mut self) -> bool {
        match VaultService::new(&self.vaults).bootstrap() {
            Some(vault) => {
                self.vaults.push(vault);
                true
            }
            None => false,
        }
    }

    /// Check every vault and item, reporting the first invalid one
    pub fn validate(&self) -> RenewalResult<()> {
        for vault in &self.vaults {
            vault
                .validate()
                .map_err(|e| RenewalError::Validation(format!("vault '{}': {}", vault.name, e)))?;
        }
        for item in &self.items {
            item.validate()
                .map_err(|e| RenewalError::Validation(format!("item '{}': {}", item.title, e)))?;
        }
        Ok(())
    }
}
