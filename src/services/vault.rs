//! Vault service
//!
//! Protection and bootstrap rules for vaults. Deletion and insertion are done
//! by the storage collaborator; this service only answers whether they are
//! allowed and what first-run needs to insert.

use tracing::info;

use crate::error::{RenewalError, RenewalResult};
use crate::models::{Item, Vault, VaultId};

/// Service for vault rules over a snapshot
pub struct VaultService<'a> {
    vaults: &'a [Vault],
}

impl<'a> VaultService<'a> {
    pub fn new(vaults: &'a [Vault]) -> Self {
        Self { vaults }
    }

    /// Vault to insert on first run, if the store has none
    pub fn bootstrap(&self) -> Option<Vault> {
        if self.vaults.is_empty() {
            info!("no vaults found, creating the personal vault");
            Some(Vault::personal())
        } else {
            None
        }
    }

    /// Whether some vault is currently protected
    pub fn has_protected_vault(&self) -> bool {
        self.vaults.iter().any(Vault::is_protected_default)
    }

    /// Find a vault by id reference or case-insensitive name
    pub fn find(&self, reference: &str) -> Option<&'a Vault> {
        self.vaults
            .iter()
            .find(|v| v.name.to_lowercase() == reference.trim().to_lowercase())
            .or_else(|| self.vaults.iter().find(|v| v.id.matches_reference(reference)))
    }

    /// Look up a vault, failing with `NotFound`
    pub fn get(&self, reference: &str) -> RenewalResult<&'a Vault> {
        self.find(reference)
            .ok_or_else(|| RenewalError::vault_not_found(reference))
    }

    /// Name of the vault an item belongs to; `None` for orphaned items
    pub fn name_of(&self, vault_id: Option<VaultId>) -> Option<&'a str> {
        let id = vault_id?;
        self.vaults
            .iter()
            .find(|v| v.id == id)
            .map(|v| v.name.as_str())
    }

    /// Vaults sorted by name, as the vault list shows them
    pub fn sorted_by_name(&self) -> Vec<&'a Vault> {
        let mut vaults: Vec<&'a Vault> = self.vaults.iter().collect();
        vaults.sort_by_key(|v| v.name.to_lowercase());
        vaults
    }

    /// Refuse to delete a protected vault
    pub fn ensure_deletable(vault: &Vault) -> RenewalResult<()> {
        if vault.is_protected_default() {
            Err(RenewalError::ProtectedVault(vault.name.clone()))
        } else {
            Ok(())
        }
    }

    /// Number of items in a vault
    pub fn item_count(vault: &Vault, items: &[Item]) -> usize {
        items
            .iter()
            .filter(|item| item.vault_id == Some(vault.id))
            .count()
    }
}
