//! Vault CLI commands

use clap::Subcommand;

use super::CliContext;
use crate::display::format_vault_list;
use crate::error::RenewalResult;
use crate::services::VaultService;

/// Vault subcommands
#[derive(Subcommand)]
pub enum VaultCommands {
    /// List vaults with item counts
    List,
    /// Check whether a vault may be deleted
    CheckDelete {
        /// Vault name or ID
        vault: String,
    },
}

/// Handle a vault command
pub fn handle_vault_command(ctx: &CliContext, cmd: VaultCommands) -> RenewalResult<()> {
    let service = VaultService::new(&ctx.snapshot.vaults);

    match cmd {
        VaultCommands::List => {
            print!(
                "{}",
                format_vault_list(&service.sorted_by_name(), &ctx.snapshot.items)
            );
            if !service.has_protected_vault() {
                println!();
                println!("No protected vault found; 'renewal init' recreates the personal vault.");
            }
        }
        VaultCommands::CheckDelete { vault } => {
            let vault = service.get(&vault)?;
            VaultService::ensure_deletable(vault)?;
            let count = VaultService::item_count(vault, &ctx.snapshot.items);
            println!(
                "Vault '{}' can be deleted ({} item{} would be removed).",
                vault.name,
                count,
                if count == 1 { "" } else { "s" }
            );
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::tests::context;
    use crate::error::RenewalError;
    use crate::models::SubscriptionTier;

    #[test]
    fn test_check_delete_personal_fails() {
        let ctx = context(SubscriptionTier::Pro);
        let err = handle_vault_command(
            &ctx,
            VaultCommands::CheckDelete {
                vault: "Personal".into(),
            },
        )
        .unwrap_err();
        assert!(matches!(err, RenewalError::ProtectedVault(_)));
    }

    #[test]
    fn test_check_delete_other_vault() {
        let ctx = context(SubscriptionTier::Free);
        assert!(handle_vault_command(
            &ctx,
            VaultCommands::CheckDelete {
                vault: "Travel".into(),
            },
        )
        .is_ok());
    }
}
