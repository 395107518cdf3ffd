//! Item CLI commands
//!
//! Home list, item details and planned reminders.

use clap::Subcommand;

use super::CliContext;
use crate::display::{format_home_sections, format_item_details, format_reminders};
use crate::error::{RenewalError, RenewalResult};
use crate::models::{Item, ItemCategory};
use crate::services::{ItemListService, ItemQuery, ReminderPlanner, VaultService};

/// Item subcommands
#[derive(Subcommand)]
pub enum ItemCommands {
    /// List items grouped by urgency
    List {
        /// Match title or issuer (case-insensitive)
        #[arg(short, long)]
        search: Option<String>,
        /// Only items in this vault (name or ID)
        #[arg(short, long)]
        vault: Option<String>,
        /// Only items of this category
        #[arg(short, long)]
        category: Option<String>,
        /// Hide expired items
        #[arg(short, long)]
        upcoming: bool,
    },
    /// Show item details
    Show {
        /// Item title or ID
        item: String,
    },
    /// Show the reminders that would be scheduled for an item
    Reminders {
        /// Item title or ID
        item: String,
    },
}

fn find_item<'a>(ctx: &'a CliContext, reference: &str) -> RenewalResult<&'a Item> {
    ItemListService::find(&ctx.snapshot.items, reference)
        .ok_or_else(|| RenewalError::item_not_found(reference))
}

/// Handle an item command
pub fn handle_item_command(ctx: &CliContext, cmd: ItemCommands) -> RenewalResult<()> {
    let scheduler = ctx.scheduler();
    let formatter = ctx.formatter();

    match cmd {
        ItemCommands::List {
            search,
            vault,
            category,
            upcoming,
        } => {
            let vault = vault
                .map(|reference| VaultService::new(&ctx.snapshot.vaults).get(&reference))
                .transpose()?
                .map(|v| v.id);
            let category = category
                .map(|c| {
                    ItemCategory::parse(&c).ok_or_else(|| {
                        RenewalError::Validation(format!("Invalid category: '{}'", c))
                    })
                })
                .transpose()?;

            let query = ItemQuery {
                text: search,
                vault,
                category,
                upcoming_only: upcoming,
            };
            let sections =
                ItemListService::new(&scheduler).sections(&ctx.snapshot.items, &query, ctx.now);
            println!(
                "{}",
                format_home_sections(&sections, &scheduler, &formatter, ctx.now)
            );
        }
        ItemCommands::Show { item } => {
            let item = find_item(ctx, &item)?;
            let vault_name = VaultService::new(&ctx.snapshot.vaults).name_of(item.vault_id);
            print!(
                "{}",
                format_item_details(item, vault_name, &scheduler, &formatter, ctx.now)
            );
        }
        ItemCommands::Reminders { item } => {
            let item = find_item(ctx, &item)?;
            let plan =
                ReminderPlanner::new(&scheduler, ctx.settings.reminder_hour).plan(item, ctx.now);
            println!("{}", format_reminders(item, &plan));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::tests::context;
    use crate::models::SubscriptionTier;

    #[test]
    fn test_show_unknown_item_is_not_found() {
        let ctx = context(SubscriptionTier::Free);
        let err = handle_item_command(
            &ctx,
            ItemCommands::Show {
                item: "Lease".into(),
            },
        )
        .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_list_rejects_unknown_category() {
        let ctx = context(SubscriptionTier::Free);
        let err = handle_item_command(
            &ctx,
            ItemCommands::List {
                search: None,
                vault: None,
                category: Some("boat".into()),
                upcoming: false,
            },
        )
        .unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_list_with_vault_filter() {
        let ctx = context(SubscriptionTier::Free);
        assert!(handle_item_command(
            &ctx,
            ItemCommands::List {
                search: None,
                vault: Some("travel".into()),
                category: None,
                upcoming: true,
            },
        )
        .is_ok());
    }
}
