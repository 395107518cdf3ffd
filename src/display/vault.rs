//! Vault display formatting

use super::column_width;
use crate::models::{Item, Vault};
use crate::services::VaultService;

/// Format vaults with their item counts as a table
pub fn format_vault_list(vaults: &[&Vault], items: &[Item]) -> String {
    if vaults.is_empty() {
        return "No vaults found.".to_string();
    }

    let name_width = column_width(vaults.iter().map(|v| v.name.as_str()), 4);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<name_width$}  {:>5}  {}\n",
        "Name",
        "Items",
        "Protected",
        name_width = name_width,
    ));
    output.push_str(&format!(
        "{:-<name_width$}  {:->5}  {:-<9}\n",
        "",
        "",
        "",
        name_width = name_width,
    ));

    for vault in vaults {
        output.push_str(&format!(
            "{:<name_width$}  {:>5}  {}\n",
            vault.name,
            VaultService::item_count(vault, items),
            if vault.is_protected_default() { "yes" } else { "" },
            name_width = name_width,
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ItemCategory;
    use chrono::NaiveDate;

    #[test]
    fn test_format_vault_list() {
        let personal = Vault::personal();
        let travel = Vault::new("Travel");
        let expiry = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let items = vec![
            Item::new("Visa", ItemCategory::Other, expiry).in_vault(travel.id),
            Item::new("Passport", ItemCategory::Passport, expiry).in_vault(travel.id),
        ];

        let output = format_vault_list(&[&personal, &travel], &items);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("Name"));
        assert!(lines[2].starts_with("Personal"));
        assert!(lines[2].ends_with("yes"));
        assert!(lines[3].contains("    2"));
    }

    #[test]
    fn test_format_empty_vault_list() {
        assert_eq!(format_vault_list(&[], &[]), "No vaults found.");
    }
}
