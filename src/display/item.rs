//! Item display formatting
//!
//! Home list sections, item details and the reminder plan.

use chrono::{DateTime, Utc};

use super::{column_width, truncate};
use crate::models::Item;
use crate::services::{HomeSections, PlannedReminder, PriceFormatter, ReminderScheduler};

const MAX_TITLE_WIDTH: usize = 32;

/// Format the home list: one table per non-empty section
pub fn format_home_sections(
    sections: &HomeSections<'_>,
    scheduler: &ReminderScheduler,
    formatter: &PriceFormatter,
    now: DateTime<Utc>,
) -> String {
    if sections.is_empty() {
        return "No items found.".to_string();
    }

    let all: Vec<&Item> = sections
        .sections()
        .iter()
        .flat_map(|(_, items)| items.iter().copied())
        .collect();
    let titles: Vec<String> = all.iter().map(|i| truncate(&i.title, MAX_TITLE_WIDTH)).collect();
    let title_width = column_width(titles.iter().map(String::as_str), 5);
    let category_width = column_width(all.iter().map(|i| i.category.tag()), 8);

    let mut output = String::new();
    for (bucket, items) in sections.sections() {
        if items.is_empty() {
            continue;
        }
        if !output.is_empty() {
            output.push('\n');
        }
        output.push_str(&format!("{} ({})\n", bucket, items.len()));

        for item in items {
            let days = scheduler.days_until_expiry(item, now);
            let when = match days {
                d if d < 0 => format!("{}d ago", -d),
                0 => "today".to_string(),
                d => format!("in {}d", d),
            };
            let price = formatter.price_text(item.price.as_ref()).unwrap_or_default();
            let done = if item.is_completed { "  done" } else { "" };

            output.push_str(&format!(
                "  {:<title_width$}  {:<category_width$}  {}  {:>9}  {:>10}{}\n",
                truncate(&item.title, MAX_TITLE_WIDTH),
                item.category.tag(),
                item.expiry_date,
                when,
                price,
                done,
                title_width = title_width,
                category_width = category_width,
            ));
        }
    }

    output
}

/// Format a single item's details
pub fn format_item_details(
    item: &Item,
    vault_name: Option<&str>,
    scheduler: &ReminderScheduler,
    formatter: &PriceFormatter,
    now: DateTime<Utc>,
) -> String {
    let mut output = String::new();

    output.push_str(&format!("Item: {}\n", item.title));
    output.push_str(&format!("  Category:     {}\n", item.category));
    output.push_str(&format!("  ID:           {}\n", item.id));
    output.push_str(&format!("  Vault:        {}\n", vault_name.unwrap_or("(none)")));
    if let Some(issuer) = &item.issuer {
        output.push_str(&format!("  Issuer:       {}\n", issuer));
    }
    output.push('\n');

    output.push_str(&format!("  Expires:      {}\n", item.expiry_date));
    output.push_str(&format!(
        "  Days left:    {}\n",
        scheduler.days_until_expiry(item, now)
    ));
    output.push_str(&format!("  Status:       {}\n", scheduler.bucket(item, now)));
    output.push_str(&format!(
        "  Price:        {}\n",
        formatter
            .price_text(item.price.as_ref())
            .unwrap_or_else(|| "-".to_string())
    ));
    output.push_str(&format!(
        "  Completed:    {}\n",
        if item.is_completed { "Yes" } else { "No" }
    ));
    output.push_str(&format!(
        "  Renews:       {}\n",
        if item.repeat_after_renewal { "Yes" } else { "No" }
    ));

    let days: Vec<String> = item.reminder_days.iter().map(|d| d.to_string()).collect();
    output.push_str(&format!("  Reminders:    {} days before\n", days.join(", ")));
    if let Some(suggested) = item.suggested_renewal_date() {
        output.push_str(&format!("  Renew until:  {} (suggested)\n", suggested));
    }

    let history = item.renewals_newest_first();
    if !history.is_empty() {
        output.push('\n');
        output.push_str("  Renewal history:\n");
        for event in history {
            output.push_str(&format!(
                "    {}  {} -> {}\n",
                event.renewed_at.format("%Y-%m-%d"),
                event.previous_expiry_date,
                event.new_expiry_date
            ));
        }
    }

    if !item.notes.is_empty() {
        output.push('\n');
        output.push_str(&format!("  Notes: {}\n", item.notes));
    }

    output
}

/// Format the reminders planned for an item
pub fn format_reminders(item: &Item, reminders: &[PlannedReminder]) -> String {
    if reminders.is_empty() {
        return format!("No upcoming reminders for {}.", item.title);
    }

    let mut output = format!("Reminders for {}:\n", item.title);
    for reminder in reminders {
        output.push_str(&format!(
            "  {}  {}  {}\n",
            reminder.fire_at.format("%Y-%m-%d %H:%M %:z"),
            reminder.identifier,
            reminder.message
        ));
    }
    output
}
