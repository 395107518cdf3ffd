//! Display formatting for terminal output
//!
//! Turns service results (home sections, dashboard summaries, planned
//! reminders, vault lists) into plain aligned text for the CLI.

pub mod dashboard;
pub mod item;
pub mod vault;

pub use dashboard::format_dashboard;
pub use item::{format_home_sections, format_item_details, format_reminders};
pub use vault::format_vault_list;

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Truncate a string to a maximum number of characters with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        ".".repeat(max_len)
    } else {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    }
}

/// Width of the widest value, at least `min`
pub(crate) fn column_width<'a, I>(values: I, min: usize) -> usize
where
    I: IntoIterator<Item = &'a str>,
{
    values
        .into_iter()
        .map(|v| v.chars().count())
        .max()
        .unwrap_or(min)
        .max(min)
}
