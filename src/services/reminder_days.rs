//! Reminder-day selection algebra
//!
//! A reminder selection is a set of positive day offsets. [`normalized`] is
//! the single place duplicates, zero and negative values are removed and the
//! order is fixed (descending, as the picker shows it); every other function
//! here returns its result through it.

use std::collections::BTreeSet;

/// Quick-pick offsets that are always offered
pub const PRESET_DAYS: [i32; 6] = [90, 60, 30, 14, 7, 1];

/// Deduplicate, drop values below 1, sort descending
pub fn normalized(days: &[i32]) -> Vec<i32> {
    days.iter()
        .copied()
        .filter(|&day| day >= 1)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .rev()
        .collect()
}

/// Offsets to show in the picker: presets plus everything already selected
/// or entered by hand, so custom values survive a re-render
pub fn available_days(selected: &[i32], custom_available: &[i32]) -> Vec<i32> {
    let all: Vec<i32> = PRESET_DAYS
        .iter()
        .chain(selected)
        .chain(custom_available)
        .copied()
        .collect();
    normalized(&all)
}

/// Add `day` if absent, remove it if present
pub fn toggle(day: i32, selected: &[i32]) -> Vec<i32> {
    let mut values: BTreeSet<i32> = selected.iter().copied().collect();
    if !values.remove(&day) {
        values.insert(day);
    }
    normalized(&values.into_iter().collect::<Vec<_>>())
}

/// Parse a hand-entered offset; only integers >= 1 are accepted
pub fn parse_custom(text: &str) -> Option<i32> {
    text.trim().parse::<i32>().ok().filter(|&value| value >= 1)
}
