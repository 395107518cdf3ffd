//! Reminder scheduling and urgency classification
//!
//! Turns an expiry date plus reminder offsets into concrete trigger dates,
//! and sorts items into the soon/later/expired buckets the home list shows.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use tracing::debug;

use super::calendar::Calendar;
use crate::models::Item;

/// Items expiring within this many days (inclusive) are "soon"
pub const SOON_WINDOW_DAYS: i64 = 30;

/// Urgency of an item relative to today
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemBucket {
    Soon,
    Later,
    Expired,
}

impl ItemBucket {
    /// Classify a whole-day distance from today to expiry
    pub fn from_days_until(days: i64) -> Self {
        if days < 0 {
            Self::Expired
        } else if days <= SOON_WINDOW_DAYS {
            Self::Soon
        } else {
            Self::Later
        }
    }
}

impl fmt::Display for ItemBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Soon => write!(f, "Expiring soon"),
            Self::Later => write!(f, "Later"),
            Self::Expired => write!(f, "Expired"),
        }
    }
}

/// Computes reminder trigger dates and buckets in a given calendar
#[derive(Debug, Clone, Copy, Default)]
pub struct ReminderScheduler {
    calendar: Calendar,
}

impl ReminderScheduler {
    pub fn new(calendar: Calendar) -> Self {
        Self { calendar }
    }

    pub fn calendar(&self) -> &Calendar {
        &self.calendar
    }

    /// Trigger dates for `reminder_days` before `expiry_date`, ascending
    ///
    /// Negative offsets are ignored and duplicates collapse. An offset whose
    /// date cannot be computed is dropped without affecting the others, so
    /// the result may be empty.
    pub fn reminder_dates(&self, expiry_date: NaiveDate, reminder_days: &[i32]) -> Vec<NaiveDate> {
        let mut seen = HashSet::new();
        let mut dates: Vec<NaiveDate> = reminder_days
            .iter()
            .copied()
            .filter(|&days| days >= 0)
            .filter(|&days| seen.insert(days))
            .filter_map(|days| {
                let date = self.calendar.subtract_days(expiry_date, days as u64);
                if date.is_none() {
                    debug!(
                        %expiry_date,
                        days,
                        "dropping reminder offset outside the calendar range"
                    );
                }
                date
            })
            .collect();
        dates.sort();
        dates
    }

    /// Trigger dates for an item's own reminder configuration
    pub fn reminder_dates_for(&self, item: &Item) -> Vec<NaiveDate> {
        self.reminder_dates(item.expiry_date, &item.reminder_days)
    }

    /// Whole days from today to the item's expiry
    pub fn days_until_expiry(&self, item: &Item, now: DateTime<Utc>) -> i64 {
        let today = self.calendar.today(now);
        self.calendar.days_between(today, item.expiry_date)
    }

    /// Urgency bucket of `item` at `now`
    pub fn bucket(&self, item: &Item, now: DateTime<Utc>) -> ItemBucket {
        ItemBucket::from_days_until(self.days_until_expiry(item, now))
    }
}
