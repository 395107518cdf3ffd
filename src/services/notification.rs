//! Reminder planning
//!
//! Produces the reminder requests the platform notification collaborator
//! schedules for an item: a stable identifier, the local fire time and a
//! description of what the reminder says. Delivery is not done here.

use chrono::{DateTime, FixedOffset, NaiveDate, Utc};
use serde::Serialize;
use std::fmt;

use super::scheduler::ReminderScheduler;
use crate::models::Item;

/// What a reminder tells the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReminderMessage {
    pub title: String,
    /// Days from the trigger date to expiry
    pub days_before: i64,
}

impl fmt::Display for ReminderMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.days_before {
            0 => write!(f, "{} expires today", self.title),
            1 => write!(f, "{} expires in 1 day", self.title),
            days => write!(f, "{} expires in {} days", self.title, days),
        }
    }
}

/// One reminder to hand to the notification collaborator
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedReminder {
    /// Stable per item and position, so rescheduling replaces old requests
    pub identifier: String,
    pub trigger_date: NaiveDate,
    pub fire_at: DateTime<FixedOffset>,
    pub message: ReminderMessage,
}

/// Plans reminders for items
#[derive(Debug, Clone, Copy)]
pub struct ReminderPlanner<'a> {
    scheduler: &'a ReminderScheduler,
    reminder_hour: u32,
}

impl<'a> ReminderPlanner<'a> {
    pub fn new(scheduler: &'a ReminderScheduler, reminder_hour: u32) -> Self {
        Self {
            scheduler,
            reminder_hour,
        }
    }

    /// Identifier of the `index`-th reminder of an item
    pub fn identifier(item: &Item, index: usize) -> String {
        format!("item-{}-{}", item.id.to_full_string(), index)
    }

    /// Reminders for `item`; completed items get none
    ///
    /// Trigger dates that already lie before today are skipped, as the
    /// platform would never deliver them.
    pub fn plan(&self, item: &Item, now: DateTime<Utc>) -> Vec<PlannedReminder> {
        if item.is_completed {
            return Vec::new();
        }

        let calendar = self.scheduler.calendar();
        let today = calendar.today(now);

        self.scheduler
            .reminder_dates_for(item)
            .into_iter()
            .filter(|date| *date >= today)
            .filter_map(|date| {
                let fire_at = calendar.at_hour(date, self.reminder_hour)?;
                Some((date, fire_at))
            })
            .enumerate()
            .map(|(index, (trigger_date, fire_at))| PlannedReminder {
                identifier: Self::identifier(item, index),
                trigger_date,
                fire_at,
                message: ReminderMessage {
                    title: item.title.clone(),
                    days_before: calendar.days_between(trigger_date, item.expiry_date),
                },
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ItemCategory;
    use crate::services::Calendar;
    use chrono::TimeZone;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_plan_fires_at_reminder_hour() {
        let calendar = Calendar::new(FixedOffset::east_opt(3600).unwrap());
        let scheduler = ReminderScheduler::new(calendar);
        let planner = ReminderPlanner::new(&scheduler, 9);
        let now = Utc.with_ymd_and_hms(2025, 1, 1, 8, 0, 0).unwrap();
        let item = Item::new("Passport", ItemCategory::Passport, date(2025, 2, 1))
            .with_reminder_days(vec![30, 7]);

        let plan = planner.plan(&item, now);
        assert_eq!(plan.len(), 2);
        assert_eq!(plan[0].trigger_date, date(2025, 1, 2));
        assert_eq!(
            plan[0].fire_at.with_timezone(&Utc),
            Utc.with_ymd_and_hms(2025, 1, 2, 8, 0, 0).unwrap()
        );
        assert_eq!(
            plan[1].message,
            ReminderMessage {
                title: "Passport".into(),
                days_before: 7
            }
        );
        assert_eq!(plan[1].message.to_string(), "Passport expires in 7 days");
    }

    #[test]
    fn test_identifiers_are_indexed() {
        let scheduler = ReminderScheduler::new(Calendar::utc());
        let planner = ReminderPlanner::new(&scheduler, 9);
        let now = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let item = Item::new("Netflix", ItemCategory::Subscription, date(2025, 6, 1));

        let plan = planner.plan(&item, now);
        let ids: Vec<_> = plan.iter().map(|p| p.identifier.clone()).collect();
        let prefix = format!("item-{}-", item.id.to_full_string());
        assert_eq!(ids.len(), 4);
        for (index, id) in ids.iter().enumerate() {
            assert_eq!(id, &format!("{}{}", prefix, index));
        }
    }

    #[test]
    fn test_completed_items_get_nothing() {
        let scheduler = ReminderScheduler::new(Calendar::utc());
        let planner = ReminderPlanner::new(&scheduler, 9);
        let now = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let item = Item::new("Lease", ItemCategory::Lease, date(2025, 6, 1)).completed();
        assert!(planner.plan(&item, now).is_empty());
    }

    #[test]
    fn test_past_triggers_skipped() {
        let scheduler = ReminderScheduler::new(Calendar::utc());
        let planner = ReminderPlanner::new(&scheduler, 9);
        let now = Utc.with_ymd_and_hms(2025, 1, 20, 0, 0, 0).unwrap();
        let item = Item::new("Gym", ItemCategory::Subscription, date(2025, 1, 21))
            .with_reminder_days(vec![30, 1, 0]);

        let plan = planner.plan(&item, now);
        let dates: Vec<_> = plan.iter().map(|p| p.trigger_date).collect();
        assert_eq!(dates, vec![date(2025, 1, 20), date(2025, 1, 21)]);
        assert_eq!(plan[1].message.to_string(), "Gym expires today");
    }
}
