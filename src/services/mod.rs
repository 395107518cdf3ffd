//! Service layer for RenewalVault
//!
//! The service layer holds the scheduling, pricing and aggregation rules.
//! Services borrow read-only snapshots of items and vaults; persistence and
//! notification delivery belong to the caller.

pub mod calendar;
pub mod clock;
pub mod dashboard;
pub mod feature_gate;
pub mod item_list;
pub mod notification;
pub mod price;
pub mod reminder_days;
pub mod scheduler;
pub mod vault;

pub use calendar::Calendar;
pub use clock::{Clock, FixedClock, SystemClock};
pub use dashboard::{
    CurrencyTotal, DashboardCalculator, DashboardFilter, DashboardSummary, DateFilter, MonthGroup,
    PriceFilter,
};
pub use feature_gate::FeatureGate;
pub use item_list::{HomeSections, ItemListService, ItemQuery};
pub use notification::{PlannedReminder, ReminderMessage, ReminderPlanner};
pub use price::PriceFormatter;
pub use scheduler::{ItemBucket, ReminderScheduler, SOON_WINDOW_DAYS};
pub use vault::VaultService;
