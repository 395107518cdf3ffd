//! Renewal history entries

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::ids::RenewalEventId;

/// Record of an item being renewed to a new expiry date
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenewalEvent {
    pub id: RenewalEventId,
    pub renewed_at: DateTime<Utc>,
    pub previous_expiry_date: NaiveDate,
    pub new_expiry_date: NaiveDate,
}

impl RenewalEvent {
    pub fn new(previous: NaiveDate, new: NaiveDate, renewed_at: DateTime<Utc>) -> Self {
        Self {
            id: RenewalEventId::new(),
            renewed_at,
            previous_expiry_date: previous,
            new_expiry_date: new,
        }
    }

    /// Days the renewal extended the expiry by (negative if moved earlier)
    pub fn extension_days(&self) -> i64 {
        (self.new_expiry_date - self.previous_expiry_date).num_days()
    }
}
