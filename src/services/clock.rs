//! Time sources
//!
//! Every computation that depends on "now" takes the instant as a parameter;
//! the orchestration layer gets it from a [`Clock`] so tests and the CLI's
//! `--today` flag can pin it.

use chrono::{DateTime, NaiveDate, Utc};
use std::fmt;

use super::calendar::Calendar;

/// Abstraction over wall-clock time
pub trait Clock: Send + Sync + fmt::Debug {
    /// The current instant
    fn now(&self) -> DateTime<Utc>;
}

/// Production clock reading the system time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock pinned to a single instant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(DateTime<Utc>);

impl FixedClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self(now)
    }

    /// Noon of `date` in the calendar's zone, so the calendar day is
    /// unambiguous regardless of offset
    pub fn on_day(date: NaiveDate, calendar: &Calendar) -> Self {
        let now = calendar
            .at_hour(date, 12)
            .map(|local| local.with_timezone(&Utc))
            .unwrap_or_else(|| date.and_hms_opt(12, 0, 0).unwrap_or_default().and_utc());
        Self(now)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
