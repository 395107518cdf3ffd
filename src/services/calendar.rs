//! Calendar context for date math
//!
//! Items expire on calendar dates; "now" is an instant. The calendar turns
//! instants into local dates and does the checked month/day arithmetic the
//! scheduler and dashboard need. Failed arithmetic (chrono range limits)
//! comes back as `None` so callers can drop the single entry.

use chrono::{DateTime, Datelike, Days, FixedOffset, Months, NaiveDate, Offset, Utc};

/// A fixed-offset calendar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Calendar {
    offset: FixedOffset,
}

impl Calendar {
    pub fn new(offset: FixedOffset) -> Self {
        Self { offset }
    }

    /// Calendar at UTC+0
    pub fn utc() -> Self {
        Self { offset: Utc.fix() }
    }

    pub fn offset(&self) -> FixedOffset {
        self.offset
    }

    /// The local calendar date of an instant (its start of day)
    pub fn today(&self, now: DateTime<Utc>) -> NaiveDate {
        now.with_timezone(&self.offset).date_naive()
    }

    /// Whole days from `from` to `to` (negative if `to` is earlier)
    pub fn days_between(&self, from: NaiveDate, to: NaiveDate) -> i64 {
        (to - from).num_days()
    }

    /// First day of the month containing `date`
    pub fn start_of_month(&self, date: NaiveDate) -> NaiveDate {
        NaiveDate::from_ymd_opt(date.year(), date.month(), 1).unwrap_or(date)
    }

    /// `date` moved forward by whole months, clamping the day to month end
    pub fn add_months(&self, date: NaiveDate, months: u32) -> Option<NaiveDate> {
        date.checked_add_months(Months::new(months))
    }

    /// `date` moved back by `days`
    pub fn subtract_days(&self, date: NaiveDate, days: u64) -> Option<NaiveDate> {
        date.checked_sub_days(Days::new(days))
    }

    /// Local wall-clock instant at `hour`:00 on `date`
    pub fn at_hour(&self, date: NaiveDate, hour: u32) -> Option<DateTime<FixedOffset>> {
        date.and_hms_opt(hour, 0, 0)?
            .and_local_timezone(self.offset)
            .single()
    }
}

impl Default for Calendar {
    fn default() -> Self {
        Self::utc()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_today_respects_offset() {
        let instant = Utc.with_ymd_and_hms(2024, 12, 31, 23, 30, 0).unwrap();
        assert_eq!(Calendar::utc().today(instant), date(2024, 12, 31));

        let tokyo = Calendar::new(FixedOffset::east_opt(9 * 3600).unwrap());
        assert_eq!(tokyo.today(instant), date(2025, 1, 1));
    }

    #[test]
    fn test_add_months_clamps_to_month_end() {
        let cal = Calendar::utc();
        assert_eq!(cal.add_months(date(2024, 1, 31), 1), Some(date(2024, 2, 29)));
        assert_eq!(cal.add_months(date(2024, 12, 15), 1), Some(date(2025, 1, 15)));
    }

    #[test]
    fn test_subtract_days_crosses_boundaries() {
        let cal = Calendar::utc();
        assert_eq!(cal.subtract_days(date(2024, 3, 1), 1), Some(date(2024, 2, 29)));
        assert_eq!(cal.subtract_days(date(2023, 3, 1), 1), Some(date(2023, 2, 28)));
        assert_eq!(cal.subtract_days(date(2025, 1, 1), 1), Some(date(2024, 12, 31)));
        assert_eq!(cal.subtract_days(NaiveDate::MIN, 1), None);
    }

    #[test]
    fn test_start_of_month() {
        assert_eq!(
            Calendar::utc().start_of_month(date(2024, 4, 10)),
            date(2024, 4, 1)
        );
    }

    #[test]
    fn test_at_hour() {
        let cal = Calendar::new(FixedOffset::east_opt(2 * 3600).unwrap());
        let fire = cal.at_hour(date(2024, 6, 1), 9).unwrap();
        assert_eq!(fire.with_timezone(&Utc), Utc.with_ymd_and_hms(2024, 6, 1, 7, 0, 0).unwrap());
        assert!(cal.at_hour(date(2024, 6, 1), 24).is_none());
    }
}
