//! Dashboard aggregation
//!
//! Filters an item snapshot by price, paid state and date window, then
//! derives the renewal-cost totals (per currency) and the month-by-month
//! upcoming renewals list.
//!
//! Three totals are produced from the filtered set:
//!
//! - **Year to pay**: open priced items expiring in the target year (the
//!   filter's year, else the current year).
//! - **Next month to pay**: open priced items expiring in the target month
//!   (the filter's month/year components, else one month ahead of today).
//! - **Paid**: completed priced items, with no further date restriction.
//!
//! Amounts are summed per resolved currency; an untagged price counts under
//! the default currency and merges with prices that carry that tag
//! explicitly.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

use super::calendar::Calendar;
use super::price::PriceFormatter;
use crate::models::{Item, Money};

/// Which items pass based on whether they carry a price
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PriceFilter {
    #[default]
    All,
    PricedOnly,
    FreeOnly,
}

impl PriceFilter {
    fn matches(&self, item: &Item) -> bool {
        match self {
            Self::All => true,
            Self::PricedOnly => item.price.is_some(),
            Self::FreeOnly => item.price.is_none(),
        }
    }
}

/// Expiry date window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DateFilter {
    #[default]
    None,
    Year(i32),
    /// A month of the current year
    Month(u32),
    MonthYear { month: u32, year: i32 },
}

impl DateFilter {
    /// Build from optional CLI-style components
    pub fn from_parts(year: Option<i32>, month: Option<u32>) -> Self {
        match (year, month) {
            (None, None) => Self::None,
            (Some(year), None) => Self::Year(year),
            (None, Some(month)) => Self::Month(month),
            (Some(year), Some(month)) => Self::MonthYear { month, year },
        }
    }

    /// Explicit year component, if any
    pub fn year_value(&self) -> Option<i32> {
        match self {
            Self::Year(year) | Self::MonthYear { year, .. } => Some(*year),
            _ => None,
        }
    }

    /// Explicit month component, if any
    pub fn month_value(&self) -> Option<u32> {
        match self {
            Self::Month(month) | Self::MonthYear { month, .. } => Some(*month),
            _ => None,
        }
    }

    fn matches(&self, expiry: NaiveDate, current_year: i32) -> bool {
        match *self {
            Self::None => true,
            Self::Year(year) => expiry.year() == year,
            // Pinned to the current year rather than matching the month in any year
            Self::Month(month) => expiry.month() == month && expiry.year() == current_year,
            Self::MonthYear { month, year } => expiry.month() == month && expiry.year() == year,
        }
    }
}

/// Dashboard filter configuration; the default lets every item through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DashboardFilter {
    #[serde(default)]
    pub price: PriceFilter,
    #[serde(default)]
    pub paid_only: bool,
    #[serde(default)]
    pub date: DateFilter,
}

/// Accumulated amount for one currency
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyTotal {
    pub currency: String,
    pub amount: Money,
}

impl CurrencyTotal {
    pub fn formatted(&self) -> String {
        self.amount.format_with_symbol(&self.currency)
    }
}

/// Items expiring in one calendar month, in expiry order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthGroup<'a> {
    pub month_start: NaiveDate,
    pub items: Vec<&'a Item>,
}

/// Everything the dashboard screen shows
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSummary<'a> {
    pub year_to_pay: Vec<CurrencyTotal>,
    pub next_month_to_pay: Vec<CurrencyTotal>,
    pub paid: Vec<CurrencyTotal>,
    pub month_groups: Vec<MonthGroup<'a>>,
    /// Year the year-to-pay total was computed for
    pub target_year: i32,
    /// First day of the month the next-month total was computed for
    pub target_month_start: Option<NaiveDate>,
}

impl DashboardSummary<'_> {
    /// Every currency appearing in any total
    pub fn currencies(&self) -> BTreeSet<&str> {
        self.year_to_pay
            .iter()
            .chain(&self.next_month_to_pay)
            .chain(&self.paid)
            .map(|t| t.currency.as_str())
            .collect()
    }

    /// Whether totals mix currencies (the UI shows a warning)
    pub fn has_multiple_currencies(&self) -> bool {
        self.currencies().len() > 1
    }
}

/// Computes dashboard summaries in a given calendar and default currency
#[derive(Debug, Clone)]
pub struct DashboardCalculator {
    calendar: Calendar,
    default_currency: String,
}

impl DashboardCalculator {
    pub fn new(calendar: Calendar, default_currency: impl Into<String>) -> Self {
        Self {
            calendar,
            default_currency: default_currency.into(),
        }
    }

    /// Share the formatter's default currency
    pub fn with_formatter(calendar: Calendar, formatter: &PriceFormatter) -> Self {
        Self::new(calendar, formatter.default_currency())
    }

    /// Build the dashboard summary for `items` at `now`
    pub fn summary<'a>(
        &self,
        items: &'a [Item],
        now: DateTime<Utc>,
        filter: &DashboardFilter,
    ) -> DashboardSummary<'a> {
        let filtered = self.apply_filter(items, filter, now);
        let today = self.calendar.today(now);

        let target_year = filter.date.year_value().unwrap_or(today.year());

        let next_month = self.calendar.add_months(today, 1).unwrap_or(today);
        let target_month = filter.date.month_value().unwrap_or(next_month.month());
        let target_month_year = filter.date.year_value().unwrap_or(next_month.year());

        let open_priced = || {
            filtered
                .iter()
                .copied()
                .filter(|item| !item.is_completed && item.price.is_some())
        };

        let year_to_pay = self.totals_by_currency(
            open_priced().filter(|item| item.expiry_date.year() == target_year),
        );

        let next_month_to_pay = self.totals_by_currency(open_priced().filter(|item| {
            item.expiry_date.month() == target_month && item.expiry_date.year() == target_month_year
        }));

        let paid = self.totals_by_currency(
            filtered
                .iter()
                .copied()
                .filter(|item| item.is_completed && item.price.is_some()),
        );

        let month_groups = self.group_by_month(&filtered, today, filter.paid_only);

        debug!(
            items = items.len(),
            filtered = filtered.len(),
            groups = month_groups.len(),
            "computed dashboard summary"
        );

        DashboardSummary {
            year_to_pay,
            next_month_to_pay,
            paid,
            month_groups,
            target_year,
            target_month_start: NaiveDate::from_ymd_opt(target_month_year, target_month, 1),
        }
    }

    /// Items passing all three filter axes, in input order
    pub fn apply_filter<'a>(
        &self,
        items: &'a [Item],
        filter: &DashboardFilter,
        now: DateTime<Utc>,
    ) -> Vec<&'a Item> {
        let current_year = self.calendar.today(now).year();
        items
            .iter()
            .filter(|item| {
                filter.price.matches(item)
                    && (!filter.paid_only || item.is_completed)
                    && filter.date.matches(item.expiry_date, current_year)
            })
            .collect()
    }

    /// Sum non-negative priced amounts per resolved currency, sorted by currency
    ///
    /// Items without a price or with a negative amount are left out entirely.
    /// A total that would exceed the cent range is clamped to `i64::MAX`.
    pub fn totals_by_currency<'a, I>(&self, items: I) -> Vec<CurrencyTotal>
    where
        I: IntoIterator<Item = &'a Item>,
    {
        let mut totals: BTreeMap<String, Money> = BTreeMap::new();
        for item in items {
            let Some(price) = &item.price else { continue };
            if price.amount.is_negative() {
                continue;
            }
            let currency = price.resolved_currency(&self.default_currency);
            let total = totals.entry(currency.to_string()).or_default();
            *total = total.saturating_add(price.amount);
        }

        totals
            .into_iter()
            .map(|(currency, amount)| CurrencyTotal { currency, amount })
            .collect()
    }

    /// Upcoming renewals grouped by expiry month, months ascending
    ///
    /// Only items from the start of the current month onward are grouped,
    /// unless `include_past` is set (the paid history view).
    fn group_by_month<'a>(
        &self,
        filtered: &[&'a Item],
        today: NaiveDate,
        include_past: bool,
    ) -> Vec<MonthGroup<'a>> {
        let month_start = self.calendar.start_of_month(today);

        let mut candidates: Vec<&'a Item> = filtered
            .iter()
            .copied()
            .filter(|item| include_past || item.expiry_date >= month_start)
            .collect();
        // Stable: equal expiry dates keep snapshot order
        candidates.sort_by_key(|item| item.expiry_date);

        let mut grouped: BTreeMap<NaiveDate, Vec<&'a Item>> = BTreeMap::new();
        for item in candidates {
            let key = self.calendar.start_of_month(item.expiry_date);
            grouped.entry(key).or_default().push(item);
        }

        grouped
            .into_iter()
            .map(|(month_start, items)| MonthGroup { month_start, items })
            .collect()
    }
}
