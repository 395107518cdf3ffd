//! Dashboard display formatting

use super::{separator, truncate};
use crate::services::{CurrencyTotal, DashboardSummary, PriceFormatter};

/// Format a list of per-currency totals on one line
fn format_totals(totals: &[CurrencyTotal]) -> String {
    if totals.is_empty() {
        return "-".to_string();
    }
    totals
        .iter()
        .map(CurrencyTotal::formatted)
        .collect::<Vec<_>>()
        .join("  ")
}

/// Format the dashboard summary
pub fn format_dashboard(summary: &DashboardSummary<'_>, formatter: &PriceFormatter) -> String {
    let mut output = String::new();

    output.push_str("Renewal costs\n");
    output.push_str(&separator(13));
    output.push('\n');
    output.push_str(&format!(
        "  To pay in {}:{:>6}{}\n",
        summary.target_year,
        "",
        format_totals(&summary.year_to_pay)
    ));
    let month_label = summary
        .target_month_start
        .map(|d| d.format("%B %Y").to_string())
        .unwrap_or_else(|| "next month".to_string());
    output.push_str(&format!(
        "  To pay in {}: {}\n",
        month_label,
        format_totals(&summary.next_month_to_pay)
    ));
    output.push_str(&format!("  Paid:{:>13}{}\n", "", format_totals(&summary.paid)));

    if summary.has_multiple_currencies() {
        output.push_str("\n  Note: totals are kept separate per currency and not converted.\n");
    }

    output.push('\n');
    if summary.month_groups.is_empty() {
        output.push_str("No upcoming renewals.\n");
        return output;
    }

    output.push_str("Upcoming renewals\n");
    output.push_str(&separator(17));
    output.push('\n');
    for group in &summary.month_groups {
        output.push_str(&format!("  {}\n", group.month_start.format("%B %Y")));
        for item in &group.items {
            let price = formatter
                .price_text(item.price.as_ref())
                .unwrap_or_else(|| "-".to_string());
            let done = if item.is_completed { "  paid" } else { "" };
            output.push_str(&format!(
                "    {}  {:<32}  {:>10}{}\n",
                item.expiry_date.format("%d %b"),
                truncate(&item.title, 32),
                price,
                done
            ));
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Item, ItemCategory, Money, Price};
    use crate::services::{Calendar, DashboardCalculator, DashboardFilter};
    use chrono::{NaiveDate, TimeZone, Utc};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_format_dashboard() {
        let items = vec![
            Item::new("Netflix", ItemCategory::Subscription, date(2025, 2, 10))
                .with_price(Price::untagged(Money::from_cents(1299))),
            Item::new("Spotify", ItemCategory::Subscription, date(2025, 3, 5))
                .with_price(Price::new(Money::from_cents(999), "$")),
            Item::new("Passport", ItemCategory::Passport, date(2025, 3, 20)),
        ];
        let now = Utc.with_ymd_and_hms(2025, 1, 15, 12, 0, 0).unwrap();
        let calculator = DashboardCalculator::new(Calendar::utc(), "€");
        let summary = calculator.summary(&items, now, &DashboardFilter::default());

        let output = format_dashboard(&summary, &PriceFormatter::new("€"));
        assert!(output.contains("To pay in 2025:"));
        assert!(output.contains("$9.99  €12.99"));
        assert!(output.contains("To pay in February 2025: €12.99"));
        assert!(output.contains("not converted"));
        assert!(output.contains("  February 2025\n"));
        assert!(output.contains("  March 2025\n"));
        assert!(output.contains("20 Mar  Passport"));
    }

    #[test]
    fn test_format_empty_dashboard() {
        let now = Utc.with_ymd_and_hms(2025, 1, 15, 12, 0, 0).unwrap();
        let calculator = DashboardCalculator::new(Calendar::utc(), "€");
        let summary = calculator.summary(&[], now, &DashboardFilter::default());

        let output = format_dashboard(&summary, &PriceFormatter::new("€"));
        assert!(output.contains("Paid:"));
        assert!(output.contains("No upcoming renewals."));
        assert!(!output.contains("not converted"));
    }
}
