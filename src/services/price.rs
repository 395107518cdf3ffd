//! Canonical price text
//!
//! Renders amounts as `<currency><units>.<cents>` with no space and a period
//! as the decimal separator, and parses what users type into a price field.
//! Localized display is left to the presentation layer.

use crate::models::{Money, Price};

/// Formats and parses prices against a configured default currency
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceFormatter {
    default_currency: String,
}

impl PriceFormatter {
    pub fn new(default_currency: impl Into<String>) -> Self {
        Self {
            default_currency: default_currency.into(),
        }
    }

    pub fn default_currency(&self) -> &str {
        &self.default_currency
    }

    /// Resolve an optional currency tag, falling back to the default
    pub fn resolve_currency<'a>(&'a self, currency: Option<&'a str>) -> &'a str {
        match currency {
            Some(c) if !c.is_empty() => c,
            _ => &self.default_currency,
        }
    }

    /// Canonical text for an amount, e.g. `€12.50`
    ///
    /// Returns `None` when the amount is absent or negative.
    pub fn text(&self, amount: Option<Money>, currency: Option<&str>) -> Option<String> {
        let amount = amount.filter(|a| !a.is_negative())?;
        Some(amount.format_with_symbol(self.resolve_currency(currency)))
    }

    /// Canonical text for an item's price
    pub fn price_text(&self, price: Option<&Price>) -> Option<String> {
        let price = price?;
        self.text(Some(price.amount), price.currency.as_deref())
    }

    /// Parse a user-entered amount
    ///
    /// Accepts either `.` or `,` as the decimal separator and rounds to the
    /// nearest cent. Empty, non-numeric, non-finite and negative input all
    /// yield `None`.
    pub fn parse_amount(text: &str) -> Option<Money> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return None;
        }
        let value: f64 = trimmed.replace(',', ".").parse().ok()?;
        if value < 0.0 {
            return None;
        }
        Money::from_major(value)
    }
}
