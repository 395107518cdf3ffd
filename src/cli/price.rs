//! Price CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::error::{RenewalError, RenewalResult};
use crate::models::Money;
use crate::services::PriceFormatter;

/// Price subcommands
#[derive(Subcommand)]
pub enum PriceCommands {
    /// Canonical text for an amount in cents
    Format {
        /// Amount in cents
        #[arg(allow_hyphen_values = true)]
        cents: i64,
        /// Currency tag (defaults to the configured currency)
        #[arg(short, long)]
        currency: Option<String>,
    },
    /// Parse an amount as a user would type it (e.g. "12,50")
    Parse {
        /// Text as typed
        #[arg(allow_hyphen_values = true)]
        text: String,
        /// Currency tag (defaults to the configured currency)
        #[arg(short, long)]
        currency: Option<String>,
    },
}

/// Handle a price command
pub fn handle_price_command(settings: &Settings, cmd: PriceCommands) -> RenewalResult<()> {
    let formatter = PriceFormatter::new(settings.default_currency.clone());

    match cmd {
        PriceCommands::Format { cents, currency } => {
            let text = formatter
                .text(Some(Money::from_cents(cents)), currency.as_deref())
                .ok_or_else(|| {
                    RenewalError::Validation(format!("Cannot format a negative amount: {}", cents))
                })?;
            println!("{}", text);
        }
        PriceCommands::Parse { text, currency } => {
            let amount = PriceFormatter::parse_amount(&text)
                .ok_or_else(|| RenewalError::Validation(format!("Invalid amount: '{}'", text)))?;
            let canonical = formatter
                .text(Some(amount), currency.as_deref())
                .unwrap_or_default();
            println!("{} ({} cents)", canonical, amount.cents());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_amounts_rejected() {
        let settings = Settings::default();
        let err = handle_price_command(
            &settings,
            PriceCommands::Format {
                cents: -100,
                currency: None,
            },
        )
        .unwrap_err();
        assert!(err.is_validation());

        let err = handle_price_command(
            &settings,
            PriceCommands::Parse {
                text: "-3".into(),
                currency: None,
            },
        )
        .unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_parse_accepts_comma() {
        let settings = Settings::default();
        assert!(handle_price_command(
            &settings,
            PriceCommands::Parse {
                text: "12,50".into(),
                currency: Some("$".into()),
            },
        )
        .is_ok());
    }
}
