//! Reminder-day CLI commands

use clap::Subcommand;

use super::{join_days, parse_day_list};
use crate::error::{RenewalError, RenewalResult};
use crate::services::reminder_days;

/// Reminder-day subcommands
#[derive(Subcommand)]
pub enum DaysCommands {
    /// Offsets the picker offers for a selection
    Available {
        /// Currently selected offsets, comma-separated
        #[arg(short, long, default_value = "")]
        selected: String,
        /// Custom offsets entered earlier, comma-separated
        #[arg(short, long, default_value = "")]
        custom: String,
    },
    /// Toggle one offset in a selection
    Toggle {
        /// Offset to add or remove
        day: i32,
        /// Currently selected offsets, comma-separated
        #[arg(short, long, default_value = "")]
        selected: String,
    },
    /// Validate a hand-entered offset
    Parse {
        /// Text as typed
        text: String,
    },
}

/// Handle a reminder-day command
pub fn handle_days_command(cmd: DaysCommands) -> RenewalResult<()> {
    match cmd {
        DaysCommands::Available { selected, custom } => {
            let selected = parse_day_list(&selected)?;
            let custom = parse_day_list(&custom)?;
            println!(
                "{}",
                join_days(&reminder_days::available_days(&selected, &custom))
            );
        }
        DaysCommands::Toggle { day, selected } => {
            let selected = parse_day_list(&selected)?;
            let toggled = reminder_days::toggle(day, &selected);
            if toggled.is_empty() {
                println!("(none)");
            } else {
                println!("{}", join_days(&toggled));
            }
        }
        DaysCommands::Parse { text } => {
            let day = reminder_days::parse_custom(&text).ok_or_else(|| {
                RenewalError::Validation(format!(
                    "'{}' is not a whole number of days (1 or more)",
                    text.trim()
                ))
            })?;
            println!("{}", day);
        }
    }

    Ok(())
}
