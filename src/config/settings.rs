//! User settings for RenewalVault
//!
//! Holds the default currency, the externally-supplied subscription tier,
//! reminder timing and the calendar offset used for all date math.

use chrono::{FixedOffset, Local, Offset};
use serde::{Deserialize, Serialize};

use super::paths::RenewalPaths;
use crate::error::RenewalError;
use crate::models::{SubscriptionTier, DEFAULT_REMINDER_DAYS};
use crate::services::Calendar;

/// User settings for RenewalVault
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency tag used for prices that carry none
    #[serde(default = "default_currency")]
    pub default_currency: String,

    /// Subscription tier as reported by the entitlement collaborator
    #[serde(default)]
    pub tier: SubscriptionTier,

    /// Local hour (0-23) at which planned reminders fire
    #[serde(default = "default_reminder_hour")]
    pub reminder_hour: u32,

    /// Reminder offsets for newly created items
    #[serde(default = "default_reminder_days")]
    pub default_reminder_days: Vec<i32>,

    /// Fixed UTC offset for date math; `None` uses the system offset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub utc_offset_minutes: Option<i32>,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "€".to_string()
}

fn default_reminder_hour() -> u32 {
    9
}

fn default_reminder_days() -> Vec<i32> {
    DEFAULT_REMINDER_DAYS.to_vec()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            default_currency: default_currency(),
            tier: SubscriptionTier::default(),
            reminder_hour: default_reminder_hour(),
            default_reminder_days: default_reminder_days(),
            utc_offset_minutes: None,
        }
    }
}

impl Settings {
    /// Load settings from disk, or return defaults if the file doesn't exist
    pub fn load_or_create(paths: &RenewalPaths) -> Result<Self, RenewalError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            // Not persisted until the caller decides to
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| RenewalError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents)
            .map_err(|e| RenewalError::Config(format!("Failed to parse settings file: {}", e)))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &RenewalPaths) -> Result<(), RenewalError> {
        self.validate()?;
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| RenewalError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| RenewalError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Reject values the services cannot work with
    pub fn validate(&self) -> Result<(), RenewalError> {
        if self.default_currency.trim().is_empty() {
            return Err(RenewalError::Config(
                "default_currency cannot be empty".into(),
            ));
        }

        if self.reminder_hour > 23 {
            return Err(RenewalError::Config(format!(
                "reminder_hour must be between 0 and 23, got {}",
                self.reminder_hour
            )));
        }

        if let Some(minutes) = self.utc_offset_minutes {
            if FixedOffset::east_opt(minutes * 60).is_none() {
                return Err(RenewalError::Config(format!(
                    "utc_offset_minutes out of range: {}",
                    minutes
                )));
            }
        }

        Ok(())
    }

    /// The calendar all date math runs in
    pub fn calendar(&self) -> Calendar {
        let offset = self
            .utc_offset_minutes
            .and_then(|minutes| FixedOffset::east_opt(minutes * 60))
            .unwrap_or_else(|| Local::now().offset().fix());
        Calendar::new(offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.default_currency, "€");
        assert_eq!(settings.tier, SubscriptionTier::Free);
        assert_eq!(settings.reminder_hour, 9);
        assert_eq!(settings.default_reminder_days, vec![30, 14, 7, 1]);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = RenewalPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.default_currency = "$".into();
        settings.tier = SubscriptionTier::Pro;
        settings.utc_offset_minutes = Some(120);

        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.default_currency, "$");
        assert_eq!(loaded.tier, SubscriptionTier::Pro);
        assert_eq!(loaded.utc_offset_minutes, Some(120));
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = RenewalPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"tier": "pro"}"#).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.tier, SubscriptionTier::Pro);
        assert_eq!(loaded.default_currency, "€");
        assert_eq!(loaded.reminder_hour, 9);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut settings = Settings::default();
        settings.reminder_hour = 24;
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.default_currency = " ".into();
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.utc_offset_minutes = Some(24 * 60);
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_calendar_uses_fixed_offset() {
        let mut settings = Settings::default();
        settings.utc_offset_minutes = Some(-300);
        assert_eq!(
            settings.calendar().offset().local_minus_utc(),
            -300 * 60
        );
    }
}
