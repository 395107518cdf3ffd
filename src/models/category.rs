//! Item categories
//!
//! The fixed set of document and subscription kinds an item can belong to.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of tracked item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ItemCategory {
    Passport,
    #[serde(rename = "nationalID")]
    NationalId,
    DriversLicense,
    CarInsurance,
    Lease,
    HealthInsurance,
    Subscription,
    Other,
}

impl ItemCategory {
    /// All categories, in picker order
    pub const ALL: [ItemCategory; 8] = [
        Self::Passport,
        Self::NationalId,
        Self::DriversLicense,
        Self::CarInsurance,
        Self::Lease,
        Self::HealthInsurance,
        Self::Subscription,
        Self::Other,
    ];

    /// Stable tag used in snapshots and exports
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Passport => "passport",
            Self::NationalId => "nationalID",
            Self::DriversLicense => "driversLicense",
            Self::CarInsurance => "carInsurance",
            Self::Lease => "lease",
            Self::HealthInsurance => "healthInsurance",
            Self::Subscription => "subscription",
            Self::Other => "other",
        }
    }

    /// Icon tag the UI resolves to a glyph
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Passport => "globe",
            Self::NationalId => "person.text.rectangle",
            Self::DriversLicense => "car",
            Self::CarInsurance => "shield.lefthalf.filled",
            Self::Lease => "house",
            Self::HealthInsurance => "heart.text.square",
            Self::Subscription => "creditcard",
            Self::Other => "doc",
        }
    }

    /// Parse a category from user input
    ///
    /// Case-insensitive; underscores, hyphens and spaces are ignored so
    /// "drivers_license", "Drivers License" and "driversLicense" all match.
    pub fn parse(s: &str) -> Option<Self> {
        let key: String = s
            .chars()
            .filter(|c| !matches!(c, '_' | '-' | ' '))
            .flat_map(char::to_lowercase)
            .collect();
        match key.as_str() {
            "passport" => Some(Self::Passport),
            "nationalid" | "id" => Some(Self::NationalId),
            "driverslicense" | "license" => Some(Self::DriversLicense),
            "carinsurance" => Some(Self::CarInsurance),
            "lease" => Some(Self::Lease),
            "healthinsurance" => Some(Self::HealthInsurance),
            "subscription" => Some(Self::Subscription),
            "other" => Some(Self::Other),
            _ => None,
        }
    }
}

impl Default for ItemCategory {
    fn default() -> Self {
        Self::Other
    }
}

impl fmt::Display for ItemCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Passport => write!(f, "Passport"),
            Self::NationalId => write!(f, "National ID"),
            Self::DriversLicense => write!(f, "Driver's license"),
            Self::CarInsurance => write!(f, "Car insurance"),
            Self::Lease => write!(f, "Lease"),
            Self::HealthInsurance => write!(f, "Health insurance"),
            Self::Subscription => write!(f, "Subscription"),
            Self::Other => write!(f, "Other"),
        }
    }
}
