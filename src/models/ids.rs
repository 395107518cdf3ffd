//! Strongly-typed ID wrappers for items, vaults and renewal events
//!
//! Snapshots reference vaults from items by id, so keeping the types distinct
//! stops an item id from being used as a vault reference by accident.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Generates a uuid-backed id newtype with a short display prefix
macro_rules! define_id {
    ($name:ident, $display_prefix:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Create a new random ID
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Get the underlying UUID
            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }

            /// Full hyphenated form, used where the id must be stable and unique
            /// (reminder identifiers, exports)
            pub fn to_full_string(&self) -> String {
                self.0.hyphenated().to_string()
            }

            /// Whether a user-typed reference (full uuid, prefixed or short
            /// display form) points at this id
            pub fn matches_reference(&self, reference: &str) -> bool {
                let reference = reference.trim();
                let bare = reference.strip_prefix($display_prefix).unwrap_or(reference);
                bare.len() >= 8 && self.to_full_string().starts_with(&bare.to_lowercase())
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}{}", $display_prefix, &self.0.to_string()[..8])
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s.strip_prefix($display_prefix).unwrap_or(s);
                Ok(Self(Uuid::parse_str(s)?))
            }
        }
    };
}

define_id!(ItemId, "itm-");
define_id!(VaultId, "vlt-");
define_id!(RenewalEventId, "ren-");
