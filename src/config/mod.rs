//! Configuration module for RenewalVault
//!
//! - XDG-compliant path resolution
//! - User settings persistence (default currency, tier, reminder timing)

pub mod paths;
pub mod settings;

pub use paths::RenewalPaths;
pub use settings::Settings;
