//! Subscription tiers and the actions they gate

use serde::{Deserialize, Serialize};
use std::fmt;

/// Subscription level supplied by the entitlement collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionTier {
    #[default]
    Free,
    Pro,
}

impl SubscriptionTier {
    pub fn is_pro(&self) -> bool {
        matches!(self, Self::Pro)
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "free" => Some(Self::Free),
            "pro" => Some(Self::Pro),
            _ => None,
        }
    }
}

impl fmt::Display for SubscriptionTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Free => write!(f, "Free"),
            Self::Pro => write!(f, "Pro"),
        }
    }
}

/// A mutating or premium action that is checked against the tier first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GatedAction {
    CreateVault,
    CreateItem,
    AddAttachment,
    ExportPdf,
    AccessDashboard,
}

impl GatedAction {
    /// Whether the gate compares a usage count (as opposed to tier only)
    pub fn is_counted(&self) -> bool {
        matches!(
            self,
            Self::CreateVault | Self::CreateItem | Self::AddAttachment
        )
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "create_vault" | "vault" => Some(Self::CreateVault),
            "create_item" | "item" => Some(Self::CreateItem),
            "add_attachment" | "attachment" => Some(Self::AddAttachment),
            "export_pdf" | "export" => Some(Self::ExportPdf),
            "access_dashboard" | "dashboard" => Some(Self::AccessDashboard),
            _ => None,
        }
    }
}

impl fmt::Display for GatedAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CreateVault => write!(f, "creating a vault"),
            Self::CreateItem => write!(f, "creating an item"),
            Self::AddAttachment => write!(f, "adding an attachment"),
            Self::ExportPdf => write!(f, "PDF export"),
            Self::AccessDashboard => write!(f, "the dashboard"),
        }
    }
}
