//! Tier-based feature gates
//!
//! Each gate compares a caller-supplied usage count (or nothing, for
//! tier-only features) against the free tier's allowance. Pro passes
//! everything. A `false` is a normal outcome the caller turns into an
//! upgrade prompt; [`FeatureGate::require`] converts it into an error for
//! orchestration code that wants to bail out with `?`.

use tracing::info;

use crate::error::{RenewalError, RenewalResult};
use crate::models::{GatedAction, SubscriptionTier};

/// Vaults a free user may own
pub const FREE_VAULT_LIMIT: usize = 1;

/// Items a free user may track
pub const FREE_ITEM_LIMIT: usize = 5;

/// Attachments a free user may add per item
pub const FREE_ATTACHMENT_LIMIT: usize = 3;

/// Stateless admission checks
pub struct FeatureGate;

impl FeatureGate {
    pub fn can_create_vault(current_count: usize, tier: SubscriptionTier) -> bool {
        tier.is_pro() || current_count < FREE_VAULT_LIMIT
    }

    pub fn can_create_item(current_count: usize, tier: SubscriptionTier) -> bool {
        tier.is_pro() || current_count < FREE_ITEM_LIMIT
    }

    pub fn can_add_attachment(current_count: usize, tier: SubscriptionTier) -> bool {
        tier.is_pro() || current_count < FREE_ATTACHMENT_LIMIT
    }

    pub fn can_export_pdf(tier: SubscriptionTier) -> bool {
        tier.is_pro()
    }

    pub fn can_access_dashboard(tier: SubscriptionTier) -> bool {
        tier.is_pro()
    }

    /// Dispatch on the action; `current_count` is ignored by tier-only gates
    pub fn allows(action: GatedAction, current_count: usize, tier: SubscriptionTier) -> bool {
        match action {
            GatedAction::CreateVault => Self::can_create_vault(current_count, tier),
            GatedAction::CreateItem => Self::can_create_item(current_count, tier),
            GatedAction::AddAttachment => Self::can_add_attachment(current_count, tier),
            GatedAction::ExportPdf => Self::can_export_pdf(tier),
            GatedAction::AccessDashboard => Self::can_access_dashboard(tier),
        }
    }

    /// Like [`FeatureGate::allows`], but a denial becomes `UpgradeRequired`
    pub fn require(
        action: GatedAction,
        current_count: usize,
        tier: SubscriptionTier,
    ) -> RenewalResult<()> {
        if Self::allows(action, current_count, tier) {
            Ok(())
        } else {
            info!(?action, current_count, %tier, "feature gate denied action");
            Err(RenewalError::UpgradeRequired(action))
        }
    }

    /// Free-tier allowance for counted actions
    pub fn free_limit(action: GatedAction) -> Option<usize> {
        match action {
            GatedAction::CreateVault => Some(FREE_VAULT_LIMIT),
            GatedAction::CreateItem => Some(FREE_ITEM_LIMIT),
            GatedAction::AddAttachment => Some(FREE_ATTACHMENT_LIMIT),
            GatedAction::ExportPdf | GatedAction::AccessDashboard => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use SubscriptionTier::{Free, Pro};

    #[test]
    fn test_vault_limit() {
        assert!(FeatureGate::can_create_vault(0, Free));
        assert!(!FeatureGate::can_create_vault(1, Free));
        assert!(FeatureGate::can_create_vault(1, Pro));
    }

    #[test]
    fn test_item_limit() {
        assert!(FeatureGate::can_create_item(4, Free));
        assert!(!FeatureGate::can_create_item(5, Free));
        assert!(FeatureGate::can_create_item(5, Pro));
        assert!(FeatureGate::can_create_item(500, Pro));
    }

    #[test]
    fn test_attachment_limit() {
        assert!(FeatureGate::can_add_attachment(2, Free));
        assert!(!FeatureGate::can_add_attachment(3, Free));
        assert!(FeatureGate::can_add_attachment(3, Pro));
    }

    #[test]
    fn test_tier_only_gates() {
        assert!(!FeatureGate::can_export_pdf(Free));
        assert!(FeatureGate::can_export_pdf(Pro));
        assert!(!FeatureGate::can_access_dashboard(Free));
        assert!(FeatureGate::can_access_dashboard(Pro));
    }

    #[test]
    fn test_allows_matches_individual_gates() {
        for count in 0..8 {
            for tier in [Free, Pro] {
                assert_eq!(
                    FeatureGate::allows(GatedAction::CreateItem, count, tier),
                    FeatureGate::can_create_item(count, tier)
                );
                assert_eq!(
                    FeatureGate::allows(GatedAction::ExportPdf, count, tier),
                    FeatureGate::can_export_pdf(tier)
                );
            }
        }
    }

    #[test]
    fn test_require() {
        assert!(FeatureGate::require(GatedAction::CreateVault, 0, Free).is_ok());
        let err = FeatureGate::require(GatedAction::CreateVault, 1, Free).unwrap_err();
        assert!(matches!(err, RenewalError::UpgradeRequired(GatedAction::CreateVault)));
    }

    #[test]
    fn test_free_limit() {
        assert_eq!(FeatureGate::free_limit(GatedAction::CreateItem), Some(5));
        assert_eq!(FeatureGate::free_limit(GatedAction::AccessDashboard), None);
    }
}
