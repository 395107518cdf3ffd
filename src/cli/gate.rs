//! Feature gate CLI command

use clap::Args;

use crate::error::{RenewalError, RenewalResult};
use crate::models::{GatedAction, SubscriptionTier};
use crate::services::FeatureGate;

/// Ask whether an action is allowed on the current plan
#[derive(Args, Debug)]
pub struct GateArgs {
    /// Action: create-vault, create-item, add-attachment, export-pdf, dashboard
    pub action: String,
    /// How many of the counted resource already exist
    #[arg(short, long, default_value = "0")]
    pub count: usize,
}

/// Handle the gate command; a denial is returned as `UpgradeRequired`
pub fn handle_gate_command(tier: SubscriptionTier, args: GateArgs) -> RenewalResult<()> {
    let action = GatedAction::parse(&args.action).ok_or_else(|| {
        RenewalError::Validation(format!(
            "Invalid action: '{}'. Valid actions: create-vault, create-item, \
             add-attachment, export-pdf, dashboard",
            args.action
        ))
    })?;

    FeatureGate::require(action, args.count, tier)?;

    match FeatureGate::free_limit(action) {
        Some(limit) if !tier.is_pro() => println!(
            "Allowed: {} ({} of {} used on the {} plan)",
            action, args.count, limit, tier
        ),
        _ => println!("Allowed: {} on the {} plan", action, tier),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(action: &str, count: usize) -> GateArgs {
        GateArgs {
            action: action.into(),
            count,
        }
    }

    #[test]
    fn test_gate_command() {
        assert!(handle_gate_command(SubscriptionTier::Free, args("create-item", 4)).is_ok());
        let err = handle_gate_command(SubscriptionTier::Free, args("create-item", 5)).unwrap_err();
        assert!(matches!(err, RenewalError::UpgradeRequired(GatedAction::CreateItem)));
        assert!(handle_gate_command(SubscriptionTier::Pro, args("create-item", 50)).is_ok());
    }

    #[test]
    fn test_unknown_action() {
        let err = handle_gate_command(SubscriptionTier::Pro, args("fly", 0)).unwrap_err();
        assert!(err.is_validation());
    }
}
