//! Mapping from command-line strings to the engine's typed enums.

use boostline_entities::campaigns::{CampaignStatus, PlanType, Platform};
use boostline_entities::withdrawals::{WithdrawalMethod, WithdrawalStatus};

use crate::error::{CliError, CliResult};

pub fn plan_type(input: &str) -> CliResult<PlanType> {
    match input.to_ascii_lowercase().as_str() {
        "follow_growth" | "follow-growth" => Ok(PlanType::FollowGrowth),
        "full_engagement" | "full-engagement" => Ok(PlanType::FullEngagement),
        other => Err(CliError::InvalidArgument(format!(
            "unknown plan type '{other}' (expected follow_growth or full_engagement)"
        ))),
    }
}

pub fn platform(input: &str) -> CliResult<Platform> {
    match input.to_ascii_lowercase().as_str() {
        "facebook" => Ok(Platform::Facebook),
        "instagram" => Ok(Platform::Instagram),
        "tiktok" => Ok(Platform::Tiktok),
        "youtube" => Ok(Platform::Youtube),
        other => Err(CliError::InvalidArgument(format!(
            "unknown platform '{other}' (expected facebook, instagram, tiktok or youtube)"
        ))),
    }
}

pub fn campaign_status(input: &str) -> CliResult<CampaignStatus> {
    match input.to_ascii_lowercase().as_str() {
        "pending_payment" | "pending-payment" => Ok(CampaignStatus::PendingPayment),
        "active" => Ok(CampaignStatus::Active),
        "completed" => Ok(CampaignStatus::Completed),
        "cancelled" => Ok(CampaignStatus::Cancelled),
        other => Err(CliError::InvalidArgument(format!(
            "unknown campaign status '{other}'"
        ))),
    }
}

pub fn withdrawal_status(input: &str) -> CliResult<WithdrawalStatus> {
    match input.to_ascii_lowercase().as_str() {
        "pending" => Ok(WithdrawalStatus::Pending),
        "approved" => Ok(WithdrawalStatus::Approved),
        "rejected" => Ok(WithdrawalStatus::Rejected),
        other => Err(CliError::InvalidArgument(format!(
            "unknown withdrawal status '{other}'"
        ))),
    }
}

pub fn withdrawal_method(input: &str) -> CliResult<WithdrawalMethod> {
    match input.to_ascii_lowercase().as_str() {
        "iban" => Ok(WithdrawalMethod::Iban),
        "mobile_wallet" | "mobile-wallet" => Ok(WithdrawalMethod::MobileWallet),
        other => Err(CliError::InvalidArgument(format!(
            "unknown withdrawal method '{other}' (expected iban or mobile_wallet)"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_both_separators() {
        assert_eq!(plan_type("follow-growth").unwrap(), PlanType::FollowGrowth);
        assert_eq!(plan_type("FULL_ENGAGEMENT").unwrap(), PlanType::FullEngagement);
        assert_eq!(
            withdrawal_method("mobile-wallet").unwrap(),
            WithdrawalMethod::MobileWallet
        );
        assert_eq!(
            withdrawal_status("Approved").unwrap(),
            WithdrawalStatus::Approved
        );
    }

    #[test]
    fn rejects_unknown_values() {
        assert!(matches!(platform("myspace"), Err(CliError::InvalidArgument(_))));
        assert!(matches!(
            campaign_status("archived"),
            Err(CliError::InvalidArgument(_))
        ));
        assert!(matches!(
            withdrawal_status("paid"),
            Err(CliError::InvalidArgument(_))
        ));
    }
}
